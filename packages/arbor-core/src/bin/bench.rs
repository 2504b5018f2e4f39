use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use arbor_core::{
    from_flat_list, search, sort, to_flat_list, FromFlatListOptions, SortOptions,
    ToFlatListOptions, TreeOptions,
};
use serde_json::{json, Value};

#[derive(serde::Serialize)]
struct Output {
    implementation: &'static str,
    workload: String,
    timestamp: String,
    name: String,
    total_nodes: u64,
    duration_ms: f64,
    nodes_per_sec: f64,
    extra: Extra,
    source_file: Option<String>,
}

#[derive(serde::Serialize)]
struct Extra {
    count: u64,
    fanout: u64,
    matched: u64,
}

/// Flat records where node `i` hangs under node `(i - 1) / fanout`.
fn flat_records(count: u64, fanout: u64) -> Vec<Value> {
    (0..count)
        .map(|i| {
            if i == 0 {
                json!({ "id": i, "value": (i * 7919) % 1000 })
            } else {
                json!({ "id": i, "pid": (i - 1) / fanout, "value": (i * 7919) % 1000 })
            }
        })
        .collect()
}

fn main() {
    let mut count: u64 = 10_000;
    let mut fanout: u64 = 8;
    let mut out_file: Option<PathBuf> = None;
    for arg in env::args().skip(1) {
        if let Some(val) = arg.strip_prefix("--count=") {
            count = val.parse().unwrap_or(count);
        } else if let Some(val) = arg.strip_prefix("--fanout=") {
            fanout = val.parse().unwrap_or(fanout).max(1);
        } else if let Some(val) = arg.strip_prefix("--out=") {
            out_file = Some(PathBuf::from(val));
        }
    }

    let records = flat_records(count, fanout);

    let start = Instant::now();
    let forest = from_flat_list(records, &FromFlatListOptions::default()).expect("link records");
    let sorted = sort(&forest, &SortOptions::new("value"));
    let matched = search(&sorted, |node, _| node["value"] == json!(0), &TreeOptions::default());
    let flat = to_flat_list(&sorted, &ToFlatListOptions::default()).expect("flatten forest");
    let duration_ms = start.elapsed().as_secs_f64() * 1000.0;
    assert_eq!(count as usize, flat.len());
    let matched = arbor_core::count(&matched, &TreeOptions::default()) as u64;

    let workload = format!("link-sort-search-flatten-{}", count);
    let output = Output {
        implementation: "arbor-core",
        workload: workload.clone(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        name: workload,
        total_nodes: count,
        duration_ms,
        nodes_per_sec: if duration_ms > 0.0 {
            count as f64 / duration_ms * 1000.0
        } else {
            f64::INFINITY
        },
        extra: Extra {
            count,
            fanout,
            matched,
        },
        source_file: out_file.as_ref().map(|p| p.display().to_string()),
    };

    let json = serde_json::to_string_pretty(&output).expect("serialize");
    if let Some(path) = out_file {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("mkdirs");
        }
        fs::write(&path, &json).expect("write output");
    }
    println!("{}", json);
}
