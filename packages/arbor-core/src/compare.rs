use std::borrow::Cow;
use std::cmp::Ordering;

use serde_json::{Number, Value};

use crate::options::SortOrder;

/// Compare two optional property values for sorting.
///
/// Missing and `null` values always sort last, whatever the `order`. Two numbers
/// compare numerically; any other pair compares case-insensitively by string form.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>, order: SortOrder) -> Ordering {
    SortKey::of(a).compare(&SortKey::of(b), order)
}

/// A property value prepared for repeated comparison. The lowercased text is built
/// once per value.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum SortKey {
    Missing,
    Present { number: Option<Number>, text: String },
}

impl SortKey {
    pub(crate) fn of(value: Option<&Value>) -> Self {
        match value {
            None | Some(Value::Null) => Self::Missing,
            Some(value) => Self::Present {
                number: match value {
                    Value::Number(n) => Some(n.clone()),
                    _ => None,
                },
                text: string_form(value).to_lowercase(),
            },
        }
    }

    pub(crate) fn compare(&self, other: &Self, order: SortOrder) -> Ordering {
        match (self, other) {
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Missing, Self::Present { .. }) => Ordering::Greater,
            (Self::Present { .. }, Self::Missing) => Ordering::Less,
            (
                Self::Present { number: x, text: a },
                Self::Present { number: y, text: b },
            ) => {
                let ordering = match (x, y) {
                    (Some(x), Some(y)) => compare_numbers(x, y).unwrap_or_else(|| a.cmp(b)),
                    _ => a.cmp(b),
                };
                match order {
                    SortOrder::Ascending => ordering,
                    SortOrder::Descending => ordering.reverse(),
                }
            }
        }
    }
}

fn compare_numbers(x: &Number, y: &Number) -> Option<Ordering> {
    if let (Some(x), Some(y)) = (x.as_i64(), y.as_i64()) {
        return Some(x.cmp(&y));
    }
    if let (Some(x), Some(y)) = (x.as_u64(), y.as_u64()) {
        return Some(x.cmp(&y));
    }
    let (x, y) = (x.as_f64()?, y.as_f64()?);
    Some(x.total_cmp(&y))
}

/// Text used when a value is compared as a string. Array elements are joined with
/// commas and `null` elements render empty.
fn string_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Null => Cow::Borrowed(""),
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::String(s) => Cow::Borrowed(s.as_str()),
        Value::Number(n) => Cow::Owned(n.to_string()),
        Value::Array(items) => Cow::Owned(
            items
                .iter()
                .map(string_form)
                .collect::<Vec<_>>()
                .join(","),
        ),
        Value::Object(_) => Cow::Owned(value.to_string()),
    }
}
