// Object walker - applies a string transform to every string leaf of a JSON value

use serde_json::{Map, Value};

/// Return a deep copy of `value` with every string leaf passed through `transform`.
///
/// Object keys are never transformed and keep their order; numbers, booleans
/// and null are copied unchanged.
pub fn walk<F>(value: &Value, transform: &F) -> Value
where
    F: Fn(&str) -> String,
{
    match value {
        Value::String(s) => Value::String(transform(s)),
        Value::Array(items) => Value::Array(items.iter().map(|item| walk(item, transform)).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .map(|(key, field)| (key.clone(), walk(field, transform)))
                .collect::<Map<String, Value>>(),
        ),
        other => other.clone(),
    }
}

#[cfg(test)]
#[path = "walker_test.rs"]
mod tests;
