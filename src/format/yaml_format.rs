use anyhow::{Context, Result};
use serde_json::Value;
use serde_yaml::{Mapping, Number};

/// Serialize a JSON document as YAML.
///
/// Numbers go through an explicit conversion: integers that fit `i64` or
/// `u64` stay integers, everything else becomes a YAML float (`.inf` for
/// literals beyond `f64` range).
pub fn serialize(value: &Value) -> Result<String> {
    serde_yaml::to_string(&to_yaml(value)).context("failed to write YAML")
}

fn to_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Null => serde_yaml::Value::Null,
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Number(n) => serde_yaml::Value::Number(to_yaml_number(n)),
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Array(items) => serde_yaml::Value::Sequence(items.iter().map(to_yaml).collect()),
        Value::Object(map) => {
            let mut mapping = Mapping::with_capacity(map.len());
            for (key, value) in map {
                mapping.insert(serde_yaml::Value::String(key.clone()), to_yaml(value));
            }
            serde_yaml::Value::Mapping(mapping)
        }
    }
}

fn to_yaml_number(n: &serde_json::Number) -> Number {
    if let Some(i) = n.as_i64() {
        Number::from(i)
    } else if let Some(u) = n.as_u64() {
        Number::from(u)
    } else {
        // Always valid JSON number text, so this only overflows to infinity.
        Number::from(n.to_string().parse::<f64>().unwrap_or(f64::NAN))
    }
}
