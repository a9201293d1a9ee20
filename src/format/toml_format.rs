use anyhow::{bail, Context, Result};
use serde_json::Value;

/// Serialize a JSON document as TOML.
///
/// The document must be an object. Null members are dropped; a null
/// anywhere TOML cannot omit it (inside an array) is an error.
pub fn serialize(value: &Value) -> Result<String> {
    let Value::Object(map) = value else {
        bail!("TOML output needs an object at the top level");
    };
    let table = to_table(map)?;
    toml::to_string_pretty(&table).context("failed to write TOML")
}

fn to_table(map: &serde_json::Map<String, Value>) -> Result<toml::Table> {
    let mut table = toml::Table::new();
    for (key, value) in map {
        if value.is_null() {
            continue;
        }
        let converted = to_toml(value).with_context(|| format!("at key '{key}'"))?;
        table.insert(key.clone(), converted);
    }
    Ok(table)
}

fn to_toml(value: &Value) -> Result<toml::Value> {
    match value {
        Value::Null => bail!("TOML has no null value"),
        Value::Bool(b) => Ok(toml::Value::Boolean(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(toml::Value::Integer(i))
            } else if let Some(f) = n.as_f64() {
                Ok(toml::Value::Float(f))
            } else {
                bail!("number {n} does not fit in TOML")
            }
        }
        Value::String(s) => Ok(toml::Value::String(s.clone())),
        Value::Array(items) => {
            let converted: Result<Vec<toml::Value>> = items.iter().map(to_toml).collect();
            Ok(toml::Value::Array(converted?))
        }
        Value::Object(map) => Ok(toml::Value::Table(to_table(map)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_nested_table() {
        let data = json!({"server": {"host": "localhost", "port": 8080}});
        let out = serialize(&data).unwrap();
        let back: toml::Table = out.parse().unwrap();
        assert_eq!(back["server"]["host"].as_str(), Some("localhost"));
        assert_eq!(back["server"]["port"].as_integer(), Some(8080));
    }

    #[test]
    fn test_null_member_dropped() {
        let data = json!({"a": 1, "gone": null});
        let out = serialize(&data).unwrap();
        assert!(out.contains("a = 1"));
        assert!(!out.contains("gone"));
    }

    #[test]
    fn test_null_in_array_rejected() {
        let data = json!({"b": [true, null, "x"]});
        let err = serialize(&data).unwrap_err();
        assert_eq!(err.to_string(), "at key 'b'");
    }

    #[test]
    fn test_top_level_array_rejected() {
        assert!(serialize(&json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let data = json!({"n": u64::MAX});
        let out = serialize(&data).unwrap();
        let back: toml::Table = out.parse().unwrap();
        assert!(back["n"].is_float());
    }
}
