pub mod toml_format;
pub mod yaml_format;

use std::io::Write;

use anyhow::{bail, Context, Result};
use serde_json::Value;

use crate::config::AppConfig;

/// Formats a decoded document can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
    Ndjson,
}

impl OutputFormat {
    /// Parse a format name from a CLI argument or config value.
    pub fn from_str_name(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "toml" => Ok(Self::Toml),
            "ndjson" | "jsonl" => Ok(Self::Ndjson),
            _ => bail!("unknown output format: {s}"),
        }
    }
}

/// Render a value in the given format. `pretty` only affects JSON.
pub fn format_output(value: &Value, format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Json => Ok(serde_json::to_string(value)?),
        OutputFormat::Yaml => yaml_format::serialize(value),
        OutputFormat::Toml => toml_format::serialize(value),
        OutputFormat::Ndjson => match value {
            Value::Array(items) => {
                let lines: Result<Vec<String>> = items
                    .iter()
                    .map(|v| serde_json::to_string(v).map_err(Into::into))
                    .collect();
                Ok(lines?.join("\n"))
            }
            other => Ok(serde_json::to_string(other)?),
        },
    }
}

/// Pick the output format and JSON prettiness.
///
/// An explicit format name wins over `output.format` from the config.
/// `compact` forces single-line JSON; otherwise `output.pretty` decides.
pub fn resolve(
    config: &AppConfig,
    format_name: Option<&str>,
    compact: bool,
) -> Result<(OutputFormat, bool)> {
    let name = format_name.unwrap_or(&config.output.format);
    let format = OutputFormat::from_str_name(name)?;
    Ok((format, config.output.pretty && !compact))
}

/// Select the part of `value` an RFC 6901 JSON Pointer names, or the whole
/// document when no pointer is given.
pub fn select<'a>(value: &'a Value, pointer: Option<&str>) -> Result<&'a Value> {
    match pointer {
        Some(pointer) => value
            .pointer(pointer)
            .with_context(|| format!("No match for pointer: {pointer}")),
        None => Ok(value),
    }
}

/// Write rendered output followed by a single newline.
pub fn write_output(out: &mut impl Write, rendered: &str) -> Result<()> {
    writeln!(out, "{}", rendered.trim_end_matches('\n')).context("failed to write output")?;
    out.flush().context("failed to write output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputConfig;
    use serde_json::json;
    use std::io;

    fn config(format: &str, pretty: bool) -> AppConfig {
        AppConfig {
            output: OutputConfig {
                format: format.into(),
                pretty,
            },
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let (format, pretty) = resolve(&AppConfig::default(), None, false).unwrap();
        assert_eq!(format, OutputFormat::Json);
        assert!(pretty);
    }

    #[test]
    fn test_resolve_flag_overrides_config() {
        let (format, _) = resolve(&config("yaml", true), Some("toml"), false).unwrap();
        assert_eq!(format, OutputFormat::Toml);
    }

    #[test]
    fn test_resolve_config_format_used_without_flag() {
        let (format, _) = resolve(&config("ndjson", true), None, false).unwrap();
        assert_eq!(format, OutputFormat::Ndjson);
    }

    #[test]
    fn test_resolve_prettiness() {
        assert!(!resolve(&config("json", true), None, true).unwrap().1);
        assert!(!resolve(&config("json", false), None, false).unwrap().1);
        assert!(!resolve(&config("json", false), None, true).unwrap().1);
        assert!(resolve(&config("json", true), None, false).unwrap().1);
    }

    #[test]
    fn test_resolve_bad_config_format() {
        assert!(resolve(&config("xml", true), None, false).is_err());
        // A valid flag still wins over a bad config value
        assert!(resolve(&config("xml", true), Some("json"), false).is_ok());
    }

    #[test]
    fn test_select() {
        let data = json!({"users": [{"name": "Alice"}, {"name": "Bob"}]});
        assert_eq!(select(&data, None).unwrap(), &data);
        assert_eq!(select(&data, Some("")).unwrap(), &data);
        assert_eq!(select(&data, Some("/users/1/name")).unwrap(), "Bob");
    }

    #[test]
    fn test_select_no_match() {
        let data = json!({"users": []});
        let err = select(&data, Some("/users/0")).unwrap_err();
        assert_eq!(err.to_string(), "No match for pointer: /users/0");
        // Pointers must start with '/'
        assert!(select(&data, Some("users")).is_err());
    }

    #[test]
    fn test_write_output_single_newline() {
        let mut buf = Vec::new();
        write_output(&mut buf, "a: 1\n").unwrap();
        assert_eq!(buf, b"a: 1\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_output_broken_pipe_is_error() {
        let err = write_output(&mut ClosedPipe, "[]").unwrap_err();
        let io_err = err.downcast_ref::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_compact_json() {
        let data = json!({"a": 1, "b": [true, null, "x"]});
        let out = format_output(&data, OutputFormat::Json, false).unwrap();
        assert_eq!(out, r#"{"a":1,"b":[true,null,"x"]}"#);
    }

    #[test]
    fn test_ndjson_scalar_is_single_line() {
        let out = format_output(&json!("x"), OutputFormat::Ndjson, true).unwrap();
        assert_eq!(out, "\"x\"");
    }

    #[test]
    fn test_unknown_name() {
        let err = OutputFormat::from_str_name("xml").unwrap_err();
        assert_eq!(err.to_string(), "unknown output format: xml");
    }
}
