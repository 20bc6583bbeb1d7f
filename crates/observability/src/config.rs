use std::env;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "warn";

/// Variable selecting the log output format.
pub const LOG_FORMAT_VAR: &str = "FORGECATALOG_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl LogFormat {
    /// Parse a format name; `None` for anything unrecognized.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "text" | "pretty" | "plain" => Some(LogFormat::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directives, e.g. `info,forgecatalog_products=trace`.
    pub filter: String,
    pub format: LogFormat,
    /// Set when the format variable held an unknown value.
    pub unknown_format: Option<String>,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
            unknown_format: None,
        }
    }
}

impl TracingConfig {
    /// Read `RUST_LOG` and `FORGECATALOG_LOG_FORMAT`.
    pub fn from_env() -> Self {
        Self::from_vars(env::var("RUST_LOG").ok(), env::var(LOG_FORMAT_VAR).ok())
    }

    /// Build from already-read variable values. Unknown formats fall back to JSON.
    pub fn from_vars(filter: Option<String>, format: Option<String>) -> Self {
        let filter = filter
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());

        let (format, unknown_format) = match format {
            None => (LogFormat::default(), None),
            Some(raw) => match LogFormat::parse(&raw) {
                Some(format) => (format, None),
                None => (LogFormat::default(), Some(raw)),
            },
        };

        Self {
            filter,
            format,
            unknown_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = TracingConfig::from_vars(None, None);
        assert_eq!(config, TracingConfig::default());
        assert_eq!(config.filter, "warn");
        assert_eq!(config.format, LogFormat::Json);
    }

    #[test]
    fn blank_filter_uses_default() {
        let config = TracingConfig::from_vars(Some("  ".to_string()), None);
        assert_eq!(config.filter, DEFAULT_FILTER);
    }

    #[test]
    fn reads_filter_and_text_format() {
        let config = TracingConfig::from_vars(
            Some("forgecatalog_products=trace".to_string()),
            Some("Pretty".to_string()),
        );
        assert_eq!(config.filter, "forgecatalog_products=trace");
        assert_eq!(config.format, LogFormat::Text);
        assert!(config.unknown_format.is_none());
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let config = TracingConfig::from_vars(None, Some("xml".to_string()));
        assert_eq!(config.format, LogFormat::Json);
        assert_eq!(config.unknown_format.as_deref(), Some("xml"));
    }
}
