//! Tracing subscriber setup.
//!
//! The library only emits `tracing` events; hosts that want them printed call
//! [`init`] once at startup. `RUST_LOG` overrides the default `info` filter.

use tracing_subscriber::EnvFilter;

use crate::error::StorefrontError;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "info";

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

impl LogFormat {
    /// Parse a format name; `None` for unknown names.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "human" | "pretty" | "text" => Some(LogFormat::Human),
            _ => None,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Fails instead of panicking when a global subscriber is already set.
pub fn init(format: LogFormat) -> Result<(), StorefrontError> {
    let builder = tracing_subscriber::fmt().with_env_filter(env_filter());
    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Human => builder.compact().try_init(),
    };
    result.map_err(|e| StorefrontError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(LogFormat::from_str("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::from_str("pretty"), Some(LogFormat::Human));
        assert_eq!(LogFormat::from_str("xml"), None);
    }

    #[test]
    fn test_second_init_is_an_error() {
        let _ = init(LogFormat::Human);
        assert!(matches!(
            init(LogFormat::Json),
            Err(StorefrontError::Logging(_))
        ));
    }
}
