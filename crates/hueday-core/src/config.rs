//! Runtime configuration.

use std::time::Duration;

/// Default time the "Copied" acknowledgment stays visible.
pub const DEFAULT_COPY_ACK_MS: u64 = 1200;

/// Environment variable holding the analytics project key.
pub const TELEMETRY_KEY_VAR: &str = "HUEDAY_POSTHOG_KEY";

/// Environment variable holding the analytics ingestion host.
pub const TELEMETRY_HOST_VAR: &str = "HUEDAY_POSTHOG_HOST";

/// Analytics collaborator settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    pub api_key: String,
    pub host: String,
}

impl TelemetryConfig {
    /// Both values must be non-blank.
    pub fn new(api_key: impl Into<String>, host: impl Into<String>) -> Option<Self> {
        let api_key = api_key.into().trim().to_string();
        let host = host.into().trim().to_string();
        if api_key.is_empty() || host.is_empty() {
            return None;
        }
        Some(Self { api_key, host })
    }

    /// Read from the process environment, falling back to values baked in
    /// at compile time. Browsers only have the compile-time values.
    pub fn from_env() -> Option<Self> {
        #[cfg(not(target_arch = "wasm32"))]
        let runtime = |var: &str| std::env::var(var).ok();
        #[cfg(target_arch = "wasm32")]
        let runtime = |_: &str| None::<String>;

        Self::from_lookup(|var| {
            runtime(var).or_else(|| match var {
                TELEMETRY_KEY_VAR => option_env!("HUEDAY_POSTHOG_KEY").map(str::to_string),
                TELEMETRY_HOST_VAR => option_env!("HUEDAY_POSTHOG_HOST").map(str::to_string),
                _ => None,
            })
        })
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        let api_key = lookup(TELEMETRY_KEY_VAR)?;
        let host = lookup(TELEMETRY_HOST_VAR)?;
        Self::new(api_key, host)
    }

    /// Capture endpoint under the configured host.
    pub fn capture_url(&self) -> String {
        format!("{}/capture/", self.host.trim_end_matches('/'))
    }
}

/// Session behavior settings.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// How long the copy acknowledgment stays visible.
    pub copy_ack: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            copy_ack: Duration::from_millis(DEFAULT_COPY_ACK_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_requires_both_values() {
        assert!(TelemetryConfig::from_lookup(lookup(&[])).is_none());
        assert!(TelemetryConfig::from_lookup(lookup(&[(TELEMETRY_KEY_VAR, "k")])).is_none());
        assert!(TelemetryConfig::from_lookup(lookup(&[(TELEMETRY_HOST_VAR, "h")])).is_none());
        let blank_key = lookup(&[(TELEMETRY_KEY_VAR, " "), (TELEMETRY_HOST_VAR, "h")]);
        assert!(TelemetryConfig::from_lookup(blank_key).is_none());
    }

    #[test]
    fn test_from_lookup() {
        let config = TelemetryConfig::from_lookup(lookup(&[
            (TELEMETRY_KEY_VAR, " phc_abc "),
            (TELEMETRY_HOST_VAR, "https://us.i.example.com"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "phc_abc");
        assert_eq!(config.capture_url(), "https://us.i.example.com/capture/");
    }

    #[test]
    fn test_capture_url_trims_slashes() {
        let config = TelemetryConfig::new("k", "https://host//").unwrap();
        assert_eq!(config.capture_url(), "https://host/capture/");
    }

    #[test]
    fn test_default_copy_ack() {
        assert_eq!(SessionConfig::default().copy_ack, Duration::from_millis(1200));
    }
}
