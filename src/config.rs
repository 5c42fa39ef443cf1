use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_NOTIFICATION_SECS: u64 = 3;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub notification_lifetime: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            notification_lifetime: Duration::from_secs(DEFAULT_NOTIFICATION_SECS),
        }
    }
}

impl AppConfig {
    /// Reads `ADMIN_API_URL`, `ADMIN_API_TIMEOUT_SECS` and
    /// `ADMIN_NOTIFICATION_SECS`, falling back to defaults for anything
    /// missing or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_base_url = lookup("ADMIN_API_URL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or(defaults.api_base_url);

        let request_timeout = lookup("ADMIN_API_TIMEOUT_SECS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let notification_lifetime = lookup("ADMIN_NOTIFICATION_SECS")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.notification_lifetime);

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            request_timeout,
            notification_lifetime,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.notification_lifetime, Duration::from_secs(3));
    }

    #[test]
    fn trims_trailing_slashes_from_base_url() {
        let config =
            AppConfig::from_lookup(lookup_from(&[("ADMIN_API_URL", "https://derm.example/api//")]));
        assert_eq!(config.api_base_url, "https://derm.example/api");
    }

    #[test]
    fn ignores_unparsable_numbers() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ADMIN_API_TIMEOUT_SECS", "soon"),
            ("ADMIN_NOTIFICATION_SECS", "5"),
        ]));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.notification_lifetime, Duration::from_secs(5));
    }
}
