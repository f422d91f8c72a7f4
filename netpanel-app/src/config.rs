use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Number of connection checks that fail before the first success.
    pub fail_first: u32,
    pub check_delay: Duration,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fail_first = parse_or_default(&lookup, "NETPANEL_FAIL_FIRST", 0u32);
        let delay_ms = parse_or_default(&lookup, "NETPANEL_CHECK_DELAY_MS", 0u64);

        Self {
            fail_first,
            check_delay: Duration::from_millis(delay_ms),
        }
    }
}

fn parse_or_default<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using default", key, raw);
            default
        }),
        None => default,
    }
}
