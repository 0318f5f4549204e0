//! Runtime configuration for the widgets.
//!
//! Only timing knobs are configurable. The financial assumptions (price per
//! square foot, tax and insurance rates) are fixed in `constants`.

use std::time::Duration;

use chrono::{Datelike, Local};

use crate::constants::{DEFAULT_DEBOUNCE_MS, DEFAULT_SUBMISSION_DELAY_MS};
use crate::errors::{Error, Result};

pub const DEBOUNCE_MS_VAR: &str = "AGENTSITE_DEBOUNCE_MS";
pub const SUBMIT_DELAY_MS_VAR: &str = "AGENTSITE_SUBMIT_DELAY_MS";
pub const VALUATION_YEAR_VAR: &str = "AGENTSITE_VALUATION_YEAR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Quiet period before a calculator recomputes
    pub debounce_window: Duration,
    /// Simulated latency between a contact submission and its success state
    pub submission_delay: Duration,
    /// Year the valuation age adjustment is measured against
    pub valuation_year: i64,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            debounce_window: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            submission_delay: Duration::from_millis(DEFAULT_SUBMISSION_DELAY_MS),
            valuation_year: i64::from(Local::now().year()),
        }
    }
}

impl SiteConfig {
    /// Loads `.env` if present, then reads overrides from the environment.
    pub fn from_env() -> Result<Self> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                return Err(err.into());
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup. Unset keys keep their
    /// defaults; set but unparseable keys are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(ms) = parse_var::<u64>(&lookup, DEBOUNCE_MS_VAR)? {
            config.debounce_window = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var::<u64>(&lookup, SUBMIT_DELAY_MS_VAR)? {
            config.submission_delay = Duration::from_millis(ms);
        }
        if let Some(year) = parse_var::<i64>(&lookup, VALUATION_YEAR_VAR)? {
            config.valuation_year = year;
        }

        Ok(config)
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| Error::InvalidConfigValue {
                key: key.to_string(),
                value: raw,
            }),
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SiteConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.debounce_window, Duration::from_millis(200));
        assert_eq!(config.submission_delay, Duration::from_millis(1200));
        assert_eq!(config.valuation_year, i64::from(Local::now().year()));
    }

    #[test]
    fn test_overrides() {
        let config = SiteConfig::from_lookup(lookup(&[
            (DEBOUNCE_MS_VAR, "350"),
            (SUBMIT_DELAY_MS_VAR, " 0 "),
            (VALUATION_YEAR_VAR, "2024"),
        ]))
        .unwrap();
        assert_eq!(config.debounce_window, Duration::from_millis(350));
        assert_eq!(config.submission_delay, Duration::ZERO);
        assert_eq!(config.valuation_year, 2024);
    }

    #[test]
    fn test_blank_value_keeps_default() {
        let config = SiteConfig::from_lookup(lookup(&[(DEBOUNCE_MS_VAR, "  ")])).unwrap();
        assert_eq!(config.debounce_window, Duration::from_millis(200));
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let err = SiteConfig::from_lookup(lookup(&[(DEBOUNCE_MS_VAR, "fast")])).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidConfigValue { ref key, ref value } if key == DEBOUNCE_MS_VAR && value == "fast"
        ));
    }
}
