//! Configuration for the search engine.
//!
//! `SearchConfig` centralizes the behavioral knobs (result count, the
//! candidate-volume guard, progress cadence) so no thresholds hide in the
//! engine itself.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when the raw candidate total exceeds `max_candidates`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitBehavior {
    /// Refuse to enumerate and return an error up front.
    ReturnError,
    /// Enumerate anyway and attach a warning to the ranking.
    ProceedAnyway,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// How many top results presentation layers should show by default.
    pub top_n: usize,
    /// Guard against combinatorial blow-up; checked before enumeration.
    pub max_candidates: u64,
    pub on_limit_exceeded: LimitBehavior,
    /// Candidates between progress updates and cancellation checks.
    pub progress_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            max_candidates: 5_000_000,
            on_limit_exceeded: LimitBehavior::ReturnError,
            progress_interval: 500,
        }
    }
}

impl SearchConfig {
    /// Preset that never refuses a search on volume grounds. The candidate
    /// total still saturates at `u64::MAX`; expect long runtimes.
    pub fn unbounded() -> Self {
        Self {
            max_candidates: u64::MAX,
            on_limit_exceeded: LimitBehavior::ProceedAnyway,
            ..Default::default()
        }
    }

    pub fn builder() -> SearchConfigBuilder {
        SearchConfigBuilder {
            inner: SearchConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        ensure_non_zero("top_n", self.top_n as u64)?;
        ensure_non_zero("max_candidates", self.max_candidates)?;
        ensure_non_zero("progress_interval", self.progress_interval)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be greater than zero (got {value})")]
    NonPositiveLimit { field: &'static str, value: u64 },
}

fn ensure_non_zero(field: &'static str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::NonPositiveLimit { field, value });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct SearchConfigBuilder {
    inner: SearchConfig,
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        SearchConfig::builder()
    }

    pub fn top_n(mut self, value: usize) -> Self {
        self.inner.top_n = value;
        self
    }

    pub fn max_candidates(mut self, value: u64) -> Self {
        self.inner.max_candidates = value;
        self
    }

    pub fn on_limit_exceeded(mut self, value: LimitBehavior) -> Self {
        self.inner.on_limit_exceeded = value;
        self
    }

    pub fn progress_interval(mut self, value: u64) -> Self {
        self.inner.progress_interval = value;
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = SearchConfig::default();
        assert_eq!(cfg.top_n, 10);
        assert_eq!(cfg.max_candidates, 5_000_000);
        assert_eq!(cfg.on_limit_exceeded, LimitBehavior::ReturnError);
        assert_eq!(cfg.progress_interval, 500);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn serde_roundtrip_preserves_defaults() {
        let cfg = SearchConfig::default();
        let json = serde_json::to_string(&cfg).expect("serialize default config");
        let parsed: SearchConfig = serde_json::from_str(&json).expect("deserialize default config");
        assert_eq!(cfg, parsed);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg: SearchConfig = serde_json::from_str(r#"{"top_n": 3}"#).unwrap();
        assert_eq!(cfg.top_n, 3);
        assert_eq!(cfg.max_candidates, SearchConfig::default().max_candidates);
    }

    #[test]
    fn builder_rejects_zero_limits() {
        let err = SearchConfig::builder()
            .progress_interval(0)
            .build()
            .expect_err("zero progress interval must be rejected");
        assert!(matches!(
            err,
            ConfigError::NonPositiveLimit {
                field: "progress_interval",
                ..
            }
        ));
    }

    #[test]
    fn unbounded_preset_proceeds_past_any_total() {
        let cfg = SearchConfig::unbounded();
        assert_eq!(cfg.max_candidates, u64::MAX);
        assert_eq!(cfg.on_limit_exceeded, LimitBehavior::ProceedAnyway);
    }
}
