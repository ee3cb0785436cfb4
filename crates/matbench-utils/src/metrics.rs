//! Metric direction lookup.
//!
//! Scorer names follow the usual supervised-learning convention: plain error
//! metrics (`mean_squared_error`) are better when smaller, and their negated
//! scorer form (`neg_mean_squared_error`) is better when larger.

use crate::error::{MatbenchError, Result};

/// Prefix marking a negated scorer.
pub const NEGATED_PREFIX: &str = "neg_";

/// Metrics where a larger value means a better model.
const GREATER_IS_BETTER: &[&str] = &[
    "accuracy",
    "adjusted_rand_score",
    "average_precision",
    "balanced_accuracy",
    "explained_variance",
    "f1",
    "f1_macro",
    "f1_micro",
    "f1_samples",
    "f1_weighted",
    "precision",
    "precision_macro",
    "precision_micro",
    "precision_samples",
    "precision_weighted",
    "r2",
    "recall",
    "recall_macro",
    "recall_micro",
    "recall_samples",
    "recall_weighted",
    "roc_auc",
];

/// Error metrics where a smaller value means a better model.
const LOWER_IS_BETTER: &[&str] = &[
    "log_loss",
    "mean_absolute_error",
    "mean_squared_error",
    "mean_squared_log_error",
    "median_absolute_error",
    "root_mean_squared_error",
];

/// What to answer for a metric name outside the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownMetricPolicy {
    /// Return [`MatbenchError::UnknownMetric`].
    #[default]
    Fail,
    /// Answer with a fixed direction.
    Assume(bool),
}

/// Metric direction table with a configurable answer for unknown names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricDirections {
    unknown: UnknownMetricPolicy,
}

impl MetricDirections {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unknown_policy(mut self, policy: UnknownMetricPolicy) -> Self {
        self.unknown = policy;
        self
    }

    pub fn unknown_policy(&self) -> UnknownMetricPolicy {
        self.unknown
    }

    /// Direction for `name` if it is in the table, without applying the policy.
    pub fn lookup(&self, name: &str) -> Option<bool> {
        if GREATER_IS_BETTER.contains(&name) {
            return Some(true);
        }
        if LOWER_IS_BETTER.contains(&name) {
            return Some(false);
        }
        let base = name.strip_prefix(NEGATED_PREFIX)?;
        LOWER_IS_BETTER.contains(&base).then_some(true)
    }

    /// Whether a larger value of `name` indicates better performance.
    pub fn is_greater_better(&self, name: &str) -> Result<bool> {
        if let Some(direction) = self.lookup(name) {
            return Ok(direction);
        }
        match self.unknown {
            UnknownMetricPolicy::Fail => Err(MatbenchError::UnknownMetric {
                name: name.to_string(),
            }),
            UnknownMetricPolicy::Assume(direction) => {
                tracing::debug!(metric = name, direction, "metric not in table; assuming");
                Ok(direction)
            }
        }
    }

    /// Every recognised metric name with its direction, sorted by name.
    pub fn known_metrics() -> Vec<(String, bool)> {
        let mut metrics: Vec<(String, bool)> = GREATER_IS_BETTER
            .iter()
            .map(|name| ((*name).to_string(), true))
            .chain(
                LOWER_IS_BETTER
                    .iter()
                    .map(|name| ((*name).to_string(), false)),
            )
            .chain(
                LOWER_IS_BETTER
                    .iter()
                    .map(|name| (format!("{NEGATED_PREFIX}{name}"), true)),
            )
            .collect();
        metrics.sort_by(|a, b| a.0.cmp(&b.0));
        metrics
    }
}

/// Whether a larger value of `name` indicates better performance.
///
/// Unknown names are an error; use [`MetricDirections`] to pick a default instead.
pub fn is_greater_better(name: &str) -> Result<bool> {
    MetricDirections::default().is_greater_better(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_greater_better() {
        assert!(is_greater_better("accuracy").unwrap());
        assert!(is_greater_better("r2").unwrap());
        assert!(is_greater_better("neg_mean_squared_error").unwrap());
        assert!(!is_greater_better("mean_squared_error").unwrap());
    }

    #[test]
    fn test_negated_prefix_only_applies_to_error_metrics() {
        let directions = MetricDirections::new();
        assert_eq!(directions.lookup("neg_mean_absolute_error"), Some(true));
        assert_eq!(directions.lookup("neg_accuracy"), None);
        assert_eq!(directions.lookup("neg_"), None);
    }

    #[test]
    fn test_unknown_metric_fails_by_default() {
        let err = is_greater_better("made_up_score").unwrap_err();
        assert!(matches!(err, MatbenchError::UnknownMetric { ref name } if name == "made_up_score"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(is_greater_better("Accuracy").is_err());
    }

    #[test]
    fn test_unknown_metric_policy_assume() {
        let directions =
            MetricDirections::new().with_unknown_policy(UnknownMetricPolicy::Assume(false));
        assert!(!directions.is_greater_better("made_up_score").unwrap());
        // Known names are unaffected by the policy.
        assert!(directions.is_greater_better("accuracy").unwrap());
    }

    #[test]
    fn test_known_metrics_sorted_and_consistent() {
        let metrics = MetricDirections::known_metrics();
        assert!(metrics.windows(2).all(|pair| pair[0].0 < pair[1].0));
        for (name, direction) in &metrics {
            assert_eq!(is_greater_better(name).unwrap(), *direction, "{name}");
        }
        assert!(metrics.iter().any(|(name, _)| name == "neg_log_loss"));
    }
}
