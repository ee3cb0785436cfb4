//! Regression vs. classification detection for target columns.
//!
//! A column is a regression target when every present value is a number,
//! either stored numerically or as numeric text. Anything else is treated
//! as categorical.

use std::fmt;

use polars::prelude::{AnyValue, Column};
use serde::{Deserialize, Serialize};

use crate::polars_utils::{any_to_f64, any_to_string, is_missing, is_numeric_dtype};

/// Kind of supervised-learning problem a target column implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Regression,
    Classification,
}

impl TargetKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Regression => "regression",
            Self::Classification => "classification",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decide whether `column` is a regression or a classification target.
pub fn regression_or_classification(column: &Column) -> TargetKind {
    if is_numeric_dtype(column.dtype()) {
        return TargetKind::Regression;
    }
    let values = (0..column.len()).map(|idx| column.get(idx).unwrap_or(AnyValue::Null));
    let kind = classify_values(values);
    tracing::debug!(
        column = %column.name(),
        dtype = %column.dtype(),
        kind = %kind,
        "classified target column"
    );
    kind
}

/// Same rule as [`regression_or_classification`] over a bare sequence of values.
///
/// Missing values (null or blank text) are skipped.
pub fn classify_values<'a, I>(values: I) -> TargetKind
where
    I: IntoIterator<Item = AnyValue<'a>>,
{
    for value in values {
        if is_missing(&value) {
            continue;
        }
        if any_to_f64(value.clone()).is_none() {
            tracing::trace!(value = %any_to_string(value), "non-numeric value found");
            return TargetKind::Classification;
        }
    }
    TargetKind::Regression
}
