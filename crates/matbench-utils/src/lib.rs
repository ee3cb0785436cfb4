//! Helper utilities for machine-learning benchmarking.
//!
//! - [`logging`]: subscriber setup plus real and null [`Logger`]s
//! - [`metrics`]: whether a larger score is better for a named metric
//! - [`columns`]: column-set comparison between two frames
//! - [`target`]: regression vs. classification detection for a target column
//! - [`fitted`]: fit-state guards and the [`DataframeTransformer`] trait
//! - [`aligner`]: a transformer that keeps transform-time columns in line with fit-time ones

pub mod aligner;
pub mod columns;
pub mod error;
pub mod fitted;
pub mod io;
pub mod logging;
pub mod metrics;
pub mod polars_utils;
pub mod target;

pub use aligner::ColumnAligner;
pub use columns::{
    ColumnComparison, compare_column_names, compare_columns, compare_columns_ignoring,
};
pub use error::{MatbenchError, Result};
pub use fitted::{DataframeTransformer, FitFlag, FitState, check_fitted, set_fitted};
pub use io::read_frame;
pub use logging::{
    LogConfig, LogFormat, Logger, NullLogger, TracingLogger, init_logging, initialize_logger,
    initialize_null_logger,
};
pub use metrics::{MetricDirections, UnknownMetricPolicy, is_greater_better};
pub use target::{TargetKind, classify_values, regression_or_classification};
