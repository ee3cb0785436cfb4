use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use matbench_utils::{
    ColumnComparison, MatbenchError, MetricDirections, TargetKind, compare_columns_ignoring,
    read_frame, regression_or_classification,
};

use crate::cli::{CompareArgs, MetricArgs, TargetArgs};

/// Direction of one metric as reported by `matbench metric`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricDirection {
    pub name: String,
    pub greater_is_better: bool,
}

/// Type decision for one column as reported by `matbench target-type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnKind {
    pub column: String,
    pub kind: TargetKind,
}

pub fn run_metric(args: &MetricArgs) -> Result<Vec<MetricDirection>> {
    let directions = MetricDirections::new().with_unknown_policy(args.unknown.into());
    args.names
        .iter()
        .map(|name| {
            let greater_is_better = directions
                .is_greater_better(name)
                .with_context(|| format!("look up metric {name}"))?;
            Ok(MetricDirection {
                name: name.clone(),
                greater_is_better,
            })
        })
        .collect()
}

pub fn run_metrics() -> Vec<MetricDirection> {
    MetricDirections::known_metrics()
        .into_iter()
        .map(|(name, greater_is_better)| MetricDirection {
            name,
            greater_is_better,
        })
        .collect()
}

pub fn run_compare(args: &CompareArgs) -> Result<ColumnComparison> {
    let span = info_span!("compare_columns");
    let _guard = span.enter();
    let left = read_frame(&args.left)
        .with_context(|| format!("read {}", args.left.display()))?;
    let right = read_frame(&args.right)
        .with_context(|| format!("read {}", args.right.display()))?;
    let ignore: Vec<&str> = args.ignore.iter().map(String::as_str).collect();
    let comparison = compare_columns_ignoring(&left, &right, &ignore);
    info!(
        mismatch = comparison.mismatch,
        left_only = comparison.df1_not_in_df2.len(),
        right_only = comparison.df2_not_in_df1.len(),
        "compared columns"
    );
    Ok(comparison)
}

/// Process status for `compare-columns`: 0 when the columns match, 1 on a
/// mismatch, 2 when either file could not be read.
pub fn compare_exit_code(result: &Result<ColumnComparison>) -> i32 {
    match result {
        Ok(comparison) if comparison.mismatch => 1,
        Ok(_) => 0,
        Err(_) => 2,
    }
}

pub fn run_target_type(args: &TargetArgs) -> Result<Vec<ColumnKind>> {
    let span = info_span!("target_type", file = %args.file.display());
    let _guard = span.enter();
    let df = read_frame(&args.file).with_context(|| format!("read {}", args.file.display()))?;
    let names: Vec<String> = if args.columns.is_empty() {
        df.get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    } else {
        args.columns.clone()
    };
    let mut kinds = Vec::with_capacity(names.len());
    for name in names {
        let column = df
            .column(&name)
            .map_err(|_| MatbenchError::ColumnNotFound {
                column: name.clone(),
            })?;
        let kind = regression_or_classification(column);
        debug!(column = %name, %kind, "classified column");
        kinds.push(ColumnKind { column: name, kind });
    }
    Ok(kinds)
}
