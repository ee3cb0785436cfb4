//! Column-set comparison between two DataFrames.

use std::collections::BTreeSet;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

/// Outcome of comparing the column names of two frames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnComparison {
    /// True when either difference below is non-empty.
    pub mismatch: bool,
    /// Columns of the first frame missing from the second, in first-frame order.
    pub df1_not_in_df2: Vec<String>,
    /// Columns of the second frame missing from the first, in second-frame order.
    pub df2_not_in_df1: Vec<String>,
}

/// Compare the column sets of two frames.
pub fn compare_columns(df1: &DataFrame, df2: &DataFrame) -> ColumnComparison {
    compare_columns_ignoring(df1, df2, &[])
}

/// Compare the column sets of two frames, leaving out every name in `ignore`.
pub fn compare_columns_ignoring(
    df1: &DataFrame,
    df2: &DataFrame,
    ignore: &[&str],
) -> ColumnComparison {
    let left: Vec<&str> = df1
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    let right: Vec<&str> = df2
        .get_column_names()
        .into_iter()
        .map(|name| name.as_str())
        .collect();
    compare_column_names(&left, &right, ignore)
}

/// Compare two ordered lists of column names, leaving out every name in `ignore`.
pub fn compare_column_names<L, R>(left: &[L], right: &[R], ignore: &[&str]) -> ColumnComparison
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let ignore: BTreeSet<&str> = ignore.iter().copied().collect();
    let left_set: BTreeSet<&str> = left.iter().map(AsRef::as_ref).collect();
    let right_set: BTreeSet<&str> = right.iter().map(AsRef::as_ref).collect();

    let df1_not_in_df2 = only_in(left, &right_set, &ignore);
    let df2_not_in_df1 = only_in(right, &left_set, &ignore);
    let mismatch = !df1_not_in_df2.is_empty() || !df2_not_in_df1.is_empty();
    if mismatch {
        tracing::debug!(
            df1_not_in_df2 = ?df1_not_in_df2,
            df2_not_in_df1 = ?df2_not_in_df1,
            "column sets differ"
        );
    }

    ColumnComparison {
        mismatch,
        df1_not_in_df2,
        df2_not_in_df1,
    }
}

fn only_in<S: AsRef<str>>(
    names: &[S],
    other: &BTreeSet<&str>,
    ignore: &BTreeSet<&str>,
) -> Vec<String> {
    let mut seen = BTreeSet::new();
    names
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| !ignore.contains(name) && !other.contains(name))
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}
