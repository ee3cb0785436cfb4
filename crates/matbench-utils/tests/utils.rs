//! Integration tests for the benchmarking helpers.

use matbench_utils::{
    DataframeTransformer, FitFlag, FitState, LogConfig, Logger, MatbenchError, Result,
    TargetKind, check_fitted, compare_columns, compare_columns_ignoring, initialize_logger,
    initialize_null_logger, is_greater_better, regression_or_classification, set_fitted,
};
use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};

fn int_frame(columns: &[(&str, [i64; 2])]) -> DataFrame {
    let cols: Vec<Column> = columns
        .iter()
        .map(|(name, values)| Series::new((*name).into(), values).into_column())
        .collect();
    DataFrame::new(cols).unwrap()
}

/// Transformer whose only state is the fit flag.
#[derive(Default)]
struct MyTransformer {
    fit: FitFlag,
}

impl FitState for MyTransformer {
    fn is_fit(&self) -> bool {
        self.fit.is_set()
    }

    fn mark_fit(&mut self) {
        self.fit.set();
    }
}

impl DataframeTransformer for MyTransformer {
    fn fit(&mut self, _df: &DataFrame, _target: &str) -> Result<()> {
        set_fitted(self, |_| Ok(()))
    }

    fn transform(&self, df: DataFrame, _target: &str) -> Result<DataFrame> {
        check_fitted(self, |_| Ok(df))
    }
}

#[test]
fn test_logger_initialization() {
    let config = LogConfig::default().with_ansi(false).with_env_filter(false);
    let log = initialize_logger("matbench", &config).unwrap();
    log.info("Test logging.");
    log.debug("Test debug.");
    log.warning("Test warning.");

    let null = initialize_null_logger();
    null.info("Test null log 1.");
    null.debug("Test null log 2.");
    null.warning("Test null log 3.");
}

#[test]
fn test_logger_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("matbench.log");
    let config = LogConfig::default().with_log_file(Some(path.clone()));
    initialize_logger("matbench", &config).unwrap();
    // The file is created even if another test already owns the global subscriber.
    assert!(path.exists());
}

#[test]
fn test_is_greater_better() {
    assert!(is_greater_better("accuracy").unwrap());
    assert!(is_greater_better("r2").unwrap());
    assert!(is_greater_better("neg_mean_squared_error").unwrap());
    assert!(!is_greater_better("mean_squared_error").unwrap());
}

#[test]
fn test_compare_columns() {
    let df1 = int_frame(&[("a", [1, 2]), ("b", [2, 3])]);
    let df2 = int_frame(&[("b", [3, 4]), ("c", [4, 5])]);

    let comparison = compare_columns(&df1, &df2);
    assert!(comparison.mismatch);
    assert_eq!(comparison.df1_not_in_df2, vec!["a"]);
    assert_eq!(comparison.df2_not_in_df1, vec!["c"]);

    let comparison2 = compare_columns(&df1, &df1);
    assert!(!comparison2.mismatch);

    let comparison3 = compare_columns_ignoring(&df1, &df2, &["c"]);
    assert!(comparison3.mismatch);
    assert_eq!(comparison3.df1_not_in_df2, vec!["a"]);
    assert!(comparison3.df2_not_in_df1.is_empty());
}

#[test]
fn test_compare_columns_snapshot() {
    let df1 = int_frame(&[("a", [1, 2]), ("b", [2, 3])]);
    let df2 = int_frame(&[("b", [3, 4]), ("c", [4, 5])]);
    insta::assert_json_snapshot!(compare_columns(&df1, &df2), @r#"
    {
      "mismatch": true,
      "df1_not_in_df2": [
        "a"
      ],
      "df2_not_in_df1": [
        "c"
      ]
    }
    "#);
}

#[test]
fn test_regression_or_classification() {
    let s = Series::new("s".into(), &["4", "5", "6"]).into_column();
    assert_eq!(regression_or_classification(&s), TargetKind::Regression);

    let s = Series::new("s".into(), &[1i64, 2, 3]).into_column();
    assert_eq!(regression_or_classification(&s), TargetKind::Regression);

    let s = Series::new("s".into(), &["a", "b", "c"]).into_column();
    assert_eq!(regression_or_classification(&s), TargetKind::Classification);

    let s = Series::new("s".into(), &["a1", "b", "c"]).into_column();
    assert_eq!(regression_or_classification(&s), TargetKind::Classification);
}

#[test]
fn test_fitting_decorations() {
    let df = int_frame(&[("a", [1, 2]), ("b", [2, 3])]);
    let mut mt = MyTransformer::default();

    assert!(!mt.is_fit());
    mt.fit(&df, "").unwrap();
    assert!(mt.is_fit());
    let df = mt.transform(df, "").unwrap();

    let mt2 = MyTransformer::default();
    let err = mt2.transform(df, "").unwrap_err();
    assert!(matches!(err, MatbenchError::NotFitted { .. }));
}
