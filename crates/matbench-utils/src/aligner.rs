//! Feature-column alignment between fit-time and transform-time frames.

use polars::prelude::DataFrame;

use crate::columns::compare_column_names;
use crate::error::{MatbenchError, Result};
use crate::fitted::{DataframeTransformer, FitFlag, FitState, check_fitted, set_fitted};
use crate::logging::{Logger, TracingLogger};

/// Remembers the feature columns seen during `fit` and makes later frames match them.
///
/// On `transform`, columns the fitted frame never had are dropped with a
/// warning, missing fitted columns are an error, and the surviving features
/// come back in fitted order with the target column (if present) last.
pub struct ColumnAligner {
    fit: FitFlag,
    columns: Vec<String>,
    logger: Box<dyn Logger>,
}

impl Default for ColumnAligner {
    fn default() -> Self {
        Self::new()
    }
}

impl ColumnAligner {
    pub fn new() -> Self {
        Self::with_logger(Box::new(TracingLogger::new("ColumnAligner")))
    }

    /// Build an aligner that reports through `logger`.
    pub fn with_logger(logger: Box<dyn Logger>) -> Self {
        Self {
            fit: FitFlag::new(),
            columns: Vec::new(),
            logger,
        }
    }

    /// Feature columns recorded by the last successful `fit`.
    pub fn fitted_columns(&self) -> &[String] {
        &self.columns
    }

    fn align(&self, df: DataFrame, target: &str) -> Result<DataFrame> {
        let incoming: Vec<&str> = df
            .get_column_names()
            .into_iter()
            .map(|name| name.as_str())
            .collect();
        let comparison = compare_column_names(&self.columns, &incoming, &[target]);
        if !comparison.df1_not_in_df2.is_empty() {
            return Err(MatbenchError::ColumnMismatch {
                missing: comparison.df1_not_in_df2,
            });
        }
        if !comparison.df2_not_in_df1.is_empty() {
            self.logger.warning(&format!(
                "dropping columns not seen during fit: {}",
                comparison.df2_not_in_df1.join(", ")
            ));
        }

        let mut order: Vec<&str> = self.columns.iter().map(String::as_str).collect();
        if !target.is_empty() && incoming.contains(&target) && !order.contains(&target) {
            order.push(target);
        }
        Ok(df.select(order)?)
    }
}

impl FitState for ColumnAligner {
    fn is_fit(&self) -> bool {
        self.fit.is_set()
    }

    fn mark_fit(&mut self) {
        self.fit.set();
    }

    fn transformer_name(&self) -> &str {
        "ColumnAligner"
    }
}

impl DataframeTransformer for ColumnAligner {
    fn fit(&mut self, df: &DataFrame, target: &str) -> Result<()> {
        set_fitted(self, |this| {
            this.columns = df
                .get_column_names()
                .into_iter()
                .map(|name| name.as_str())
                .filter(|name| *name != target)
                .map(str::to_string)
                .collect();
            this.logger.debug(&format!(
                "fitted on {} feature columns",
                this.columns.len()
            ));
            Ok(())
        })
    }

    fn transform(&self, df: DataFrame, target: &str) -> Result<DataFrame> {
        check_fitted(self, |this| this.align(df, target))
    }
}
