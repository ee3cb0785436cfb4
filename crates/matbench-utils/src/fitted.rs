//! Fit-state tracking for transformer-like objects.
//!
//! Any type that owns a [`FitFlag`] and implements [`FitState`] can wrap its
//! fit operation in [`set_fitted`] and its transform operation in
//! [`check_fitted`]. No base type is needed.

use polars::prelude::DataFrame;

use crate::error::{MatbenchError, Result};

/// Boolean that starts unset and can only be set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitFlag(bool);

impl FitFlag {
    pub fn new() -> Self {
        Self(false)
    }

    pub fn is_set(self) -> bool {
        self.0
    }

    pub fn set(&mut self) {
        self.0 = true;
    }
}

/// Structural capability: the object knows whether it has been fit.
pub trait FitState {
    fn is_fit(&self) -> bool;

    fn mark_fit(&mut self);

    /// Name used in the "not fitted" error.
    fn transformer_name(&self) -> &str {
        let path = std::any::type_name::<Self>();
        let base = path.split('<').next().unwrap_or(path);
        base.rsplit("::").next().unwrap_or("transformer")
    }
}

/// Run a fit-like operation and mark `target` fit once it succeeds.
///
/// The operation's result is returned unchanged. A failed operation leaves the
/// fit state untouched.
pub fn set_fitted<T, R, F>(target: &mut T, op: F) -> Result<R>
where
    T: FitState + ?Sized,
    F: FnOnce(&mut T) -> Result<R>,
{
    let result = op(target)?;
    target.mark_fit();
    tracing::debug!(transformer = target.transformer_name(), "marked fit");
    Ok(result)
}

/// Run a transform-like operation only if `target` has been fit.
///
/// # Errors
///
/// Returns [`MatbenchError::NotFitted`] without running `op` when `target`
/// has not been fit.
pub fn check_fitted<T, R, F>(target: &T, op: F) -> Result<R>
where
    T: FitState + ?Sized,
    F: FnOnce(&T) -> Result<R>,
{
    if !target.is_fit() {
        return Err(MatbenchError::NotFitted {
            transformer: target.transformer_name().to_string(),
        });
    }
    op(target)
}

/// Two-phase DataFrame transformer: `fit` learns from a frame, `transform` applies it.
///
/// Implementors route `fit` through [`set_fitted`] and `transform` through
/// [`check_fitted`].
pub trait DataframeTransformer: FitState {
    fn fit(&mut self, df: &DataFrame, target: &str) -> Result<()>;

    fn transform(&self, df: DataFrame, target: &str) -> Result<DataFrame>;

    fn fit_transform(&mut self, df: DataFrame, target: &str) -> Result<DataFrame> {
        self.fit(&df, target)?;
        self.transform(df, target)
    }
}
