//! Thresholds deciding when a computed value counts as zero.

/// Threshold used by [`Tolerance::default`].
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Policy for treating small values as zero in [`Matrix::inverse_with`] and
/// [`Matrix::rank_with`].
///
/// The default is an *absolute* threshold of [`DEFAULT_EPSILON`]. An absolute threshold is
/// scale-sensitive: scaling a well-conditioned matrix by `1e-6` can make it look singular. A
/// *relative* threshold is multiplied by a scale derived from the input first (the largest
/// element magnitude for rank decisions, its `N`-th power for determinants).
///
/// # Examples
///
/// ```
/// # use fixed_linalg::*;
/// let tiny = Mat2::<f64>::identity() * 1e-6;
/// assert!(tiny.inverse().is_err());
/// assert!(tiny.inverse_with(Tolerance::Relative(1e-9)).is_ok());
/// ```
///
/// [`Matrix::inverse_with`]: crate::Matrix::inverse_with
/// [`Matrix::rank_with`]: crate::Matrix::rank_with
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// Values with a magnitude below `eps` are zero.
    Absolute(f64),
    /// Values with a magnitude below `eps * scale` are zero.
    Relative(f64),
}

impl Tolerance {
    /// Returns the threshold below which a value of the given `scale` counts as zero.
    pub fn threshold(self, scale: f64) -> f64 {
        match self {
            Tolerance::Absolute(eps) => eps,
            Tolerance::Relative(eps) => eps * scale,
        }
    }

    /// Returns whether `value` is negligible compared to `scale` under this policy.
    pub fn is_negligible(self, value: f64, scale: f64) -> bool {
        value.abs() < self.threshold(scale)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::Absolute(DEFAULT_EPSILON)
    }
}
