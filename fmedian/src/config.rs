//! Filter configuration.
//!
//! A single `FilterConfig` (or `FilterConfig3` for volumes) carries every
//! per-invocation constant: window half-widths, the inclusion threshold,
//! center handling and the policy for cells that admit no neighbors.

use crate::error::{FilterError, FilterResult};

/// Value written for a cell whose window admits no neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Write `0.0`. Indistinguishable from a legitimate zero.
    #[default]
    Zero,
    /// Write NaN so degenerate cells can be told apart.
    Nan,
    /// Write the center sample if it is finite, NaN otherwise.
    Center,
}

impl EmptyPolicy {
    /// Output value for a degenerate cell whose center sample is `center`.
    #[inline]
    pub fn value(self, center: f64) -> f64 {
        match self {
            EmptyPolicy::Zero => 0.0,
            EmptyPolicy::Nan => f64::NAN,
            EmptyPolicy::Center if center.is_finite() => center,
            EmptyPolicy::Center => f64::NAN,
        }
    }
}

/// Parameters for one filter invocation.
///
/// # Examples
///
/// ```
/// use fmedian::{EmptyPolicy, FilterConfig};
///
/// // 5x5 window, admit neighbors within 40 counts of the center
/// let config = FilterConfig::new(2, 2, 40.0);
///
/// // Plain 3x3 median without a threshold
/// let config = FilterConfig::square(1);
///
/// // Custom configuration using struct update syntax
/// let config = FilterConfig {
///     exclude_center: true,
///     empty: EmptyPolicy::Nan,
///     ..FilterConfig::new(3, 1, 100.0)
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    /// Half-width of the window along x (columns).
    pub half_width_x: usize,
    /// Half-width of the window along y (rows).
    pub half_width_y: usize,
    /// A neighbor is admitted only if `|value - center| < threshold`.
    pub threshold: f64,
    /// Skip the center cell itself.
    pub exclude_center: bool,
    /// Output for cells with no admitted neighbors.
    pub empty: EmptyPolicy,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            half_width_x: 1,
            half_width_y: 1,
            threshold: f64::INFINITY,
            exclude_center: false,
            empty: EmptyPolicy::Zero,
        }
    }
}

impl FilterConfig {
    // ========== Presets ==========

    /// Window of `(2*half_width_x+1) x (2*half_width_y+1)` with a threshold.
    pub fn new(half_width_x: usize, half_width_y: usize, threshold: f64) -> Self {
        Self {
            half_width_x,
            half_width_y,
            threshold,
            ..Default::default()
        }
    }

    /// Square window of side `2*radius+1`, every neighbor admitted.
    pub fn square(radius: usize) -> Self {
        Self::unthresholded(radius, radius)
    }

    /// Rectangular window, every neighbor admitted.
    pub fn unthresholded(half_width_x: usize, half_width_y: usize) -> Self {
        Self::new(half_width_x, half_width_y, f64::INFINITY)
    }

    // ========== Derived values ==========

    /// Window width `2*half_width_x+1`, or `None` on overflow.
    pub fn window_width(&self) -> Option<usize> {
        self.half_width_x.checked_mul(2)?.checked_add(1)
    }

    /// Window height `2*half_width_y+1`, or `None` on overflow.
    pub fn window_height(&self) -> Option<usize> {
        self.half_width_y.checked_mul(2)?.checked_add(1)
    }

    /// Unclipped window area, or `None` on overflow. Windows are clipped to
    /// the grid, so an overflowing area is still a valid configuration.
    pub fn window_area(&self) -> Option<usize> {
        self.window_width()?.checked_mul(self.window_height()?)
    }

    /// Same window with x and y swapped, for filtering a transposed grid.
    pub(crate) fn transposed(&self) -> Self {
        Self {
            half_width_x: self.half_width_y,
            half_width_y: self.half_width_x,
            ..*self
        }
    }

    // ========== Validation ==========

    /// Validate configuration parameters.
    pub fn validate(&self) -> FilterResult<()> {
        validate_threshold(self.threshold)
    }
}

/// Parameters for one volume filter invocation.
///
/// Same rules as [`FilterConfig`] with a third half-width along z.
///
/// ```
/// use fmedian::{EmptyPolicy, FilterConfig3};
///
/// // 3x3x3 median of the 26 neighbors, keep the center if all are NaN
/// let config = FilterConfig3 {
///     exclude_center: true,
///     empty: EmptyPolicy::Center,
///     ..FilterConfig3::cube(1)
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig3 {
    /// Half-width of the window along x (columns).
    pub half_width_x: usize,
    /// Half-width of the window along y (rows).
    pub half_width_y: usize,
    /// Half-width of the window along z (planes).
    pub half_width_z: usize,
    /// A neighbor is admitted only if `|value - center| < threshold`.
    pub threshold: f64,
    /// Skip the center cell itself.
    pub exclude_center: bool,
    /// Output for cells with no admitted neighbors.
    pub empty: EmptyPolicy,
}

impl Default for FilterConfig3 {
    fn default() -> Self {
        Self {
            half_width_x: 1,
            half_width_y: 1,
            half_width_z: 1,
            threshold: f64::INFINITY,
            exclude_center: false,
            empty: EmptyPolicy::Zero,
        }
    }
}

impl FilterConfig3 {
    // ========== Presets ==========

    pub fn new(half_width_x: usize, half_width_y: usize, half_width_z: usize, threshold: f64) -> Self {
        Self {
            half_width_x,
            half_width_y,
            half_width_z,
            threshold,
            ..Default::default()
        }
    }

    /// Cubic window of side `2*radius+1`, every neighbor admitted.
    pub fn cube(radius: usize) -> Self {
        Self::unthresholded(radius, radius, radius)
    }

    pub fn unthresholded(half_width_x: usize, half_width_y: usize, half_width_z: usize) -> Self {
        Self::new(half_width_x, half_width_y, half_width_z, f64::INFINITY)
    }

    // ========== Validation ==========

    pub fn validate(&self) -> FilterResult<()> {
        validate_threshold(self.threshold)
    }
}

fn validate_threshold(threshold: f64) -> FilterResult<()> {
    if threshold.is_nan() || threshold < 0.0 {
        return Err(FilterError::InvalidThreshold(threshold));
    }
    Ok(())
}
