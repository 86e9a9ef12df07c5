use std::collections::TryReserveError;

use thiserror::Error;

/// Errors reported before a filter touches its output.
///
/// Every variant is detected up front, so a failed call never leaves the
/// output grid partially written.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("Input and output grids must have identical size: input {input:?}, output {output:?}")]
    ShapeMismatch {
        input: (usize, usize),
        output: (usize, usize),
    },

    #[error(
        "Volumes must have identical size: input {input:?}, output {output:?} (width, height, depth)"
    )]
    VolumeShapeMismatch {
        input: (usize, usize, usize),
        output: (usize, usize, usize),
    },

    /// Shape is `(width, height[, depth])`, strides are outermost first.
    #[error("Grid of shape {shape:?} with strides {strides:?} needs {required} elements, slice has {len}")]
    OutOfBounds {
        shape: Vec<usize>,
        strides: Vec<usize>,
        required: usize,
        len: usize,
    },

    /// Strides are listed outermost first.
    #[error("Output grid addresses some cells more than once (strides {strides:?})")]
    AliasedOutput { strides: Vec<usize> },

    #[error("Threshold must be a non-negative number, got {0}")]
    InvalidThreshold(f64),

    #[error("Failed to allocate {elements} working buffer elements: {source}")]
    Allocation {
        elements: usize,
        source: TryReserveError,
    },
}

pub type FilterResult<T> = Result<T, FilterError>;
