//! fmedian - thresholded spatial median filtering for 2D grids and 3D volumes.
//!
//! For every cell, the filter gathers the values of a rectangular window
//! around it, keeps those within a threshold of the center value and writes
//! their median. A sigma filter with the same neighborhood rules is provided
//! alongside, and both have volume counterparts with a box-shaped window.
//!
//! Neighbor lists are short, so sorting them dominates the cost. The
//! [`sorting`] module dispatches each length to a comparator network,
//! insertion sort or the standard library sort.
//!
//! # Quick Start
//!
//! ```
//! use fmedian::{Buffer2, FilterConfig, median_filter_buffer};
//!
//! let input = Buffer2::from_fn(64, 64, |x, y| ((x * 7 + y * 3) % 50) as u16);
//!
//! // 5x5 window, ignore neighbors more than 20 counts away from the center
//! let output = median_filter_buffer(&input, &FilterConfig::new(2, 2, 20.0))?;
//! assert_eq!(output.shape(), (64, 64));
//! # Ok::<(), fmedian::FilterError>(())
//! ```

pub(crate) mod common;
mod config;
mod error;
mod filter;
pub(crate) mod neighbors;
pub(crate) mod statistics;

pub mod sorting;

// ============================================================================
// Grids
// ============================================================================

pub use common::{
    Buffer2, Buffer3, GridView, GridView3, GridViewMut, GridViewMut3, Layout, Layout3, Sample,
};

// ============================================================================
// Configuration and errors
// ============================================================================

pub use config::{EmptyPolicy, FilterConfig, FilterConfig3};
pub use error::{FilterError, FilterResult};

// ============================================================================
// Filters
// ============================================================================

pub use filter::{
    fmedian, median_filter, median_filter_buffer, median_filter3, median_filter3_buffer,
    sigma_filter, sigma_filter_buffer, sigma_filter3, sigma_filter3_buffer,
};

#[cfg(feature = "bench")]
pub mod bench {
    pub use crate::filter::bench as filter;
    pub use crate::sorting::bench as sorting;
}
