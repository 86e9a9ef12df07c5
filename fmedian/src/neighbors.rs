//! Thresholded neighborhood collection for one target cell.

use crate::common::{GridView, GridView3, Sample};
use crate::config::{FilterConfig, FilterConfig3};

/// Inclusion test shared by the grid and volume collectors.
#[inline(always)]
fn admits(value: f64, center: f64, threshold: f64) -> bool {
    if threshold == f64::INFINITY {
        !value.is_nan()
    } else {
        (value - center).abs() < threshold
    }
}

/// Inclusive index range of a window of half-width `half` around `i`,
/// clipped to `[0, len)`.
#[inline(always)]
fn clipped(i: usize, half: usize, len: usize) -> std::ops::RangeInclusive<usize> {
    i.saturating_sub(half)..=i.saturating_add(half).min(len - 1)
}

/// Fill `buffer` with the admitted neighbors of `(x, y)` and return the center
/// sample as `f64`.
///
/// The window is clipped to the grid, so edge cells see fewer candidates.
/// A candidate is admitted when `|value - center| < threshold`; NaN samples
/// never pass. With an infinite threshold every non-NaN sample is admitted,
/// even around a NaN center.
///
/// `buffer` is cleared first and must already have enough capacity for the
/// clipped window; the collector never allocates once that holds.
#[inline]
pub fn collect_neighbors<T: Sample>(
    grid: &GridView<'_, T>,
    x: usize,
    y: usize,
    config: &FilterConfig,
    buffer: &mut Vec<f64>,
) -> f64 {
    debug_assert!(x < grid.width() && y < grid.height());

    buffer.clear();
    let center = grid.get(x, y).to_f64();

    for ny in clipped(y, config.half_width_y, grid.height()) {
        for nx in clipped(x, config.half_width_x, grid.width()) {
            if config.exclude_center && nx == x && ny == y {
                continue;
            }
            let value = grid.get(nx, ny).to_f64();
            if admits(value, center, config.threshold) {
                debug_assert!(buffer.len() < buffer.capacity());
                buffer.push(value);
            }
        }
    }

    center
}

/// Volume counterpart of [`collect_neighbors`] for cell `(x, y, z)`.
#[inline]
pub fn collect_neighbors3<T: Sample>(
    grid: &GridView3<'_, T>,
    (x, y, z): (usize, usize, usize),
    config: &FilterConfig3,
    buffer: &mut Vec<f64>,
) -> f64 {
    debug_assert!(x < grid.width() && y < grid.height() && z < grid.depth());

    buffer.clear();
    let center = grid.get(x, y, z).to_f64();

    for nz in clipped(z, config.half_width_z, grid.depth()) {
        for ny in clipped(y, config.half_width_y, grid.height()) {
            for nx in clipped(x, config.half_width_x, grid.width()) {
                if config.exclude_center && nx == x && ny == y && nz == z {
                    continue;
                }
                let value = grid.get(nx, ny, nz).to_f64();
                if admits(value, center, config.threshold) {
                    debug_assert!(buffer.len() < buffer.capacity());
                    buffer.push(value);
                }
            }
        }
    }

    center
}

/// Upper bound on admitted neighbors for a `width x height` grid.
pub fn clipped_capacity(config: &FilterConfig, width: usize, height: usize) -> usize {
    let ww = config.window_width().unwrap_or(usize::MAX).min(width);
    let wh = config.window_height().unwrap_or(usize::MAX).min(height);
    ww.saturating_mul(wh)
}

/// Upper bound on admitted neighbors for a `width x height x depth` volume.
pub fn clipped_capacity3(config: &FilterConfig3, width: usize, height: usize, depth: usize) -> usize {
    let extent = |half: usize, len: usize| half.saturating_mul(2).saturating_add(1).min(len);
    extent(config.half_width_x, width)
        .saturating_mul(extent(config.half_width_y, height))
        .saturating_mul(extent(config.half_width_z, depth))
}
