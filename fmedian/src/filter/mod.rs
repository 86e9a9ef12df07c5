//! Thresholded median and sigma filters over 2D grids, plus their volume
//! counterparts `median_filter3` and `sigma_filter3`.
//!
//! Both filters share one driver: validate everything, allocate one neighbor
//! buffer per row chunk, then fill output rows in parallel. Every error is
//! returned before the first output cell is written.

#[cfg(feature = "bench")]
pub mod bench;

#[cfg(test)]
mod tests;

mod volume;

pub use volume::{median_filter3, median_filter3_buffer, sigma_filter3, sigma_filter3_buffer};

use rayon::prelude::*;

use crate::common::parallel::{chunk_count, rows_per_chunk};
use crate::common::{Buffer2, GridView, GridViewMut, Sample};
use crate::config::FilterConfig;
use crate::error::{FilterError, FilterResult};
use crate::neighbors::{clipped_capacity, collect_neighbors};
use crate::statistics::{median_mut, population_sigma};

/// Per-cell reduction of the admitted neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Statistic {
    Median,
    Sigma,
}

impl Statistic {
    #[inline]
    fn reduce(self, values: &mut [f64]) -> f64 {
        match self {
            Statistic::Median => median_mut(values),
            Statistic::Sigma => population_sigma(values),
        }
    }
}

/// Write the thresholded median of each cell's neighborhood into `output`.
///
/// For every cell, neighbors inside the clipped window whose value differs
/// from the center by strictly less than `config.threshold` are collected and
/// their median is written. Cells that admit nothing get `config.empty`.
///
/// # Examples
///
/// ```
/// use fmedian::{Buffer2, FilterConfig, median_filter};
///
/// let input = Buffer2::new(3, 3, vec![10i16, 10, 10, 10, 50, 10, 10, 10, 10]);
/// let mut output = Buffer2::new_default(3, 3);
///
/// median_filter(&input.view(), &mut output.view_mut(), &FilterConfig::new(1, 1, 5.0)).unwrap();
/// assert_eq!(output[(1, 1)], 50.0);
/// assert_eq!(output[(0, 0)], 10.0);
/// ```
pub fn median_filter<T: Sample>(
    input: &GridView<'_, T>,
    output: &mut GridViewMut<'_, f64>,
    config: &FilterConfig,
) -> FilterResult<()> {
    run(input, output, config, Statistic::Median)
}

/// Write the population standard deviation of each cell's admitted
/// neighbors into `output`.
///
/// Collection is identical to [`median_filter`]; degenerate cells follow
/// `config.empty` as well.
pub fn sigma_filter<T: Sample>(
    input: &GridView<'_, T>,
    output: &mut GridViewMut<'_, f64>,
    config: &FilterConfig,
) -> FilterResult<()> {
    run(input, output, config, Statistic::Sigma)
}

/// Median filter with explicit window half-widths and threshold.
///
/// `half_width_x` spans columns, `half_width_y` rows. Degenerate cells are
/// written as `0.0` and the center is always a candidate.
pub fn fmedian<T: Sample>(
    input: &GridView<'_, T>,
    output: &mut GridViewMut<'_, f64>,
    half_width_x: usize,
    half_width_y: usize,
    threshold: f64,
) -> FilterResult<()> {
    median_filter(
        input,
        output,
        &FilterConfig::new(half_width_x, half_width_y, threshold),
    )
}

/// Median filter into a freshly allocated grid of the input's shape.
pub fn median_filter_buffer<T: Sample>(
    input: &Buffer2<T>,
    config: &FilterConfig,
) -> FilterResult<Buffer2<f64>> {
    filter_buffer(input, config, Statistic::Median)
}

/// Sigma filter into a freshly allocated grid of the input's shape.
pub fn sigma_filter_buffer<T: Sample>(
    input: &Buffer2<T>,
    config: &FilterConfig,
) -> FilterResult<Buffer2<f64>> {
    filter_buffer(input, config, Statistic::Sigma)
}

fn filter_buffer<T: Sample>(
    input: &Buffer2<T>,
    config: &FilterConfig,
    statistic: Statistic,
) -> FilterResult<Buffer2<f64>> {
    let mut output = Buffer2::new_default(input.width(), input.height());
    run(&input.view(), &mut output.view_mut(), config, statistic)?;
    Ok(output)
}

fn run<T: Sample>(
    input: &GridView<'_, T>,
    output: &mut GridViewMut<'_, f64>,
    config: &FilterConfig,
    statistic: Statistic,
) -> FilterResult<()> {
    config.validate()?;

    let input_shape = input.layout().shape();
    let output_shape = output.layout().shape();
    if input_shape != output_shape {
        return Err(FilterError::ShapeMismatch {
            input: input_shape,
            output: output_shape,
        });
    }

    if output.layout().is_empty() {
        return Ok(());
    }

    if output.layout().rows_disjoint() {
        run_rows(input, output, config, statistic)
    } else {
        // Column-major output: filter the transposed problem so columns become rows
        debug_assert!(output.layout().cols_disjoint());
        let input = input.transposed();
        let mut output = output.transposed();
        run_rows(&input, &mut output, &config.transposed(), statistic)
    }
}

/// Fill `output` row chunk by row chunk. Requires disjoint output rows.
fn run_rows<T: Sample>(
    input: &GridView<'_, T>,
    output: &mut GridViewMut<'_, f64>,
    config: &FilterConfig,
    statistic: Statistic,
) -> FilterResult<()> {
    let layout = output.layout();
    let (width, height) = layout.shape();
    debug_assert!(layout.rows_disjoint());

    let capacity = clipped_capacity(config, width, height);
    let rows_per_chunk = rows_per_chunk(height);
    let mut buffers = allocate_buffers(chunk_count(height, rows_per_chunk), capacity)?;

    tracing::debug!(
        width,
        height,
        half_width_x = config.half_width_x,
        half_width_y = config.half_width_y,
        threshold = config.threshold,
        ?statistic,
        threads = rayon::current_num_threads(),
        chunks = buffers.len(),
        "Running neighborhood filter"
    );

    let row_stride = layout.row_stride();
    let col_stride = layout.col_stride();
    // Views are validated on construction, so the span always fits
    let data = output.data_mut();
    let required = layout.required_len().map_or(data.len(), |r| r.min(data.len()));
    let data = &mut data[..required];

    let degenerate: usize = data
        .par_chunks_mut(row_stride.saturating_mul(rows_per_chunk))
        .zip(buffers.par_iter_mut())
        .enumerate()
        .map(|(chunk_idx, (chunk, buffer))| {
            let y_start = chunk_idx * rows_per_chunk;
            let y_end = (y_start + rows_per_chunk).min(height);
            let mut degenerate = 0;

            for y in y_start..y_end {
                let row_offset = (y - y_start) * row_stride;
                for x in 0..width {
                    let center = collect_neighbors(input, x, y, config, buffer);
                    chunk[row_offset + x * col_stride] = if buffer.is_empty() {
                        degenerate += 1;
                        config.empty.value(center)
                    } else {
                        statistic.reduce(buffer)
                    };
                }
            }

            degenerate
        })
        .sum();

    tracing::debug!(degenerate, cells = width * height, "Neighborhood filter done");

    Ok(())
}

/// One empty buffer with room for `capacity` values per chunk, or
/// [`FilterError::Allocation`] if any reservation fails.
pub(crate) fn allocate_buffers(count: usize, capacity: usize) -> FilterResult<Vec<Vec<f64>>> {
    let mut buffers = Vec::new();
    buffers
        .try_reserve_exact(count)
        .map_err(|source| FilterError::Allocation {
            elements: count,
            source,
        })?;

    for _ in 0..count {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(capacity)
            .map_err(|source| FilterError::Allocation {
                elements: capacity,
                source,
            })?;
        buffers.push(buffer);
    }

    Ok(buffers)
}
