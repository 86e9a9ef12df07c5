//! Median and sigma filters over 3D volumes.
//!
//! A 3x3x3 window yields up to 27 neighbors and a 5x5x5 window up to 125,
//! both of which have dedicated sorting networks.
//!
//! Results are computed in parallel into a contiguous scratch volume, then
//! copied into the output view. The scratch and every neighbor buffer are
//! reserved before any work starts, so output views of any non-aliasing
//! stride order are supported and a failed call writes nothing.


use rayon::prelude::*;

use super::{Statistic, allocate_buffers};
use crate::common::parallel::{chunk_count, rows_per_chunk};
use crate::common::{Buffer3, GridView3, GridViewMut3, Sample};
use crate::config::FilterConfig3;
use crate::error::{FilterError, FilterResult};
use crate::neighbors::{clipped_capacity3, collect_neighbors3};

/// Write the thresholded median of each cell's 3D neighborhood into `output`.
///
/// # Examples
///
/// ```
/// use fmedian::{Buffer3, FilterConfig3, median_filter3_buffer};
///
/// let mut input = Buffer3::new_filled(5, 5, 5, 1.0f64);
/// input[(2, 2, 2)] = 100.0;
///
/// let config = FilterConfig3 { exclude_center: true, ..FilterConfig3::cube(1) };
/// let output = median_filter3_buffer(&input, &config)?;
/// assert_eq!(output[(2, 2, 2)], 1.0);
/// # Ok::<(), fmedian::FilterError>(())
/// ```
pub fn median_filter3<T: Sample>(
    input: &GridView3<'_, T>,
    output: &mut GridViewMut3<'_, f64>,
    config: &FilterConfig3,
) -> FilterResult<()> {
    run(input, output, config, Statistic::Median)
}

/// Write the population standard deviation of each cell's admitted 3D
/// neighbors into `output`.
pub fn sigma_filter3<T: Sample>(
    input: &GridView3<'_, T>,
    output: &mut GridViewMut3<'_, f64>,
    config: &FilterConfig3,
) -> FilterResult<()> {
    run(input, output, config, Statistic::Sigma)
}

/// Volume median filter into a freshly allocated volume of the input's shape.
pub fn median_filter3_buffer<T: Sample>(
    input: &Buffer3<T>,
    config: &FilterConfig3,
) -> FilterResult<Buffer3<f64>> {
    filter_buffer(input, config, Statistic::Median)
}

/// Volume sigma filter into a freshly allocated volume of the input's shape.
pub fn sigma_filter3_buffer<T: Sample>(
    input: &Buffer3<T>,
    config: &FilterConfig3,
) -> FilterResult<Buffer3<f64>> {
    filter_buffer(input, config, Statistic::Sigma)
}

fn filter_buffer<T: Sample>(
    input: &Buffer3<T>,
    config: &FilterConfig3,
    statistic: Statistic,
) -> FilterResult<Buffer3<f64>> {
    let (width, height, depth) = input.shape();
    let mut output = Buffer3::new_default(width, height, depth);
    run(&input.view(), &mut output.view_mut(), config, statistic)?;
    Ok(output)
}

fn run<T: Sample>(
    input: &GridView3<'_, T>,
    output: &mut GridViewMut3<'_, f64>,
    config: &FilterConfig3,
    statistic: Statistic,
) -> FilterResult<()> {
    config.validate()?;

    let input_shape = input.layout().shape();
    let output_shape = output.layout().shape();
    if input_shape != output_shape {
        return Err(FilterError::VolumeShapeMismatch {
            input: input_shape,
            output: output_shape,
        });
    }

    if output.layout().is_empty() {
        return Ok(());
    }

    let (width, height, depth) = output_shape;
    // Output cells are distinct elements of one slice, so these cannot overflow
    let rows = height * depth;
    let cells = rows * width;

    let capacity = clipped_capacity3(config, width, height, depth);
    let rows_per_chunk = rows_per_chunk(rows);
    let mut buffers = allocate_buffers(chunk_count(rows, rows_per_chunk), capacity)?;

    let mut values = Vec::new();
    values
        .try_reserve_exact(cells)
        .map_err(|source| FilterError::Allocation {
            elements: cells,
            source,
        })?;
    values.resize(cells, 0.0f64);

    tracing::debug!(
        width,
        height,
        depth,
        half_width_x = config.half_width_x,
        half_width_y = config.half_width_y,
        half_width_z = config.half_width_z,
        threshold = config.threshold,
        ?statistic,
        threads = rayon::current_num_threads(),
        chunks = buffers.len(),
        "Running volume filter"
    );

    let degenerate: usize = values
        .par_chunks_mut(width * rows_per_chunk)
        .zip(buffers.par_iter_mut())
        .enumerate()
        .map(|(chunk_idx, (chunk, buffer))| {
            let mut degenerate = 0;

            for (local_row, row) in chunk.chunks_exact_mut(width).enumerate() {
                let r = chunk_idx * rows_per_chunk + local_row;
                let (y, z) = (r % height, r / height);

                for (x, out) in row.iter_mut().enumerate() {
                    let center = collect_neighbors3(input, (x, y, z), config, buffer);
                    *out = if buffer.is_empty() {
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

    for (r, row) in values.chunks_exact(width).enumerate() {
        let (y, z) = (r % height, r / height);
        for (x, &value) in row.iter().enumerate() {
            output.set(x, y, z, value);
        }
    }

    tracing::debug!(degenerate, cells, "Volume filter done");

    Ok(())
}
