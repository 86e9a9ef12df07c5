//! Tests for the thresholded median and sigma filters.

use rand::prelude::*;

use super::*;
use crate::config::EmptyPolicy;

/// Straightforward per-cell reference: full window scan, sort, pick middle.
fn naive_median<T: Sample>(input: &Buffer2<T>, config: &FilterConfig) -> Buffer2<f64> {
    let (width, height) = input.shape();
    Buffer2::from_fn(width, height, |x, y| {
        let center = input[(x, y)].to_f64();
        let mut values = Vec::new();
        for ny in 0..height {
            for nx in 0..width {
                if nx.abs_diff(x) > config.half_width_x || ny.abs_diff(y) > config.half_width_y {
                    continue;
                }
                if config.exclude_center && nx == x && ny == y {
                    continue;
                }
                let value = input[(nx, ny)].to_f64();
                if (value - center).abs() < config.threshold {
                    values.push(value);
                }
            }
        }
        values.sort_by(f64::total_cmp);
        match values.len() {
            0 => config.empty.value(center),
            n if n % 2 == 1 => values[n / 2],
            n => (values[n / 2 - 1] + values[n / 2]) / 2.0,
        }
    })
}

fn assert_grids_eq(actual: &Buffer2<f64>, expected: &Buffer2<f64>) {
    assert_eq!(actual.shape(), expected.shape());
    for y in 0..actual.height() {
        for x in 0..actual.width() {
            let (a, e) = (actual[(x, y)], expected[(x, y)]);
            assert!(
                a == e || (a.is_nan() && e.is_nan()),
                "Mismatch at ({}, {}): got {}, expected {}",
                x,
                y,
                a,
                e
            );
        }
    }
}

#[test]
fn test_threshold_keeps_isolated_peak() {
    let input = Buffer2::new(3, 3, vec![10i16, 10, 10, 10, 50, 10, 10, 10, 10]);
    let output = median_filter_buffer(&input, &FilterConfig::new(1, 1, 5.0)).unwrap();

    assert_eq!(output[(1, 1)], 50.0);
    for (x, y) in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)] {
        assert_eq!(output[(x, y)], 10.0);
    }
}

#[test]
fn test_unthresholded_removes_peak() {
    let input = Buffer2::new(3, 3, vec![10i16, 10, 10, 10, 50, 10, 10, 10, 10]);
    let output = median_filter_buffer(&input, &FilterConfig::square(1)).unwrap();
    assert_eq!(output[(1, 1)], 10.0);
}

#[test]
fn test_single_cell_grid() {
    let input = Buffer2::new(1, 1, vec![-17i32]);
    for radius in [0, 1, 5] {
        let output = median_filter_buffer(&input, &FilterConfig::new(radius, radius, 1.0)).unwrap();
        assert_eq!(output[(0, 0)], -17.0);
    }
}

#[test]
fn test_sequential_grid_matches_enumeration() {
    let input = Buffer2::from_fn(5, 5, |x, y| (y * 5 + x) as i16);
    let mut output = Buffer2::new_default(5, 5);
    fmedian(&input.view(), &mut output.view_mut(), 1, 1, f64::INFINITY).unwrap();

    for y in 1..4 {
        for x in 1..4 {
            let mut window: Vec<f64> = (y - 1..=y + 1)
                .flat_map(|ny| (x - 1..=x + 1).map(move |nx| (ny * 5 + nx) as f64))
                .collect();
            window.sort_by(f64::total_cmp);
            assert_eq!(output[(x, y)], window[4]);
            // Row-major ramp: the median of a 3x3 block is its center
            assert_eq!(output[(x, y)], (y * 5 + x) as f64);
        }
    }
    // Corner (0, 0) sees 0, 1, 5, 6
    assert_eq!(output[(0, 0)], 3.0);

    assert_grids_eq(&output, &naive_median(&input, &FilterConfig::square(1)));
}

#[test]
fn test_rectangular_window_orientation() {
    // Values vary only along x, so a window that spans rows only is the identity
    let input = Buffer2::from_fn(6, 4, |x, _| (x * x) as u16);
    let output = median_filter_buffer(&input, &FilterConfig::unthresholded(0, 3)).unwrap();
    for y in 0..4 {
        for x in 0..6 {
            assert_eq!(output[(x, y)], (x * x) as f64);
        }
    }

    let output = median_filter_buffer(&input, &FilterConfig::unthresholded(1, 0)).unwrap();
    assert_grids_eq(&output, &naive_median(&input, &FilterConfig::unthresholded(1, 0)));
}

#[test]
fn test_shape_mismatch() {
    let input = Buffer2::new_filled(4, 3, 1.0f32);
    let mut output = Buffer2::new_filled(3, 4, -1.0);

    let err = median_filter(&input.view(), &mut output.view_mut(), &FilterConfig::default()).unwrap_err();
    assert_eq!(
        err,
        FilterError::ShapeMismatch {
            input: (4, 3),
            output: (3, 4)
        }
    );
    assert!(output.pixels().iter().all(|&v| v == -1.0));
}

#[test]
fn test_invalid_config_leaves_output_untouched() {
    let input = Buffer2::new_filled(4, 4, 1u8);
    let mut output = Buffer2::new_filled(4, 4, -1.0);

    let err = fmedian(&input.view(), &mut output.view_mut(), 1, 1, -2.0).unwrap_err();
    assert_eq!(err, FilterError::InvalidThreshold(-2.0));

    let err = fmedian(&input.view(), &mut output.view_mut(), 1, 1, f64::NAN).unwrap_err();
    assert!(matches!(err, FilterError::InvalidThreshold(t) if t.is_nan()));

    assert!(output.pixels().iter().all(|&v| v == -1.0));
}

#[test]
fn test_huge_half_widths_clip_to_grid() {
    let input = Buffer2::new(1, 1, vec![42i16]);
    let mut output = Buffer2::new_filled(1, 1, -1.0);
    fmedian(&input.view(), &mut output.view_mut(), usize::MAX, 1, f64::INFINITY).unwrap();
    assert_eq!(output[(0, 0)], 42.0);

    fmedian(&input.view(), &mut output.view_mut(), usize::MAX, usize::MAX, 3.0).unwrap();
    assert_eq!(output[(0, 0)], 42.0);

    // Window covers the whole 3x3 grid from every cell
    let input = Buffer2::new(3, 3, vec![1i32, 9, 2, 8, 3, 7, 4, 6, 5]);
    let config = FilterConfig::unthresholded(usize::MAX, usize::MAX);
    let output = median_filter_buffer(&input, &config).unwrap();
    assert!(output.pixels().iter().all(|&v| v == 5.0));

    let config = FilterConfig::unthresholded(usize::MAX, 0);
    let output = median_filter_buffer(&input, &config).unwrap();
    assert_eq!(output.pixels(), &[2.0, 2.0, 2.0, 7.0, 7.0, 7.0, 5.0, 5.0, 5.0]);
}

#[test]
fn test_empty_grid() {
    let input: Buffer2<f64> = Buffer2::new_default(0, 7);
    let output = median_filter_buffer(&input, &FilterConfig::default()).unwrap();
    assert!(output.is_empty());
}

// The driver sizes buffers by the window clipped to the grid, so this path
// cannot be forced end to end; `allocate_buffers` runs before any output write.
#[test]
fn test_allocation_failure() {
    let err = allocate_buffers(1, usize::MAX).unwrap_err();
    assert!(matches!(
        err,
        FilterError::Allocation {
            elements: usize::MAX,
            ..
        }
    ));

    let buffers = allocate_buffers(3, 9).unwrap();
    assert_eq!(buffers.len(), 3);
    assert!(buffers.iter().all(|b| b.is_empty() && b.capacity() >= 9));
}

#[test]
fn test_empty_policies() {
    // Threshold 0 admits nothing, so every cell is degenerate
    let input = Buffer2::new(2, 2, vec![1.0f64, 2.0, f64::NAN, 4.0]);

    let output = median_filter_buffer(&input, &FilterConfig::new(1, 1, 0.0)).unwrap();
    assert!(output.pixels().iter().all(|&v| v == 0.0));

    let config = FilterConfig {
        empty: EmptyPolicy::Nan,
        ..FilterConfig::new(1, 1, 0.0)
    };
    let output = median_filter_buffer(&input, &config).unwrap();
    assert!(output.pixels().iter().all(|v| v.is_nan()));

    let config = FilterConfig {
        empty: EmptyPolicy::Center,
        ..FilterConfig::new(1, 1, 0.0)
    };
    let output = median_filter_buffer(&input, &config).unwrap();
    assert_eq!(output[(0, 0)], 1.0);
    assert_eq!(output[(1, 0)], 2.0);
    assert!(output[(0, 1)].is_nan());
    assert_eq!(output[(1, 1)], 4.0);
}

#[test]
fn test_exclude_center() {
    let input = Buffer2::new(3, 1, vec![1.0f32, 100.0, 3.0]);
    let config = FilterConfig {
        exclude_center: true,
        ..FilterConfig::unthresholded(1, 0)
    };
    let output = median_filter_buffer(&input, &config).unwrap();
    assert_eq!(output.pixels(), &[100.0, 2.0, 100.0]);
}

#[test]
fn test_nan_inputs_are_skipped() {
    let input = Buffer2::new(3, 1, vec![1.0f64, f64::NAN, 5.0]);
    let output = median_filter_buffer(&input, &FilterConfig::unthresholded(1, 0)).unwrap();
    assert_eq!(output.pixels(), &[1.0, 3.0, 5.0]);
}

#[test]
fn test_strided_output() {
    let input = Buffer2::from_fn(5, 4, |x, y| ((x * 7 + y * 13) % 11) as i16);
    let config = FilterConfig::new(1, 2, 6.0);
    let expected = median_filter_buffer(&input, &config).unwrap();

    // Padded rows: row stride 8 with 3 unused elements per row
    let mut padded = vec![-1.0; 8 * 4];
    let mut view = GridViewMut::with_strides(&mut padded, 5, 4, 8, 1).unwrap();
    median_filter(&input.view(), &mut view, &config).unwrap();
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(padded[y * 8 + x], expected[(x, y)]);
        }
        assert!(padded[y * 8 + 5..y * 8 + 8].iter().all(|&v| v == -1.0));
    }

    // Column-major output
    let mut column_major = vec![0.0; 5 * 4];
    let mut view = GridViewMut::with_strides(&mut column_major, 5, 4, 1, 4).unwrap();
    median_filter(&input.view(), &mut view, &config).unwrap();
    for y in 0..4 {
        for x in 0..5 {
            assert_eq!(column_major[x * 4 + y], expected[(x, y)]);
        }
    }
}

#[test]
fn test_strided_input() {
    // Column-major input of the same logical grid
    let logical = Buffer2::from_fn(4, 6, |x, y| ((x * 31 + y * 17) % 23) as f32);
    let mut column_major = vec![0.0f32; 4 * 6];
    for y in 0..6 {
        for x in 0..4 {
            column_major[x * 6 + y] = logical[(x, y)];
        }
    }
    let input = GridView::with_strides(&column_major, 4, 6, 1, 6).unwrap();

    let config = FilterConfig::new(2, 1, 9.0);
    let mut output = Buffer2::new_default(4, 6);
    median_filter(&input, &mut output.view_mut(), &config).unwrap();

    assert_grids_eq(&output, &median_filter_buffer(&logical, &config).unwrap());
}

#[test]
fn test_input_dtypes_agree() {
    let values: Vec<u8> = (0..48).map(|i| ((i * 37) % 97) as u8).collect();
    let config = FilterConfig::new(2, 1, 30.0);

    let from_u8 = median_filter_buffer(&Buffer2::new(8, 6, values.clone()), &config).unwrap();
    let as_i32: Vec<i32> = values.iter().map(|&v| i32::from(v)).collect();
    let from_i32 = median_filter_buffer(&Buffer2::new(8, 6, as_i32), &config).unwrap();
    let as_f32: Vec<f32> = values.iter().map(|&v| f32::from(v)).collect();
    let from_f32 = median_filter_buffer(&Buffer2::new(8, 6, as_f32), &config).unwrap();

    assert_grids_eq(&from_u8, &from_i32);
    assert_grids_eq(&from_u8, &from_f32);
}

#[test]
fn test_matches_naive_reference_random() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..40 {
        let width = rng.random_range(1..24);
        let height = rng.random_range(1..24);
        let input = Buffer2::from_fn(width, height, |_, _| rng.random_range(0i16..200));
        let config = FilterConfig {
            half_width_x: rng.random_range(0..5),
            half_width_y: rng.random_range(0..5),
            threshold: if rng.random_bool(0.2) {
                f64::INFINITY
            } else {
                rng.random_range(0.0..120.0)
            },
            exclude_center: rng.random_bool(0.3),
            empty: EmptyPolicy::Nan,
        };

        let output = median_filter_buffer(&input, &config).unwrap();
        assert_grids_eq(&output, &naive_median(&input, &config));
    }
}

#[test]
fn test_large_grid_parallel_matches_naive() {
    // Taller than the chunk count so every worker gets several rows
    let mut rng = StdRng::seed_from_u64(7);
    let input = Buffer2::from_fn(37, 211, |_, _| rng.random_range(0u16..1000));
    let config = FilterConfig::new(2, 2, 400.0);

    let output = median_filter_buffer(&input, &config).unwrap();
    assert_grids_eq(&output, &naive_median(&input, &config));
}

#[test]
fn test_sigma_filter() {
    let input = Buffer2::new(3, 1, vec![2.0f64, 4.0, 6.0]);
    let output = sigma_filter_buffer(&input, &FilterConfig::unthresholded(1, 0)).unwrap();

    assert_eq!(output[(0, 0)], 1.0);
    assert!((output[(1, 0)] - (8.0f64 / 3.0).sqrt()).abs() < 1e-12);
    assert_eq!(output[(2, 0)], 1.0);
}

#[test]
fn test_sigma_filter_uniform_and_degenerate() {
    let input = Buffer2::new_filled(6, 5, 3i16);
    let output = sigma_filter_buffer(&input, &FilterConfig::square(2)).unwrap();
    assert!(output.pixels().iter().all(|&v| v == 0.0));

    let mut output = Buffer2::new_filled(6, 5, -1.0);
    sigma_filter(&input.view(), &mut output.view_mut(), &FilterConfig::new(1, 1, 0.0)).unwrap();
    assert!(output.pixels().iter().all(|&v| v == 0.0));
}

#[test]
fn test_sigma_filter_skips_nan() {
    let input = Buffer2::new(2, 2, vec![1.0f64, f64::NAN, 3.0, f64::NAN]);
    let output = sigma_filter_buffer(&input, &FilterConfig::square(1)).unwrap();
    assert!(output.pixels().iter().all(|&v| v == 1.0));
}
