//! Example: remove impulse noise from a synthetic frame
//!
//! Builds a smooth gradient, sprinkles hot and cold pixels over it and runs
//! the thresholded median filter with a few window sizes. Reports how many
//! pixels end up within one count of the clean frame.
//!
//! # Usage
//!
//! ```bash
//! RUST_LOG=fmedian=debug cargo run -p fmedian --example filter_demo
//! ```

use std::time::Instant;

use fmedian::{Buffer2, EmptyPolicy, FilterConfig, median_filter_buffer, sigma_filter_buffer};
use rand::prelude::*;
use tracing_subscriber::EnvFilter;

const WIDTH: usize = 1024;
const HEIGHT: usize = 768;
const NOISE_FRACTION: f64 = 0.02;

fn main() {
    init_tracing();

    let clean = Buffer2::from_fn(WIDTH, HEIGHT, |x, y| (1000 + x + y / 2) as u16);
    let mut noisy = clean.clone();

    let mut rng = StdRng::seed_from_u64(1);
    let mut corrupted = 0;
    for value in noisy.pixels_mut() {
        if rng.random_bool(NOISE_FRACTION) {
            *value = if rng.random_bool(0.5) { 65535 } else { 0 };
            corrupted += 1;
        }
    }
    tracing::info!(width = WIDTH, height = HEIGHT, corrupted, "Synthetic frame ready");

    for (radius, threshold) in [(1, f64::INFINITY), (1, 200.0), (2, 200.0), (3, 200.0)] {
        let config = FilterConfig {
            empty: EmptyPolicy::Center,
            ..FilterConfig::new(radius, radius, threshold)
        };

        let start = Instant::now();
        let filtered = match median_filter_buffer(&noisy, &config) {
            Ok(filtered) => filtered,
            Err(e) => {
                tracing::error!(error = %e, "Median filter failed");
                return;
            }
        };
        let elapsed = start.elapsed();

        let restored = filtered
            .pixels()
            .iter()
            .zip(clean.pixels())
            .filter(|&(&f, &c)| (f - f64::from(c)).abs() <= 1.0)
            .count();

        tracing::info!(
            window = %format!("{}x{}", 2 * radius + 1, 2 * radius + 1),
            threshold,
            restored_pct = 100.0 * restored as f64 / (WIDTH * HEIGHT) as f64,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "Median filter"
        );
    }

    match sigma_filter_buffer(&noisy, &FilterConfig::square(1)) {
        Ok(sigma) => {
            let mean = sigma.pixels().iter().sum::<f64>() / sigma.len() as f64;
            tracing::info!(mean_sigma = mean, "Local 3x3 sigma of the noisy frame");
        }
        Err(e) => tracing::error!(error = %e, "Sigma filter failed"),
    }
}

fn init_tracing() {
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
