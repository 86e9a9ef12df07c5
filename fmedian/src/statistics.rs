//! Median and spread of admitted neighbor values.

use crate::sorting;

/// Median of `values`, sorting them in place.
///
/// Odd counts return the middle element, even counts the mean of the two
/// middle elements. An empty slice returns `0.0`; callers that want a
/// different degenerate value check for emptiness first.
#[inline]
pub fn median_mut(values: &mut [f64]) -> f64 {
    let len = values.len();
    if len == 0 {
        return 0.0;
    }

    sorting::sort(values);

    let mid = len / 2;
    if len & 1 == 1 {
        values[mid]
    } else {
        (values[mid - 1] + values[mid]) * 0.5
    }
}

/// Population standard deviation, `0.0` for an empty slice.
#[inline]
pub fn population_sigma(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&v| (v - mean) * (v - mean)).sum::<f64>() / n;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd() {
        assert_eq!(median_mut(&mut [1.0, 3.0, 2.0]), 2.0);
        assert_eq!(median_mut(&mut [5.0]), 5.0);
    }

    #[test]
    fn test_median_even() {
        assert_eq!(median_mut(&mut [1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median_mut(&mut [4.0, -4.0]), 0.0);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median_mut(&mut []), 0.0);
    }

    #[test]
    fn test_median_leaves_values_sorted() {
        let mut values = [9.0, 1.0, 8.0, 2.0, 7.0, 3.0, 6.0, 4.0, 5.0];
        assert_eq!(median_mut(&mut values), 5.0);
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_median_long_input() {
        // Goes through the generic sort path
        let mut values: Vec<f64> = (0..101).rev().map(f64::from).collect();
        assert_eq!(median_mut(&mut values), 50.0);
    }

    #[test]
    fn test_population_sigma() {
        assert_eq!(population_sigma(&[]), 0.0);
        assert_eq!(population_sigma(&[3.0, 3.0, 3.0]), 0.0);
        assert_eq!(population_sigma(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), 2.0);
        assert!((population_sigma(&[1.0, 2.0]) - 0.5).abs() < 1e-12);
    }
}
