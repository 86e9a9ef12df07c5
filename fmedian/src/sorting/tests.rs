//! Tests for comparator networks and the sort dispatcher.

use rand::prelude::*;

use super::networks::*;
use super::{SUPPORTED_LENGTHS, has_network, insertion_sort, sort};

const RANDOM_PERMUTATIONS: usize = 10_000;

fn reference_sorted(values: &[f64]) -> Vec<f64> {
    let mut expected = values.to_vec();
    expected.sort_by(f64::total_cmp);
    expected
}

/// Inputs every network must handle besides random permutations.
fn pattern_inputs(n: usize) -> Vec<Vec<f64>> {
    vec![
        (0..n).map(|i| i as f64).collect(),
        (0..n).rev().map(|i| i as f64).collect(),
        vec![7.0; n],
        (0..n).map(|i| (i % 2) as f64).collect(),
        (0..n).map(|i| if i % 2 == 0 { -(i as f64) } else { i as f64 }).collect(),
        (0..n).map(|i| (i % 3) as f64 * 0.5).collect(),
    ]
}

fn check_network<const N: usize>(network: fn(&mut [f64; N]), seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut values: [f64; N] = std::array::from_fn(|i| i as f64 * 1.5 - 10.0);

    for iteration in 0..RANDOM_PERMUTATIONS {
        values.shuffle(&mut rng);
        let expected = reference_sorted(&values);
        let mut actual = values;
        network(&mut actual);
        assert_eq!(
            actual.as_slice(),
            expected.as_slice(),
            "length {} permutation {} mismatched, input {:?}",
            N,
            iteration,
            values
        );
    }

    for input in pattern_inputs(N) {
        let expected = reference_sorted(&input);
        let mut actual: [f64; N] = input.as_slice().try_into().unwrap();
        network(&mut actual);
        assert_eq!(actual.as_slice(), expected.as_slice(), "length {} pattern {:?}", N, input);
    }
}

/// Exhaustive 0-1 check: a network that sorts every 0-1 input sorts everything.
fn check_network_zero_one<const N: usize>(network: fn(&mut [u8; N])) {
    for mask in 0u32..(1 << N) {
        let mut values: [u8; N] = std::array::from_fn(|i| ((mask >> i) & 1) as u8);
        let ones = values.iter().filter(|&&v| v == 1).count();
        network(&mut values);
        assert!(
            values.iter().take(N - ones).all(|&v| v == 0)
                && values.iter().skip(N - ones).all(|&v| v == 1),
            "length {} failed on 0-1 input {:#b}",
            N,
            mask
        );
    }
}

#[test]
fn test_networks_small_match_reference() {
    check_network(sort2::<f64>, 2);
    check_network(sort3::<f64>, 3);
    check_network(sort4::<f64>, 4);
    check_network(sort5::<f64>, 5);
    check_network(sort6::<f64>, 6);
    check_network(sort7::<f64>, 7);
    check_network(sort8::<f64>, 8);
    check_network(sort9::<f64>, 9);
    check_network(sort10::<f64>, 10);
}

#[test]
fn test_networks_medium_match_reference() {
    check_network(sort11::<f64>, 11);
    check_network(sort12::<f64>, 12);
    check_network(sort13::<f64>, 13);
    check_network(sort14::<f64>, 14);
    check_network(sort15::<f64>, 15);
    check_network(sort16::<f64>, 16);
    check_network(sort17::<f64>, 17);
    check_network(sort18::<f64>, 18);
    check_network(sort19::<f64>, 19);
}

#[test]
fn test_networks_large_match_reference() {
    check_network(sort20::<f64>, 20);
    check_network(sort21::<f64>, 21);
    check_network(sort22::<f64>, 22);
    check_network(sort23::<f64>, 23);
    check_network(sort24::<f64>, 24);
    check_network(sort25::<f64>, 25);
    check_network(sort26::<f64>, 26);
    check_network(sort27::<f64>, 27);
}

#[test]
fn test_hybrid_networks_match_reference() {
    check_network(sort25_hybrid::<f64>, 250);
    check_network(sort27_hybrid::<f64>, 270);
}

#[test]
fn test_composite_networks_match_reference() {
    check_network(sort124::<f64>, 124);
    check_network(sort125::<f64>, 125);
}

#[test]
fn test_networks_zero_one_exhaustive() {
    check_network_zero_one(sort2::<u8>);
    check_network_zero_one(sort3::<u8>);
    check_network_zero_one(sort4::<u8>);
    check_network_zero_one(sort5::<u8>);
    check_network_zero_one(sort6::<u8>);
    check_network_zero_one(sort7::<u8>);
    check_network_zero_one(sort8::<u8>);
    check_network_zero_one(sort9::<u8>);
    check_network_zero_one(sort10::<u8>);
    check_network_zero_one(sort11::<u8>);
    check_network_zero_one(sort12::<u8>);
    check_network_zero_one(sort13::<u8>);
    check_network_zero_one(sort14::<u8>);
    check_network_zero_one(sort15::<u8>);
    check_network_zero_one(sort16::<u8>);
}

#[test]
fn test_networks_generic_over_integers() {
    let mut values = [5i16, -3, 9, 0, 0, -32768, 32767, 1, 2];
    sort9(&mut values);
    assert_eq!(values, [-32768, -3, 0, 0, 1, 2, 5, 9, 32767]);
}

#[test]
fn test_dispatcher_matches_reference_all_lengths() {
    let mut rng = StdRng::seed_from_u64(42);

    for len in 0..=200 {
        for _ in 0..50 {
            let values: Vec<f64> = (0..len).map(|_| rng.random_range(-1000.0..1000.0)).collect();
            let expected = reference_sorted(&values);
            let mut actual = values.clone();
            sort(&mut actual);
            assert_eq!(actual, expected, "length {} input {:?}", len, values);
        }
    }
}

#[test]
fn test_dispatcher_with_duplicates() {
    let mut rng = StdRng::seed_from_u64(7);

    for len in [9, 10, 25, 27, 33, 45, 124, 125, 300] {
        for _ in 0..200 {
            let values: Vec<f64> = (0..len).map(|_| rng.random_range(0..4) as f64).collect();
            let mut actual = values.clone();
            sort(&mut actual);
            assert_eq!(actual, reference_sorted(&values), "length {}", len);
        }
    }
}

#[test]
fn test_dispatcher_patterns() {
    for len in [2, 9, 25, 27, 39, 40, 124, 125, 500] {
        for input in pattern_inputs(len) {
            let mut actual = input.clone();
            sort(&mut actual);
            assert_eq!(actual, reference_sorted(&input), "length {}", len);
        }
    }
}

#[test]
fn test_dispatcher_empty_and_single() {
    let mut empty: [f64; 0] = [];
    sort(&mut empty);

    let mut single = [3.5];
    sort(&mut single);
    assert_eq!(single, [3.5]);
}

#[test]
fn test_sort_keeps_nan_as_permutation() {
    let mut values = [3.0, f64::NAN, 1.0, 2.0, f64::NAN, 0.0, 5.0, 4.0, 6.0];
    sort(&mut values);

    assert_eq!(values.iter().filter(|v| v.is_nan()).count(), 2);
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    finite.sort_by(f64::total_cmp);
    assert_eq!(finite, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_insertion_sort() {
    let mut values = [9, 4, 7, 1, 1, 0, 12, -5];
    insertion_sort(&mut values);
    assert_eq!(values, [-5, 0, 1, 1, 4, 7, 9, 12]);

    let mut empty: [i32; 0] = [];
    insertion_sort(&mut empty);
}

#[test]
fn test_has_network() {
    for len in SUPPORTED_LENGTHS {
        assert!(has_network(len), "length {} should have a network", len);
    }
    for len in [0, 1, 28, 39, 40, 100, 123, 126] {
        assert!(!has_network(len), "length {} should not have a network", len);
    }
    assert_eq!(
        (0..=200).filter(|&len| has_network(len)).count(),
        SUPPORTED_LENGTHS.len()
    );
}
