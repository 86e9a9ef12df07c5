//! Adaptive sorting for the short arrays produced by neighborhood collection.
//!
//! Every filtered pixel sorts its own neighbor list, so this sits on the hot
//! path of the whole filter. Lengths with a dedicated comparator network go to
//! that network; other short lengths use insertion sort; everything else falls
//! back to the standard library's unstable sort.
//!
//! Lengths 25 and 27 have two verified networks each. The complete networks
//! are the default; the `hybrid-networks` feature swaps in the block-sorted
//! variants finished by insertion sort.

#[cfg(feature = "bench")]
pub mod bench;

pub mod networks;

#[cfg(test)]
mod tests;

use std::cmp::Ordering;

#[cfg(not(feature = "hybrid-networks"))]
use networks::{sort25, sort27};
#[cfg(feature = "hybrid-networks")]
use networks::{sort25_hybrid as sort25, sort27_hybrid as sort27};

/// Lengths below this without a dedicated network use insertion sort.
pub const INSERTION_SORT_CROSSOVER: usize = 40;

/// Every length that dispatches to a comparator network.
pub const SUPPORTED_LENGTHS: [usize; 28] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 124, 125,
];

/// Returns true if `len` has a dedicated comparator network.
#[inline]
pub fn has_network(len: usize) -> bool {
    matches!(len, 2..=27 | 124 | 125)
}

/// Sort `values` ascending in place.
///
/// Output matches a comparison sort element for element for any input
/// without NaN. NaN never participates in a swap, so the values stay a
/// permutation of the input even then, but their order is unspecified.
#[inline]
pub fn sort<T: PartialOrd + Copy>(values: &mut [T]) {
    match values.len() {
        0 | 1 => {}
        2 => networks::sort2(fixed(values)),
        3 => networks::sort3(fixed(values)),
        4 => networks::sort4(fixed(values)),
        5 => networks::sort5(fixed(values)),
        6 => networks::sort6(fixed(values)),
        7 => networks::sort7(fixed(values)),
        8 => networks::sort8(fixed(values)),
        9 => networks::sort9(fixed(values)),
        10 => networks::sort10(fixed(values)),
        11 => networks::sort11(fixed(values)),
        12 => networks::sort12(fixed(values)),
        13 => networks::sort13(fixed(values)),
        14 => networks::sort14(fixed(values)),
        15 => networks::sort15(fixed(values)),
        16 => networks::sort16(fixed(values)),
        17 => networks::sort17(fixed(values)),
        18 => networks::sort18(fixed(values)),
        19 => networks::sort19(fixed(values)),
        20 => networks::sort20(fixed(values)),
        21 => networks::sort21(fixed(values)),
        22 => networks::sort22(fixed(values)),
        23 => networks::sort23(fixed(values)),
        24 => networks::sort24(fixed(values)),
        25 => sort25(fixed(values)),
        26 => networks::sort26(fixed(values)),
        27 => sort27(fixed(values)),
        124 => networks::sort124(fixed(values)),
        125 => networks::sort125(fixed(values)),
        n if n < INSERTION_SORT_CROSSOVER => insertion_sort(values),
        _ => generic_sort(values),
    }
}

/// Straight insertion sort.
///
/// Also the finishing pass of the block-sorted networks, where the input is
/// already close to sorted and this runs in near-linear time.
#[inline]
pub fn insertion_sort<T: PartialOrd + Copy>(values: &mut [T]) {
    for i in 1..values.len() {
        let key = values[i];
        let mut j = i;
        while j > 0 && values[j - 1] > key {
            values[j] = values[j - 1];
            j -= 1;
        }
        values[j] = key;
    }
}

/// O(n log n) fallback for long arrays.
#[inline]
pub fn generic_sort<T: PartialOrd + Copy>(values: &mut [T]) {
    values.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
}

/// Reinterpret a slice whose length the caller already matched.
#[inline(always)]
fn fixed<T, const N: usize>(values: &mut [T]) -> &mut [T; N] {
    values
        .try_into()
        .unwrap_or_else(|_| unreachable!("dispatch matched length {}", N))
}
