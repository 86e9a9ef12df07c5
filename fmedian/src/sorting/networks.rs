//! Fixed-length comparator networks.
//!
//! Each `sortN` applies a data-independent sequence of compare-and-swap steps
//! that fully orders any input of exactly `N` elements. Every bracketed group
//! inside `layers!` is one layer: its comparators touch disjoint positions.
//!
//! Lengths 2..=10 are size-optimal networks. Longer lengths use Batcher's
//! merge-exchange construction. All of them are checked against every 0-1
//! input in the tests (0-1 principle) up to length 16, and against random
//! permutations beyond that.

use super::insertion_sort;

/// Leaves `v[a] <= v[b]`. Selects instead of branching so the compiler can
/// lower it to min/max.
#[inline(always)]
fn cswap<T: PartialOrd + Copy, const N: usize>(v: &mut [T; N], a: usize, b: usize) {
    let (x, y) = (v[a], v[b]);
    let swap = x > y;
    v[a] = if swap { y } else { x };
    v[b] = if swap { x } else { y };
}

macro_rules! layers {
    ($v:ident, $([$(($a:literal, $b:literal)),+ $(,)?]),+ $(,)?) => {
        $($(cswap($v, $a, $b);)+)+
    };
}

/// Two elements: a single comparator.
#[inline]
#[rustfmt::skip]
pub fn sort2<T: PartialOrd + Copy>(v: &mut [T; 2]) {
    layers!(v,
        [(0, 1)],
    );
}

/// Three elements (1x3 or 3x1 window).
#[inline]
#[rustfmt::skip]
pub fn sort3<T: PartialOrd + Copy>(v: &mut [T; 3]) {
    layers!(v,
        [(0, 2)],
        [(0, 1)],
        [(1, 2)],
    );
}

/// Four elements: corner of a 3x3 window.
#[inline]
#[rustfmt::skip]
pub fn sort4<T: PartialOrd + Copy>(v: &mut [T; 4]) {
    layers!(v,
        [(0, 2), (1, 3)],
        [(0, 1), (2, 3)],
        [(1, 2)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort5<T: PartialOrd + Copy>(v: &mut [T; 5]) {
    layers!(v,
        [(0, 3), (1, 4)],
        [(0, 2), (1, 3)],
        [(0, 1), (2, 4)],
        [(1, 2), (3, 4)],
        [(2, 3)],
    );
}

/// Six elements: edge of a 3x3 window.
#[inline]
#[rustfmt::skip]
pub fn sort6<T: PartialOrd + Copy>(v: &mut [T; 6]) {
    layers!(v,
        [(0, 5), (1, 3), (2, 4)],
        [(1, 2), (3, 4)],
        [(0, 3), (2, 5)],
        [(0, 1), (2, 3), (4, 5)],
        [(1, 2), (3, 4)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort7<T: PartialOrd + Copy>(v: &mut [T; 7]) {
    layers!(v,
        [(0, 6), (2, 3), (4, 5)],
        [(0, 2), (1, 4), (3, 6)],
        [(0, 1), (2, 5), (3, 4)],
        [(1, 2), (4, 6)],
        [(2, 3), (4, 5)],
        [(1, 2), (3, 4), (5, 6)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort8<T: PartialOrd + Copy>(v: &mut [T; 8]) {
    layers!(v,
        [(0, 2), (1, 3), (4, 6), (5, 7)],
        [(0, 4), (1, 5), (2, 6), (3, 7)],
        [(0, 1), (2, 3), (4, 5), (6, 7)],
        [(2, 4), (3, 5)],
        [(1, 4), (3, 6)],
        [(1, 2), (3, 4), (5, 6)],
    );
}

/// Nine elements: full 3x3 window.
#[inline]
#[rustfmt::skip]
pub fn sort9<T: PartialOrd + Copy>(v: &mut [T; 9]) {
    layers!(v,
        [(0, 3), (1, 7), (2, 5), (4, 8)],
        [(0, 7), (2, 4), (3, 8), (5, 6)],
        [(0, 2), (1, 3), (4, 5), (7, 8)],
        [(1, 4), (3, 6), (5, 7)],
        [(0, 1), (2, 4), (3, 5), (6, 8)],
        [(2, 3), (4, 5), (6, 7)],
        [(1, 2), (3, 4), (5, 6)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort10<T: PartialOrd + Copy>(v: &mut [T; 10]) {
    layers!(v,
        [(0, 8), (1, 9), (2, 7), (3, 5), (4, 6)],
        [(0, 2), (1, 4), (5, 8), (7, 9)],
        [(0, 3), (2, 4), (5, 7), (6, 9)],
        [(0, 1), (3, 6), (8, 9)],
        [(1, 5), (2, 3), (4, 8), (6, 7)],
        [(1, 2), (3, 5), (4, 6), (7, 8)],
        [(2, 3), (4, 5), (6, 7)],
        [(3, 4), (5, 6)],
    );
}

/// Eleven elements. Lengths from here on use Batcher's merge-exchange
/// construction restricted to `N` wires.
#[inline]
#[rustfmt::skip]
pub fn sort11<T: PartialOrd + Copy>(v: &mut [T; 11]) {
    layers!(v,
        [(0, 8), (1, 9), (2, 10), (3, 7)],
        [(0, 4), (1, 5), (2, 6)],
        [(0, 2), (1, 3), (4, 8), (5, 9), (6, 10)],
        [(0, 1), (3, 9), (4, 6), (5, 7), (8, 10)],
        [(2, 8), (3, 5), (7, 9)],
        [(2, 4), (6, 8)],
        [(2, 3), (4, 5), (6, 7), (8, 9)],
        [(1, 8), (3, 10)],
        [(1, 4), (3, 6), (5, 8), (7, 10)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort12<T: PartialOrd + Copy>(v: &mut [T; 12]) {
    layers!(v,
        [(0, 8), (1, 9), (2, 10), (3, 11)],
        [(0, 4), (1, 5), (2, 6), (3, 7)],
        [(0, 2), (1, 3), (4, 8), (5, 9), (6, 10), (7, 11)],
        [(0, 1), (4, 6), (5, 7), (8, 10), (9, 11)],
        [(2, 8), (3, 9), (10, 11)],
        [(2, 4), (3, 5), (6, 8), (7, 9)],
        [(2, 3), (4, 5), (6, 7), (8, 9)],
        [(1, 8), (3, 10)],
        [(1, 4), (3, 6), (5, 8), (7, 10)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort13<T: PartialOrd + Copy>(v: &mut [T; 13]) {
    layers!(v,
        [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12)],
        [(0, 2), (1, 3), (4, 8), (5, 9), (6, 10), (7, 11)],
        [(0, 1), (4, 6), (5, 7), (8, 10), (9, 11)],
        [(2, 8), (3, 9), (6, 12)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11)],
        [(1, 8), (3, 10), (5, 12)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort14<T: PartialOrd + Copy>(v: &mut [T; 14]) {
    layers!(v,
        [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13)],
        [(0, 2), (1, 3), (4, 8), (5, 9), (6, 10), (7, 11)],
        [(0, 1), (4, 6), (5, 7), (8, 10), (9, 11)],
        [(2, 8), (3, 9), (6, 12), (7, 13)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13)],
        [(1, 8), (3, 10), (5, 12)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12)],
    );
}

/// Fifteen elements: full 3x5 window.
#[inline]
#[rustfmt::skip]
pub fn sort15<T: PartialOrd + Copy>(v: &mut [T; 15]) {
    layers!(v,
        [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14)],
        [(0, 2), (1, 3), (4, 8), (5, 9), (6, 10), (7, 11), (12, 14)],
        [(0, 1), (4, 6), (5, 7), (8, 10), (9, 11)],
        [(2, 8), (3, 9), (6, 12), (7, 13)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13)],
        [(1, 8), (3, 10), (5, 12), (7, 14)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort16<T: PartialOrd + Copy>(v: &mut [T; 16]) {
    layers!(v,
        [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 12), (9, 13), (10, 14), (11, 15)],
        [(0, 2), (1, 3), (4, 8), (5, 9), (6, 10), (7, 11), (12, 14), (13, 15)],
        [(0, 1), (4, 6), (5, 7), (8, 10), (9, 11), (14, 15)],
        [(2, 8), (3, 9), (6, 12), (7, 13)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13)],
        [(1, 8), (3, 10), (5, 12), (7, 14)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort17<T: PartialOrd + Copy>(v: &mut [T; 17]) {
    layers!(v,
        [(0, 16), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15)],
        [(0, 8), (1, 5), (2, 6), (3, 7), (9, 13), (10, 14), (11, 15)],
        [(0, 4), (1, 3), (5, 9), (6, 10), (7, 11), (8, 16), (13, 15)],
        [(0, 2), (4, 16), (5, 7), (8, 12), (9, 11)],
        [(0, 1), (3, 9), (4, 8), (7, 13), (12, 16)],
        [(2, 16), (3, 5), (4, 6), (7, 9), (8, 10), (11, 13), (12, 14)],
        [(2, 8), (6, 12), (10, 16)],
        [(2, 4), (6, 8), (10, 12), (14, 16)],
        [(1, 16), (2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15)],
        [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort18<T: PartialOrd + Copy>(v: &mut [T; 18]) {
    layers!(v,
        [(0, 16), (1, 17), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15)],
        [(0, 8), (1, 9), (2, 6), (3, 7), (10, 14), (11, 15)],
        [(0, 4), (1, 5), (6, 10), (7, 11), (8, 16), (9, 17)],
        [(0, 2), (1, 3), (4, 16), (5, 17), (8, 12), (9, 13)],
        [(0, 1), (4, 8), (5, 9), (12, 16), (13, 17)],
        [(2, 16), (3, 17), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15)],
        [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17)],
        [(1, 16), (3, 10), (5, 12), (7, 14)],
        [(1, 8), (3, 6), (7, 10), (9, 16), (11, 14)],
        [(1, 4), (5, 8), (9, 12), (13, 16)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort19<T: PartialOrd + Copy>(v: &mut [T; 19]) {
    layers!(v,
        [(0, 16), (1, 17), (2, 18), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15)],
        [(0, 8), (1, 9), (2, 10), (3, 7), (11, 15)],
        [(0, 4), (1, 5), (2, 6), (7, 11), (8, 16), (9, 17), (10, 18)],
        [(0, 2), (1, 3), (4, 16), (5, 17), (6, 18), (8, 12), (9, 13), (10, 14)],
        [(0, 1), (4, 8), (5, 9), (6, 10), (12, 16), (13, 17), (14, 18)],
        [(3, 17), (4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18)],
        [(2, 16), (3, 9), (6, 12), (7, 13), (11, 17)],
        [(2, 8), (3, 5), (7, 9), (10, 16), (11, 13), (15, 17)],
        [(2, 4), (6, 8), (10, 12), (14, 16)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17)],
        [(1, 16), (3, 18), (5, 12), (7, 14)],
        [(1, 8), (3, 10), (9, 16), (11, 18)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18)],
    );
}

/// Twenty elements: edge of a 5x5 window.
#[inline]
#[rustfmt::skip]
pub fn sort20<T: PartialOrd + Copy>(v: &mut [T; 20]) {
    layers!(v,
        [(0, 16), (1, 17), (2, 18), (3, 19), (4, 12), (5, 13), (6, 14), (7, 15)],
        [(0, 8), (1, 9), (2, 10), (3, 11)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19)],
        [(0, 2), (1, 3), (4, 16), (5, 17), (6, 18), (7, 19), (8, 12), (9, 13), (10, 14), (11, 15)],
        [(0, 1), (4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19)],
        [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19)],
        [(2, 16), (3, 17), (6, 12), (7, 13), (18, 19)],
        [(2, 8), (3, 9), (10, 16), (11, 17)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17)],
        [(1, 16), (3, 18), (5, 12), (7, 14)],
        [(1, 8), (3, 10), (9, 16), (11, 18)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18)],
    );
}

/// Twenty-one elements: full 3x7 window.
#[inline]
#[rustfmt::skip]
pub fn sort21<T: PartialOrd + Copy>(v: &mut [T; 21]) {
    layers!(v,
        [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 13), (6, 14), (7, 15)],
        [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20)],
        [(0, 2), (1, 3), (5, 17), (6, 18), (7, 19), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20)],
        [(0, 1), (4, 16), (5, 9), (6, 10), (7, 11), (13, 17), (14, 18), (15, 19)],
        [(4, 8), (5, 7), (9, 11), (12, 16), (13, 15), (17, 19)],
        [(3, 17), (4, 6), (7, 13), (8, 10), (12, 14), (16, 18)],
        [(2, 16), (3, 9), (6, 20), (11, 17)],
        [(2, 8), (3, 5), (6, 12), (7, 9), (10, 16), (11, 13), (14, 20), (15, 17)],
        [(2, 4), (6, 8), (10, 12), (14, 16), (18, 20)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17), (18, 19)],
        [(1, 16), (3, 18), (5, 20), (7, 14)],
        [(1, 8), (3, 10), (5, 12), (9, 16), (11, 18), (13, 20)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18), (17, 20)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort22<T: PartialOrd + Copy>(v: &mut [T; 22]) {
    layers!(v,
        [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 14), (7, 15)],
        [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21)],
        [(0, 2), (1, 3), (6, 18), (7, 19), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21)],
        [(0, 1), (4, 16), (5, 17), (6, 10), (7, 11), (14, 18), (15, 19)],
        [(4, 8), (5, 9), (12, 16), (13, 17)],
        [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19)],
        [(2, 16), (3, 17), (6, 20), (7, 21)],
        [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (18, 20), (19, 21)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17), (18, 19), (20, 21)],
        [(1, 16), (3, 18), (5, 20), (7, 14)],
        [(1, 8), (3, 10), (5, 12), (9, 16), (11, 18), (13, 20)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18), (17, 20)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort23<T: PartialOrd + Copy>(v: &mut [T; 23]) {
    layers!(v,
        [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 15)],
        [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22)],
        [(0, 2), (1, 3), (7, 19), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21), (18, 22)],
        [(0, 1), (4, 16), (5, 17), (6, 18), (7, 11), (15, 19), (20, 22)],
        [(4, 8), (5, 9), (6, 10), (12, 16), (13, 17), (14, 18)],
        [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19)],
        [(2, 16), (3, 17), (6, 20), (7, 21)],
        [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (18, 20), (19, 21)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17), (18, 19), (20, 21)],
        [(1, 16), (3, 18), (5, 20), (7, 22)],
        [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18), (17, 20), (19, 22)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22)],
    );
}

/// Twenty-four elements. Also the block sorter for the 124 composite.
#[inline]
#[rustfmt::skip]
pub fn sort24<T: PartialOrd + Copy>(v: &mut [T; 24]) {
    layers!(v,
        [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23)],
        [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22), (15, 23)],
        [(0, 2), (1, 3), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21), (18, 22), (19, 23)],
        [(0, 1), (4, 16), (5, 17), (6, 18), (7, 19), (20, 22), (21, 23)],
        [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19), (22, 23)],
        [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19)],
        [(2, 16), (3, 17), (6, 20), (7, 21)],
        [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (18, 20), (19, 21)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17), (18, 19), (20, 21)],
        [(1, 16), (3, 18), (5, 20), (7, 22)],
        [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18), (17, 20), (19, 22)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22)],
    );
}

/// Twenty-five elements: full 5x5 window, as a complete network.
#[inline]
#[rustfmt::skip]
pub fn sort25<T: PartialOrd + Copy>(v: &mut [T; 25]) {
    layers!(v,
        [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23), (8, 24)],
        [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (16, 24)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22), (15, 23)],
        [(0, 2), (1, 3), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21), (18, 22), (19, 23)],
        [(0, 1), (4, 16), (5, 17), (6, 18), (7, 19), (12, 24), (21, 23)],
        [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19), (20, 24)],
        [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19), (20, 22)],
        [(2, 16), (3, 17), (6, 20), (7, 21), (10, 24)],
        [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21), (18, 24)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (18, 20), (19, 21), (22, 24)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17), (18, 19), (20, 21), (22, 23)],
        [(1, 16), (3, 18), (5, 20), (7, 22), (9, 24)],
        [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22), (17, 24)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18), (17, 20), (19, 22), (21, 24)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22), (23, 24)],
    );
}

#[inline]
#[rustfmt::skip]
pub fn sort26<T: PartialOrd + Copy>(v: &mut [T; 26]) {
    layers!(v,
        [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23), (8, 24), (9, 25)],
        [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (16, 24), (17, 25)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22), (15, 23)],
        [(0, 2), (1, 3), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21), (18, 22), (19, 23)],
        [(0, 1), (4, 16), (5, 17), (6, 18), (7, 19), (12, 24), (13, 25)],
        [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19), (20, 24), (21, 25)],
        [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19), (20, 22), (21, 23)],
        [(2, 16), (3, 17), (6, 20), (7, 21), (10, 24), (11, 25)],
        [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21), (18, 24), (19, 25)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (18, 20), (19, 21), (22, 24), (23, 25)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17), (18, 19), (20, 21), (22, 23), (24, 25)],
        [(1, 16), (3, 18), (5, 20), (7, 22), (9, 24)],
        [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22), (17, 24)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18), (17, 20), (19, 22), (21, 24)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22), (23, 24)],
    );
}

/// Twenty-seven elements, as a complete network.
#[inline]
#[rustfmt::skip]
pub fn sort27<T: PartialOrd + Copy>(v: &mut [T; 27]) {
    layers!(v,
        [(0, 16), (1, 17), (2, 18), (3, 19), (4, 20), (5, 21), (6, 22), (7, 23), (8, 24), (9, 25), (10, 26)],
        [(0, 8), (1, 9), (2, 10), (3, 11), (4, 12), (5, 13), (6, 14), (7, 15), (16, 24), (17, 25), (18, 26)],
        [(0, 4), (1, 5), (2, 6), (3, 7), (8, 16), (9, 17), (10, 18), (11, 19), (12, 20), (13, 21), (14, 22), (15, 23)],
        [(0, 2), (1, 3), (8, 12), (9, 13), (10, 14), (11, 15), (16, 20), (17, 21), (18, 22), (19, 23)],
        [(0, 1), (4, 16), (5, 17), (6, 18), (7, 19), (12, 24), (13, 25), (14, 26)],
        [(4, 8), (5, 9), (6, 10), (7, 11), (12, 16), (13, 17), (14, 18), (15, 19), (20, 24), (21, 25), (22, 26)],
        [(4, 6), (5, 7), (8, 10), (9, 11), (12, 14), (13, 15), (16, 18), (17, 19), (20, 22), (21, 23), (24, 26)],
        [(2, 16), (3, 17), (6, 20), (7, 21), (10, 24), (11, 25)],
        [(2, 8), (3, 9), (6, 12), (7, 13), (10, 16), (11, 17), (14, 20), (15, 21), (18, 24), (19, 25)],
        [(2, 4), (3, 5), (6, 8), (7, 9), (10, 12), (11, 13), (14, 16), (15, 17), (18, 20), (19, 21), (22, 24), (23, 25)],
        [(2, 3), (4, 5), (6, 7), (8, 9), (10, 11), (12, 13), (14, 15), (16, 17), (18, 19), (20, 21), (22, 23), (24, 25)],
        [(1, 16), (3, 18), (5, 20), (7, 22), (9, 24), (11, 26)],
        [(1, 8), (3, 10), (5, 12), (7, 14), (9, 16), (11, 18), (13, 20), (15, 22), (17, 24), (19, 26)],
        [(1, 4), (3, 6), (5, 8), (7, 10), (9, 12), (11, 14), (13, 16), (15, 18), (17, 20), (19, 22), (21, 24), (23, 26)],
        [(1, 2), (3, 4), (5, 6), (7, 8), (9, 10), (11, 12), (13, 14), (15, 16), (17, 18), (19, 20), (21, 22), (23, 24), (25, 26)],
    );
}

/// Twenty-five elements as five sorted runs of five, merged by insertion.
///
/// Fewer comparators than [`sort25`], but the finishing pass branches on data.
#[inline]
pub fn sort25_hybrid<T: PartialOrd + Copy>(v: &mut [T; 25]) {
    let (blocks, _) = v.as_chunks_mut::<5>();
    for block in blocks {
        sort5(block);
    }
    insertion_sort(v);
}

/// Twenty-seven elements built hierarchically: nine runs of three, then three
/// runs of nine, then an insertion pass over the three presorted runs.
#[inline]
pub fn sort27_hybrid<T: PartialOrd + Copy>(v: &mut [T; 27]) {
    let (triples, _) = v.as_chunks_mut::<3>();
    for triple in triples {
        sort3(triple);
    }
    let (nines, _) = v.as_chunks_mut::<9>();
    for nine in nines {
        sort9(nine);
    }
    insertion_sort(v);
}

/// 124 = 5 x 24 + 4. The blocks are sorted by network, so the finishing
/// insertion pass only moves elements across block boundaries.
pub fn sort124<T: PartialOrd + Copy>(v: &mut [T; 124]) {
    let (blocks, tail) = v.as_chunks_mut::<24>();
    for block in blocks {
        sort24(block);
    }
    if let Ok(tail) = <&mut [T; 4]>::try_from(tail) {
        sort4(tail);
    }
    insertion_sort(v);
}

/// 125 = 5 x 25, i.e. a full 5x5x5 neighborhood.
pub fn sort125<T: PartialOrd + Copy>(v: &mut [T; 125]) {
    let (blocks, _) = v.as_chunks_mut::<25>();
    for block in blocks {
        sort25(block);
    }
    insertion_sort(v);
}
