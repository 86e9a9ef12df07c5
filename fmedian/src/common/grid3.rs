//! Borrowed 3D views with arbitrary element strides.
//!
//! A cell `(x, y, z)` lives at
//! `z * plane_stride + y * row_stride + x * col_stride` in the backing slice.

use crate::error::{FilterError, FilterResult};

/// Shape and strides of a 3D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout3 {
    width: usize,
    height: usize,
    depth: usize,
    plane_stride: usize,
    row_stride: usize,
    col_stride: usize,
}

impl Layout3 {
    /// Planes of row-major rows with no padding.
    pub fn contiguous(width: usize, height: usize, depth: usize) -> Self {
        Self::strided(width, height, depth, width * height, width, 1)
    }

    /// Arbitrary strides, outermost first.
    pub fn strided(
        width: usize,
        height: usize,
        depth: usize,
        plane_stride: usize,
        row_stride: usize,
        col_stride: usize,
    ) -> Self {
        Self {
            width,
            height,
            depth,
            plane_stride,
            row_stride,
            col_stride,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `(plane_stride, row_stride, col_stride)`.
    #[inline]
    pub fn strides(&self) -> (usize, usize, usize) {
        (self.plane_stride, self.row_stride, self.col_stride)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.depth == 0
    }

    /// `(width, height, depth)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < self.width && y < self.height && z < self.depth);
        z * self.plane_stride + y * self.row_stride + x * self.col_stride
    }

    /// Smallest slice length that holds every cell, `None` on overflow.
    pub fn required_len(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        (self.depth - 1)
            .checked_mul(self.plane_stride)?
            .checked_add((self.height - 1).checked_mul(self.row_stride)?)?
            .checked_add((self.width - 1).checked_mul(self.col_stride)?)?
            .checked_add(1)
    }

    /// Every cell maps to its own element.
    ///
    /// Dimensions are ordered by stride, and each stride must clear the span
    /// of all smaller dimensions. Exotic interleavings that happen to be
    /// one-to-one are rejected too.
    pub fn cells_distinct(&self) -> bool {
        let mut dims = [
            (self.width, self.col_stride),
            (self.height, self.row_stride),
            (self.depth, self.plane_stride),
        ];
        dims.sort_unstable_by_key(|&(_, stride)| stride);

        let mut span = 1usize;
        for (extent, stride) in dims {
            if extent <= 1 {
                continue;
            }
            if stride < span {
                return false;
            }
            span = stride.saturating_mul(extent - 1).saturating_add(span);
        }
        true
    }

    fn check_len(&self, len: usize) -> FilterResult<()> {
        match self.required_len() {
            Some(required) if required <= len => Ok(()),
            required => Err(FilterError::OutOfBounds {
                shape: vec![self.width, self.height, self.depth],
                strides: vec![self.plane_stride, self.row_stride, self.col_stride],
                required: required.unwrap_or(usize::MAX),
                len,
            }),
        }
    }
}

/// Read-only volume view. Any strides are accepted, including zero.
#[derive(Debug, Clone, Copy)]
pub struct GridView3<'a, T> {
    data: &'a [T],
    layout: Layout3,
}

impl<'a, T: Copy> GridView3<'a, T> {
    pub fn new(data: &'a [T], width: usize, height: usize, depth: usize) -> FilterResult<Self> {
        Self::from_layout(data, Layout3::contiguous(width, height, depth))
    }

    pub fn from_layout(data: &'a [T], layout: Layout3) -> FilterResult<Self> {
        layout.check_len(data.len())?;
        Ok(Self { data, layout })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> T {
        self.data[self.layout.index(x, y, z)]
    }

    #[inline]
    pub fn layout(&self) -> Layout3 {
        self.layout
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.layout.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.layout.height
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.layout.depth
    }
}

/// Writable volume view; every cell must map to a distinct element.
#[derive(Debug)]
pub struct GridViewMut3<'a, T> {
    data: &'a mut [T],
    layout: Layout3,
}

impl<'a, T: Copy> GridViewMut3<'a, T> {
    pub fn new(data: &'a mut [T], width: usize, height: usize, depth: usize) -> FilterResult<Self> {
        Self::from_layout(data, Layout3::contiguous(width, height, depth))
    }

    pub fn from_layout(data: &'a mut [T], layout: Layout3) -> FilterResult<Self> {
        layout.check_len(data.len())?;
        if !layout.is_empty() && !layout.cells_distinct() {
            return Err(FilterError::AliasedOutput {
                strides: vec![layout.plane_stride, layout.row_stride, layout.col_stride],
            });
        }
        Ok(Self { data, layout })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize, z: usize) -> T {
        self.data[self.layout.index(x, y, z)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, z: usize, value: T) {
        self.data[self.layout.index(x, y, z)] = value;
    }

    #[inline]
    pub fn layout(&self) -> Layout3 {
        self.layout
    }
}
