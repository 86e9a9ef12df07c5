//! Borrowed 2D views with arbitrary element strides.
//!
//! Strides count elements, not bytes. A cell `(x, y)` lives at
//! `y * row_stride + x * col_stride` in the backing slice, so row-major,
//! column-major and sub-rectangle views all share one representation.

use crate::error::{FilterError, FilterResult};

/// Shape and strides of a 2D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    width: usize,
    height: usize,
    row_stride: usize,
    col_stride: usize,
}

impl Layout {
    /// Row-major layout with no padding.
    pub fn contiguous(width: usize, height: usize) -> Self {
        Self::strided(width, height, width, 1)
    }

    /// Arbitrary strides.
    ///
    /// A stride along a dimension of extent 1 never contributes to an index,
    /// so it is replaced by the span of the other dimension. That keeps
    /// `rows_disjoint` and `transposed` meaningful for single-row and
    /// single-column grids.
    pub fn strided(width: usize, height: usize, row_stride: usize, col_stride: usize) -> Self {
        let row_span = width
            .saturating_sub(1)
            .saturating_mul(col_stride)
            .saturating_add(1);
        let col_span = height
            .saturating_sub(1)
            .saturating_mul(row_stride)
            .saturating_add(1);
        Self {
            width,
            height,
            row_stride: if height <= 1 { row_span } else { row_stride },
            col_stride: if width <= 1 { col_span } else { col_stride },
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
    pub fn row_stride(&self) -> usize {
        self.row_stride
    }

    #[inline]
    pub fn col_stride(&self) -> usize {
        self.col_stride
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// `(width, height)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.row_stride + x * self.col_stride
    }

    /// Smallest slice length that holds every cell, `None` on overflow.
    pub fn required_len(&self) -> Option<usize> {
        if self.is_empty() {
            return Some(0);
        }
        (self.height - 1)
            .checked_mul(self.row_stride)?
            .checked_add((self.width - 1).checked_mul(self.col_stride)?)?
            .checked_add(1)
    }

    /// Swap the roles of x and y.
    pub fn transposed(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
            row_stride: self.col_stride,
            col_stride: self.row_stride,
        }
    }

    /// Cells within a row are distinct and each row occupies its own
    /// `row_stride`-long range of the slice.
    pub fn rows_disjoint(&self) -> bool {
        let row_span = self
            .width
            .saturating_sub(1)
            .saturating_mul(self.col_stride)
            .saturating_add(1);
        (self.width <= 1 || self.col_stride >= 1) && (self.height <= 1 || self.row_stride >= row_span)
    }

    /// Same as [`Self::rows_disjoint`] for columns.
    pub fn cols_disjoint(&self) -> bool {
        self.transposed().rows_disjoint()
    }

    fn check_len(&self, len: usize) -> FilterResult<()> {
        match self.required_len() {
            Some(required) if required <= len => Ok(()),
            required => Err(FilterError::OutOfBounds {
                shape: vec![self.width, self.height],
                strides: vec![self.row_stride, self.col_stride],
                required: required.unwrap_or(usize::MAX),
                len,
            }),
        }
    }
}

/// Read-only grid view. Any strides are accepted, including zero.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a, T> {
    data: &'a [T],
    layout: Layout,
}

impl<'a, T: Copy> GridView<'a, T> {
    /// Row-major view over `width * height` elements.
    pub fn new(data: &'a [T], width: usize, height: usize) -> FilterResult<Self> {
        Self::from_layout(data, Layout::contiguous(width, height))
    }

    pub fn with_strides(
        data: &'a [T],
        width: usize,
        height: usize,
        row_stride: usize,
        col_stride: usize,
    ) -> FilterResult<Self> {
        Self::from_layout(data, Layout::strided(width, height, row_stride, col_stride))
    }

    pub fn from_layout(data: &'a [T], layout: Layout) -> FilterResult<Self> {
        layout.check_len(data.len())?;
        Ok(Self { data, layout })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.layout.index(x, y)]
    }

    #[inline]
    pub fn layout(&self) -> Layout {
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

    pub fn transposed(&self) -> Self {
        Self {
            data: self.data,
            layout: self.layout.transposed(),
        }
    }
}

/// Writable grid view. Every cell must map to a distinct element, which is
/// guaranteed by requiring either rows or columns to be disjoint.
#[derive(Debug)]
pub struct GridViewMut<'a, T> {
    data: &'a mut [T],
    layout: Layout,
}

impl<'a, T: Copy> GridViewMut<'a, T> {
    /// Row-major view over `width * height` elements.
    pub fn new(data: &'a mut [T], width: usize, height: usize) -> FilterResult<Self> {
        Self::from_layout(data, Layout::contiguous(width, height))
    }

    pub fn with_strides(
        data: &'a mut [T],
        width: usize,
        height: usize,
        row_stride: usize,
        col_stride: usize,
    ) -> FilterResult<Self> {
        Self::from_layout(data, Layout::strided(width, height, row_stride, col_stride))
    }

    pub fn from_layout(data: &'a mut [T], layout: Layout) -> FilterResult<Self> {
        layout.check_len(data.len())?;
        if !layout.is_empty() && !layout.rows_disjoint() && !layout.cols_disjoint() {
            return Err(FilterError::AliasedOutput {
                strides: vec![layout.row_stride, layout.col_stride],
            });
        }
        Ok(Self { data, layout })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[self.layout.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: T) {
        self.data[self.layout.index(x, y)] = value;
    }

    #[inline]
    pub fn layout(&self) -> Layout {
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

    /// Reborrow with x and y swapped.
    pub fn transposed(&mut self) -> GridViewMut<'_, T> {
        GridViewMut {
            data: &mut *self.data,
            layout: self.layout.transposed(),
        }
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [T] {
        &mut *self.data
    }
}
