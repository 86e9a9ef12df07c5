use std::ops::{Index, IndexMut};

use super::grid3::{GridView3, GridViewMut3, Layout3};

/// Owned volume of row-major planes, indexed by `(x, y, z)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Buffer3<T> {
    pixels: Vec<T>,
    width: usize,
    height: usize,
    depth: usize,
}

impl<T> Buffer3<T> {
    pub fn new(width: usize, height: usize, depth: usize, pixels: Vec<T>) -> Self {
        assert_eq!(
            pixels.len(),
            width * height * depth,
            "pixels length must equal width * height * depth"
        );
        Self {
            pixels,
            width,
            height,
            depth,
        }
    }

    /// Build a volume by evaluating `f(x, y, z)` with x varying fastest.
    pub fn from_fn(
        width: usize,
        height: usize,
        depth: usize,
        mut f: impl FnMut(usize, usize, usize) -> T,
    ) -> Self {
        let mut pixels = Vec::with_capacity(width * height * depth);
        for z in 0..depth {
            for y in 0..height {
                for x in 0..width {
                    pixels.push(f(x, y, z));
                }
            }
        }
        Self {
            pixels,
            width,
            height,
            depth,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// `(width, height, depth)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }

    #[inline]
    pub fn pixels(&self) -> &[T] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [T] {
        &mut self.pixels
    }

    #[inline]
    fn offset(&self, x: usize, y: usize, z: usize) -> usize {
        (z * self.height + y) * self.width + x
    }
}

impl<T: Copy> Buffer3<T> {
    pub fn view(&self) -> GridView3<'_, T> {
        let layout = Layout3::contiguous(self.width, self.height, self.depth);
        GridView3::from_layout(&self.pixels, layout)
            .unwrap_or_else(|e| unreachable!("buffer always matches its layout: {e}"))
    }

    pub fn view_mut(&mut self) -> GridViewMut3<'_, T> {
        let layout = Layout3::contiguous(self.width, self.height, self.depth);
        GridViewMut3::from_layout(&mut self.pixels, layout)
            .unwrap_or_else(|e| unreachable!("buffer always matches its layout: {e}"))
    }
}

impl<T: Clone> Buffer3<T> {
    pub fn new_filled(width: usize, height: usize, depth: usize, value: T) -> Self {
        Self {
            pixels: vec![value; width * height * depth],
            width,
            height,
            depth,
        }
    }
}

impl<T: Default + Clone> Buffer3<T> {
    pub fn new_default(width: usize, height: usize, depth: usize) -> Self {
        Self::new_filled(width, height, depth, T::default())
    }
}

impl<T> Index<(usize, usize, usize)> for Buffer3<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y, z): (usize, usize, usize)) -> &Self::Output {
        &self.pixels[self.offset(x, y, z)]
    }
}

impl<T> IndexMut<(usize, usize, usize)> for Buffer3<T> {
    #[inline]
    fn index_mut(&mut self, (x, y, z): (usize, usize, usize)) -> &mut Self::Output {
        let offset = self.offset(x, y, z);
        &mut self.pixels[offset]
    }
}
