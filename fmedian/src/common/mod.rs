//! Grid containers shared by the filters.

mod buffer2;
mod buffer3;
mod grid;
mod grid3;
pub mod parallel;
mod sample;

pub use buffer2::Buffer2;
pub use buffer3::Buffer3;
pub use grid::{GridView, GridViewMut, Layout};
pub use grid3::{GridView3, GridViewMut3, Layout3};
pub use sample::Sample;
