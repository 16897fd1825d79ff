pub mod draw;
pub mod error;
pub mod region;
pub mod sampling;
pub mod signal;

#[cfg(test)]
mod unit_test;

pub mod image;
pub use crate::draw::{draw_rectangle_outline, OutlineStyle};
pub use crate::error::ImgError;
pub use crate::image::{grayscale_bulk, grayscale_elementwise};
pub use crate::region::{crop_region, Region};
pub use crate::sampling::{compression_ratio, downsample};
pub use crate::signal::{samples_per_second, signal_segment, SignalSegment};
