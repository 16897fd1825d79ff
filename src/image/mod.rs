mod rgb;
pub use rgb::{IntoArray3, IntoImageRgb8};

mod luma;
pub use luma::{grayscale_bulk, grayscale_elementwise, rgb_to_luma, IntoLumaImage, LUMA_WEIGHTS};
