mod images;
pub(crate) use images::{gradient_rgb, sample_luma, sample_rgb, sample_rgb_f64};
mod signals;
pub(crate) use signals::sample_signal;
