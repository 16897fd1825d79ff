use image::{flat::SampleLayout, RgbImage};
use ndarray::{Array3, ShapeBuilder};

use crate::error::ImgError;

/// Trait to convert into ndarray::Array3, this is different than nshare version
/// because it uses the shape [height, width, channels] instead of [channels, height, width].
pub trait IntoArray3 {
    fn into_array3(self) -> Result<Array3<u8>, ImgError>;
}

impl IntoArray3 for RgbImage {
    fn into_array3(self) -> Result<Array3<u8>, ImgError> {
        let SampleLayout {
            channels,
            channel_stride,
            height,
            height_stride,
            width,
            width_stride,
        } = self.sample_layout();
        let shape = (height as usize, width as usize, channels as usize);
        let strides = (height_stride, width_stride, channel_stride);
        Ok(Array3::from_shape_vec(
            shape.strides(strides),
            self.into_raw(),
        )?)
    }
}

/// Trait to convert objects into image::RgbImage
pub trait IntoImageRgb8 {
    fn into_image_rgb8(self) -> Result<RgbImage, ImgError>;
}

impl IntoImageRgb8 for Array3<u8> {
    fn into_image_rgb8(self) -> Result<RgbImage, ImgError> {
        let (height, width, channels) = self.dim();
        if channels != 3 {
            return Err(ImgError::invalid_shape(format!(
                "Array3 must have 3 channels, got {}",
                channels
            )));
        }
        // The owned buffer of a sliced array can hold elements outside the view.
        let raw: Vec<u8> = self.iter().copied().collect();
        RgbImage::from_raw(width as u32, height as u32, raw)
            .ok_or_else(|| ImgError::invalid_shape("buffer does not fit the image size"))
    }
}
