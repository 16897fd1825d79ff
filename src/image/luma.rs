use image::GrayImage;
use itertools::iproduct;
use log::debug;
use ndarray::{Array1, Array2, ArrayBase, ArrayView3, Data, Dimension, Ix3};
use num::traits::AsPrimitive;

use crate::error::ImgError;

/// Luminosity method weights for red, green and blue. They sum to one so the
/// output keeps the input's brightness range.
pub const LUMA_WEIGHTS: [f64; 3] = [0.30, 0.59, 0.11];

/// Luminosity of a single pixel.
pub fn rgb_to_luma(r: f64, g: f64, b: f64) -> f64 {
    r * LUMA_WEIGHTS[0] + g * LUMA_WEIGHTS[1] + b * LUMA_WEIGHTS[2]
}

/// Views `image` as (height, width, 3) or fails with `InvalidShape`.
fn rgb_view<A, S, D>(image: &ArrayBase<S, D>) -> Result<ArrayView3<'_, A>, ImgError>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    let shape_error = || {
        ImgError::invalid_shape(format!(
            "expected a (height, width, 3) image, got shape {:?}",
            image.shape()
        ))
    };

    let view = image
        .view()
        .into_dimensionality::<Ix3>()
        .map_err(|_| shape_error())?;
    if view.dim().2 != 3 {
        return Err(shape_error());
    }
    Ok(view)
}

/// Converts an RGB image into luminosity, visiting each pixel coordinate.
///
/// # Arguments
///
/// * `image` - Array of shape (height, width, 3), channels ordered R, G, B.
///   Integer samples are promoted to `f64` before weighting.
///
/// # Returns
///
/// Array of shape (height, width) or `InvalidShape` if the last axis is not
/// 3 channels wide.
pub fn grayscale_elementwise<A, S, D>(image: &ArrayBase<S, D>) -> Result<Array2<f64>, ImgError>
where
    A: AsPrimitive<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let image = rgb_view(image)?;
    let (height, width, _) = image.dim();
    debug!("grayscale_elementwise on {}x{}", height, width);

    let mut luma = Array2::<f64>::zeros((height, width));
    for (y, x) in iproduct!(0..height, 0..width) {
        luma[(y, x)] = rgb_to_luma(
            image[(y, x, 0)].as_(),
            image[(y, x, 1)].as_(),
            image[(y, x, 2)].as_(),
        );
    }

    Ok(luma)
}

/// Converts an RGB image into luminosity using a single matrix-vector
/// product of the (height * width, 3) pixel matrix with `LUMA_WEIGHTS`.
///
/// Same contract as [`grayscale_elementwise`].
pub fn grayscale_bulk<A, S, D>(image: &ArrayBase<S, D>) -> Result<Array2<f64>, ImgError>
where
    A: AsPrimitive<f64>,
    S: Data<Elem = A>,
    D: Dimension,
{
    let image = rgb_view(image)?;
    let (height, width, _) = image.dim();
    debug!("grayscale_bulk on {}x{}", height, width);

    // `iter` walks in logical order, so permuted or sliced views flatten correctly.
    let pixels = Array2::from_shape_vec(
        (height * width, 3),
        image.iter().map(|&v| v.as_()).collect::<Vec<f64>>(),
    )?;
    let weights = Array1::from(LUMA_WEIGHTS.to_vec());

    Ok(pixels.dot(&weights).into_shape((height, width))?)
}

/// Trait to convert a luminosity array into an image::GrayImage
pub trait IntoLumaImage {
    fn to_luma_image(&self) -> Result<GrayImage, ImgError>;
}

impl IntoLumaImage for Array2<f64> {
    /// Values are rounded and clamped into [0, 255].
    fn to_luma_image(&self) -> Result<GrayImage, ImgError> {
        let (height, width) = self.dim();
        let raw = self
            .iter()
            .map(|v| num::clamp(v.round(), 0.0, 255.0) as u8)
            .collect();

        GrayImage::from_vec(width as u32, height as u32, raw)
            .ok_or_else(|| ImgError::invalid_shape("luma buffer does not fit the image size"))
    }
}

impl IntoLumaImage for Array2<u8> {
    fn to_luma_image(&self) -> Result<GrayImage, ImgError> {
        let (height, width) = self.dim();

        GrayImage::from_vec(width as u32, height as u32, self.iter().copied().collect())
            .ok_or_else(|| ImgError::invalid_shape("luma buffer does not fit the image size"))
    }
}
