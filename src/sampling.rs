use log::debug;
use ndarray::{ArrayBase, ArrayView, Axis, Data, Dimension, RawData, Slice};

use crate::error::ImgError;
use crate::region::image_dim;

/// Reduces an image by keeping one pixel out of every stride, starting at
/// the first row and column.
///
/// # Arguments
///
/// * `image` - Array with at least (height, width) axes. Trailing axes
///   (channels) are kept whole.
/// * `horizontal_stride` - Keep every `horizontal_stride`-th column. 1 keeps all.
/// * `vertical_stride` - Keep every `vertical_stride`-th row. 1 keeps all.
///
/// # Returns
///
/// A strided view of `image` with `ceil(height / vertical_stride)` rows and
/// `ceil(width / horizontal_stride)` columns.
pub fn downsample<'a, A, S, D>(
    image: &'a ArrayBase<S, D>,
    horizontal_stride: usize,
    vertical_stride: usize,
) -> Result<ArrayView<'a, A, D>, ImgError>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    let (height, width) = image_dim(image)?;
    if horizontal_stride == 0 || vertical_stride == 0 {
        return Err(ImgError::invalid_parameter(format!(
            "strides must be at least 1, got ({}, {})",
            horizontal_stride, vertical_stride
        )));
    }
    debug!(
        "downsample {}x{} by ({}, {})",
        height, width, horizontal_stride, vertical_stride
    );

    let mut view = image.view();
    view.slice_axis_inplace(Axis(0), Slice::new(0, None, vertical_stride as isize));
    view.slice_axis_inplace(Axis(1), Slice::new(0, None, horizontal_stride as isize));
    Ok(view)
}

/// Percentage of storage saved by `reduced` with respect to `original`,
/// counted in elements: 0 when both are the same size, 90 when `reduced`
/// holds a tenth of the elements.
pub fn compression_ratio<S1, D1, S2, D2>(
    original: &ArrayBase<S1, D1>,
    reduced: &ArrayBase<S2, D2>,
) -> Result<f64, ImgError>
where
    S1: RawData,
    D1: Dimension,
    S2: RawData,
    D2: Dimension,
{
    if original.is_empty() {
        return Err(ImgError::division_by_zero("original buffer has no elements"));
    }
    let ratio = (1.0 - reduced.len() as f64 / original.len() as f64) * 100.0;
    debug!(
        "compression {} -> {} elements: {:.3}%",
        original.len(),
        reduced.len(),
        ratio
    );
    Ok(ratio)
}
