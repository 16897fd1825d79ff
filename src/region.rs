use log::debug;
use ndarray::{ArrayBase, ArrayView, Axis, Data, Dimension, Slice};
use serde_derive::{Deserialize, Serialize};

use crate::error::ImgError;

/// A rectangle given by its center and total extent, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub center_x: usize,
    pub center_y: usize,
    pub width: usize,
    pub height: usize,
}

/// Half-open pixel bounds `[start, end)` of a [`Region`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x_start: usize,
    pub y_start: usize,
    pub x_end: usize,
    pub y_end: usize,
}

impl Region {
    pub fn new(center_x: usize, center_y: usize, width: usize, height: usize) -> Self {
        Self {
            center_x,
            center_y,
            width,
            height,
        }
    }

    /// Reads a region from a JSON object with the field names of this struct.
    pub fn from_json(json: &str) -> Result<Self, ImgError> {
        serde_json::from_str(json)
            .map_err(|err| ImgError::invalid_parameter(format!("invalid region: {}", err)))
    }

    /// Computes the bounds around the center using floor half extents.
    ///
    /// An odd width or height loses one pixel: width 5 spans
    /// `center_x - 2..center_x + 2`.
    ///
    /// # Returns
    ///
    /// `None` if the region starts left of or above the origin, or ends
    /// past `usize::MAX`.
    pub fn bounds(&self) -> Option<Bounds> {
        let (half_width, half_height) = (self.width / 2, self.height / 2);
        Some(Bounds {
            x_start: self.center_x.checked_sub(half_width)?,
            y_start: self.center_y.checked_sub(half_height)?,
            x_end: self.center_x.checked_add(half_width)?,
            y_end: self.center_y.checked_add(half_height)?,
        })
    }
}

impl Bounds {
    /// Extent (height, width) of the bounds.
    pub fn dim(&self) -> (usize, usize) {
        (self.y_end - self.y_start, self.x_end - self.x_start)
    }
}

/// Height and width of an image with at least two axes.
pub(crate) fn image_dim<S, D>(image: &ArrayBase<S, D>) -> Result<(usize, usize), ImgError>
where
    S: Data,
    D: Dimension,
{
    match image.shape() {
        [height, width, ..] => Ok((*height, *width)),
        shape => Err(ImgError::invalid_shape(format!(
            "expected an image with height and width axes, got shape {:?}",
            shape
        ))),
    }
}

/// Returns the view of `image` covered by `region`.
///
/// Remaining axes (channels) are kept whole.
///
/// # Errors
///
/// `OutOfBounds` if the region does not lie inside the image, `InvalidShape`
/// if `image` has less than two axes.
pub fn crop_region<'a, A, S, D>(
    image: &'a ArrayBase<S, D>,
    region: &Region,
) -> Result<ArrayView<'a, A, D>, ImgError>
where
    S: Data<Elem = A>,
    D: Dimension,
{
    let (height, width) = image_dim(image)?;
    let bounds = region.bounds().ok_or_else(|| {
        ImgError::out_of_bounds(format!("{:?} starts outside the image", region))
    })?;
    if bounds.x_end > width || bounds.y_end > height {
        return Err(ImgError::out_of_bounds(format!(
            "{:?} does not fit in a {}x{} image",
            bounds, height, width
        )));
    }
    debug!("crop {:?} from {}x{}", bounds, height, width);

    let mut view = image.view();
    view.slice_axis_inplace(Axis(0), Slice::from(bounds.y_start..bounds.y_end));
    view.slice_axis_inplace(Axis(1), Slice::from(bounds.x_start..bounds.x_end));
    Ok(view)
}
