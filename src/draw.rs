use log::debug;
use ndarray::{s, Array, ArrayBase, Data, Dimension, Ix2, Ix3};
use num::Zero;
use serde::de::DeserializeOwned;
use serde_derive::{Deserialize, Serialize};

use crate::error::ImgError;
use crate::region::{image_dim, Region};

/// Line thickness and color of a rectangle outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutlineStyle<A> {
    /// Width in pixels of the line, painted outside the region.
    pub thickness: usize,
    /// Red, green and blue values. Ignored on single channel images, which
    /// are always painted black.
    pub color: [A; 3],
}

impl<A> OutlineStyle<A> {
    pub fn new(thickness: usize, color: [A; 3]) -> Self {
        Self { thickness, color }
    }

    pub fn thickness(&'_ mut self, value: usize) -> &'_ mut OutlineStyle<A> {
        self.thickness = value;
        self
    }

    pub fn color(&'_ mut self, value: [A; 3]) -> &'_ mut OutlineStyle<A> {
        self.color = value;
        self
    }
}

impl<A: DeserializeOwned> OutlineStyle<A> {
    /// Reads a style from a JSON object like `{"thickness": 10, "color": [255, 49, 99]}`.
    pub fn from_json(json: &str) -> Result<Self, ImgError> {
        serde_json::from_str(json)
            .map_err(|err| ImgError::invalid_parameter(format!("invalid outline style: {}", err)))
    }
}

impl<A: Zero + Copy> Default for OutlineStyle<A> {
    fn default() -> Self {
        Self {
            thickness: 1,
            color: [A::zero(); 3],
        }
    }
}

/// Returns a copy of `image` with a rectangle painted around `region`.
///
/// The region is the inside of the rectangle; the line of `style.thickness`
/// pixels surrounds it. Corners are filled.
///
/// # Arguments
///
/// * `image` - Array of shape (height, width) or (height, width, 3).
/// * `region` - The area enclosed by the rectangle, see [`Region::bounds`].
/// * `style` - Thickness and color of the line.
///
/// # Errors
///
/// `OutOfBounds` if the line would leave the image. `InvalidShape` for
/// images that are neither single channel nor 3 channels.
pub fn draw_rectangle_outline<A, S, D>(
    image: &ArrayBase<S, D>,
    region: &Region,
    style: &OutlineStyle<A>,
) -> Result<Array<A, D>, ImgError>
where
    A: Zero + Copy,
    S: Data<Elem = A>,
    D: Dimension,
{
    let (height, width) = image_dim(image)?;
    match image.shape() {
        [_, _] | [_, _, 3] => (),
        shape => {
            return Err(ImgError::invalid_shape(format!(
                "expected a (height, width) or (height, width, 3) image, got shape {:?}",
                shape
            )))
        }
    }

    let thick = style.thickness;
    let out_of_bounds = || {
        ImgError::out_of_bounds(format!(
            "{:?} with thickness {} does not fit in a {}x{} image",
            region, thick, height, width
        ))
    };
    let inner = region.bounds().ok_or_else(out_of_bounds)?;
    let top = inner.y_start.checked_sub(thick).ok_or_else(out_of_bounds)?;
    let left = inner.x_start.checked_sub(thick).ok_or_else(out_of_bounds)?;
    let bottom = inner.y_end.checked_add(thick).ok_or_else(out_of_bounds)?;
    let right = inner.x_end.checked_add(thick).ok_or_else(out_of_bounds)?;
    if bottom > height || right > width {
        return Err(out_of_bounds());
    }
    debug!(
        "outline {:?} thickness {} on {}x{}",
        inner, thick, height, width
    );

    let bands = [
        (top..inner.y_start, left..right),
        (inner.y_end..bottom, left..right),
        (top..bottom, left..inner.x_start),
        (top..bottom, inner.x_end..right),
    ];

    let mut canvas = image.to_owned();
    if canvas.ndim() == 2 {
        let mut gray = canvas.view_mut().into_dimensionality::<Ix2>()?;
        for (rows, cols) in bands {
            gray.slice_mut(s![rows, cols]).fill(A::zero());
        }
    } else {
        let mut rgb = canvas.view_mut().into_dimensionality::<Ix3>()?;
        for (rows, cols) in bands {
            for (channel, value) in style.color.iter().enumerate() {
                rgb.slice_mut(s![rows.clone(), cols.clone(), channel])
                    .fill(*value);
            }
        }
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use ndarray::{s, Array1, Array2, Array3, Axis};
    use rstest::rstest;

    use super::{draw_rectangle_outline, OutlineStyle};
    use crate::error::ImgError;
    use crate::region::Region;
    use crate::unit_test::{sample_luma, sample_rgb};

    /// Marks pixels in the outer rectangle but not in the inner one.
    fn outline_mask(
        dim: (usize, usize),
        inner: (usize, usize, usize, usize),
        thick: usize,
    ) -> Array2<bool> {
        let (y_start, y_end, x_start, x_end) = inner;
        Array2::from_shape_fn(dim, |(y, x)| {
            let in_outer = y + thick >= y_start
                && y < y_end + thick
                && x + thick >= x_start
                && x < x_end + thick;
            let in_inner = y >= y_start && y < y_end && x >= x_start && x < x_end;
            in_outer && !in_inner
        })
    }

    #[test]
    fn gray_outline_is_black() {
        let image = Array2::from_elem((20, 20), 200u8);
        let style = OutlineStyle::new(2, [255, 49, 99]);
        let drawn = draw_rectangle_outline(&image, &Region::new(10, 10, 6, 4), &style).unwrap();

        let mask = outline_mask((20, 20), (8, 12, 7, 13), 2);
        assert_eq!(mask.iter().filter(|m| **m).count(), 8 * 10 - 4 * 6);
        for ((pixel, original), painted) in drawn.iter().zip(image.iter()).zip(mask.iter()) {
            let expected = if *painted { 0 } else { *original };
            assert_eq!(*pixel, expected);
        }
    }

    #[rstest]
    fn rgb_outline_uses_color(sample_rgb: Array3<u8>) {
        let region = Region::new(30, 20, 9, 7);
        let mut style = OutlineStyle::<u8>::default();
        style.thickness(3).color([255, 49, 99]);

        let drawn = draw_rectangle_outline(&sample_rgb, &region, &style).unwrap();
        let mask = outline_mask((48, 64), (17, 23, 26, 34), 3);

        for ((y, x), painted) in mask.indexed_iter() {
            let pixel = drawn.slice(s![y, x, ..]);
            if *painted {
                assert_eq!(pixel.to_vec(), vec![255, 49, 99]);
            } else {
                assert_eq!(pixel, sample_rgb.slice(s![y, x, ..]));
            }
        }
    }

    #[rstest]
    fn zero_thickness_is_identity(sample_luma: Array2<u8>) {
        let style = OutlineStyle::new(0, [0, 0, 0]);
        let drawn = draw_rectangle_outline(&sample_luma, &Region::new(10, 10, 8, 8), &style).unwrap();
        assert_eq!(drawn, sample_luma);
    }

    #[rstest]
    fn input_is_untouched(sample_rgb: Array3<u8>) {
        let before = sample_rgb.clone();
        let style = OutlineStyle::new(2, [255, 255, 255]);
        let drawn = draw_rectangle_outline(&sample_rgb.view(), &Region::new(20, 20, 10, 10), &style)
            .unwrap();
        assert_eq!(before, sample_rgb);
        assert_ne!(drawn, sample_rgb);
    }

    #[test]
    fn float_images() {
        let image = Array3::<f32>::ones((6, 6, 3));
        let style = OutlineStyle::new(1, [0.5, 0.25, 0.0]);
        let drawn = draw_rectangle_outline(&image, &Region::new(3, 3, 2, 2), &style).unwrap();

        assert_eq!(drawn.slice(s![1, 1, ..]).to_vec(), vec![0.5, 0.25, 0.0]);
        assert_eq!(drawn.slice(s![2, 2, ..]).to_vec(), vec![1.0, 1.0, 1.0]);
        assert_eq!(drawn.slice(s![0, 0, ..]).to_vec(), vec![1.0, 1.0, 1.0]);
        let painted = drawn
            .index_axis(Axis(2), 1)
            .iter()
            .filter(|v| **v == 0.25)
            .count();
        assert_eq!(painted, 4 * 4 - 2 * 2);
    }

    #[rstest]
    fn line_outside_image_fails(sample_luma: Array2<u8>) {
        let (height, width) = sample_luma.dim();
        let style = OutlineStyle::new(3, [0, 0, 0]);

        // Region itself fits but the line crosses the top edge.
        assert!(matches!(
            draw_rectangle_outline(&sample_luma, &Region::new(10, 3, 4, 4), &style),
            Err(ImgError::OutOfBounds(_))
        ));
        assert!(matches!(
            draw_rectangle_outline(&sample_luma, &Region::new(width - 4, 10, 4, 4), &style),
            Err(ImgError::OutOfBounds(_))
        ));
        assert!(matches!(
            draw_rectangle_outline(&sample_luma, &Region::new(10, height, 4, 4), &style),
            Err(ImgError::OutOfBounds(_))
        ));
    }

    #[test]
    fn line_past_usize_max_fails() {
        let image = Array2::<u8>::zeros((8, 8));
        let style = OutlineStyle::new(5, [0, 0, 0]);
        let far = Region::new(usize::MAX - 3, usize::MAX - 3, 2, 2);
        assert!(matches!(
            draw_rectangle_outline(&image, &far, &style),
            Err(ImgError::OutOfBounds(_))
        ));
        assert!(matches!(
            draw_rectangle_outline(&image, &Region::new(usize::MAX, 4, 4, 2), &style),
            Err(ImgError::OutOfBounds(_))
        ));
    }

    #[test]
    fn unsupported_shapes() {
        let style = OutlineStyle::new(1, [0u8, 0, 0]);
        let rgba = Array3::<u8>::zeros((8, 8, 4));
        assert!(matches!(
            draw_rectangle_outline(&rgba, &Region::new(4, 4, 2, 2), &style),
            Err(ImgError::InvalidShape(_))
        ));

        let signal = Array1::<u8>::zeros(8);
        assert!(matches!(
            draw_rectangle_outline(&signal, &Region::new(4, 4, 2, 2), &style),
            Err(ImgError::InvalidShape(_))
        ));
    }

    #[test]
    fn style_from_json() {
        let style = OutlineStyle::<u8>::from_json(r#"{"thickness": 10, "color": [255, 49, 99]}"#)
            .unwrap();
        assert_eq!(style, OutlineStyle::new(10, [255, 49, 99]));

        assert!(matches!(
            OutlineStyle::<u8>::from_json(r#"{"thickness": 10, "color": [300, 0, 0]}"#),
            Err(ImgError::InvalidParameter(_))
        ));
    }
}
