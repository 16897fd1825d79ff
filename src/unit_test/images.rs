use image::{GrayImage, Luma, Rgb, RgbImage};
use ndarray::{Array2, Array3};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use nshare::ToNdarray2;
use rand::{rngs::StdRng, SeedableRng};
use rstest::fixture;

use crate::image::IntoArray3;

#[fixture]
pub fn sample_rgb() -> Array3<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    Array3::random_using((48, 64, 3), Uniform::new_inclusive(0u8, 255u8), &mut rng)
}

#[fixture]
pub fn sample_rgb_f64() -> Array3<f64> {
    let mut rng = StdRng::seed_from_u64(7);
    Array3::random_using((33, 21, 3), Uniform::new(0.0, 1.0), &mut rng)
}

#[fixture]
pub fn gradient_rgb() -> Array3<u8> {
    RgbImage::from_fn(32, 24, |x, y| {
        Rgb([(x * 8) as u8, (y * 10) as u8, ((x + y) * 4) as u8])
    })
    .into_array3()
    .unwrap()
}

#[fixture]
pub fn sample_luma() -> Array2<u8> {
    GrayImage::from_fn(56, 40, |x, y| Luma([((x * 3 + y * 5) % 256) as u8])).into_ndarray2()
}
