use ndarray::Array1;
use rstest::fixture;

/// Five minutes of a 1.2 Hz beat sampled at 360 Hz.
#[fixture]
pub fn sample_signal() -> Array1<f64> {
    Array1::from_shape_fn(108_000, |i| {
        let t = i as f64 / 360.0;
        (2.0 * std::f64::consts::PI * 1.2 * t).sin()
    })
}
