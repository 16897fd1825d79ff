use log::debug;
use ndarray::{s, Array1, ArrayBase, Data, Ix1, RawData};
use num::traits::AsPrimitive;
use serde_derive::{Deserialize, Serialize};

use crate::error::ImgError;

/// Returns how many samples per second a recording of `duration_seconds`
/// holds.
pub fn samples_per_second<S>(signal: &ArrayBase<S, Ix1>, duration_seconds: f64) -> Result<f64, ImgError>
where
    S: RawData,
{
    if duration_seconds == 0.0 {
        return Err(ImgError::division_by_zero("recording duration is 0 seconds"));
    }
    Ok(signal.len() as f64 / duration_seconds)
}

/// A window of a signal together with its time axis, ready to be handed
/// to a plotting backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalSegment {
    /// Time in seconds of each sample, evenly spaced from start to end.
    pub time: Array1<f64>,
    pub values: Array1<f64>,
}

impl SignalSegment {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Cuts the samples between `start_second` and `end_second`.
///
/// # Arguments
///
/// * `signal` - The regularly sampled recording.
/// * `samples_per_second` - Sampling rate, see [`samples_per_second`].
/// * `start_second` - Start of the window. Its sample index is truncated.
/// * `end_second` - End of the window (exclusive index, truncated).
///
/// # Returns
///
/// The segment. Indices past the end of the signal are clamped, so the
/// segment may be shorter than requested or empty.
pub fn signal_segment<A, S>(
    signal: &ArrayBase<S, Ix1>,
    samples_per_second: f64,
    start_second: f64,
    end_second: f64,
) -> Result<SignalSegment, ImgError>
where
    A: AsPrimitive<f64>,
    S: Data<Elem = A>,
{
    if !(samples_per_second.is_finite() && samples_per_second > 0.0) {
        return Err(ImgError::invalid_parameter(format!(
            "samples per second must be positive, got {}",
            samples_per_second
        )));
    }
    for second in [start_second, end_second] {
        if !(second.is_finite() && second >= 0.0) {
            return Err(ImgError::invalid_parameter(format!(
                "window bounds must be non-negative seconds, got {}",
                second
            )));
        }
    }

    let end_index = ((end_second * samples_per_second) as usize).min(signal.len());
    let start_index = ((start_second * samples_per_second) as usize).min(end_index);
    debug!(
        "signal window [{}, {}) out of {} samples",
        start_index,
        end_index,
        signal.len()
    );

    let values = signal
        .slice(s![start_index..end_index])
        .mapv(|v| -> f64 { v.as_() });
    let time = Array1::linspace(start_second, end_second, values.len());

    Ok(SignalSegment { time, values })
}
