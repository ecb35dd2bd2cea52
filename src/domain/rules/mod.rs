// Domain rules - Resolution of raw extraction options into validated values

use tracing::debug;

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::utils::time;

/// Fills options the caller left unset from the video's own metadata.
///
/// Runs strictly before [`RangeResolver`], which never sees an absent value.
pub struct ParameterDefaults;

impl ParameterDefaults {
    /// Requested start time, or the beginning of the video
    pub fn start_time_or(requested: Option<TimeSpec>) -> TimeSpec {
        requested.unwrap_or(TimeSpec::Seconds(0.0))
    }

    /// Requested stop time, or the end of the video
    pub fn stop_time_or(video_duration_seconds: f64, requested: Option<TimeSpec>) -> TimeSpec {
        requested.unwrap_or(TimeSpec::Seconds(video_duration_seconds))
    }

    /// Requested frame rate, or the one read from the video
    pub fn fps_or(video_fps: f64, requested: Option<f64>) -> f64 {
        requested.unwrap_or(video_fps)
    }
}

/// Turns start/stop inputs into a range expressed in seconds, timestamps and
/// frame indices.
pub struct RangeResolver;

impl RangeResolver {
    /// Resolve and validate an extraction range.
    ///
    /// A stop time of zero is the "to the end" sentinel and resolves to the
    /// video's duration. A stop reaching the duration takes its frame from
    /// `frame_count` directly rather than flooring the rounded duration. No
    /// frame index exceeds `frame_count`.
    pub fn resolve(
        duration_seconds: f64,
        frame_count: u64,
        start_time: Option<TimeSpec>,
        stop_time: Option<TimeSpec>,
        fps: Option<f64>,
    ) -> Result<ExtractionRange, DomainError> {
        let (start_time, stop_time, fps) = match (start_time, stop_time, fps) {
            (Some(start), Some(stop), Some(fps)) => (start, stop, fps),
            _ => {
                return Err(DomainError::Preparation(
                    "start time, stop time or fps reached the range resolver unset".to_string(),
                ))
            }
        };
        if !fps.is_finite() || fps <= 0.0 {
            return Err(DomainError::Validation(format!("fps must be positive, got {}", fps)));
        }

        let start_second = start_time.to_seconds()?;
        let requested_stop = stop_time.to_seconds()?;
        let to_end = requested_stop == 0.0;
        let stop_second = if to_end { duration_seconds } else { requested_stop };

        Self::validate(start_second, stop_second, duration_seconds)?;

        let start = RangePoint {
            second: start_second,
            timestamp: Self::echo_timestamp(start_time, start_second)?,
            frame: Self::frame_at(start_second, fps).min(frame_count),
        };
        let stop = RangePoint {
            second: stop_second,
            timestamp: if to_end {
                time::to_timestamp(stop_second)?
            } else {
                Self::echo_timestamp(stop_time, stop_second)?
            },
            frame: if stop_second >= duration_seconds {
                frame_count
            } else {
                Self::frame_at(stop_second, fps).min(frame_count)
            },
        };

        debug!(
            start_second = start.second,
            stop_second = stop.second,
            start_frame = start.frame,
            stop_frame = stop.frame,
            "Resolved extraction range"
        );

        Ok(ExtractionRange::new(start, stop))
    }

    fn validate(start: f64, stop: f64, duration: f64) -> Result<(), DomainError> {
        if !start.is_finite() || !stop.is_finite() {
            return Err(DomainError::Range(format!(
                "start ({}) and stop ({}) must be finite",
                start, stop
            )));
        }
        if start < 0.0 {
            return Err(DomainError::Range(format!("start ({}s) cannot be negative", start)));
        }
        if stop > duration {
            return Err(DomainError::Range(format!(
                "stop ({}s) exceeds the video duration ({}s)",
                stop, duration
            )));
        }
        if start >= stop {
            return Err(DomainError::Range(format!(
                "start ({}s) must be less than stop ({}s)",
                start, stop
            )));
        }
        Ok(())
    }

    /// Timestamps the user typed come back verbatim; numbers are formatted.
    fn echo_timestamp(requested: TimeSpec, seconds: f64) -> Result<String, DomainError> {
        match requested {
            TimeSpec::Timestamp(timestamp) => Ok(timestamp),
            TimeSpec::Seconds(_) => time::to_timestamp(seconds),
        }
    }

    fn frame_at(second: f64, fps: f64) -> u64 {
        (second * fps).floor() as u64
    }
}

/// Computes output dimensions from the video, an explicit override and a
/// resize factor.
pub struct DimensionResolver;

impl DimensionResolver {
    /// Scale the explicit dimensions (or the video's) by `resize_factor`,
    /// truncating to whole pixels.
    ///
    /// No minimum is clamped to; a factor that truncates either side to zero
    /// is a `Validation` error.
    pub fn resolve(
        video_dimensions: Dimensions,
        resize_factor: f64,
        explicit_dimensions: Option<Dimensions>,
    ) -> Result<Dimensions, DomainError> {
        let base = explicit_dimensions.unwrap_or(video_dimensions);

        if resize_factor == 1.0 {
            return Ok(base);
        }

        let width = (f64::from(base.width()) * resize_factor).floor() as u32;
        let height = (f64::from(base.height()) * resize_factor).floor() as u32;
        Dimensions::new(width, height).map_err(|_| {
            DomainError::Validation(format!(
                "resize factor {} shrinks {} to {}x{}",
                resize_factor, base, width, height
            ))
        })
    }
}

/// Predicts how many frames a capture stride produces over a range
pub struct FrameCountEstimator;

impl FrameCountEstimator {
    /// `ceil((stop_frame - start_frame) / capture_rate)`
    pub fn expected_count(
        start_frame: Option<u64>,
        stop_frame: Option<u64>,
        capture_rate: Option<u32>,
    ) -> Result<u64, DomainError> {
        let (start_frame, stop_frame, capture_rate) = match (start_frame, stop_frame, capture_rate) {
            (Some(start), Some(stop), Some(rate)) => (start, stop, rate),
            _ => {
                return Err(DomainError::Preparation(
                    "start frame, stop frame or capture rate is unset".to_string(),
                ))
            }
        };
        if capture_rate == 0 {
            return Err(DomainError::Preparation("capture rate is zero".to_string()));
        }
        // A validated range never inverts.
        if stop_frame < start_frame {
            return Err(DomainError::Preparation(format!(
                "stop frame {} precedes start frame {}",
                stop_frame, start_frame
            )));
        }

        Ok((stop_frame - start_frame).div_ceil(u64::from(capture_rate)))
    }
}

#[cfg(test)]
mod tests;
