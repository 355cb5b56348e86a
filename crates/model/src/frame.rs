//! Marker frame series: the input of the kinematics pipeline.

use std::cmp::Ordering;

use gaitkin_common::{GaitkinError, GaitkinResult};
use serde::{Deserialize, Serialize};

use crate::anatomy::Landmark;
use crate::point::Point2D;

/// Marker positions captured at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerFrame {
    /// Seconds since the start of the trial.
    pub time_secs: f64,

    /// Positions indexed by [`Landmark::index`].
    markers: [Point2D; 6],
}

impl MarkerFrame {
    /// `markers` must be ordered as [`Landmark::ALL`].
    pub fn new(time_secs: f64, markers: [Point2D; 6]) -> Self {
        Self { time_secs, markers }
    }

    pub fn marker(&self, landmark: Landmark) -> Point2D {
        self.markers[landmark.index()]
    }

    pub fn markers(&self) -> &[Point2D; 6] {
        &self.markers
    }
}

/// An ordered, strictly time-increasing sequence of marker frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSeries {
    frames: Vec<MarkerFrame>,
}

impl MarkerSeries {
    /// Build a series, rejecting timestamps that do not strictly increase.
    pub fn new(frames: Vec<MarkerFrame>) -> GaitkinResult<Self> {
        if let Some(index) = frames.windows(2).position(|pair| {
            pair[1].time_secs.partial_cmp(&pair[0].time_secs) != Some(Ordering::Greater)
        }) {
            return Err(GaitkinError::NonMonotonicTime { index: index + 1 });
        }
        Ok(Self { frames })
    }

    pub fn frames(&self) -> &[MarkerFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// The time base of the series.
    pub fn times(&self) -> Vec<f64> {
        self.frames.iter().map(|f| f.time_secs).collect()
    }

    /// Trajectory of one landmark.
    pub fn trajectory(&self, landmark: Landmark) -> Vec<Point2D> {
        self.frames.iter().map(|f| f.marker(landmark)).collect()
    }

    /// Time between the first and last frame.
    pub fn duration_secs(&self) -> f64 {
        span_secs(self.frames.iter().map(|f| f.time_secs))
    }

    /// Average sampling rate, if at least two frames exist.
    pub fn mean_sample_rate_hz(&self) -> Option<f64> {
        mean_rate_hz(self.frames.len(), self.duration_secs())
    }
}

/// Last minus first timestamp; zero for fewer than two.
pub(crate) fn span_secs(mut times: impl DoubleEndedIterator<Item = f64>) -> f64 {
    match (times.next(), times.next_back()) {
        (Some(first), Some(last)) => last - first,
        _ => 0.0,
    }
}

pub(crate) fn mean_rate_hz(samples: usize, span_secs: f64) -> Option<f64> {
    (samples >= 2).then(|| (samples - 1) as f64 / span_secs)
}
