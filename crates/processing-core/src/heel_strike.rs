//! Heel-strike detection from heel vertical velocity.
//!
//! # Algorithm
//!
//! 1. **Candidates:** local minima of heel velocity at or below zero, found
//!    as local maxima of the negated velocity with a minimum height.
//! 2. **Ground gate:** drop candidates where the heel is at or above the
//!    height threshold at that frame.
//! 3. **Ranking:** sort by dip magnitude, deepest first; ties keep the
//!    earlier frame first.
//! 4. **Selection:** keep the `max_events` deepest and return them in
//!    chronological order.
//!
//! An empty result is valid. Callers that need an event use
//! [`require_first_heel_strike`].

use gaitkin_common::{GaitkinError, GaitkinResult};
use gaitkin_model::KinematicSeries;
use serde::{Deserialize, Serialize};

use crate::peaks::{find_local_maxima, Peak};

/// Heel height (m) at or above which a dip is not a strike.
pub const DEFAULT_MAX_HEEL_HEIGHT_M: f64 = 0.06;

/// Strikes kept per series.
pub const DEFAULT_MAX_EVENTS: usize = 2;

/// Configuration for heel-strike detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeelStrikeConfig {
    /// Heel must be strictly below this height (m).
    pub max_heel_height_m: f64,

    /// Maximum number of events returned.
    pub max_events: usize,

    /// Minimum height of a peak in the negated velocity (m/s).
    pub min_peak_height: f64,
}

impl Default for HeelStrikeConfig {
    fn default() -> Self {
        Self {
            max_heel_height_m: DEFAULT_MAX_HEEL_HEIGHT_M,
            max_events: DEFAULT_MAX_EVENTS,
            min_peak_height: 0.0,
        }
    }
}

/// A detected heel strike with the values that located it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeelStrikeEvent {
    pub frame: usize,
    pub time_secs: f64,
    pub heel_height_m: f64,
    pub heel_velocity: f64,
}

/// Locates heel strikes in a completed kinematic series.
pub struct HeelStrikeDetector {
    config: HeelStrikeConfig,
}

impl HeelStrikeDetector {
    pub fn new(config: HeelStrikeConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(HeelStrikeConfig::default())
    }

    pub fn config(&self) -> &HeelStrikeConfig {
        &self.config
    }

    /// Frame indices of heel strikes, ascending.
    pub fn detect(&self, heel_velocity: &[f64], heel_height: &[f64]) -> GaitkinResult<Vec<usize>> {
        if heel_velocity.len() != heel_height.len() {
            return Err(GaitkinError::length_mismatch(
                heel_velocity.len(),
                heel_height.len(),
            ));
        }

        let candidates = self.candidates(heel_velocity);
        let strikes = self.select(candidates, heel_height);

        if strikes.is_empty() {
            tracing::warn!(
                frames = heel_velocity.len(),
                max_heel_height_m = self.config.max_heel_height_m,
                "No heel strike found"
            );
        } else {
            tracing::debug!(?strikes, "Detected heel strikes");
        }
        Ok(strikes)
    }

    /// Run detection on the heel columns of `series`.
    pub fn detect_series(&self, series: &KinematicSeries) -> GaitkinResult<Vec<usize>> {
        self.detect(&series.heel_velocities(), &series.heel_heights())
    }

    /// Detect and describe each strike.
    pub fn events(&self, series: &KinematicSeries) -> GaitkinResult<Vec<HeelStrikeEvent>> {
        let frames = series.frames();
        Ok(self
            .detect_series(series)?
            .into_iter()
            .map(|i| HeelStrikeEvent {
                frame: i,
                time_secs: frames[i].time_secs(),
                heel_height_m: frames[i].heel_height(),
                heel_velocity: frames[i].heel_velocity,
            })
            .collect())
    }

    /// Velocity dips deep enough to be candidates, ascending by frame.
    ///
    /// `Peak::height` is the dip magnitude (the negated velocity).
    pub fn candidates(&self, heel_velocity: &[f64]) -> Vec<Peak> {
        let negated: Vec<f64> = heel_velocity.iter().map(|v| -v).collect();
        find_local_maxima(&negated, self.config.min_peak_height)
    }

    /// Apply the ground gate, rank, truncate, and restore time order.
    ///
    /// `candidates` must be in ascending frame order for ties to resolve to
    /// the earlier frame.
    pub fn select(&self, candidates: Vec<Peak>, heel_height: &[f64]) -> Vec<usize> {
        let mut grounded: Vec<Peak> = candidates
            .into_iter()
            .filter(|p| {
                heel_height
                    .get(p.index)
                    .is_some_and(|&z| z < self.config.max_heel_height_m)
            })
            .collect();

        grounded.sort_by(|a, b| b.height.total_cmp(&a.height));
        grounded.truncate(self.config.max_events);

        let mut strikes: Vec<usize> = grounded.into_iter().map(|p| p.index).collect();
        strikes.sort_unstable();
        strikes
    }
}

/// The earliest strike, or `NoHeelStrikeFound` when there is none.
pub fn require_first_heel_strike(strikes: &[usize]) -> GaitkinResult<usize> {
    strikes
        .first()
        .copied()
        .ok_or(GaitkinError::NoHeelStrikeFound)
}
