//! Trial analysis summary.

use gaitkin_common::GaitkinResult;
use gaitkin_model::{Joint, KinematicSeries};
use serde::{Deserialize, Serialize};

use crate::heel_strike::HeelStrikeEvent;

/// Angle and velocity extremes for one joint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointSummary {
    pub joint: Joint,
    pub min_angle_deg: f64,
    pub max_angle_deg: f64,
    pub range_of_motion_deg: f64,

    /// Largest absolute angular velocity, when velocities were computed.
    pub peak_abs_velocity_deg_s: Option<f64>,
}

/// Summary of one analyzed trial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Creation timestamp (ISO 8601).
    pub generated_at: String,
    pub frame_count: usize,
    pub duration_secs: f64,
    pub mean_sample_rate_hz: Option<f64>,
    pub heel_strikes: Vec<HeelStrikeEvent>,
    pub joints: Vec<JointSummary>,
}

impl AnalysisReport {
    pub fn build(series: &KinematicSeries, heel_strikes: Vec<HeelStrikeEvent>) -> Self {
        let joints = Joint::ALL
            .iter()
            .map(|&joint| summarize_joint(series, joint))
            .collect();

        Self {
            generated_at: chrono::Utc::now().to_rfc3339(),
            frame_count: series.len(),
            duration_secs: series.duration_secs(),
            mean_sample_rate_hz: series.mean_sample_rate_hz(),
            heel_strikes,
            joints,
        }
    }

    pub fn joint(&self, joint: Joint) -> Option<&JointSummary> {
        self.joints.iter().find(|s| s.joint == joint)
    }

    pub fn to_json_pretty(&self) -> GaitkinResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn summarize_joint(series: &KinematicSeries, joint: Joint) -> JointSummary {
    let angles = series.joint_angles(joint);
    let min_angle_deg = angles.iter().copied().fold(f64::INFINITY, f64::min);
    let max_angle_deg = angles.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let peak_abs_velocity_deg_s = series
        .joint_velocities(joint)
        .map(|v| v.iter().fold(0.0f64, |peak, x| peak.max(x.abs())));

    JointSummary {
        joint,
        min_angle_deg,
        max_angle_deg,
        range_of_motion_deg: max_angle_deg - min_angle_deg,
        peak_abs_velocity_deg_s,
    }
}
