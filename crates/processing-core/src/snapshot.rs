//! Single-pose geometry: segment vectors and angles for one static snapshot.

use gaitkin_model::{Landmark, MarkerFrame, Point2D, Segment, Vector2D};
use serde::{Deserialize, Serialize};

use crate::geometry::{position_vector, segment_angle};

/// The four landmarks that define trunk, thigh, and shank.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaticPose {
    pub iliac_crest: Point2D,
    pub greater_trochanter: Point2D,
    pub lateral_condyle: Point2D,
    pub lateral_malleolus: Point2D,
}

impl StaticPose {
    /// Take the pose from one frame of a trial.
    pub fn from_frame(frame: &MarkerFrame) -> Self {
        Self {
            iliac_crest: frame.marker(Landmark::IliacCrest),
            greater_trochanter: frame.marker(Landmark::GreaterTrochanter),
            lateral_condyle: frame.marker(Landmark::LateralCondyle),
            lateral_malleolus: frame.marker(Landmark::LateralMalleolus),
        }
    }
}

/// Vectors and angles of a static pose.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapshotReport {
    /// Iliac crest to greater trochanter.
    pub trunk_vector: Vector2D,
    /// Greater trochanter to lateral condyle.
    pub thigh_vector: Vector2D,
    /// Lateral condyle to lateral malleolus.
    pub shank_vector: Vector2D,

    pub trunk_angle: f64,
    pub thigh_angle: f64,
    pub shank_angle: f64,

    /// Trunk minus thigh. Opposite in sign to the series hip angle.
    pub hip_angle: f64,
    /// Thigh minus shank.
    pub knee_angle: f64,
}

/// Compute vectors, segment angles, and hip/knee angles for `pose`.
pub fn analyze_pose(pose: &StaticPose) -> SnapshotReport {
    let trunk_angle = segment_angle(pose.greater_trochanter, pose.iliac_crest);
    let thigh_angle = segment_angle(pose.lateral_condyle, pose.greater_trochanter);
    let shank_angle = segment_angle(pose.lateral_malleolus, pose.lateral_condyle);

    let hip_angle = trunk_angle - thigh_angle;
    let knee_angle = thigh_angle - shank_angle;

    tracing::debug!(
        trunk_angle,
        thigh_angle,
        shank_angle,
        hip_angle,
        knee_angle,
        "Analyzed static pose"
    );

    SnapshotReport {
        trunk_vector: position_vector(pose.iliac_crest, pose.greater_trochanter),
        thigh_vector: position_vector(pose.greater_trochanter, pose.lateral_condyle),
        shank_vector: position_vector(pose.lateral_condyle, pose.lateral_malleolus),
        trunk_angle,
        thigh_angle,
        shank_angle,
        hip_angle,
        knee_angle,
    }
}

impl SnapshotReport {
    pub fn segment_angle(&self, segment: Segment) -> Option<f64> {
        match segment {
            Segment::Trunk => Some(self.trunk_angle),
            Segment::Thigh => Some(self.thigh_angle),
            Segment::Shank => Some(self.shank_angle),
            Segment::Foot => None,
        }
    }
}
