//! Kinematic frame series: the marker series augmented with derived columns.
//!
//! Values of this type are produced in one pass by the kinematics engine and
//! are not mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::anatomy::{Joint, Landmark, PerJoint, PerSegment, Segment};
use crate::frame::{mean_rate_hz, span_secs, MarkerFrame};

/// One frame of raw markers plus every quantity derived from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicFrame {
    pub markers: MarkerFrame,

    /// Segment orientations (degrees).
    pub segment_angles: PerSegment<f64>,

    /// Joint angles (degrees).
    pub joint_angles: PerJoint<f64>,

    /// Joint angular velocities (degrees/second); `None` for joints that
    /// were not requested.
    pub joint_velocities: PerJoint<Option<f64>>,

    /// Heel vertical velocity (m/s).
    pub heel_velocity: f64,

    /// Heel vertical acceleration (m/s²).
    pub heel_acceleration: f64,
}

impl KinematicFrame {
    pub fn time_secs(&self) -> f64 {
        self.markers.time_secs
    }

    /// Heel vertical position (m).
    pub fn heel_height(&self) -> f64 {
        self.markers.marker(Landmark::Heel).y
    }
}

/// A fully computed kinematic series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicSeries {
    joints: Vec<Joint>,
    frames: Vec<KinematicFrame>,
}

impl KinematicSeries {
    /// `joints` lists the joints whose velocities are populated in `frames`.
    pub fn new(joints: Vec<Joint>, frames: Vec<KinematicFrame>) -> Self {
        Self { joints, frames }
    }

    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    pub fn frames(&self) -> &[KinematicFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn times(&self) -> Vec<f64> {
        self.frames.iter().map(KinematicFrame::time_secs).collect()
    }

    /// Time between the first and last frame.
    pub fn duration_secs(&self) -> f64 {
        span_secs(self.frames.iter().map(KinematicFrame::time_secs))
    }

    /// Average sampling rate, if at least two frames exist.
    pub fn mean_sample_rate_hz(&self) -> Option<f64> {
        mean_rate_hz(self.frames.len(), self.duration_secs())
    }

    pub fn segment_angles(&self, segment: Segment) -> Vec<f64> {
        self.frames
            .iter()
            .map(|f| f.segment_angles.get(segment))
            .collect()
    }

    pub fn joint_angles(&self, joint: Joint) -> Vec<f64> {
        self.frames.iter().map(|f| f.joint_angles.get(joint)).collect()
    }

    /// Angular velocity column, if the joint was requested.
    pub fn joint_velocities(&self, joint: Joint) -> Option<Vec<f64>> {
        if !self.joints.contains(&joint) {
            return None;
        }
        self.frames
            .iter()
            .map(|f| f.joint_velocities.get(joint))
            .collect()
    }

    pub fn heel_heights(&self) -> Vec<f64> {
        self.frames.iter().map(KinematicFrame::heel_height).collect()
    }

    pub fn heel_velocities(&self) -> Vec<f64> {
        self.frames.iter().map(|f| f.heel_velocity).collect()
    }

    pub fn heel_accelerations(&self) -> Vec<f64> {
        self.frames.iter().map(|f| f.heel_acceleration).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point2D;

    fn kinematic_frame(t: f64, knee_velocity: Option<f64>) -> KinematicFrame {
        let mut markers = [Point2D::default(); 6];
        markers[Landmark::Heel.index()] = Point2D::new(0.3, 0.04);
        let mut joint_velocities = PerJoint::default();
        joint_velocities.set(Joint::Knee, knee_velocity);
        KinematicFrame {
            markers: MarkerFrame::new(t, markers),
            segment_angles: PerSegment::default(),
            joint_angles: PerJoint {
                hip: 10.0,
                knee: 20.0,
                ankle: 30.0,
            },
            joint_velocities,
            heel_velocity: -0.2,
            heel_acceleration: 1.0,
        }
    }

    #[test]
    fn test_columns() {
        let series = KinematicSeries::new(
            vec![Joint::Knee],
            vec![kinematic_frame(0.0, Some(1.0)), kinematic_frame(0.01, Some(2.0))],
        );
        assert_eq!(series.times(), vec![0.0, 0.01]);
        assert_eq!(series.joint_angles(Joint::Ankle), vec![30.0, 30.0]);
        assert_eq!(series.joint_velocities(Joint::Knee), Some(vec![1.0, 2.0]));
        assert_eq!(series.heel_heights(), vec![0.04, 0.04]);
        assert_eq!(series.heel_velocities(), vec![-0.2, -0.2]);
    }

    #[test]
    fn test_timing_matches_marker_series() {
        let frames: Vec<KinematicFrame> =
            (0..51).map(|i| kinematic_frame(i as f64 * 0.02, None)).collect();
        let markers =
            crate::frame::MarkerSeries::new(frames.iter().map(|f| f.markers).collect()).unwrap();
        let series = KinematicSeries::new(vec![], frames);

        assert_eq!(series.duration_secs(), markers.duration_secs());
        assert_eq!(series.mean_sample_rate_hz(), markers.mean_sample_rate_hz());
        assert!((series.mean_sample_rate_hz().unwrap() - 50.0).abs() < 1e-6);

        let single = KinematicSeries::new(vec![], vec![kinematic_frame(0.0, None)]);
        assert_eq!(single.duration_secs(), 0.0);
        assert_eq!(single.mean_sample_rate_hz(), None);
    }

    #[test]
    fn test_unrequested_joint_has_no_velocity_column() {
        let series = KinematicSeries::new(vec![Joint::Knee], vec![kinematic_frame(0.0, Some(1.0))]);
        assert_eq!(series.joint_velocities(Joint::Hip), None);
    }

    #[test]
    fn test_serializes_joint_names_in_snake_case() {
        let series = KinematicSeries::new(vec![Joint::Ankle], vec![]);
        let json = serde_json::to_string(&series).unwrap();
        assert!(json.contains("\"ankle\""));
    }
}
