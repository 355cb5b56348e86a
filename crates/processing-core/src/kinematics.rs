//! Kinematics engine.
//!
//! # Pipeline
//!
//! 1. **Segments:** orientation of trunk, thigh, shank, and foot per frame.
//! 2. **Joints:** hip, knee, and ankle as differences of adjacent segments.
//! 3. **Angular velocity:** each requested joint-angle column differentiated
//!    over the trial time base.
//! 4. **Heel:** vertical velocity from the heel height column, then vertical
//!    acceleration from that velocity.
//!
//! The whole series is required up front; the output is a new
//! [`KinematicSeries`] and the input is left untouched.

use gaitkin_common::{GaitkinError, GaitkinResult};
use gaitkin_model::{
    Joint, KinematicFrame, KinematicSeries, Landmark, MarkerFrame, MarkerSeries, PerJoint,
    PerSegment, Segment,
};

use crate::differentiate::{differentiate, differentiate_twice, MIN_SAMPLES};
use crate::geometry::segment_angle;

/// Configuration for the kinematics engine.
#[derive(Debug, Clone)]
pub struct KinematicsConfig {
    /// Joints whose angular velocity is computed.
    pub joints: Vec<Joint>,
}

impl Default for KinematicsConfig {
    fn default() -> Self {
        Self {
            joints: Joint::ALL.to_vec(),
        }
    }
}

/// Computes derived kinematics for a marker series.
pub struct KinematicsEngine {
    config: KinematicsConfig,
}

impl KinematicsEngine {
    pub fn new(config: KinematicsConfig) -> Self {
        Self { config }
    }

    /// Engine computing velocities for hip, knee, and ankle.
    pub fn with_defaults() -> Self {
        Self::new(KinematicsConfig::default())
    }

    pub fn joints(&self) -> &[Joint] {
        &self.config.joints
    }

    /// Run the full pass over `series`.
    ///
    /// Fails with `InsufficientData` for series shorter than two frames,
    /// before any per-frame work is done.
    pub fn compute(&self, series: &MarkerSeries) -> GaitkinResult<KinematicSeries> {
        if series.len() < MIN_SAMPLES {
            return Err(GaitkinError::insufficient_data(MIN_SAMPLES, series.len()));
        }

        let times = series.times();
        let segments: Vec<PerSegment<f64>> = series.frames().iter().map(segment_angles).collect();
        let joints: Vec<PerJoint<f64>> = segments.iter().map(joint_angles).collect();
        tracing::debug!(frames = series.len(), "Computed segment and joint angles");

        let mut joint_velocities = vec![PerJoint::<Option<f64>>::default(); series.len()];
        for &joint in &self.config.joints {
            let angles: Vec<f64> = joints.iter().map(|j| j.get(joint)).collect();
            let velocities = differentiate(&angles, &times)?;
            for (slot, velocity) in joint_velocities.iter_mut().zip(velocities) {
                slot.set(joint, Some(velocity));
            }
        }

        let heel_height: Vec<f64> = series
            .trajectory(Landmark::Heel)
            .iter()
            .map(|p| p.y)
            .collect();
        let heel = differentiate_twice(&heel_height, &times)?;

        let frames = series
            .frames()
            .iter()
            .enumerate()
            .map(|(i, markers)| KinematicFrame {
                markers: *markers,
                segment_angles: segments[i],
                joint_angles: joints[i],
                joint_velocities: joint_velocities[i],
                heel_velocity: heel.first[i],
                heel_acceleration: heel.second[i],
            })
            .collect();

        tracing::info!(
            frames = series.len(),
            joints = ?self.config.joints,
            "Kinematics pass complete"
        );

        Ok(KinematicSeries::new(self.config.joints.clone(), frames))
    }
}

/// Orientation of every segment in one frame.
pub fn segment_angles(frame: &MarkerFrame) -> PerSegment<f64> {
    let angle = |segment: Segment| {
        segment_angle(frame.marker(segment.distal()), frame.marker(segment.proximal()))
    };
    PerSegment {
        trunk: angle(Segment::Trunk),
        thigh: angle(Segment::Thigh),
        shank: angle(Segment::Shank),
        foot: angle(Segment::Foot),
    }
}

/// Joint angles from segment angles, using each joint's sign convention.
pub fn joint_angles(segments: &PerSegment<f64>) -> PerJoint<f64> {
    let angle = |joint: Joint| {
        let (minuend, subtrahend) = joint.segments();
        segments.get(minuend) - segments.get(subtrahend)
    };
    PerJoint {
        hip: angle(Joint::Hip),
        knee: angle(Joint::Knee),
        ankle: angle(Joint::Ankle),
    }
}
