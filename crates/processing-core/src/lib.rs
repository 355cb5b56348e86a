//! Gaitkin Processing Core
//!
//! Turns marker trajectories into lower-limb kinematics and gait events:
//! - **Geometry:** position vectors and segment angles from landmark pairs
//! - **Differentiation:** central differences with one-sided boundaries
//! - **Kinematics:** segment angles, joint angles, joint angular velocities,
//!   heel vertical velocity and acceleration
//! - **Heel strikes:** velocity-dip detection gated by heel height
//!
//! This crate is pure computation — no I/O, no global state.
//! All inputs are data; all outputs are data.

pub mod differentiate;
pub mod geometry;
pub mod heel_strike;
pub mod kinematics;
pub mod peaks;
pub mod report;
pub mod snapshot;

pub use differentiate::differentiate;
pub use geometry::{position_vector, segment_angle};
pub use heel_strike::{HeelStrikeConfig, HeelStrikeDetector, HeelStrikeEvent};
pub use kinematics::KinematicsEngine;
pub use report::AnalysisReport;
pub use snapshot::{SnapshotReport, StaticPose};
