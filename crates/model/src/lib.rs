//! Gaitkin Data Model
//!
//! Defines the data contracts shared by the kinematics pipeline:
//! - **Geometry:** 2-D points and position vectors in the sagittal plane
//! - **Anatomy:** landmarks, segments, and joints with their sign conventions
//! - **Series:** marker frame series (input) and kinematic frame series (output)
//! - **Trial tables:** CSV ingestion and export adapters
//!
//! Coordinates are in meters, angles in degrees, times in seconds.
//! The vertical axis of the capture volume is stored as `y` and read from
//! the `_Z` columns of a trial file.

pub mod anatomy;
pub mod export;
pub mod frame;
pub mod kinematics;
pub mod point;
pub mod trial;

pub use anatomy::*;
pub use frame::*;
pub use kinematics::*;
pub use point::*;
pub use trial::{load_trial, TrialTable};
