//! Anatomical landmarks, segments, and joints of the lower limb.
//!
//! Segments are defined by a proximal and a distal landmark. Joints are the
//! signed difference of two adjacent segment angles; the order of the
//! difference is fixed per joint and is what gives flexion its sign.

use std::fmt;
use std::str::FromStr;

use gaitkin_common::{GaitkinError, GaitkinResult};
use serde::{Deserialize, Serialize};

/// A tracked skin marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    IliacCrest,
    GreaterTrochanter,
    LateralCondyle,
    LateralMalleolus,
    Heel,
    FifthMetatarsal,
}

impl Landmark {
    /// All landmarks in storage order.
    pub const ALL: [Landmark; 6] = [
        Landmark::IliacCrest,
        Landmark::GreaterTrochanter,
        Landmark::LateralCondyle,
        Landmark::LateralMalleolus,
        Landmark::Heel,
        Landmark::FifthMetatarsal,
    ];

    /// Column name prefix used in trial files.
    pub fn column_prefix(self) -> &'static str {
        match self {
            Landmark::IliacCrest => "il_crest",
            Landmark::GreaterTrochanter => "grt_troc",
            Landmark::LateralCondyle => "lat_con",
            Landmark::LateralMalleolus => "lat_mall",
            Landmark::Heel => "heel",
            Landmark::FifthMetatarsal => "5th_mtar",
        }
    }

    /// Horizontal coordinate column, e.g. `heel_X`.
    pub fn x_column(self) -> String {
        format!("{}_X", self.column_prefix())
    }

    /// Vertical coordinate column, e.g. `heel_Z`.
    pub fn z_column(self) -> String {
        format!("{}_Z", self.column_prefix())
    }

    /// Position in [`Landmark::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A rigid body segment between two landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    Trunk,
    Thigh,
    Shank,
    Foot,
}

impl Segment {
    pub const ALL: [Segment; 4] = [Segment::Trunk, Segment::Thigh, Segment::Shank, Segment::Foot];

    pub fn name(self) -> &'static str {
        match self {
            Segment::Trunk => "trunk",
            Segment::Thigh => "thigh",
            Segment::Shank => "shank",
            Segment::Foot => "foot",
        }
    }

    pub fn proximal(self) -> Landmark {
        match self {
            Segment::Trunk => Landmark::IliacCrest,
            Segment::Thigh => Landmark::GreaterTrochanter,
            Segment::Shank => Landmark::LateralCondyle,
            Segment::Foot => Landmark::LateralMalleolus,
        }
    }

    pub fn distal(self) -> Landmark {
        match self {
            Segment::Trunk => Landmark::GreaterTrochanter,
            Segment::Thigh => Landmark::LateralCondyle,
            Segment::Shank => Landmark::LateralMalleolus,
            Segment::Foot => Landmark::Heel,
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An articulation between two adjacent segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    Hip,
    Knee,
    Ankle,
}

impl Joint {
    pub const ALL: [Joint; 3] = [Joint::Hip, Joint::Knee, Joint::Ankle];

    pub fn name(self) -> &'static str {
        match self {
            Joint::Hip => "hip",
            Joint::Knee => "knee",
            Joint::Ankle => "ankle",
        }
    }

    /// `(minuend, subtrahend)`: the joint angle is `minuend - subtrahend`.
    ///
    /// hip = thigh - trunk, knee = thigh - shank, ankle = shank - foot.
    pub fn segments(self) -> (Segment, Segment) {
        match self {
            Joint::Hip => (Segment::Thigh, Segment::Trunk),
            Joint::Knee => (Segment::Thigh, Segment::Shank),
            Joint::Ankle => (Segment::Shank, Segment::Foot),
        }
    }

    /// Parse a list of joint names, dropping duplicates but keeping order.
    pub fn parse_list<S: AsRef<str>>(names: &[S]) -> GaitkinResult<Vec<Joint>> {
        let mut joints = Vec::with_capacity(names.len());
        for name in names {
            let joint: Joint = name.as_ref().parse()?;
            if !joints.contains(&joint) {
                joints.push(joint);
            }
        }
        Ok(joints)
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Joint {
    type Err = GaitkinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hip" => Ok(Joint::Hip),
            "knee" => Ok(Joint::Knee),
            "ankle" => Ok(Joint::Ankle),
            _ => Err(GaitkinError::unknown_joint(s)),
        }
    }
}

/// One value per segment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerSegment<T> {
    pub trunk: T,
    pub thigh: T,
    pub shank: T,
    pub foot: T,
}

impl<T: Copy> PerSegment<T> {
    pub fn get(&self, segment: Segment) -> T {
        match segment {
            Segment::Trunk => self.trunk,
            Segment::Thigh => self.thigh,
            Segment::Shank => self.shank,
            Segment::Foot => self.foot,
        }
    }
}

/// One value per joint.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerJoint<T> {
    pub hip: T,
    pub knee: T,
    pub ankle: T,
}

impl<T: Copy> PerJoint<T> {
    pub fn get(&self, joint: Joint) -> T {
        match joint {
            Joint::Hip => self.hip,
            Joint::Knee => self.knee,
            Joint::Ankle => self.ankle,
        }
    }

    pub fn set(&mut self, joint: Joint, value: T) {
        match joint {
            Joint::Hip => self.hip = value,
            Joint::Knee => self.knee = value,
            Joint::Ankle => self.ankle = value,
        }
    }
}
