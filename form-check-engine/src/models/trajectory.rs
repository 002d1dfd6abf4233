/// Frame-aligned joint and angle series derived from a landmark sequence
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AnalysisError, Result};
use crate::models::keypoint::Point2D;

/// Derived joints tracked per frame (midpoints of left/right landmarks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Joint {
    Shoulder,
    Elbow,
    Wrist,
    Hip,
    Knee,
    Ankle,
}

impl Joint {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shoulder => "shoulder",
            Self::Elbow => "elbow",
            Self::Wrist => "wrist",
            Self::Hip => "hip",
            Self::Knee => "knee",
            Self::Ankle => "ankle",
        }
    }
}

/// Three-point angles tracked per frame, named after their vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JointAngleKind {
    /// shoulder - hip - knee
    Hip,
    /// hip - shoulder - elbow
    Shoulder,
    /// hip - knee - ankle
    Knee,
    /// shoulder - elbow - wrist
    Arm,
}

impl JointAngleKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hip => "hip",
            Self::Shoulder => "shoulder",
            Self::Knee => "knee",
            Self::Arm => "arm",
        }
    }
}

impl fmt::Display for JointAngleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-frame positions of a single joint
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JointSeries(Vec<Point2D>);

impl JointSeries {
    pub fn new(points: Vec<Point2D>) -> Self {
        Self(points)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, point: Point2D) {
        self.0.push(point);
    }

    /// Position at `frame`. Callers index within the trajectory's frame count.
    pub fn at(&self, frame: usize) -> Point2D {
        self.0[frame]
    }

    pub fn get(&self, frame: usize) -> Option<Point2D> {
        self.0.get(frame).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Point2D> + '_ {
        self.0.iter().copied()
    }
}

impl From<Vec<Point2D>> for JointSeries {
    fn from(points: Vec<Point2D>) -> Self {
        Self(points)
    }
}

/// Per-frame angle in degrees, always within [0, 180]
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngleSeries(Vec<f64>);

impl AngleSeries {
    pub fn new(degrees: Vec<f64>) -> Self {
        Self(degrees)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    pub fn push(&mut self, degrees: f64) {
        self.0.push(degrees);
    }

    pub fn at(&self, frame: usize) -> f64 {
        self.0[frame]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl From<Vec<f64>> for AngleSeries {
    fn from(degrees: Vec<f64>) -> Self {
        Self(degrees)
    }
}

/// Midpoint joint series
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JointTrajectories {
    pub shoulder: JointSeries,
    pub elbow: JointSeries,
    pub wrist: JointSeries,
    pub hip: JointSeries,
    pub knee: JointSeries,
    pub ankle: JointSeries,
}

impl JointTrajectories {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            shoulder: JointSeries::with_capacity(capacity),
            elbow: JointSeries::with_capacity(capacity),
            wrist: JointSeries::with_capacity(capacity),
            hip: JointSeries::with_capacity(capacity),
            knee: JointSeries::with_capacity(capacity),
            ankle: JointSeries::with_capacity(capacity),
        }
    }

    pub fn joint(&self, joint: Joint) -> &JointSeries {
        match joint {
            Joint::Shoulder => &self.shoulder,
            Joint::Elbow => &self.elbow,
            Joint::Wrist => &self.wrist,
            Joint::Hip => &self.hip,
            Joint::Knee => &self.knee,
            Joint::Ankle => &self.ankle,
        }
    }
}

/// Angle series for every tracked vertex
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JointAngles {
    pub hip: AngleSeries,
    pub shoulder: AngleSeries,
    pub knee: AngleSeries,
    pub arm: AngleSeries,
}

impl JointAngles {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            hip: AngleSeries::with_capacity(capacity),
            shoulder: AngleSeries::with_capacity(capacity),
            knee: AngleSeries::with_capacity(capacity),
            arm: AngleSeries::with_capacity(capacity),
        }
    }

    pub fn angle(&self, kind: JointAngleKind) -> &AngleSeries {
        match kind {
            JointAngleKind::Hip => &self.hip,
            JointAngleKind::Shoulder => &self.shoulder,
            JointAngleKind::Knee => &self.knee,
            JointAngleKind::Arm => &self.arm,
        }
    }
}

/// Non-averaged left/right series kept for per-side measurements
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LateralSeries {
    pub left_shoulder: JointSeries,
    pub right_shoulder: JointSeries,
    pub left_elbow: JointSeries,
    pub right_elbow: JointSeries,
}

impl LateralSeries {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            left_shoulder: JointSeries::with_capacity(capacity),
            right_shoulder: JointSeries::with_capacity(capacity),
            left_elbow: JointSeries::with_capacity(capacity),
            right_elbow: JointSeries::with_capacity(capacity),
        }
    }
}

/// Everything the movement analyzers read, indexed by the same frame ordinal
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    frame_count: usize,
    joints: JointTrajectories,
    angles: JointAngles,
    lateral: LateralSeries,
}

impl Trajectory {
    /// Assemble a trajectory from already-computed series.
    ///
    /// Fails with `EmptySequence` when the series are empty and with
    /// `MisalignedSeries` when any series length differs from the shoulder
    /// series.
    pub fn from_parts(
        joints: JointTrajectories,
        angles: JointAngles,
        lateral: LateralSeries,
    ) -> Result<Self> {
        let frame_count = joints.shoulder.len();
        if frame_count == 0 {
            return Err(AnalysisError::EmptySequence);
        }

        let lengths = [
            ("elbow", joints.elbow.len()),
            ("wrist", joints.wrist.len()),
            ("hip", joints.hip.len()),
            ("knee", joints.knee.len()),
            ("ankle", joints.ankle.len()),
            ("hip angle", angles.hip.len()),
            ("shoulder angle", angles.shoulder.len()),
            ("knee angle", angles.knee.len()),
            ("arm angle", angles.arm.len()),
            ("left shoulder", lateral.left_shoulder.len()),
            ("right shoulder", lateral.right_shoulder.len()),
            ("left elbow", lateral.left_elbow.len()),
            ("right elbow", lateral.right_elbow.len()),
        ];
        if let Some((series, found)) = lengths.into_iter().find(|(_, len)| *len != frame_count) {
            return Err(AnalysisError::MisalignedSeries {
                series,
                expected: frame_count,
                found,
            });
        }

        Ok(Self {
            frame_count,
            joints,
            angles,
            lateral,
        })
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn joints(&self) -> &JointTrajectories {
        &self.joints
    }

    pub fn joint(&self, joint: Joint) -> &JointSeries {
        self.joints.joint(joint)
    }

    pub fn angles(&self) -> &JointAngles {
        &self.angles
    }

    pub fn angle(&self, kind: JointAngleKind) -> &AngleSeries {
        self.angles.angle(kind)
    }

    pub fn lateral(&self) -> &LateralSeries {
        &self.lateral
    }

    /// Shoulder-to-hip distance at `frame`
    pub fn torso_length(&self, frame: usize) -> f64 {
        self.joints.shoulder.at(frame).distance_to(self.joints.hip.at(frame))
    }
}
