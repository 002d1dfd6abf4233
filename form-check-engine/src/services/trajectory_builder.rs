/// Trajectory Builder
///
/// Turns raw per-frame landmark arrays into the named joint and angle series
/// the movement analyzers consume:
/// - Midpoint joints (shoulder, elbow, wrist, hip, knee, ankle)
/// - Three-point angles (hip, shoulder, knee, arm)
/// - Per-side shoulder and elbow positions
use crate::config::AnkleSource;
use crate::error::{AnalysisError, Result};
use crate::models::keypoint::{CocoKeypoint, LandmarkFrame, Point2D};
use crate::models::trajectory::{
    JointAngleKind, JointAngles, JointTrajectories, LateralSeries, Trajectory,
};
use crate::services::geometry::{angle_at, midpoint};

#[derive(Debug, Clone, Default)]
pub struct TrajectoryBuilder {
    ankle_source: AnkleSource,
}

/// Midpoint joints of a single frame
struct FrameJoints {
    shoulder: Point2D,
    elbow: Point2D,
    wrist: Point2D,
    hip: Point2D,
    knee: Point2D,
    ankle: Point2D,
}

impl TrajectoryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ankle_source(mut self, ankle_source: AnkleSource) -> Self {
        self.ankle_source = ankle_source;
        self
    }

    /// Build the frame-aligned trajectory for a whole landmark sequence
    pub fn build(&self, frames: &[LandmarkFrame]) -> Result<Trajectory> {
        if frames.is_empty() {
            return Err(AnalysisError::EmptySequence);
        }

        let mut joints = JointTrajectories::with_capacity(frames.len());
        let mut angles = JointAngles::with_capacity(frames.len());
        let mut lateral = LateralSeries::with_capacity(frames.len());

        for (index, frame) in frames.iter().enumerate() {
            let landmark = |keypoint| frame.get(index, keypoint);
            let paired = |left, right| -> Result<Point2D> {
                Ok(midpoint(landmark(left)?, landmark(right)?))
            };

            let left_shoulder = landmark(CocoKeypoint::LeftShoulder)?;
            let right_shoulder = landmark(CocoKeypoint::RightShoulder)?;
            let left_elbow = landmark(CocoKeypoint::LeftElbow)?;
            let right_elbow = landmark(CocoKeypoint::RightElbow)?;

            let ankle = match self.ankle_source {
                AnkleSource::RightOnly => {
                    paired(CocoKeypoint::RightAnkle, CocoKeypoint::RightAnkle)?
                }
                AnkleSource::Bilateral => paired(CocoKeypoint::LeftAnkle, CocoKeypoint::RightAnkle)?,
            };

            let current = FrameJoints {
                shoulder: midpoint(left_shoulder, right_shoulder),
                elbow: midpoint(left_elbow, right_elbow),
                wrist: paired(CocoKeypoint::LeftWrist, CocoKeypoint::RightWrist)?,
                hip: paired(CocoKeypoint::LeftHip, CocoKeypoint::RightHip)?,
                knee: paired(CocoKeypoint::LeftKnee, CocoKeypoint::RightKnee)?,
                ankle,
            };

            let angle = |kind: JointAngleKind, a, vertex, c| {
                angle_at(a, vertex, c).map_err(|source| AnalysisError::DegenerateGeometry {
                    frame: index,
                    angle: kind,
                    source,
                })
            };

            angles.hip.push(angle(
                JointAngleKind::Hip,
                current.shoulder,
                current.hip,
                current.knee,
            )?);
            angles.shoulder.push(angle(
                JointAngleKind::Shoulder,
                current.hip,
                current.shoulder,
                current.elbow,
            )?);
            angles.knee.push(angle(
                JointAngleKind::Knee,
                current.hip,
                current.knee,
                current.ankle,
            )?);
            angles.arm.push(angle(
                JointAngleKind::Arm,
                current.shoulder,
                current.elbow,
                current.wrist,
            )?);

            joints.shoulder.push(current.shoulder);
            joints.elbow.push(current.elbow);
            joints.wrist.push(current.wrist);
            joints.hip.push(current.hip);
            joints.knee.push(current.knee);
            joints.ankle.push(current.ankle);

            lateral.left_shoulder.push(left_shoulder);
            lateral.right_shoulder.push(right_shoulder);
            lateral.left_elbow.push(left_elbow);
            lateral.right_elbow.push(right_elbow);
        }

        tracing::debug!(
            "Built trajectory for {} frames (ankle source: {:?})",
            frames.len(),
            self.ankle_source
        );

        Trajectory::from_parts(joints, angles, lateral)
    }
}
