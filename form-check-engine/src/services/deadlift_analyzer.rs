/// Deadlift form rules
///
/// The reference frame is the lockout (most-extended hip). It supplies the
/// baseline torso length and the direction the lifter faces, inferred from
/// where the knee sits relative to the ankle. Rules, in priority order:
/// 1. Rounded back: torso foreshortened below a fraction of baseline
/// 2. Lifting with only legs or only back: knee/hip angle ratio out of band
///    while the hips are still well above the knees
/// 3. Leaning back: shoulders drifting behind the hips at the top
use serde::Serialize;

use crate::config::{AnalysisWindow, DeadliftThresholds};
use crate::error::{AnalysisError, Result};
use crate::models::movement::{Movement, Warning};
use crate::models::trajectory::Trajectory;
use crate::services::movement_analyzer::{checked_ratio, MovementAnalyzer};
use crate::services::reference_frame::{evaluation_range, find_extended_frame};

pub const KEEP_BACK_STRAIGHT: &str = "Make sure to keep your back straight";
pub const LIFT_WITH_ENTIRE_BODY: &str = "Lift with your entire body, not just your legs or back";
pub const LEANING_BACK: &str = "Make sure not to lean back too much";

/// Side of the image the lifter faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Horizontal distance the shoulder sits behind the hip; positive means
    /// the lifter leans away from the direction they face
    fn lean_back(self, shoulder_x: f64, hip_x: f64) -> f64 {
        match self {
            Facing::Left => shoulder_x - hip_x,
            Facing::Right => hip_x - shoulder_x,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeadliftBaseline {
    pub reference_frame: usize,
    pub torso_length: f64,
    pub facing: Facing,
}

#[derive(Debug, Clone)]
pub struct DeadliftAnalyzer {
    thresholds: DeadliftThresholds,
    window: AnalysisWindow,
}

impl DeadliftAnalyzer {
    pub fn new(thresholds: DeadliftThresholds, window: AnalysisWindow) -> Self {
        Self { thresholds, window }
    }

    pub fn baseline(&self, trajectory: &Trajectory) -> Result<DeadliftBaseline> {
        let reference_frame = self.reference_frame(trajectory)?;
        let joints = trajectory.joints();

        let facing = if joints.knee.at(reference_frame).x < joints.ankle.at(reference_frame).x {
            Facing::Left
        } else {
            Facing::Right
        };

        Ok(DeadliftBaseline {
            reference_frame,
            torso_length: trajectory.torso_length(reference_frame),
            facing,
        })
    }
}

impl Default for DeadliftAnalyzer {
    fn default() -> Self {
        Self::new(DeadliftThresholds::default(), AnalysisWindow::default())
    }
}

impl MovementAnalyzer for DeadliftAnalyzer {
    fn movement(&self) -> Movement {
        Movement::Deadlift
    }

    fn reference_frame(&self, trajectory: &Trajectory) -> Result<usize> {
        find_extended_frame(&trajectory.angles().hip)
    }

    fn analyze(&self, trajectory: &Trajectory) -> Result<Vec<Warning>> {
        let baseline = self.baseline(trajectory)?;
        if baseline.torso_length == 0.0 {
            return Err(AnalysisError::DegenerateRatio {
                frame: baseline.reference_frame,
                ratio: "torso length",
            });
        }

        tracing::debug!(
            "Deadlift reference frame {}: torso length {:.2}, facing {:?}",
            baseline.reference_frame,
            baseline.torso_length,
            baseline.facing
        );

        let t = &self.thresholds;
        let joints = trajectory.joints();
        let angles = trajectory.angles();
        let hip_clearance = t.hip_clearance_ratio * baseline.torso_length;

        let mut warnings = Vec::new();
        for frame in evaluation_range(&angles.hip, self.window)? {
            let torso_length = trajectory.torso_length(frame);
            if torso_length / baseline.torso_length < t.min_torso_ratio {
                warnings.push(Warning::new(frame, KEEP_BACK_STRAIGHT));
                continue;
            }

            let knee_hip_ratio = checked_ratio(
                angles.knee.at(frame),
                angles.hip.at(frame),
                frame,
                "knee/hip angle",
            )?;
            let out_of_band =
                knee_hip_ratio > t.max_knee_hip_ratio || knee_hip_ratio < t.min_knee_hip_ratio;
            // Image y grows downward, so a raised hip has the smaller y
            let hip_above_knee = joints.knee.at(frame).y - joints.hip.at(frame).y;

            if out_of_band && hip_above_knee > hip_clearance {
                warnings.push(Warning::new(frame, LIFT_WITH_ENTIRE_BODY));
                continue;
            }

            let lean = baseline
                .facing
                .lean_back(joints.shoulder.at(frame).x, joints.hip.at(frame).x);
            if lean > torso_length * t.lean_back_ratio {
                warnings.push(Warning::new(frame, LEANING_BACK));
            }
        }

        Ok(warnings)
    }
}
