/// Bench press form rules
///
/// Elbow flare is judged only while the bar is low, i.e. on frames where the
/// elbows sit at or below shoulder height. The horizontal distance from each
/// shoulder to its elbow is compared with the shoulder width measured at the
/// lockout (most-extended arm) frame.
use serde::Serialize;

use crate::config::{AnalysisWindow, BenchThresholds};
use crate::error::{AnalysisError, Result};
use crate::models::movement::{Movement, Warning};
use crate::models::trajectory::Trajectory;
use crate::services::movement_analyzer::MovementAnalyzer;
use crate::services::reference_frame::{evaluation_range, find_extended_frame};

pub const ELBOWS_TOO_FAR: &str = "Elbows too far from body, try keeping them 45° from torso";

/// Measurements taken at the lockout frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchBaseline {
    pub reference_frame: usize,
    pub shoulder_width: f64,
    pub left_upper_arm: f64,
    pub right_upper_arm: f64,
}

#[derive(Debug, Clone)]
pub struct BenchAnalyzer {
    thresholds: BenchThresholds,
    window: AnalysisWindow,
}

impl BenchAnalyzer {
    pub fn new(thresholds: BenchThresholds, window: AnalysisWindow) -> Self {
        Self { thresholds, window }
    }

    pub fn baseline(&self, trajectory: &Trajectory) -> Result<BenchBaseline> {
        let reference_frame = self.reference_frame(trajectory)?;
        let lateral = trajectory.lateral();

        let left_shoulder = lateral.left_shoulder.at(reference_frame);
        let right_shoulder = lateral.right_shoulder.at(reference_frame);

        Ok(BenchBaseline {
            reference_frame,
            shoulder_width: (left_shoulder.x - right_shoulder.x).abs(),
            left_upper_arm: left_shoulder.distance_to(lateral.left_elbow.at(reference_frame)),
            right_upper_arm: right_shoulder.distance_to(lateral.right_elbow.at(reference_frame)),
        })
    }
}

impl Default for BenchAnalyzer {
    fn default() -> Self {
        Self::new(BenchThresholds::default(), AnalysisWindow::default())
    }
}

impl MovementAnalyzer for BenchAnalyzer {
    fn movement(&self) -> Movement {
        Movement::Bench
    }

    fn reference_frame(&self, trajectory: &Trajectory) -> Result<usize> {
        find_extended_frame(&trajectory.angles().arm)
    }

    fn analyze(&self, trajectory: &Trajectory) -> Result<Vec<Warning>> {
        let baseline = self.baseline(trajectory)?;
        if baseline.shoulder_width == 0.0 {
            return Err(AnalysisError::DegenerateRatio {
                frame: baseline.reference_frame,
                ratio: "elbow offset/shoulder width",
            });
        }

        tracing::debug!(
            "Bench reference frame {}: shoulder width {:.2}, upper arms {:.2}/{:.2}",
            baseline.reference_frame,
            baseline.shoulder_width,
            baseline.left_upper_arm,
            baseline.right_upper_arm
        );

        let joints = trajectory.joints();
        let lateral = trajectory.lateral();
        let limit = self.thresholds.max_elbow_offset_ratio;

        let mut warnings = Vec::new();
        for frame in evaluation_range(&trajectory.angles().arm, self.window)? {
            // Image y grows downward
            if joints.elbow.at(frame).y < joints.shoulder.at(frame).y {
                continue;
            }

            let left_offset =
                (lateral.left_shoulder.at(frame).x - lateral.left_elbow.at(frame).x).abs();
            let right_offset =
                (lateral.right_shoulder.at(frame).x - lateral.right_elbow.at(frame).x).abs();

            if left_offset / baseline.shoulder_width > limit
                || right_offset / baseline.shoulder_width > limit
            {
                warnings.push(Warning::new(frame, ELBOWS_TOO_FAR));
            }
        }

        Ok(warnings)
    }
}
