/// Squat form rules
///
/// The reference frame is the most-extended hip (standing tall). Against the
/// torso length measured there, every evaluated frame is checked for:
/// 1. Knees travelling forward of the hips (knee/hip angle ratio too high)
/// 2. A collapsing back (torso foreshortened below a fraction of baseline)
use crate::config::{AnalysisWindow, SquatThresholds};
use crate::error::{AnalysisError, Result};
use crate::models::movement::{Movement, Warning};
use crate::models::trajectory::Trajectory;
use crate::services::movement_analyzer::{checked_ratio, MovementAnalyzer};
use crate::services::reference_frame::{evaluation_range, find_extended_frame};

pub const KNEES_TOO_FAR_FORWARD: &str = "Knees too far forward";
pub const BACK_TOO_BENT: &str = "Back too bent";

#[derive(Debug, Clone)]
pub struct SquatAnalyzer {
    thresholds: SquatThresholds,
    window: AnalysisWindow,
}

impl SquatAnalyzer {
    pub fn new(thresholds: SquatThresholds, window: AnalysisWindow) -> Self {
        Self { thresholds, window }
    }
}

impl Default for SquatAnalyzer {
    fn default() -> Self {
        Self::new(SquatThresholds::default(), AnalysisWindow::default())
    }
}

impl MovementAnalyzer for SquatAnalyzer {
    fn movement(&self) -> Movement {
        Movement::Squat
    }

    fn reference_frame(&self, trajectory: &Trajectory) -> Result<usize> {
        find_extended_frame(&trajectory.angles().hip)
    }

    fn analyze(&self, trajectory: &Trajectory) -> Result<Vec<Warning>> {
        let angles = trajectory.angles();
        let reference = self.reference_frame(trajectory)?;
        let baseline_torso = trajectory.torso_length(reference);
        if baseline_torso == 0.0 {
            return Err(AnalysisError::DegenerateRatio {
                frame: reference,
                ratio: "torso length",
            });
        }

        tracing::debug!(
            "Squat reference frame {} with torso length {:.2}",
            reference,
            baseline_torso
        );

        let mut warnings = Vec::new();
        for frame in evaluation_range(&angles.hip, self.window)? {
            let knee_hip_ratio = checked_ratio(
                angles.knee.at(frame),
                angles.hip.at(frame),
                frame,
                "knee/hip angle",
            )?;

            if knee_hip_ratio > self.thresholds.knee_hip_ratio_limit {
                warnings.push(Warning::new(frame, KNEES_TOO_FAR_FORWARD));
                continue;
            }

            let torso_ratio = trajectory.torso_length(frame) / baseline_torso;
            if torso_ratio < self.thresholds.min_torso_ratio {
                warnings.push(Warning::new(frame, BACK_TOO_BENT));
            }
        }

        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::keypoint::Point2D;
    use crate::models::trajectory::{
        AngleSeries, JointAngles, JointSeries, JointTrajectories, LateralSeries,
    };

    /// Side-on squat with the given hip/knee angles and torso lengths per frame
    fn squat_trajectory(hip: &[f64], knee: &[f64], torso: &[f64]) -> Trajectory {
        let len = hip.len();
        let fixed = |x: f64, y: f64| JointSeries::new(vec![Point2D::new(x, y); len]);
        let shoulder: Vec<Point2D> = torso.iter().map(|t| Point2D::new(100.0, 300.0 - t)).collect();
        let joints = JointTrajectories {
            shoulder: shoulder.into(),
            elbow: fixed(100.0, 150.0),
            wrist: fixed(100.0, 100.0),
            hip: fixed(100.0, 300.0),
            knee: fixed(150.0, 400.0),
            ankle: fixed(100.0, 500.0),
        };
        let angles = JointAngles {
            hip: AngleSeries::new(hip.to_vec()),
            shoulder: AngleSeries::new(vec![90.0; len]),
            knee: AngleSeries::new(knee.to_vec()),
            arm: AngleSeries::new(vec![180.0; len]),
        };
        let lateral = LateralSeries {
            left_shoulder: fixed(80.0, 150.0),
            right_shoulder: fixed(120.0, 150.0),
            left_elbow: fixed(80.0, 200.0),
            right_elbow: fixed(120.0, 200.0),
        };
        Trajectory::from_parts(joints, angles, lateral).unwrap()
    }

    #[test]
    fn test_clean_squat_has_no_warnings() {
        let trajectory = squat_trajectory(
            &[170.0, 150.0, 170.0],
            &[170.0, 130.0, 170.0],
            &[200.0, 200.0, 200.0],
        );
        let analyzer = SquatAnalyzer::default();
        assert_eq!(analyzer.reference_frame(&trajectory).unwrap(), 0);
        assert!(analyzer.analyze(&trajectory).unwrap().is_empty());
    }

    #[test]
    fn test_back_too_bent() {
        let trajectory = squat_trajectory(
            &[170.0, 150.0, 170.0],
            &[170.0, 130.0, 170.0],
            &[200.0, 120.0, 200.0],
        );
        let warnings = SquatAnalyzer::default().analyze(&trajectory).unwrap();
        assert_eq!(warnings, vec![Warning::new(1, BACK_TOO_BENT)]);
    }

    #[test]
    fn test_knees_take_priority_over_back() {
        let trajectory = squat_trajectory(
            &[170.0, 100.0, 170.0],
            &[170.0, 120.0, 170.0],
            &[200.0, 100.0, 200.0],
        );
        let warnings = SquatAnalyzer::default().analyze(&trajectory).unwrap();
        assert_eq!(warnings, vec![Warning::new(1, KNEES_TOO_FAR_FORWARD)]);
    }

    #[test]
    fn test_zero_hip_angle_is_degenerate() {
        let trajectory = squat_trajectory(
            &[170.0, 0.0, 170.0],
            &[170.0, 130.0, 170.0],
            &[200.0, 200.0, 200.0],
        );
        assert!(matches!(
            SquatAnalyzer::default().analyze(&trajectory),
            Err(AnalysisError::DegenerateRatio { frame: 1, .. })
        ));
    }

    #[test]
    fn test_zero_baseline_torso_is_degenerate() {
        let trajectory = squat_trajectory(
            &[170.0, 150.0, 160.0],
            &[170.0, 130.0, 150.0],
            &[0.0, 200.0, 200.0],
        );
        assert!(matches!(
            SquatAnalyzer::default().analyze(&trajectory),
            Err(AnalysisError::DegenerateRatio {
                frame: 0,
                ratio: "torso length"
            })
        ));
    }

    #[test]
    fn test_between_extensions_skips_outer_frames() {
        // Frame 3 bends the back but sits after the last extended frame
        let trajectory = squat_trajectory(
            &[175.0, 150.0, 175.0, 150.0],
            &[175.0, 130.0, 175.0, 130.0],
            &[200.0, 200.0, 200.0, 100.0],
        );
        let full = SquatAnalyzer::default().analyze(&trajectory).unwrap();
        assert_eq!(full, vec![Warning::new(3, BACK_TOO_BENT)]);

        let windowed = SquatAnalyzer::new(
            SquatThresholds::default(),
            AnalysisWindow::BetweenExtensions,
        )
        .analyze(&trajectory)
        .unwrap();
        assert!(windowed.is_empty());
    }
}
