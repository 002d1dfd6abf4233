/// Form Analysis Service
///
/// Runs one analysis end to end:
/// - Movement selection (rejected before any geometry runs)
/// - Trajectory construction from raw landmark frames
/// - Movement-specific rule evaluation
/// - Temporal consolidation of the raw warnings
///
/// A run either completes with a full report or fails with the first error;
/// nothing is shared between runs, so one service can serve many threads.
use validator::Validate;

use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::keypoint::{LandmarkFrame, LandmarkSequence};
use crate::models::movement::{AnalysisReport, Movement};
use crate::services::movement_analyzer::analyzer_for;
use crate::services::trajectory_builder::TrajectoryBuilder;
use crate::services::warning_consolidator::WarningConsolidator;

#[derive(Debug, Clone, Default)]
pub struct FormAnalysisService {
    config: AnalysisConfig,
}

impl FormAnalysisService {
    /// Create a service, rejecting out-of-range thresholds
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        config.ensure_valid()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze frames for a movement given by name (`squat`, `bench` or `deadlift`)
    pub fn analyze(&self, movement: &str, frames: &[LandmarkFrame]) -> Result<AnalysisReport> {
        let movement: Movement = movement.parse()?;
        self.analyze_movement(movement, frames)
    }

    pub fn analyze_movement(
        &self,
        movement: Movement,
        frames: &[LandmarkFrame],
    ) -> Result<AnalysisReport> {
        let consolidator = WarningConsolidator::from_config(&self.config.consolidation);
        self.run(movement, frames, consolidator)
    }

    /// Analyze a sequence, preferring its own frame rate for consolidation
    pub fn analyze_sequence(
        &self,
        movement: Movement,
        sequence: &LandmarkSequence,
    ) -> Result<AnalysisReport> {
        let consolidation = match sequence.frame_rate {
            Some(frame_rate) => {
                let consolidation = self.config.consolidation.with_frame_rate(frame_rate);
                consolidation.validate()?;
                consolidation
            }
            None => self.config.consolidation.clone(),
        };

        self.run(
            movement,
            &sequence.frames,
            WarningConsolidator::from_config(&consolidation),
        )
    }

    fn run(
        &self,
        movement: Movement,
        frames: &[LandmarkFrame],
        consolidator: WarningConsolidator,
    ) -> Result<AnalysisReport> {
        let trajectory = TrajectoryBuilder::new()
            .with_ankle_source(self.config.ankle_source)
            .build(frames)?;

        let analyzer = analyzer_for(movement, &self.config);
        let reference_frame = analyzer.reference_frame(&trajectory)?;
        let raw = analyzer.analyze(&trajectory)?;
        let warnings = consolidator.consolidate(&raw);

        tracing::info!(
            "Analyzed {} frames of {}: {} raw warnings, {} reported",
            trajectory.frame_count(),
            movement,
            raw.len(),
            warnings.len()
        );

        Ok(AnalysisReport {
            movement,
            frame_count: trajectory.frame_count(),
            reference_frame,
            raw_warning_count: raw.len(),
            merge_window_frames: consolidator.merge_window_frames(),
            warnings,
        })
    }
}
