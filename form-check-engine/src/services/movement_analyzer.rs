use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, Result};
use crate::models::movement::{Movement, Warning};
use crate::models::trajectory::Trajectory;
use crate::services::bench_analyzer::BenchAnalyzer;
use crate::services::deadlift_analyzer::DeadliftAnalyzer;
use crate::services::squat_analyzer::SquatAnalyzer;

/// Rule set for one lift.
///
/// Implementations are pure: the same trajectory always yields the same
/// warnings, in frame order, with at most one warning per frame.
pub trait MovementAnalyzer: Send + Sync {
    fn movement(&self) -> Movement;

    /// Frame whose pose the analyzer normalizes against
    fn reference_frame(&self, trajectory: &Trajectory) -> Result<usize>;

    /// Raw, unconsolidated warnings for every offending frame
    fn analyze(&self, trajectory: &Trajectory) -> Result<Vec<Warning>>;
}

/// Build the analyzer for `movement` from the matching threshold block
pub fn analyzer_for(movement: Movement, config: &AnalysisConfig) -> Box<dyn MovementAnalyzer> {
    match movement {
        Movement::Squat => Box::new(SquatAnalyzer::new(config.squat.clone(), config.window)),
        Movement::Bench => Box::new(BenchAnalyzer::new(config.bench.clone(), config.window)),
        Movement::Deadlift => {
            Box::new(DeadliftAnalyzer::new(config.deadlift.clone(), config.window))
        }
    }
}

/// `numerator / denominator`, failing on an exactly-zero denominator
pub(crate) fn checked_ratio(
    numerator: f64,
    denominator: f64,
    frame: usize,
    ratio: &'static str,
) -> Result<f64> {
    if denominator == 0.0 {
        return Err(AnalysisError::DegenerateRatio { frame, ratio });
    }
    Ok(numerator / denominator)
}
