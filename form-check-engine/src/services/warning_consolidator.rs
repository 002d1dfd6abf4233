/// Warning consolidation
///
/// A sustained fault is flagged on every frame it persists for. Consolidation
/// keeps one warning per cluster: a warning survives only if it lands at
/// least `merge_window_frames` after the previously kept one, so the earliest
/// warning of each cluster (and its message) is the one reported.
use crate::config::ConsolidationConfig;
use crate::models::movement::Warning;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WarningConsolidator {
    merge_window_frames: usize,
}

impl WarningConsolidator {
    pub fn new(merge_window_frames: usize) -> Self {
        Self {
            merge_window_frames,
        }
    }

    pub fn from_config(config: &ConsolidationConfig) -> Self {
        Self::new(config.merge_window_frames())
    }

    pub fn merge_window_frames(&self) -> usize {
        self.merge_window_frames
    }

    /// Reduce frame-ordered raw warnings so no two kept warnings are closer
    /// than the merge window
    pub fn consolidate(&self, warnings: &[Warning]) -> Vec<Warning> {
        let mut ordered = warnings.to_vec();
        // Stable, so equal frames keep their emission order
        ordered.sort_by_key(|warning| warning.frame);

        let kept = ordered
            .into_iter()
            .fold(Vec::<Warning>::new(), |mut kept, warning| {
                let clear_of_last = kept
                    .last()
                    .map_or(true, |last| warning.frame - last.frame >= self.merge_window_frames);
                if clear_of_last {
                    kept.push(warning);
                }
                kept
            });

        tracing::debug!(
            "Consolidated {} raw warnings into {} (window {} frames)",
            warnings.len(),
            kept.len(),
            self.merge_window_frames
        );

        kept
    }
}

impl Default for WarningConsolidator {
    fn default() -> Self {
        Self::from_config(&ConsolidationConfig::default())
    }
}
