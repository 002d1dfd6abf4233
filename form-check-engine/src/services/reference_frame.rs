/// Reference-frame location
///
/// The reference frame is where a tracked joint is closest to a straight
/// line (180°). Baseline lengths measured there turn absolute pixel distances
/// into ratios that hold across subjects and camera distances.
use std::ops::Range;

use crate::config::AnalysisWindow;
use crate::error::{AnalysisError, Result};
use crate::models::trajectory::AngleSeries;

fn extension_gap(degrees: f64) -> f64 {
    180.0 - degrees
}

/// Earliest frame whose angle is closest to 180°
pub fn find_extended_frame(series: &AngleSeries) -> Result<usize> {
    series
        .as_slice()
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (frame, &degrees)| {
            let gap = extension_gap(degrees);
            match best {
                Some((_, best_gap)) if best_gap <= gap => best,
                _ => Some((frame, gap)),
            }
        })
        .map(|(frame, _)| frame)
        .ok_or(AnalysisError::EmptySequence)
}

/// Latest frame whose angle is closest to 180°
pub fn find_last_extended_frame(series: &AngleSeries) -> Result<usize> {
    series
        .as_slice()
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (frame, &degrees)| {
            let gap = extension_gap(degrees);
            match best {
                Some((_, best_gap)) if best_gap < gap => best,
                _ => Some((frame, gap)),
            }
        })
        .map(|(frame, _)| frame)
        .ok_or(AnalysisError::EmptySequence)
}

/// Frames the per-frame rules run over for the given window
pub fn evaluation_range(series: &AngleSeries, window: AnalysisWindow) -> Result<Range<usize>> {
    match window {
        AnalysisWindow::FullSequence => {
            if series.is_empty() {
                return Err(AnalysisError::EmptySequence);
            }
            Ok(0..series.len())
        }
        AnalysisWindow::BetweenExtensions => {
            let first = find_extended_frame(series)?;
            let last = find_last_extended_frame(series)?;
            // An empty range when the extensions coincide or are adjacent
            Ok(first + 1..last.max(first + 1))
        }
    }
}
