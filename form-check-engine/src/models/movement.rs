use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AnalysisError;

/// Lifts supported by the form analysis engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    Squat,
    Bench,
    Deadlift,
}

impl Movement {
    pub fn all() -> [Self; 3] {
        [Self::Squat, Self::Bench, Self::Deadlift]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Movement::Squat => "squat",
            Movement::Bench => "bench",
            Movement::Deadlift => "deadlift",
        }
    }
}

impl fmt::Display for Movement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Movement {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "squat" => Ok(Movement::Squat),
            "bench" => Ok(Movement::Bench),
            "deadlift" => Ok(Movement::Deadlift),
            other => Err(AnalysisError::InvalidMovement(other.to_string())),
        }
    }
}

/// A flagged frame paired with a form-correction message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub frame: usize,
    pub message: String,
}

impl Warning {
    pub fn new(frame: usize, message: impl Into<String>) -> Self {
        Self {
            frame,
            message: message.into(),
        }
    }

    /// Seconds from the start of the video, given its frame rate
    pub fn timestamp_secs(&self, frame_rate: f64) -> f64 {
        self.frame as f64 / frame_rate
    }
}

/// Outcome of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub movement: Movement,
    pub frame_count: usize,
    /// Most-extended frame the analyzer normalized against
    pub reference_frame: usize,
    /// Warnings emitted before temporal consolidation
    pub raw_warning_count: usize,
    pub merge_window_frames: usize,
    pub warnings: Vec<Warning>,
}

impl AnalysisReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
