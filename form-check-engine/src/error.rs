use thiserror::Error;

use crate::models::trajectory::JointAngleKind;
use crate::services::geometry::GeometryError;

/// Errors raised while analyzing a landmark sequence
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Landmark sequence contains no frames")]
    EmptySequence,

    #[error("Invalid movement type: {0} (expected squat, bench or deadlift)")]
    InvalidMovement(String),

    #[error("Degenerate geometry for {angle} angle at frame {frame}")]
    DegenerateGeometry {
        frame: usize,
        angle: JointAngleKind,
        #[source]
        source: GeometryError,
    },

    #[error("Degenerate ratio ({ratio}) at frame {frame}: denominator is zero")]
    DegenerateRatio { frame: usize, ratio: &'static str },

    #[error("Frame {frame} is missing landmark {landmark} (only {found} landmarks present)")]
    MalformedFrame {
        frame: usize,
        landmark: &'static str,
        found: usize,
    },

    #[error("Series {series} has {found} frames, expected {expected}")]
    MisalignedSeries {
        series: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid analysis configuration: {0}")]
    InvalidConfig(#[from] validator::ValidationErrors),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
