// Kinematic form analysis for squat, bench press and deadlift videos.
// Consumes per-frame pose landmarks and returns consolidated form warnings.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use models::{AnalysisReport, LandmarkFrame, LandmarkSequence, Movement, Point2D, Warning};
pub use services::FormAnalysisService;
