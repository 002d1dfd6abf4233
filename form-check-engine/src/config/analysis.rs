use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::Result;

/// Thresholds and tuning knobs for a full analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub ankle_source: AnkleSource,

    #[serde(default)]
    pub window: AnalysisWindow,

    #[serde(default)]
    pub squat: SquatThresholds,

    #[serde(default)]
    pub bench: BenchThresholds,

    #[serde(default)]
    pub deadlift: DeadliftThresholds,

    #[serde(default)]
    pub consolidation: ConsolidationConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_squat_finite"))]
pub struct SquatThresholds {
    /// knee/hip angle ratio above which the knees travel too far forward
    #[serde(default = "default_squat_knee_hip_ratio_limit")]
    #[validate(range(min = 0.0, message = "Knee/hip ratio limit must not be negative"))]
    pub knee_hip_ratio_limit: f64,

    /// Fraction of the reference torso length below which the back is too bent
    #[serde(default = "default_min_torso_ratio")]
    #[validate(range(min = 0.0, max = 1.0, message = "Torso ratio must be between 0 and 1"))]
    pub min_torso_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_bench_finite"))]
pub struct BenchThresholds {
    /// Horizontal shoulder-to-elbow offset, as a fraction of shoulder width
    #[serde(default = "default_max_elbow_offset_ratio")]
    #[validate(range(min = 0.0, message = "Elbow offset ratio must not be negative"))]
    pub max_elbow_offset_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_deadlift_band"))]
pub struct DeadliftThresholds {
    #[serde(default = "default_min_torso_ratio")]
    #[validate(range(min = 0.0, max = 1.0, message = "Torso ratio must be between 0 and 1"))]
    pub min_torso_ratio: f64,

    #[serde(default = "default_deadlift_max_knee_hip_ratio")]
    #[validate(range(min = 0.0, message = "Knee/hip ratio bound must not be negative"))]
    pub max_knee_hip_ratio: f64,

    #[serde(default = "default_deadlift_min_knee_hip_ratio")]
    #[validate(range(min = 0.0, message = "Knee/hip ratio bound must not be negative"))]
    pub min_knee_hip_ratio: f64,

    /// How far the hip must sit above the knee, as a fraction of the
    /// reference torso length, for the knee/hip ratio rule to apply
    #[serde(default = "default_deadlift_hip_clearance_ratio")]
    #[validate(range(min = 0.0, message = "Hip clearance ratio must not be negative"))]
    pub hip_clearance_ratio: f64,

    /// Allowed shoulder drift behind the hip, as a fraction of torso length
    #[serde(default = "default_deadlift_lean_back_ratio")]
    #[validate(range(min = 0.0, message = "Lean back ratio must not be negative"))]
    pub lean_back_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_consolidation_finite"))]
pub struct ConsolidationConfig {
    /// Frame rate of the source video in frames per second
    #[serde(default = "default_frame_rate")]
    #[validate(range(min = 1.0, max = 1000.0, message = "Frame rate must be between 1 and 1000 fps"))]
    pub frame_rate: f64,

    /// Minimum spacing between two reported warnings, in seconds
    #[serde(default = "default_merge_window_secs")]
    #[validate(range(min = 0.0, max = 60.0, message = "Merge window must be between 0 and 60 seconds"))]
    pub merge_window_secs: f64,
}

/// Which landmarks feed the derived ankle joint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnkleSource {
    /// Right ankle only, matching what the upstream pipeline has always produced
    #[default]
    RightOnly,
    /// Midpoint of the left and right ankle
    Bilateral,
}

/// Frames on which the per-frame rules are evaluated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisWindow {
    #[default]
    FullSequence,
    /// Only frames strictly between the first and last most-extended frame
    BetweenExtensions,
}

// Struct-level checks; `range` alone accepts NaN
fn schema_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

fn ensure_finite(values: &[f64]) -> std::result::Result<(), ValidationError> {
    if values.iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(schema_error("non_finite", "Thresholds must be finite numbers"))
    }
}

fn validate_squat_finite(t: &SquatThresholds) -> std::result::Result<(), ValidationError> {
    ensure_finite(&[t.knee_hip_ratio_limit, t.min_torso_ratio])
}

fn validate_bench_finite(t: &BenchThresholds) -> std::result::Result<(), ValidationError> {
    ensure_finite(&[t.max_elbow_offset_ratio])
}

fn validate_deadlift_band(t: &DeadliftThresholds) -> std::result::Result<(), ValidationError> {
    ensure_finite(&[
        t.min_torso_ratio,
        t.max_knee_hip_ratio,
        t.min_knee_hip_ratio,
        t.hip_clearance_ratio,
        t.lean_back_ratio,
    ])?;
    if t.min_knee_hip_ratio > t.max_knee_hip_ratio {
        return Err(schema_error(
            "inverted_band",
            "min_knee_hip_ratio must not exceed max_knee_hip_ratio",
        ));
    }
    Ok(())
}

fn validate_consolidation_finite(
    c: &ConsolidationConfig,
) -> std::result::Result<(), ValidationError> {
    ensure_finite(&[c.frame_rate, c.merge_window_secs])
}

// Default value functions
fn default_squat_knee_hip_ratio_limit() -> f64 {
    1.0
}

fn default_min_torso_ratio() -> f64 {
    0.7
}

fn default_max_elbow_offset_ratio() -> f64 {
    0.8
}

fn default_deadlift_max_knee_hip_ratio() -> f64 {
    3.0
}

fn default_deadlift_min_knee_hip_ratio() -> f64 {
    0.7
}

fn default_deadlift_hip_clearance_ratio() -> f64 {
    0.4
}

fn default_deadlift_lean_back_ratio() -> f64 {
    0.2
}

fn default_frame_rate() -> f64 {
    50.0
}

fn default_merge_window_secs() -> f64 {
    0.5
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            squat: SquatThresholds::default(),
            bench: BenchThresholds::default(),
            deadlift: DeadliftThresholds::default(),
            consolidation: ConsolidationConfig::default(),
            ankle_source: AnkleSource::default(),
            window: AnalysisWindow::default(),
        }
    }
}

impl Default for SquatThresholds {
    fn default() -> Self {
        Self {
            knee_hip_ratio_limit: default_squat_knee_hip_ratio_limit(),
            min_torso_ratio: default_min_torso_ratio(),
        }
    }
}

impl Default for BenchThresholds {
    fn default() -> Self {
        Self {
            max_elbow_offset_ratio: default_max_elbow_offset_ratio(),
        }
    }
}

impl Default for DeadliftThresholds {
    fn default() -> Self {
        Self {
            min_torso_ratio: default_min_torso_ratio(),
            max_knee_hip_ratio: default_deadlift_max_knee_hip_ratio(),
            min_knee_hip_ratio: default_deadlift_min_knee_hip_ratio(),
            hip_clearance_ratio: default_deadlift_hip_clearance_ratio(),
            lean_back_ratio: default_deadlift_lean_back_ratio(),
        }
    }
}

impl Default for ConsolidationConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            merge_window_secs: default_merge_window_secs(),
        }
    }
}

impl ConsolidationConfig {
    /// Merge window expressed in frames at the configured frame rate
    pub fn merge_window_frames(&self) -> usize {
        (self.frame_rate * self.merge_window_secs).round() as usize
    }

    pub fn with_frame_rate(&self, frame_rate: f64) -> Self {
        Self {
            frame_rate,
            ..self.clone()
        }
    }
}

impl AnalysisConfig {
    /// Check every threshold block, failing with `InvalidConfig` on the first
    /// block that is out of range
    pub fn ensure_valid(&self) -> Result<()> {
        self.squat.validate()?;
        self.bench.validate()?;
        self.deadlift.validate()?;
        self.consolidation.validate()?;
        Ok(())
    }
}
