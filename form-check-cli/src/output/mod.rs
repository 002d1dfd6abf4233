mod text;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use form_check_engine::AnalysisReport;

pub use text::render_text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable warning list
    #[default]
    Text,
    /// JSON array with one report per file
    Json,
}

/// Analysis result for one input file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    /// Frame rate used to turn frame indices into timestamps
    pub frame_rate: f64,
    #[serde(flatten)]
    pub report: AnalysisReport,
}

pub fn render(reports: &[FileReport], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(reports)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(reports).context("Failed to serialize reports")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use form_check_engine::{Movement, Warning};

    fn report() -> FileReport {
        FileReport {
            path: PathBuf::from("squat.json"),
            frame_rate: 50.0,
            report: AnalysisReport {
                movement: Movement::Squat,
                frame_count: 70,
                reference_frame: 0,
                raw_warning_count: 30,
                merge_window_frames: 25,
                warnings: vec![Warning::new(30, "Knees too far forward")],
            },
        }
    }

    #[test]
    fn test_json_report_is_flat() {
        let json = render(&[report()], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["path"], "squat.json");
        assert_eq!(value[0]["movement"], "squat");
        assert_eq!(value[0]["warnings"][0]["frame"], 30);
        assert_eq!(value[0]["warnings"][0]["message"], "Knees too far forward");
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_str("json", true).unwrap(), OutputFormat::Json);
        assert_eq!(
            serde_json::to_string(&OutputFormat::Text).unwrap(),
            "\"text\""
        );
    }
}
