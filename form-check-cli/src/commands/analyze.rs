use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use futures::future::try_join_all;

use form_check_engine::config::AnalysisWindow;
use form_check_engine::{FormAnalysisService, LandmarkSequence, Movement};

use crate::config::Config;
use crate::output::{self, FileReport, OutputFormat};

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Movement performed in the recordings (squat, bench or deadlift)
    movement: String,

    /// Landmark sequence files (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (defaults to the configured format)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Recording frame rate, overriding the file and the configuration
    #[arg(long)]
    frame_rate: Option<f64>,

    /// Only evaluate frames between the first and last full extension
    #[arg(long)]
    between_extensions: bool,
}

impl AnalyzeCommand {
    pub async fn execute(self, config_path: Option<&Path>) -> Result<()> {
        // Reject unknown movements before touching any file
        let movement: Movement = self.movement.parse()?;

        let config = Config::load(config_path)?;
        if !config.output.color {
            colored::control::set_override(false);
        }

        let mut analysis = config.analysis.clone();
        if self.between_extensions {
            analysis.window = AnalysisWindow::BetweenExtensions;
        }
        let default_frame_rate = analysis.consolidation.frame_rate;
        let service =
            Arc::new(FormAnalysisService::new(analysis).context("Invalid analysis configuration")?);

        tracing::debug!("Analyzing {} file(s) as {}", self.files.len(), movement);

        let runs = self.files.iter().map(|path| {
            analyze_file(
                Arc::clone(&service),
                movement,
                path.clone(),
                self.frame_rate,
                default_frame_rate,
            )
        });
        let reports = try_join_all(runs).await?;

        let format = self.format.unwrap_or(config.output.format);
        let rendered = output::render(&reports, format)?;
        println!("{}", rendered.trim_end());

        Ok(())
    }
}

async fn analyze_file(
    service: Arc<FormAnalysisService>,
    movement: Movement,
    path: PathBuf,
    frame_rate: Option<f64>,
    default_frame_rate: f64,
) -> Result<FileReport> {
    let contents = tokio::fs::read_to_string(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut sequence = LandmarkSequence::from_json(&contents)
        .with_context(|| format!("Failed to parse landmark sequence in {}", path.display()))?;
    if frame_rate.is_some() {
        sequence.frame_rate = frame_rate;
    }
    let effective_frame_rate = sequence.frame_rate.unwrap_or(default_frame_rate);

    // Geometry is CPU-bound; keep it off the async workers
    let task = move || service.analyze_sequence(movement, &sequence);
    let report = tokio::task::spawn_blocking(task)
        .await
        .context("Analysis task failed")?
        .with_context(|| format!("Failed to analyze {}", path.display()))?;

    Ok(FileReport {
        path,
        frame_rate: effective_frame_rate,
        report,
    })
}
