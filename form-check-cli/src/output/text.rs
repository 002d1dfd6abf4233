use std::fmt::Write;

use colored::Colorize;

use super::FileReport;

/// Render reports as an indented warning list, one block per file
pub fn render_text(reports: &[FileReport]) -> String {
    let mut out = String::new();

    for (index, file) in reports.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }

        let report = &file.report;
        let _ = writeln!(
            out,
            "{} {} ({} frames, reference frame {})",
            file.path.display().to_string().bold(),
            report.movement,
            report.frame_count,
            report.reference_frame
        );

        if report.is_clean() {
            let _ = writeln!(out, "  {}", "✓ No form issues detected".green());
            continue;
        }

        for warning in &report.warnings {
            let _ = writeln!(
                out,
                "  {} (t={:.2}s): {}",
                format!("frame {}", warning.frame).yellow(),
                warning.timestamp_secs(file.frame_rate),
                warning.message
            );
        }

        let _ = writeln!(
            out,
            "  {} warning(s) from {} flagged frames (merge window {} frames)",
            report.warnings.len(),
            report.raw_warning_count,
            report.merge_window_frames
        );
    }

    out
}
