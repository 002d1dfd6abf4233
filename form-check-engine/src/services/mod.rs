pub mod bench_analyzer;
pub mod deadlift_analyzer;
pub mod form_analysis_service;
pub mod geometry;
pub mod movement_analyzer;
pub mod reference_frame;
pub mod squat_analyzer;
pub mod trajectory_builder;
pub mod warning_consolidator;

pub use bench_analyzer::BenchAnalyzer;
pub use deadlift_analyzer::DeadliftAnalyzer;
pub use form_analysis_service::FormAnalysisService;
pub use movement_analyzer::{analyzer_for, MovementAnalyzer};
pub use squat_analyzer::SquatAnalyzer;
pub use trajectory_builder::TrajectoryBuilder;
pub use warning_consolidator::WarningConsolidator;
