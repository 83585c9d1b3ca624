//! Conversion pipeline module
//!
//! This module contains the pipeline runner, its configuration, and run statistics.

pub mod config;
pub mod engine;
pub mod stats;

pub use config::PipelineConfig;
pub use engine::{run_pipeline, Pipeline};
pub use stats::{PipelineReport, PipelineStage, StageStatistics};
