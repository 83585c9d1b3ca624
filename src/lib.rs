//! District file conversion
//!
//! Reads fixed-width district records, converts them to semicolon-delimited
//! CSV, reads the CSV back, writes JSON and stores the records in SQLite in a
//! single transaction.

pub mod cli;
pub mod conversion;
pub mod error;
pub mod formatter;
pub mod model;
pub mod parser;
pub mod storage;

// Re-export commonly used types
pub use conversion::{run_pipeline, Pipeline, PipelineConfig, PipelineReport, PipelineStage};
pub use error::{PipelineError, PipelineResult};
pub use model::District;
pub use storage::DistrictStore;

/// Sort, write as CSV and read the text back, entirely in memory.
pub fn csv_round_trip(districts: &[District]) -> PipelineResult<Vec<District>> {
    let mut buffer = Vec::new();
    formatter::write_csv(&mut buffer, districts).map_err(|e| {
        PipelineError::io(
            std::path::Path::new("<memory>"),
            error::FileOperation::Write,
            e,
        )
    })?;
    let text = String::from_utf8_lossy(&buffer).into_owned();
    parser::parse_csv(&parser::TextSource::String(text))
}
