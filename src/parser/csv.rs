//! Reader for the semicolon-delimited intermediate file

use crate::error::{PipelineError, PipelineResult};
use crate::formatter::csv::DELIMITER;
use crate::model::District;
use crate::parser::TextSource;
use std::path::Path;
use tracing::debug;

/// Parse one `ID;Name;` record. Fields past the second are ignored.
pub fn parse_csv_line(line: &str, line_number: usize) -> PipelineResult<District> {
    let mut fields = line.split(DELIMITER);

    match (fields.next(), fields.next()) {
        (Some(id), Some(name)) => Ok(District::new(id, name)),
        _ => Err(PipelineError::MalformedRecord {
            line: line_number,
            fields: line.split(DELIMITER).count(),
        }),
    }
}

/// Parse all records of a CSV source into a fresh collection, in file order.
pub fn parse_csv(source: &TextSource) -> PipelineResult<Vec<District>> {
    let lines = source.read_lines()?;
    debug!(lines = lines.len(), source = %source.description(), "read CSV source");

    lines
        .iter()
        .enumerate()
        .map(|(index, line)| parse_csv_line(line, index + 1))
        .collect()
}

/// Read and parse the CSV file at `path`.
pub fn read_csv_file(path: &Path) -> PipelineResult<Vec<District>> {
    parse_csv(&TextSource::File(path.to_path_buf()))
}
