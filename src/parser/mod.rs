//! Readers for the fixed-width source and the intermediate CSV file

pub mod csv;
pub mod fixed_width;

pub use self::csv::{parse_csv, parse_csv_line, read_csv_file};
pub use fixed_width::{parse_districts, parse_line, read_districts};

use crate::error::{FileOperation, PipelineError, PipelineResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

const UTF8_BOM: char = '\u{feff}';

/// Where a stage reads its text from
#[derive(Debug, Clone, PartialEq)]
pub enum TextSource {
    /// In-memory text
    String(String),
    /// File on disk
    File(PathBuf),
}

impl TextSource {
    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            TextSource::String(_) => "string input".to_string(),
            TextSource::File(path) => format!("file: {}", path.display()),
        }
    }

    /// Read every line, with terminators removed, in source order.
    pub fn read_lines(&self) -> PipelineResult<Vec<String>> {
        match self {
            TextSource::String(content) => collect_lines(content.as_bytes(), None),
            TextSource::File(path) => {
                let file = open(path)?;
                collect_lines(BufReader::new(file), Some(path))
            }
        }
    }
}

pub(crate) fn open(path: &Path) -> PipelineResult<File> {
    File::open(path).map_err(|e| PipelineError::io(path, FileOperation::Open, e))
}

/// Collect lines from a reader, dropping a leading byte order mark.
///
/// `lines()` strips both `\n` and `\r\n` terminators.
pub(crate) fn collect_lines<R: BufRead>(
    reader: R,
    path: Option<&Path>,
) -> PipelineResult<Vec<String>> {
    let mut lines = Vec::new();

    for line in reader.lines() {
        let mut line = line.map_err(|e| {
            PipelineError::io(path.unwrap_or(Path::new("<memory>")), FileOperation::Read, e)
        })?;
        if lines.is_empty() && line.starts_with(UTF8_BOM) {
            line.remove(0);
        }
        lines.push(line);
    }

    Ok(lines)
}
