//! Writers for the CSV and JSON outputs

pub mod csv;
pub mod json;

pub use self::csv::{format_record, sort_by_id, write_csv, write_csv_file};
pub use json::{to_json_string, write_json_file};

use crate::error::{FileOperation, PipelineError, PipelineResult};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Create or truncate `path`, hand a buffered writer to `body`, then flush.
///
/// The handle is closed when this returns, on success and on error.
pub(crate) fn write_file<F>(path: &Path, body: F) -> PipelineResult<u64>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|e| PipelineError::io(path, FileOperation::Create, e))?;
    let mut writer = BufWriter::new(file);

    body(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| PipelineError::io(path, FileOperation::Write, e))?;

    let written = writer
        .get_ref()
        .metadata()
        .map(|m| m.len())
        .map_err(|e| PipelineError::io(path, FileOperation::Write, e))?;
    Ok(written)
}
