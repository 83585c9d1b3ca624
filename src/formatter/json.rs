//! Pretty-printed JSON writer

use crate::error::PipelineResult;
use crate::formatter::write_file;
use crate::model::District;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Serialize districts as an indented JSON array, keeping their order.
pub fn to_json_string(districts: &[District]) -> PipelineResult<String> {
    Ok(serde_json::to_string_pretty(districts)?)
}

/// Create or truncate `path` and write the JSON document. Returns bytes written.
pub fn write_json_file(path: &Path, districts: &[District]) -> PipelineResult<u64> {
    let content = to_json_string(districts)?;
    let bytes = write_file(path, |writer| writer.write_all(content.as_bytes()))?;
    debug!(path = %path.display(), bytes, "wrote JSON");
    Ok(bytes)
}
