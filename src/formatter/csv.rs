//! Semicolon-delimited writer
//!
//! Records are written as `ID;Name;\r\n` with no header and no quoting. A name
//! that contains the delimiter is written verbatim and will not read back
//! intact.

use crate::error::PipelineResult;
use crate::formatter::write_file;
use crate::model::District;
use std::io::Write;
use std::path::Path;
use tracing::{debug, warn};

/// Field delimiter shared with the reader.
pub const DELIMITER: char = ';';

/// Record terminator.
pub const LINE_ENDING: &str = "\r\n";

/// Return a copy sorted by ID (byte-wise, stable).
pub fn sort_by_id(districts: &[District]) -> Vec<District> {
    let mut sorted = districts.to_vec();
    sorted.sort_by(|a, b| a.id().cmp(b.id()));
    sorted
}

/// Render one record as `ID;Name;\r\n`.
pub fn format_record(district: &District) -> String {
    format!(
        "{id}{d}{name}{d}{eol}",
        id = district.id(),
        name = district.name(),
        d = DELIMITER,
        eol = LINE_ENDING
    )
}

/// Sort by ID and write every record to `writer`.
pub fn write_csv<W: Write>(writer: &mut W, districts: &[District]) -> std::io::Result<()> {
    for district in sort_by_id(districts) {
        if district.name().contains(DELIMITER) || district.id().contains(DELIMITER) {
            warn!(id = district.id(), "record contains ';' and will not survive a re-read");
        }
        writer.write_all(format_record(&district).as_bytes())?;
    }
    Ok(())
}

/// Create or truncate `path` and write the sorted records. Returns bytes written.
pub fn write_csv_file(path: &Path, districts: &[District]) -> PipelineResult<u64> {
    let bytes = write_file(path, |writer| write_csv(writer, districts))?;
    debug!(path = %path.display(), bytes, "wrote CSV");
    Ok(bytes)
}
