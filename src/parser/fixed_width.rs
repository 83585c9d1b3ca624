//! Fixed-width line parser: `IIIII NNNN...`

use crate::error::{PipelineError, PipelineResult};
use crate::model::{District, ID_WIDTH};
use crate::parser::TextSource;
use std::path::Path;
use tracing::debug;

/// Name column starts after the ID and one separator character.
const NAME_OFFSET: usize = ID_WIDTH + 1;

/// Parse one source line. `line_number` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_number: usize) -> PipelineResult<District> {
    let length = line.chars().count();
    if length < ID_WIDTH {
        return Err(PipelineError::MalformedLine {
            line: line_number,
            length,
        });
    }

    let id_end = byte_offset(line, ID_WIDTH);
    let name_start = byte_offset(line, NAME_OFFSET);

    Ok(District::new(&line[..id_end], line[name_start..].trim()))
}

/// Parse every line of a source into districts, in file order.
pub fn parse_districts(source: &TextSource) -> PipelineResult<Vec<District>> {
    let lines = source.read_lines()?;
    debug!(lines = lines.len(), source = %source.description(), "read fixed-width source");

    lines
        .iter()
        .enumerate()
        .map(|(index, line)| parse_line(line, index + 1))
        .collect()
}

/// Read and parse the fixed-width file at `path`.
pub fn read_districts(path: &Path) -> PipelineResult<Vec<District>> {
    parse_districts(&TextSource::File(path.to_path_buf()))
}

/// Byte offset of the `chars`-th character, clamped to the end of the line.
fn byte_offset(line: &str, chars: usize) -> usize {
    line.char_indices()
        .nth(chars)
        .map(|(offset, _)| offset)
        .unwrap_or(line.len())
}
