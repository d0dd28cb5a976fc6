//! Line-oriented reading of source text files.

use crate::model::error::SourceError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read `path` as an ordered list of lines.
///
/// Lines end at `\n` or `\r\n`; terminators are stripped. Bytes that are not
/// valid UTF-8 are replaced rather than rejected, so files saved in a legacy
/// encoding still show something.
///
/// # Errors
///
/// Returns `SourceError::NotFound` if the file does not exist and
/// `SourceError::Read` for any other I/O failure.
pub fn read_lines(path: &Path) -> Result<Vec<String>, SourceError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SourceError::NotFound {
            path: path.to_path_buf(),
        },
        _ => SourceError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let text = String::from_utf8_lossy(&bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    Ok(text.lines().map(str::to_string).collect())
}
