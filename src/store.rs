use std::io::Write as _;
use std::path::Path;

use serde::Serialize as _;
use serde_json::ser::PrettyFormatter;

use crate::error::VocabError;
use crate::extract::VocabRecord;

/// Write the full record sequence to `path`, replacing any existing
/// store in one atomic rename.
///
/// The body is written to a temp file in the same directory first, so a
/// failure partway through never truncates a valid store. Tab
/// indentation, and non-ASCII stays literal (serde_json does not escape
/// it), so the stored kanji remain readable in the file.
pub fn save(path: &Path, records: &[VocabRecord]) -> Result<(), VocabError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let file_err = |source: std::io::Error| VocabError::FileAccess {
        path: path.to_path_buf(),
        source,
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(file_err)?;
    {
        let formatter = PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut tmp, formatter);
        records
            .serialize(&mut ser)
            .map_err(|err| file_err(std::io::Error::other(err)))?;
    }
    tmp.write_all(b"\n").map_err(file_err)?;
    tmp.flush().map_err(file_err)?;
    tmp.persist(path).map_err(|err| file_err(err.error))?;

    tracing::debug!(count = records.len(), path = %path.display(), "saved store");
    Ok(())
}

/// Read the full record sequence back from `path`.
pub fn load(path: &Path) -> Result<Vec<VocabRecord>, VocabError> {
    let text = std::fs::read_to_string(path).map_err(|source| VocabError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|err| VocabError::CorruptStore {
        path: path.to_path_buf(),
        detail: err.to_string(),
    })
}
