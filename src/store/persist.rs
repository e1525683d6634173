//! Persistence adapter
//!
//! Whole-collection reads and writes of the JSON backing file.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::Result;
use crate::record::StudentRecord;

/// Indentation used for the backing file
const INDENT: &[u8] = b"    ";

/// Load every record from `path`
///
/// A missing file and a blank file both yield an empty collection.
/// Malformed content is returned as [`crate::RecordsError::Serialization`].
pub fn load(path: &Path) -> Result<Vec<StudentRecord>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("No records file at {}, starting empty", path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(serde_json::from_str(&content)?)
}

/// Overwrite `path` with the full collection
///
/// Not atomic: a crash mid-write can leave a truncated file.
pub fn save(path: &Path, records: &[StudentRecord]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = fs::File::create(path)?;
    let mut writer = BufWriter::new(file);

    let mut serializer = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    tracing::debug!("Saved {} records to {}", records.len(), path.display());
    Ok(())
}
