// Line-oriented file persistence
//
// The on-disk format is two plain-text lines per entry: the display
// string, then the name key. No header, no escaping, no versioning.
// Whether a file may be loaded at all is the session's call; this
// module only moves lines.

use crate::core::entry::Entry;
use crate::error::{BookError, Result};
use std::fs;
use std::io::Write;

/// Write every entry as a display/name line pair, truncating any
/// existing file of that name.
pub fn save_entries(filename: &str, entries: &[Entry]) -> Result<()> {
    let mut file = fs::File::create(filename)?;
    for entry in entries {
        writeln!(file, "{}", entry.display)?;
        writeln!(file, "{}", entry.name_key)?;
    }
    Ok(())
}

/// Read a saved file back into entries. Every line pair becomes one
/// entry, taken as-is; a dangling final line without a partner is
/// ignored rather than crashing the load.
pub fn load_entries(filename: &str) -> Result<Vec<Entry>> {
    let contents = fs::read_to_string(filename).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BookError::FileNotFound(filename.to_string())
        } else {
            BookError::Io(e)
        }
    })?;

    let lines: Vec<&str> = contents.lines().collect();
    Ok(lines
        .chunks_exact(2)
        .map(|pair| Entry::from_lines(pair[0], pair[1]))
        .collect())
}
