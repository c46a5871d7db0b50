//! The summary artifact: a JSON array of note records, written once by the
//! builder and read by the server at startup. This file is the only handoff
//! point between the two processes.

use crate::error::Result;
use crate::model::NoteRecord;
use std::fs;
use std::path::Path;

pub const SUMMARY_FILENAME: &str = "summary.json";

/// Write the record sequence, in discovery order, as a single JSON array.
pub fn write<P: AsRef<Path>>(path: P, records: &[NoteRecord]) -> Result<()> {
    let json = serde_json::to_string(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a summary artifact back into a record sequence.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<NoteRecord>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
