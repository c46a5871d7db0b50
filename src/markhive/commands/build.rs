//! The batch builder: notes directory in, HTML archive plus summary out.
//!
//! Each note is an independent unit of work. A note that fails to read or
//! parse is reported as a warning and skipped; the run continues and the
//! summary holds every note that succeeded, in discovery order.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MarkhiveError, Result};
use crate::frontmatter;
use crate::model::NoteRecord;
use crate::render;
use crate::summary;
use std::fs;
use std::path::{Path, PathBuf};

pub fn run(notes_dir: &Path, out_dir: &Path, note_extensions: &[String]) -> Result<CmdResult> {
    if !notes_dir.is_dir() {
        return Err(MarkhiveError::Build(format!(
            "Notes directory not found: {}",
            notes_dir.display()
        )));
    }
    fs::create_dir_all(out_dir)?;

    let mut result = CmdResult::default();
    let mut records = Vec::new();
    let mut written = Vec::new();

    for path in discover_notes(notes_dir, note_extensions)? {
        match process_note(&path, out_dir) {
            Ok((record, html_path)) => {
                tracing::debug!(file = %record.file, title = %record.title, "indexed note");
                written.push(html_path);
                records.push(record);
            }
            Err(e) => {
                result.add_message(CmdMessage::warning(format!(
                    "Could not process {}: {}",
                    path.display(),
                    e
                )));
            }
        }
    }

    let summary_path = out_dir.join(summary::SUMMARY_FILENAME);
    summary::write(&summary_path, &records)?;
    written.push(summary_path.clone());

    result.add_message(CmdMessage::success(format!(
        "Indexed {} notes -> {}",
        records.len(),
        summary_path.display()
    )));
    Ok(result.with_records(records).with_written_files(written))
}

/// List note files in the directory, sorted by filename so discovery order is
/// stable across runs and filesystems.
fn discover_notes(notes_dir: &Path, note_extensions: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(notes_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension() {
            let ext = format!(".{}", ext.to_string_lossy());
            if note_extensions.contains(&ext) {
                paths.push(path);
            }
        }
    }
    paths.sort();
    Ok(paths)
}

fn process_note(path: &Path, out_dir: &Path) -> Result<(NoteRecord, PathBuf)> {
    let source = read_with_retry(path)?;
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "untitled".to_string());

    let split = frontmatter::split(&source);
    let front_matter = match &split.metadata {
        Some(yaml) => frontmatter::parse(yaml)?,
        None => frontmatter::FrontMatter::default(),
    };

    let title = front_matter.title.unwrap_or_else(|| stem.clone());
    let content = render::to_plain_text(&split.body);
    let html = render::to_html(&title, &split.body);

    let file = format!("{}.html", stem);
    let html_path = out_dir.join(&file);
    fs::write(&html_path, html)?;

    Ok((NoteRecord::new(file, title, front_matter.tags, content), html_path))
}

/// Read the note source, retrying once on a transient I/O failure.
fn read_with_retry(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(source) => Ok(source),
        Err(first) => {
            tracing::debug!(file = %path.display(), error = %first, "read failed, retrying once");
            fs::read_to_string(path).map_err(Into::into)
        }
    }
}
