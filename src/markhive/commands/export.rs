use crate::commands::{CmdMessage, CmdResult};
use crate::error::{MarkhiveError, Result};
use crate::summary;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Bundle a rendered archive (HTML files plus the summary artifact) into a
/// timestamped tar.gz next to the current directory.
pub fn run(out_dir: &Path) -> Result<CmdResult> {
    let members = archive_members(out_dir)?;
    if members.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("Nothing to export."));
        return Ok(res);
    }

    let now = Utc::now();
    let filename = format!("markhive-{}.tar.gz", now.format("%Y-%m-%d_%H-%M-%S"));
    let file = File::create(&filename)?;
    write_archive(file, &members)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} files to {}",
        members.len(),
        filename
    )));
    Ok(result.with_written_files(vec![PathBuf::from(filename)]))
}

/// Rendered HTML documents plus summary.json, sorted for a stable archive.
fn archive_members(out_dir: &Path) -> Result<Vec<PathBuf>> {
    if !out_dir.is_dir() {
        return Err(MarkhiveError::Build(format!(
            "Output directory not found: {}",
            out_dir.display()
        )));
    }

    let mut members = Vec::new();
    for entry in fs::read_dir(out_dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let is_html = path.extension().is_some_and(|e| e == "html");
        let is_summary = path
            .file_name()
            .is_some_and(|n| n == summary::SUMMARY_FILENAME);
        if is_html || is_summary {
            members.push(path);
        }
    }
    members.sort();
    Ok(members)
}

fn write_archive<W: Write>(writer: W, members: &[PathBuf]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    for path in members {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed".to_string());
        tar.append_path_with_name(path, format!("markhive/{}", name))?;
    }

    tar.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_html_and_summary_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.html"), "<html></html>").unwrap();
        fs::write(dir.path().join(summary::SUMMARY_FILENAME), "[]").unwrap();
        fs::write(dir.path().join("config.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();

        let members = archive_members(dir.path()).unwrap();
        let names: Vec<String> = members
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.html", "summary.json"]);
    }

    #[test]
    fn missing_out_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(archive_members(&dir.path().join("missing")).is_err());
    }

    #[test]
    fn write_archive_produces_gzip_output() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("a.html");
        fs::write(&html, "<html></html>").unwrap();

        let mut buffer = Vec::new();
        write_archive(&mut buffer, &[html]).unwrap();
        // gzip magic bytes
        assert_eq!(&buffer[..2], &[0x1f, 0x8b]);
    }
}
