//! Archive packaging for exported folder trees.
//!
//! Every occurrence becomes a directory entry in a single gzipped tarball,
//! optionally carrying a small `_meta.txt` record. Packaging either
//! completes with a full archive or fails as a whole; there is no partial
//! or streamed output.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use flate2::write::GzEncoder;
use flate2::Compression;
use tar::{Builder, EntryType, Header};

use crate::error::{SemdirError, SemdirResult};
use crate::expand::Occurrence;
use crate::pattern;

/// Default archive file name for exports.
pub const DEFAULT_ARCHIVE_NAME: &str = "generated_folders.tar.gz";

/// Package every occurrence into a `.tar.gz` at `out_path`.
///
/// The synchronous tar writer runs on a blocking thread; await the call
/// once. Returns the number of folder entries written. Fails with
/// [`SemdirError::EmptyPlan`] when there is nothing to package.
pub async fn package_archive(
    occurrences: &[Occurrence],
    pat: &str,
    semester_start: NaiveDate,
    include_meta: bool,
    out_path: &Path,
) -> SemdirResult<usize> {
    if occurrences.is_empty() {
        return Err(SemdirError::EmptyPlan);
    }

    // Resolve every path up front so pattern errors surface before any
    // bytes hit the disk.
    let mut folders: Vec<(String, Option<String>)> = Vec::new();
    for occurrence in occurrences {
        let resolved = pattern::resolve(pat, occurrence, semester_start)?;
        let folder = pattern::normalize_path(&resolved);
        if folder.is_empty() {
            continue;
        }
        let meta = include_meta.then(|| meta_record(occurrence));
        folders.push((folder, meta));
    }

    let out_path = out_path.to_path_buf();
    let count = folders.len();

    tokio::task::spawn_blocking(move || write_tarball(&out_path, &folders))
        .await
        .map_err(|e| SemdirError::Archive(format!("packaging task failed: {e}")))??;

    Ok(count)
}

fn write_tarball(out_path: &Path, folders: &[(String, Option<String>)]) -> SemdirResult<()> {
    let file = std::fs::File::create(out_path)?;
    let encoder = GzEncoder::new(file, Compression::default());
    let mut builder = Builder::new(encoder);

    for (folder, meta) in folders {
        append_dir(&mut builder, folder)?;
        if let Some(meta) = meta {
            append_file(&mut builder, &format!("{folder}/_meta.txt"), meta.as_bytes())?;
        }
    }

    let encoder = builder.into_inner()?;
    encoder.finish()?;
    Ok(())
}

fn append_dir<W: Write>(builder: &mut Builder<W>, folder: &str) -> SemdirResult<()> {
    let mut header = Header::new_gnu();
    header.set_entry_type(EntryType::Directory);
    header.set_mode(0o755);
    header.set_size(0);
    builder.append_data(&mut header, format!("{folder}/"), std::io::empty())?;
    Ok(())
}

fn append_file<W: Write>(builder: &mut Builder<W>, path: &str, bytes: &[u8]) -> SemdirResult<()> {
    let mut header = Header::new_gnu();
    header.set_entry_type(EntryType::Regular);
    header.set_mode(0o644);
    header.set_size(bytes.len() as u64);
    builder.append_data(&mut header, path, bytes)?;
    Ok(())
}

/// Per-folder metadata record, one `key: value` line per field.
fn meta_record(occurrence: &Occurrence) -> String {
    let entry = &occurrence.entry;
    format!(
        "subject: {}\nweekday: {}\ndate: {}\nstart: {}\nend: {}\n",
        entry.subject,
        entry.weekday.label_ko(),
        occurrence.date.format("%Y-%m-%d"),
        entry.start,
        entry.end,
    )
}
