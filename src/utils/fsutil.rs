use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::errors::{PlotError, Result};

/// Create `path` and any missing parents. Succeeds if it already exists.
///
/// # Errors
/// `Io` if the directory cannot be created or `path` exists as a file.
pub fn ensure_output_directory(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(());
    }
    log::info!("creating output directory {}", path.display());
    std::fs::create_dir_all(path)?;
    Ok(())
}

fn parent_dir(dest: &Path) -> &Path {
    match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    }
}

/// A finished file waiting in a sibling temp path until [`StagedFile::commit`].
/// Dropping it without committing removes the temp file.
#[derive(Debug)]
pub struct StagedFile {
    tmp: NamedTempFile,
    dest: PathBuf,
}

impl StagedFile {
    #[must_use]
    pub fn dest(&self) -> &Path {
        &self.dest
    }

    /// Move the temp file onto its destination, replacing any existing file.
    ///
    /// # Errors
    /// `Io` if the rename keeps failing.
    pub fn commit(self) -> Result<PathBuf> {
        let Self { mut tmp, dest } = self;
        let mut last_err: Option<io::Error> = None;
        for attempt in 0..5 {
            match tmp.persist(&dest) {
                Ok(_) => return Ok(dest),
                Err(pe) => {
                    last_err = Some(pe.error);
                    tmp = pe.file;
                    std::thread::sleep(std::time::Duration::from_millis(10 + attempt * 5));
                }
            }
        }
        Err(PlotError::Io(last_err.unwrap_or_else(|| io::Error::other("failed to persist output file"))))
    }
}

/// Write `dest`'s future content into a sibling temp file without touching `dest`.
///
/// The temp file keeps `dest`'s extension so format-sniffing writers behave.
/// On error the temp file is removed.
///
/// # Errors
/// Whatever `write` returns, or `Io` if the temp file cannot be created.
pub fn stage_file<F>(dest: &Path, write: F) -> Result<StagedFile>
where
    F: FnOnce(&Path) -> Result<()>,
{
    let parent = parent_dir(dest);
    ensure_output_directory(parent)?;
    let suffix = dest
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
        .unwrap_or_default();
    let tmp = tempfile::Builder::new().prefix(".csaplot-").suffix(&suffix).tempfile_in(parent)?;
    write(tmp.path())?;
    Ok(StagedFile { tmp, dest: dest.to_path_buf() })
}

/// Produce `dest` by staging it in a temp file and renaming it into place.
/// On error an existing `dest` is left untouched.
///
/// # Errors
/// See [`stage_file`] and [`StagedFile::commit`].
pub fn write_atomically<F>(dest: &Path, write: F) -> Result<()>
where
    F: FnOnce(&Path) -> Result<()>,
{
    stage_file(dest, write)?.commit().map(|_| ())
}

/// Leftover temp files in `dir` from interrupted writes.
#[must_use]
pub fn stray_temp_files(dir: &Path) -> Vec<PathBuf> {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .flatten()
                .map(|e| e.path())
                .filter(|p| {
                    p.file_name()
                        .and_then(|n| n.to_str())
                        .is_some_and(|n| n.starts_with(".csaplot-"))
                })
                .collect()
        })
        .unwrap_or_default()
}
