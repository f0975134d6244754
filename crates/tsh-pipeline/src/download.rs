//! Saving rendered PDFs for the user.

use chrono::NaiveDate;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where a finished export lands.
pub trait ExportSink {
    /// Save the bytes under the given file name. Implementations must never
    /// leave a partial file downloadable.
    fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf>;
}

/// Writes exports into a directory, staging through a `.part` file and
/// renaming only once the write completed, so an interrupted export never
/// leaves a partial PDF behind.
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    /// Create a sink writing into `dir` (created on first save).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectorySink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let final_path = self.dir.join(file_name);
        let staging = self.dir.join(format!("{file_name}.part"));

        let written = fs::write(&staging, bytes).and_then(|()| fs::rename(&staging, &final_path));
        if let Err(err) = written {
            let _ = fs::remove_file(&staging);
            return Err(err);
        }

        info!(path = %final_path.display(), bytes = bytes.len(), "export saved");
        Ok(final_path)
    }
}

/// Download naming: `<slug>-<ISO date>.pdf`.
pub fn export_file_name(slug: &str, date: NaiveDate) -> String {
    format!("{}-{}.pdf", slug, date.format("%Y-%m-%d"))
}
