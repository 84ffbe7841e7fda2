//! Text-file sink. Every call is a self-contained open, write, close; no handle outlives it.

use crate::config::expand_path;
use crate::internal;
use crate::level::Verbosity;

use super::format_line;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Write target for one log file.
#[derive(Debug, Clone)]
pub struct FileOutput {
    /// As configured; `~` is expanded at open time.
    file_name: String,
    /// `false` truncates on open.
    append: bool,
}

impl FileOutput {
    /// Appends by default.
    #[must_use]
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            append: true,
        }
    }

    /// `false` truncates the file on every open.
    #[must_use]
    pub const fn append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// File name with a leading `~` expanded.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        expand_path(&self.file_name)
    }

    fn open(&self) -> Result<File, crate::Error> {
        let path = self.path();
        let mut options = OpenOptions::new();
        options.create(true);
        if self.append {
            options.append(true);
        } else {
            options.write(true).truncate(true);
        }
        options
            .open(&path)
            .map_err(|source| crate::Error::Open { path, source })
    }

    /// Opens and immediately closes the file, confirming it is writable in the current
    /// mode. In truncate mode this empties the file.
    ///
    /// # Errors
    /// `Error::Open` if the file cannot be opened.
    pub fn probe(&self) -> Result<(), crate::Error> {
        let _file = self.open()?;
        internal::trace(
            "FILE",
            &format!(
                "Probed {} ({})",
                self.path().display(),
                if self.append { "append" } else { "truncate" }
            ),
        );
        Ok(())
    }

    /// Writes one `<level>\t<message>` line as a single write.
    ///
    /// # Errors
    /// `Error::Open` if the file cannot be opened, `Error::Io` if the write fails.
    pub fn write(&self, level: Verbosity, message: &str) -> Result<(), crate::Error> {
        let mut file = self.open()?;
        let mut line = format_line(level, message);
        line.push('\n');
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
