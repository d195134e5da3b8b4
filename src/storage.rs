//! Removable-storage collaborator
//!
//! The session logger never touches the filesystem directly; it talks to a
//! `Storage` implementation that mirrors the original SD-card API surface:
//! mount once, probe for existing files, append one line at a time.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{LoggerError, Result};

/// Storage volume holding the session's log file
pub trait Storage {
    /// Bring the volume online. Failure is fatal to the session.
    fn mount(&mut self) -> Result<()>;

    /// Whether a file with this name already exists on the volume
    fn exists(&self, name: &str) -> bool;

    /// Append one record line to the named file, creating it if absent.
    ///
    /// Opens in append mode, writes the single line, and releases the handle
    /// before returning. Every call pays the open/close cost; in exchange each
    /// record reaches the medium before the next cycle starts.
    fn append_line(&mut self, name: &str, line: &str) -> Result<()>;
}

/// `Storage` rooted at a host directory.
///
/// Stands in for the SD volume: the root directory plays the role of the
/// card, one file per session inside it.
pub struct DirStorage {
    root: PathBuf,
    mounted: bool,
}

impl DirStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            mounted: false,
        }
    }
}

impl Storage for DirStorage {
    fn mount(&mut self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(LoggerError::StorageUnavailable(format!(
                "{} is not an accessible directory",
                self.root.display()
            )));
        }
        self.mounted = true;
        Ok(())
    }

    fn exists(&self, name: &str) -> bool {
        self.mounted && self.root.join(name).exists()
    }

    fn append_line(&mut self, name: &str, line: &str) -> Result<()> {
        if !self.mounted {
            return Err(LoggerError::StorageUnavailable(
                "volume not mounted".to_string(),
            ));
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.root.join(name))?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}
