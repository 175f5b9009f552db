//! Filesystem capabilities the catalog is built on.
//!
//! The catalog never touches `std::fs` directly. It asks a [`Filesystem`] to
//! open a directory and then pulls entries from the returned [`DirReader`] in
//! fixed-size batches until the reader reports end-of-entries. Image content
//! is opened through the same trait. [`LocalFs`] is the real implementation;
//! tests substitute scripted ones to inject failures mid-scan.
//!
//! ## End of entries
//!
//! [`DirReader::read_batch`] returns `Ok(None)` once the directory is
//! exhausted. An empty `Some(vec![])` is legal and just means "nothing this
//! time", so callers loop until `None` or an error.

use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::warn;

/// A single directory entry: bare name plus whether it is a directory.
///
/// Symlinks are reported as what they are, not what they point to, so a
/// link to a directory has `is_dir == false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
        }
    }
}

/// An open directory handle yielding entries in batches.
///
/// The handle is released when the reader is dropped.
pub trait DirReader {
    /// Read up to `max` entries (at least one is requested even if `max` is
    /// zero). `Ok(None)` signals end-of-entries.
    fn read_batch(&mut self, max: usize) -> io::Result<Option<Vec<DirEntry>>>;
}

/// Directory-read and file-open capabilities.
pub trait Filesystem: Send + Sync {
    fn open_dir(&self, path: &Path) -> io::Result<Box<dyn DirReader>>;

    fn open_file(&self, path: &Path) -> io::Result<Box<dyn Read + Send>>;
}

/// [`Filesystem`] backed by the host filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn open_dir(&self, path: &Path) -> io::Result<Box<dyn DirReader>> {
        let inner = fs::read_dir(path)?;
        Ok(Box::new(LocalDirReader {
            inner,
            done: false,
        }))
    }

    fn open_file(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        Ok(Box::new(fs::File::open(path)?))
    }
}

struct LocalDirReader {
    inner: fs::ReadDir,
    done: bool,
}

impl DirReader for LocalDirReader {
    fn read_batch(&mut self, max: usize) -> io::Result<Option<Vec<DirEntry>>> {
        if self.done {
            return Ok(None);
        }
        let max = max.max(1);
        let mut batch = Vec::with_capacity(max);
        while batch.len() < max {
            let Some(entry) = self.inner.next() else {
                self.done = true;
                break;
            };
            let entry = entry?;
            let file_type = entry.file_type()?;
            match entry.file_name().into_string() {
                Ok(name) => batch.push(DirEntry {
                    name,
                    is_dir: file_type.is_dir(),
                }),
                Err(raw) => {
                    warn!(name = ?raw, "Skipping entry with non UTF-8 name");
                }
            }
        }
        if batch.is_empty() && self.done {
            return Ok(None);
        }
        Ok(Some(batch))
    }
}
