//! Shared test utilities for the folio test suite.
//!
//! Provides on-disk fixture builders, a scripted in-memory [`Filesystem`]
//! for injecting failures, and extractors that turn listings into plain
//! names for assertions.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = build_store_dir(&static_fixture());
//! let store = Store::open("https://localhost/folio/test", tmp.path()).unwrap();
//!
//! let names = collection_names(store.collections_sorted().read_list(0).items);
//! assert_eq!(names, vec!["coll-a", "coll-b", "coll-c"]);
//! ```

use std::collections::HashMap;
use std::fs;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use crate::collection::Collection;
use crate::fs::{DirEntry, DirReader, Filesystem};
use crate::image::Image;

// =========================================================================
// On-disk fixtures
// =========================================================================

/// One collection directory to create: image files plus other files.
pub struct CollFixture {
    pub name: &'static str,
    pub images: &'static [&'static str],
    pub others: &'static [&'static str],
}

/// Three collections mixing images with look-alike non-images.
pub fn static_fixture() -> Vec<CollFixture> {
    vec![
        CollFixture {
            name: "coll-a",
            images: &["a2i.jpg", "a3i.gif", "a5i.png"],
            others: &["a1n.txt", "a4n.json"],
        },
        CollFixture {
            name: "coll-b",
            images: &["b3i.jpg", "b5i.gif", "b6i.jpg", "b7i.png"],
            others: &["b2n.md", "b4n", "b8n.data"],
        },
        CollFixture {
            name: "coll-c",
            images: &["c1i.gif", "c4i.png", "c5i.jpg", "c8n.jpg", "c9i.png"],
            others: &["c2n", "c3n", "c6n.c", "c7n.go", "c10n.jp", "c11n.pn", "c12n.gig"],
        },
    ]
}

/// Create a temp store root with one directory per fixture.
///
/// File contents are the file name, so readers can be checked too.
pub fn build_store_dir(colls: &[CollFixture]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for coll in colls {
        let dir = tmp.path().join(coll.name);
        fs::create_dir(&dir).unwrap();
        for name in coll.images.iter().chain(coll.others) {
            fs::write(dir.join(name), name).unwrap();
        }
    }
    tmp
}

// =========================================================================
// Listing extractors
// =========================================================================

/// Collection names in listing order.
pub fn collection_names(colls: Vec<Arc<Collection>>) -> Vec<String> {
    colls.iter().map(|c| c.name().to_string()).collect()
}

/// Image names, sorted, so directory order does not matter.
pub fn sorted_names(images: Vec<Image>) -> Vec<String> {
    let mut names: Vec<String> = images.iter().map(|i| i.name().to_string()).collect();
    names.sort();
    names
}

// =========================================================================
// Scripted filesystem
// =========================================================================

#[derive(Clone, Default)]
struct ScriptedDir {
    entries: Vec<DirEntry>,
    /// Successful batches before the reader fails with this kind.
    fail_after: Option<(usize, io::ErrorKind)>,
}

/// In-memory [`Filesystem`] with scripted directory contents and failures.
#[derive(Clone, Default)]
pub struct ScriptedFs {
    dirs: HashMap<PathBuf, ScriptedDir>,
    files: HashMap<PathBuf, Vec<u8>>,
    denied: HashMap<PathBuf, io::ErrorKind>,
}

impl ScriptedFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>, entries: Vec<DirEntry>) -> Self {
        self.dirs.entry(path.into()).or_default().entries = entries;
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), content.into());
        self
    }

    /// Let `batches` reads of `path` succeed, then fail every later read.
    pub fn fail_after(mut self, path: impl Into<PathBuf>, batches: usize, kind: io::ErrorKind) -> Self {
        self.dirs.entry(path.into()).or_default().fail_after = Some((batches, kind));
        self
    }

    /// Make opening `path` (directory or file) fail with `kind`.
    pub fn deny(mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.denied.insert(path.into(), kind);
        self
    }

    fn check_denied(&self, path: &Path) -> io::Result<()> {
        match self.denied.get(path) {
            Some(kind) => Err(io::Error::new(*kind, "scripted failure")),
            None => Ok(()),
        }
    }
}

impl Filesystem for ScriptedFs {
    fn open_dir(&self, path: &Path) -> io::Result<Box<dyn DirReader>> {
        self.check_denied(path)?;
        let dir = self
            .dirs
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such scripted dir"))?;
        Ok(Box::new(ScriptedReader {
            dir,
            pos: 0,
            batches: 0,
        }))
    }

    fn open_file(&self, path: &Path) -> io::Result<Box<dyn Read + Send>> {
        self.check_denied(path)?;
        let content = self
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such scripted file"))?;
        Ok(Box::new(Cursor::new(content)))
    }
}

struct ScriptedReader {
    dir: ScriptedDir,
    pos: usize,
    batches: usize,
}

impl DirReader for ScriptedReader {
    fn read_batch(&mut self, max: usize) -> io::Result<Option<Vec<DirEntry>>> {
        if let Some((limit, kind)) = self.dir.fail_after
            && self.batches >= limit
        {
            return Err(io::Error::new(kind, "scripted read failure"));
        }
        if self.pos >= self.dir.entries.len() {
            return Ok(None);
        }
        let end = (self.pos + max.max(1)).min(self.dir.entries.len());
        let batch = self.dir.entries[self.pos..end].to_vec();
        self.pos = end;
        self.batches += 1;
        Ok(Some(batch))
    }
}
