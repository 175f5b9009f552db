//! Image leaf values.

use crate::error::CatalogError;
use crate::fs::Filesystem;
use crate::naming::join_url;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One image file inside a collection.
///
/// Carries its own copy of the collection's directory and URL prefix, so it
/// stays usable after the listing that produced it is gone.
#[derive(Clone)]
pub struct Image {
    name: String,
    dir: Arc<Path>,
    url: Arc<str>,
    fs: Arc<dyn Filesystem>,
}

impl Image {
    pub(crate) fn new(
        name: String,
        dir: Arc<Path>,
        url: Arc<str>,
        fs: Arc<dyn Filesystem>,
    ) -> Self {
        Self { name, dir, url, fs }
    }

    /// Bare file name, e.g. `a2i.jpg`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Collection URL prefix joined with the file name using `/`.
    pub fn url(&self) -> String {
        join_url(&self.url, &self.name)
    }

    /// Directory of the owning collection.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Native path of the image file.
    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.name)
    }

    /// Open the image for reading. The file is closed when the reader drops.
    pub fn reader(&self) -> Result<Box<dyn Read + Send>, CatalogError> {
        let path = self.path();
        self.fs
            .open_file(&path)
            .map_err(|e| CatalogError::from_io(&path, e))
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("name", &self.name)
            .field("dir", &self.dir)
            .field("url", &self.url)
            .finish()
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.dir == other.dir && self.url == other.url
    }
}
