//! Collections and their image listings.
//!
//! A collection is one subdirectory of the store root. It holds no image
//! state: every call to [`Collection::images`] rescans the directory and
//! returns a fresh [`ImageList`] whose order is whatever the directory read
//! produced. Only names are recorded during the scan; [`Image`] values are
//! built as batches are read.

use crate::error::CatalogError;
use crate::fs::Filesystem;
use crate::image::Image;
use crate::list::{ListSource, Paged};
use crate::naming::is_image_name;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

/// A named group of images backed by one directory.
pub struct Collection {
    name: String,
    path: Arc<Path>,
    url: Arc<str>,
    fs: Arc<dyn Filesystem>,
    batch_size: usize,
}

/// Paginated listing of the images in one collection.
pub type ImageList = Paged<ImageNames>;

impl Collection {
    pub(crate) fn new(
        name: String,
        path: PathBuf,
        url: String,
        fs: Arc<dyn Filesystem>,
        batch_size: usize,
    ) -> Self {
        Self {
            name,
            path: Arc::from(path),
            url: Arc::from(url),
            fs,
            batch_size,
        }
    }

    /// Directory base name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Scan the collection directory for image files.
    ///
    /// Subdirectories and files without a recognized image extension are
    /// skipped. Any I/O error other than end-of-entries aborts the scan.
    pub fn images(&self) -> Result<ImageList, CatalogError> {
        let mut reader = self
            .fs
            .open_dir(&self.path)
            .map_err(|e| CatalogError::from_io(&self.path, e))?;

        let mut names = Vec::with_capacity(self.batch_size);
        let mut skipped = 0usize;
        while let Some(batch) = reader
            .read_batch(self.batch_size)
            .map_err(|e| CatalogError::from_io(&self.path, e))?
        {
            for entry in batch {
                if !entry.is_dir && is_image_name(&entry.name) {
                    names.push(entry.name);
                } else {
                    trace!(collection = %self.name, entry = %entry.name, "Skipping non-image entry");
                    skipped += 1;
                }
            }
        }

        debug!(
            collection = %self.name,
            images = names.len(),
            skipped,
            "Scanned collection"
        );

        Ok(Paged::new(ImageNames {
            path: Arc::clone(&self.path),
            url: Arc::clone(&self.url),
            names,
            fs: Arc::clone(&self.fs),
        }))
    }
}

impl fmt::Debug for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collection")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("url", &self.url)
            .finish()
    }
}

/// Image names found by one scan, plus what is needed to build [`Image`]s.
pub struct ImageNames {
    path: Arc<Path>,
    url: Arc<str>,
    names: Vec<String>,
    fs: Arc<dyn Filesystem>,
}

impl fmt::Debug for ImageNames {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageNames")
            .field("path", &self.path)
            .field("url", &self.url)
            .field("names", &self.names)
            .finish()
    }
}

impl ImageNames {
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl ListSource for ImageNames {
    type Item = Image;

    fn len(&self) -> usize {
        self.names.len()
    }

    fn get(&self, index: usize) -> Image {
        Image::new(
            self.names[index].clone(),
            Arc::clone(&self.path),
            Arc::clone(&self.url),
            Arc::clone(&self.fs),
        )
    }
}
