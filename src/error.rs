//! Errors surfaced by catalog operations.
//!
//! Every directory scan and file open funnels its `io::Error` through
//! [`CatalogError::from_io`], which keeps the offending path and sorts the
//! failure into one of three classes. Exhaustion of a listing is not an
//! error; see [`ListStatus`](crate::list::ListStatus).

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },
    #[error("IO error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CatalogError {
    /// Classify an I/O failure that happened while working on `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => CatalogError::NotFound { path },
            io::ErrorKind::PermissionDenied => CatalogError::PermissionDenied { path },
            _ => CatalogError::Io { path, source: err },
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            CatalogError::NotFound { path }
            | CatalogError::PermissionDenied { path }
            | CatalogError::Io { path, .. } => path,
        }
    }
}
