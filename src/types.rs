//! Serializable views of catalog entities.
//!
//! The catalog types themselves hold shared filesystem handles and are not
//! serializable; these plain records are what the CLI prints as JSON.

use crate::collection::Collection;
use crate::image::Image;
use serde::{Deserialize, Serialize};

/// A collection with the number of images its last scan found.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummary {
    pub name: String,
    pub url: String,
    pub path: String,
    pub images: usize,
}

impl CollectionSummary {
    pub fn new(collection: &Collection, images: usize) -> Self {
        Self {
            name: collection.name().to_string(),
            url: collection.url().to_string(),
            path: collection.path().to_string_lossy().to_string(),
            images,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSummary {
    pub name: String,
    pub url: String,
}

impl From<&Image> for ImageSummary {
    fn from(image: &Image) -> Self {
        Self {
            name: image.name().to_string(),
            url: image.url(),
        }
    }
}
