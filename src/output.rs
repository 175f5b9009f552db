//! CLI output formatting.
//!
//! Every entity is shown as a header line (positional index + name) followed
//! by indented context lines:
//!
//! ```text
//! Collections
//! 001 coll-a (3 images)
//!     URL: https://localhost/folio/coll-a
//!     Source: media/coll-a/
//! 002 coll-b (4 images)
//!     URL: https://localhost/folio/coll-b
//!     Source: media/coll-b/
//! ```
//!
//! Paged image listings print one block per batch:
//!
//! ```text
//! coll-a
//! Batch 1
//!     001 a2i.jpg → https://localhost/folio/coll-a/a2i.jpg
//!     002 a3i.gif → https://localhost/folio/coll-a/a3i.gif
//! Batch 2 (end)
//!     003 a5i.png → https://localhost/folio/coll-a/a5i.png
//! ```
//!
//! Format functions are pure and return `Vec<String>`; the `print_*`
//! wrappers write them to stdout.

use crate::types::{CollectionSummary, ImageSummary};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Header line for a collection: index, name and image count.
fn entity_header(index: usize, name: &str, images: usize) -> String {
    format!(
        "{} {} ({})",
        format_index(index),
        name,
        plural(images, "image", "images")
    )
}

pub fn format_collections(collections: &[CollectionSummary]) -> Vec<String> {
    let mut lines = vec!["Collections".to_string()];
    if collections.is_empty() {
        lines.push(format!("{}(none)", indent(1)));
        return lines;
    }
    for (i, coll) in collections.iter().enumerate() {
        lines.push(entity_header(i + 1, &coll.name, coll.images));
        lines.push(format!("{}URL: {}", indent(1), coll.url));
        lines.push(format!("{}Source: {}/", indent(1), coll.path));
    }
    lines
}

/// Format one batch of a paged image listing.
///
/// `batch` is 1-based; `first` is the 1-based position of the batch's first
/// image within the whole listing.
pub fn format_image_batch(
    batch: usize,
    first: usize,
    images: &[ImageSummary],
    end: bool,
) -> Vec<String> {
    let mut lines = Vec::with_capacity(images.len() + 1);
    if end {
        lines.push(format!("Batch {batch} (end)"));
    } else {
        lines.push(format!("Batch {batch}"));
    }
    for (i, img) in images.iter().enumerate() {
        lines.push(format!(
            "{}{} {} → {}",
            indent(1),
            format_index(first + i),
            img.name,
            img.url
        ));
    }
    lines
}

/// One batch as a single-line JSON array, for line-per-batch output.
pub fn format_image_batch_json(images: &[ImageSummary]) -> serde_json::Result<String> {
    serde_json::to_string(images)
}

pub fn format_check_summary(collections: usize, images: usize) -> String {
    format!(
        "Checked {}, {}",
        plural(collections, "collection", "collections"),
        plural(images, "image", "images")
    )
}

pub fn print_collections(collections: &[CollectionSummary]) {
    for line in format_collections(collections) {
        println!("{}", line);
    }
}

pub fn print_image_batch(batch: usize, first: usize, images: &[ImageSummary], end: bool) {
    for line in format_image_batch(batch, first, images, end) {
        println!("{}", line);
    }
}
