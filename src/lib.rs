//! # Folio
//!
//! A read-only catalog of image collections stored on the local filesystem.
//! The root directory's immediate subdirectories are collections; the
//! `.gif`, `.jpg` and `.png` files inside them are images. Every entity is
//! addressable both by native path and by a public URL derived from a base
//! URL.
//!
//! ```text
//! Store      media/              →  https://host/folio
//! Collection media/coll-a/       →  https://host/folio/coll-a
//! Image      media/coll-a/x.png  →  https://host/folio/coll-a/x.png
//! ```
//!
//! # Listings
//!
//! [`Store::collections`] and [`Collection::images`] return forward-only
//! cursors ([`list::Paged`]) read in batches with `read_list(n)`. A bounded
//! read reports [`ListStatus::EndOfSequence`] with the batch that reaches the
//! end, and again (with no items) on every later bounded read. `n <= 0`
//! drains everything left and never reports the end.
//!
//! ```no_run
//! use folio::Store;
//!
//! let store = Store::open("https://host/folio", "media")?;
//! for coll in store.collections_sorted() {
//!     let mut images = coll.images()?;
//!     loop {
//!         let batch = images.read_list(20);
//!         for img in &batch.items {
//!             println!("{} {}", img.name(), img.url());
//!         }
//!         if batch.is_end() {
//!             break;
//!         }
//!     }
//! }
//! # Ok::<(), folio::CatalogError>(())
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`store`] | Root scan, `Store`, `StoreBuilder`, collection snapshots |
//! | [`collection`] | `Collection` and per-collection image scans |
//! | [`image`] | `Image` leaf values: URL, native path, content reader |
//! | [`list`] | The `read_list` pagination cursor shared by all listings |
//! | [`fs`] | Directory-read and file-open capabilities (`Filesystem`) |
//! | [`naming`] | Image extension filter and `/`-only URL joins |
//! | [`error`] | `CatalogError` classification of I/O failures |
//! | [`config`] | `folio.toml` loading, merging, and validation |
//! | [`types`] | Serializable summaries for JSON output |
//! | [`output`] | CLI output formatting |
//!
//! # Concurrency
//!
//! A `Store` is immutable after [`Store::open`] and can be shared across
//! threads. Listings are single-owner cursors; take one per consumer.
//! All I/O is blocking and attempted once, with no retries.

pub mod collection;
pub mod config;
pub mod error;
pub mod fs;
pub mod image;
pub mod list;
pub mod naming;
pub mod output;
pub mod store;
pub mod types;

pub use collection::{Collection, ImageList};
pub use error::CatalogError;
pub use image::Image;
pub use list::{Batch, ListStatus};
pub use store::{CollectionList, Store, StoreBuilder};

#[cfg(test)]
pub(crate) mod test_helpers;
