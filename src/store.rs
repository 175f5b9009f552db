//! The catalog root.
//!
//! A [`Store`] is built by a single, non-recursive scan of its root
//! directory. Every immediate subdirectory becomes a [`Collection`] named
//! after the directory; everything else at the root is ignored. After
//! construction the store never touches the root again, so it can be shared
//! freely between readers.
//!
//! ```text
//! media/                 # root
//! ├── coll-a/            # collection "coll-a" → <base_url>/coll-a
//! │   ├── a2i.jpg
//! │   └── a1n.txt        # ignored by Collection::images
//! ├── coll-b/            # collection "coll-b" → <base_url>/coll-b
//! └── README.md          # ignored
//! ```
//!
//! ## Ordering
//!
//! Collections live in a name-keyed map and listings follow its iteration
//! order unless the store was built with [`StoreBuilder::sort_by_name`] or
//! the caller asks for [`Store::collections_sorted`].

use crate::collection::Collection;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::fs::{Filesystem, LocalFs};
use crate::list::Paged;
use crate::naming::join_url;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

/// Directory entries requested per read when nothing else is configured.
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// Paginated snapshot of a store's collections.
pub type CollectionList = Paged<Vec<Arc<Collection>>>;

/// Read-only catalog of the collections under one root directory.
#[derive(Debug)]
pub struct Store {
    base_url: String,
    root: PathBuf,
    sort_by_name: bool,
    collections: HashMap<String, Arc<Collection>>,
}

/// Options for opening a [`Store`].
pub struct StoreBuilder {
    base_url: String,
    root: PathBuf,
    batch_size: usize,
    sort_by_name: bool,
    fs: Arc<dyn Filesystem>,
}

impl StoreBuilder {
    /// Directory entries per read, for both the root and collection scans.
    /// Zero is treated as one.
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Make [`Store::collections`] return collections sorted by name.
    pub fn sort_by_name(mut self, sort: bool) -> Self {
        self.sort_by_name = sort;
        self
    }

    pub fn filesystem(mut self, fs: Arc<dyn Filesystem>) -> Self {
        self.fs = fs;
        self
    }

    /// Scan the root and build the store.
    ///
    /// Fails if the root cannot be opened or any read of it fails; no
    /// partially populated store is ever returned.
    pub fn open(self) -> Result<Store, CatalogError> {
        let StoreBuilder {
            base_url,
            root,
            batch_size,
            sort_by_name,
            fs,
        } = self;

        debug!(root = %root.display(), %base_url, "Opening store");

        let mut reader = fs
            .open_dir(&root)
            .map_err(|e| CatalogError::from_io(&root, e))?;

        let mut collections = HashMap::new();
        while let Some(batch) = reader
            .read_batch(batch_size)
            .map_err(|e| CatalogError::from_io(&root, e))?
        {
            for entry in batch {
                if !entry.is_dir {
                    trace!(entry = %entry.name, "Skipping non-directory at root");
                    continue;
                }
                let collection = Collection::new(
                    entry.name.clone(),
                    root.join(&entry.name),
                    join_url(&base_url, &entry.name),
                    Arc::clone(&fs),
                    batch_size,
                );
                collections.insert(entry.name, Arc::new(collection));
            }
        }

        debug!(
            root = %root.display(),
            collections = collections.len(),
            "Store opened"
        );

        Ok(Store {
            base_url,
            root,
            sort_by_name,
            collections,
        })
    }
}

impl Store {
    /// Start configuring a store over `root`, published under `base_url`.
    pub fn builder(base_url: impl Into<String>, root: impl Into<PathBuf>) -> StoreBuilder {
        StoreBuilder {
            base_url: base_url.into(),
            root: root.into(),
            batch_size: DEFAULT_BATCH_SIZE,
            sort_by_name: false,
            fs: Arc::new(LocalFs),
        }
    }

    /// Open a store on the local filesystem with default options.
    pub fn open(base_url: impl Into<String>, root: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        Self::builder(base_url, root).open()
    }

    /// Open the store described by a loaded `folio.toml`.
    pub fn from_config(config: &CatalogConfig) -> Result<Self, CatalogError> {
        Self::builder(config.base_url.clone(), &config.root)
            .batch_size(config.scan.batch_size)
            .sort_by_name(config.scan.sort_collections)
            .open()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of collections found at construction.
    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    /// Look up a collection by its directory name.
    pub fn collection(&self, name: &str) -> Option<Arc<Collection>> {
        self.collections.get(name).cloned()
    }

    /// Snapshot listing of every collection.
    pub fn collections(&self) -> CollectionList {
        if self.sort_by_name {
            return self.collections_sorted();
        }
        Paged::new(self.collections.values().cloned().collect())
    }

    /// Snapshot listing ordered by collection name.
    pub fn collections_sorted(&self) -> CollectionList {
        let mut snapshot: Vec<Arc<Collection>> = self.collections.values().cloned().collect();
        snapshot.sort_by(|a, b| a.name().cmp(b.name()));
        Paged::new(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::DirEntry;
    use crate::list::ListStatus;
    use crate::test_helpers::*;
    use std::fs;
    use std::io;
    use tempfile::TempDir;

    const BASE_URL: &str = "https://localhost/folio/test";

    #[test]
    fn one_collection_per_subdirectory() {
        let tmp = build_store_dir(&static_fixture());
        let store = Store::open(BASE_URL, tmp.path()).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.root(), tmp.path());
        assert_eq!(store.base_url(), BASE_URL);
        let names = collection_names(store.collections_sorted().read_list(0).items);
        assert_eq!(names, vec!["coll-a", "coll-b", "coll-c"]);
    }

    #[test]
    fn root_files_are_not_collections() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("coll-a")).unwrap();
        fs::write(tmp.path().join("README.md"), "hi").unwrap();
        fs::write(tmp.path().join("cover.jpg"), "fake image").unwrap();

        let store = Store::open(BASE_URL, tmp.path()).unwrap();
        assert_eq!(store.len(), 1);
        assert!(store.collection("README.md").is_none());
        assert!(store.collection("cover.jpg").is_none());
    }

    #[test]
    fn collection_path_and_url() {
        let tmp = build_store_dir(&static_fixture());
        let store = Store::open(BASE_URL, tmp.path()).unwrap();

        let coll = store.collection("coll-a").unwrap();
        assert_eq!(coll.name(), "coll-a");
        assert_eq!(coll.path(), tmp.path().join("coll-a"));
        assert_eq!(coll.url(), "https://localhost/folio/test/coll-a");
    }

    #[test]
    fn trailing_slash_in_base_url_is_normalized() {
        let tmp = build_store_dir(&static_fixture());
        let store = Store::open("https://host/x/", tmp.path()).unwrap();
        assert_eq!(
            store.collection("coll-b").unwrap().url(),
            "https://host/x/coll-b"
        );
    }

    #[test]
    fn root_base_url_gives_absolute_paths() {
        let tmp = build_store_dir(&static_fixture());
        let store = Store::open("/", tmp.path()).unwrap();

        let coll = store.collection("coll-a").unwrap();
        assert_eq!(coll.url(), "/coll-a");
        let urls: Vec<String> = coll.images().unwrap().map(|i| i.url()).collect();
        assert_eq!(urls.len(), 3);
        for url in urls {
            assert!(url.starts_with("/coll-a/"), "{url}");
        }
    }

    #[test]
    fn missing_root_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = Store::open(BASE_URL, tmp.path().join("missing")).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.path(), tmp.path().join("missing"));
    }

    #[test]
    fn root_that_is_a_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();

        let err = Store::open(BASE_URL, &file).unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn scan_batch_size_does_not_change_result() {
        let tmp = TempDir::new().unwrap();
        for i in 0..17 {
            fs::create_dir(tmp.path().join(format!("coll-{i:02}"))).unwrap();
            fs::write(tmp.path().join(format!("file-{i:02}")), "x").unwrap();
        }

        let expected: Vec<String> = (0..17).map(|i| format!("coll-{i:02}")).collect();
        for batch_size in [0, 1, 3, 10, 34, 500] {
            let store = Store::builder(BASE_URL, tmp.path())
                .batch_size(batch_size)
                .open()
                .unwrap();
            let names = collection_names(store.collections_sorted().read_list(0).items);
            assert_eq!(names, expected, "batch_size={batch_size}");
        }
    }

    #[test]
    fn sort_by_name_applies_to_collections() {
        let tmp = build_store_dir(&static_fixture());
        let store = Store::builder(BASE_URL, tmp.path())
            .sort_by_name(true)
            .open()
            .unwrap();

        let mut list = store.collections();
        let names: Vec<String> = list.by_ref().map(|c| c.name().to_string()).collect();
        assert_eq!(names, vec!["coll-a", "coll-b", "coll-c"]);
    }

    #[test]
    fn collections_paginate_to_exhaustion() {
        let tmp = build_store_dir(&static_fixture());
        let store = Store::open(BASE_URL, tmp.path()).unwrap();
        let mut list = store.collections();

        let first = list.read_list(2);
        assert_eq!(first.items.len(), 2);
        assert_eq!(first.status, ListStatus::More);

        let last = list.read_list(2);
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.status, ListStatus::EndOfSequence);

        let sentinel = list.read_list(2);
        assert!(sentinel.items.is_empty());
        assert_eq!(sentinel.status, ListStatus::EndOfSequence);
    }

    #[test]
    fn snapshots_are_independent() {
        let tmp = build_store_dir(&static_fixture());
        let store = Store::open(BASE_URL, tmp.path()).unwrap();

        let mut first = store.collections();
        first.read_list(0);
        let mut second = store.collections();
        assert_eq!(second.read_list(0).items.len(), 3);
    }

    #[test]
    fn store_does_not_refresh() {
        let tmp = build_store_dir(&static_fixture());
        let store = Store::open(BASE_URL, tmp.path()).unwrap();
        fs::create_dir(tmp.path().join("coll-late")).unwrap();

        assert_eq!(store.collections().read_list(0).items.len(), 3);
        assert!(store.collection("coll-late").is_none());
    }

    #[test]
    fn read_error_mid_scan_fails_construction() {
        let fs = ScriptedFs::new()
            .with_dir(
                "/media",
                vec![DirEntry::dir("coll-a"), DirEntry::dir("coll-b")],
            )
            .fail_after("/media", 1, io::ErrorKind::TimedOut);

        let err = Store::builder(BASE_URL, "/media")
            .batch_size(1)
            .filesystem(Arc::new(fs))
            .open()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn permission_denied_on_root() {
        let fs = ScriptedFs::new().deny("/media", io::ErrorKind::PermissionDenied);

        let err = Store::builder(BASE_URL, "/media")
            .filesystem(Arc::new(fs))
            .open()
            .unwrap_err();
        assert!(matches!(err, CatalogError::PermissionDenied { .. }));
    }

    #[test]
    fn collections_share_the_store_filesystem() {
        let fs = ScriptedFs::new()
            .with_dir("/media", vec![DirEntry::dir("coll-a")])
            .with_dir(
                "/media/coll-a",
                vec![DirEntry::file("one.jpg"), DirEntry::file("notes.txt")],
            );

        let store = Store::builder("https://host", "/media")
            .filesystem(Arc::new(fs))
            .open()
            .unwrap();
        let images = store
            .collection("coll-a")
            .unwrap()
            .images()
            .unwrap()
            .read_list(0)
            .items;
        assert_eq!(sorted_names(images), vec!["one.jpg"]);
    }

    #[test]
    fn from_config_uses_scan_options() {
        let tmp = build_store_dir(&static_fixture());
        let mut config = CatalogConfig::default();
        config.base_url = BASE_URL.to_string();
        config.root = tmp.path().to_string_lossy().to_string();
        config.scan.batch_size = 1;
        config.scan.sort_collections = true;

        let store = Store::from_config(&config).unwrap();
        let names = collection_names(store.collections().read_list(0).items);
        assert_eq!(names, vec!["coll-a", "coll-b", "coll-c"]);
    }
}
