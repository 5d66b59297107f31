//! Media index: file name → resource handle.
//!
//! The index is built once per upload from the entries that qualify as media
//! (see [`UploadEntry::is_media`]) and is immutable afterwards. Lookups are
//! case-sensitive, exactly like the file names inside attachment markers.
//!
//! Every indexed file gets a [`MediaHandle`], a cheap clone of a shared
//! [`MediaResource`]. Messages that reference an attachment hold a clone, so a
//! resource lives as long as the export that points at it. The resource is
//! released when its last handle is dropped; a [`HandleTracker`] counts the
//! live ones.
//!
//! # Example
//!
//! ```rust
//! use wachat::config::ChatConfig;
//! use wachat::media::MediaIndex;
//! use wachat::upload::{Upload, UploadEntry};
//!
//! let upload = Upload::new(vec![
//!     UploadEntry::from_bytes("_chat.txt", "text/plain", ""),
//!     UploadEntry::from_bytes("IMG-photo-0001.jpg", "image/jpeg", vec![1u8, 2, 3]),
//!     UploadEntry::from_bytes("PTT-audio-0002.opus", "", vec![4u8]),
//! ]);
//!
//! let index = MediaIndex::build(&upload, &ChatConfig::default());
//! assert_eq!(index.len(), 2);
//! assert!(index.get("IMG-photo-0001.jpg").is_some());
//! assert!(index.get("_chat.txt").is_none());
//! ```

use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use serde::{Serialize, Serializer};
use url::Url;

use crate::config::ChatConfig;
use crate::upload::{EntrySource, Upload, UploadEntry};

static NEXT_RESOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Counts live media resources.
///
/// Clones share the same counter. A [`Session`](crate::Session) owns one so
/// callers can check that superseded exports actually let go of their media.
#[derive(Debug, Clone, Default)]
pub struct HandleTracker {
    live: Arc<AtomicUsize>,
}

impl HandleTracker {
    /// Creates a tracker with no live resources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of resources currently alive.
    pub fn live(&self) -> usize {
        self.live.load(Ordering::Acquire)
    }

    fn acquire(&self) {
        self.live.fetch_add(1, Ordering::AcqRel);
    }

    fn release(&self) {
        self.live.fetch_sub(1, Ordering::AcqRel);
    }
}

/// A loadable media file.
pub struct MediaResource {
    id: u64,
    name: String,
    content_type: String,
    source: EntrySource,
    tracker: HandleTracker,
}

impl MediaResource {
    fn new(entry: &UploadEntry, tracker: &HandleTracker) -> Self {
        tracker.acquire();
        Self {
            id: NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed),
            name: entry.name.clone(),
            content_type: entry.content_type.clone(),
            source: entry.source.clone(),
            tracker: tracker.clone(),
        }
    }
}

impl Drop for MediaResource {
    fn drop(&mut self) {
        self.tracker.release();
        tracing::trace!(id = self.id, name = %self.name, "released media resource");
    }
}

/// Shared reference to an indexed media file.
///
/// Two handles compare equal when they point at the same file name and
/// content type, even if they came from different parses. Use
/// [`same_resource`](Self::same_resource) to compare identity.
#[derive(Clone)]
pub struct MediaHandle(Arc<MediaResource>);

impl MediaHandle {
    /// Process-unique identifier of the underlying resource.
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// File name as it appeared in the upload.
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// Content-type hint from the upload; may be empty.
    pub fn content_type(&self) -> &str {
        &self.0.content_type
    }

    /// URI a rendering layer can load the file from.
    ///
    /// Disk files map to `file://` URIs; in-memory entries to
    /// `memory://<id>/<name>`. Path segments are percent-encoded.
    pub fn uri(&self) -> String {
        match &self.0.source {
            EntrySource::Path(path) => file_uri(path),
            EntrySource::Bytes(_) => memory_uri(self.0.id, &self.0.name),
        }
    }

    /// Reads the file content.
    pub fn read_bytes(&self) -> io::Result<Vec<u8>> {
        self.0.source.read_bytes()
    }

    /// Returns `true` if both handles share the same resource.
    pub fn same_resource(&self, other: &MediaHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

fn file_uri(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    match Url::from_file_path(&absolute) {
        Ok(url) => url.into(),
        Err(()) => format!("file://{}", absolute.display()),
    }
}

fn memory_uri(id: u64, name: &str) -> String {
    match Url::parse(&format!("memory://{id}/")) {
        Ok(mut url) => {
            if let Ok(mut segments) = url.path_segments_mut() {
                segments.pop_if_empty().push(name);
            }
            url.into()
        }
        Err(_) => format!("memory://{id}/{name}"),
    }
}

impl PartialEq for MediaHandle {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.content_type() == other.content_type()
    }
}

impl Eq for MediaHandle {}

impl fmt::Debug for MediaHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaHandle")
            .field("id", &self.0.id)
            .field("name", &self.0.name)
            .field("content_type", &self.0.content_type)
            .finish()
    }
}

impl Serialize for MediaHandle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.uri())
    }
}

/// Lookup from file name to [`MediaHandle`].
#[derive(Debug, Clone, Default)]
pub struct MediaIndex {
    handles: HashMap<String, MediaHandle>,
}

impl MediaIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the index from an upload with a private tracker.
    pub fn build(upload: &Upload, config: &ChatConfig) -> Self {
        Self::build_tracked(upload, config, &HandleTracker::new())
    }

    /// Builds the index, counting every created resource in `tracker`.
    ///
    /// A name that appears twice keeps the later entry.
    pub fn build_tracked(upload: &Upload, config: &ChatConfig, tracker: &HandleTracker) -> Self {
        let mut handles = HashMap::new();

        for entry in upload.media_entries(config) {
            let handle = MediaHandle(Arc::new(MediaResource::new(entry, tracker)));
            if handles.insert(entry.name.clone(), handle).is_some() {
                tracing::debug!(name = %entry.name, "duplicate media name, keeping the later file");
            }
        }

        tracing::debug!(
            media = handles.len(),
            entries = upload.len(),
            "built media index"
        );

        Self { handles }
    }

    /// Looks up a file name (case-sensitive).
    pub fn get(&self, name: &str) -> Option<&MediaHandle> {
        self.handles.get(name)
    }

    /// Returns `true` if the file name is indexed.
    pub fn contains(&self, name: &str) -> bool {
        self.handles.contains_key(name)
    }

    /// Returns the number of indexed files.
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// Returns `true` if nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Iterates over indexed names in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handles.keys().map(String::as_str)
    }
}
