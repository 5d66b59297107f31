//! The uploaded file collection.
//!
//! An [`Upload`] is what the file-selection side hands to the parser: a flat,
//! ordered list of named entries, each with a content-type hint and a way to
//! read its bytes. Directory structure is not preserved beyond the file name.
//!
//! # Example
//!
//! ```rust
//! use wachat::upload::{Upload, UploadEntry};
//!
//! let upload = Upload::new(vec![
//!     UploadEntry::from_bytes("_chat.txt", "text/plain", "Chat de Familia\n"),
//!     UploadEntry::from_bytes("IMG-photo-0001.jpg", "image/jpeg", vec![0xffu8, 0xd8]),
//! ]);
//!
//! assert_eq!(upload.len(), 2);
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ChatConfig;
use crate::error::WachatError;

/// Where an entry's bytes come from.
#[derive(Clone)]
pub enum EntrySource {
    /// A file on disk, read on demand.
    Path(PathBuf),
    /// Bytes already in memory.
    Bytes(Arc<[u8]>),
}

impl EntrySource {
    /// Reads the full content.
    pub fn read_bytes(&self) -> io::Result<Vec<u8>> {
        match self {
            EntrySource::Path(path) => fs::read(path),
            EntrySource::Bytes(bytes) => Ok(bytes.to_vec()),
        }
    }

    /// Returns the backing path for disk sources.
    pub fn path(&self) -> Option<&Path> {
        match self {
            EntrySource::Path(path) => Some(path.as_path()),
            EntrySource::Bytes(_) => None,
        }
    }
}

impl fmt::Debug for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrySource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            EntrySource::Bytes(bytes) => write!(f, "Bytes({} bytes)", bytes.len()),
        }
    }
}

/// One file of an upload.
#[derive(Debug, Clone)]
pub struct UploadEntry {
    /// File name without any directory part.
    pub name: String,
    /// MIME type hint; empty when unknown.
    pub content_type: String,
    /// Readable content.
    pub source: EntrySource,
}

impl UploadEntry {
    /// Creates an in-memory entry.
    pub fn from_bytes(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        let bytes: Vec<u8> = bytes.into();
        Self {
            name: name.into(),
            content_type: content_type.into(),
            source: EntrySource::Bytes(Arc::from(bytes)),
        }
    }

    /// Creates a disk-backed entry, guessing the content type from the
    /// extension.
    ///
    /// Relative paths are resolved against the current directory.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = std::path::absolute(&path).unwrap_or(path);
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = guess_content_type(&name).to_string();

        Self {
            name,
            content_type,
            source: EntrySource::Path(path),
        }
    }

    /// Reads the entry as text.
    ///
    /// Invalid UTF-8 is replaced rather than rejected, and a leading
    /// byte-order mark is removed.
    pub fn read_text(&self) -> io::Result<String> {
        let bytes = self.source.read_bytes()?;
        let text = String::from_utf8_lossy(&bytes);
        Ok(text
            .strip_prefix('\u{feff}')
            .unwrap_or(&text)
            .to_string())
    }

    /// Returns `true` if this entry belongs in the media index.
    ///
    /// Media is anything typed `image/*` or `audio/*`, plus names ending in
    /// one of the configured suffixes (voice notes and stickers often come
    /// without a MIME type).
    pub fn is_media(&self, config: &ChatConfig) -> bool {
        self.content_type.starts_with("image/")
            || self.content_type.starts_with("audio/")
            || config
                .media_suffixes
                .iter()
                .any(|suffix| self.name.ends_with(suffix.as_str()))
    }
}

/// An ordered collection of uploaded files.
#[derive(Debug, Clone, Default)]
pub struct Upload {
    entries: Vec<UploadEntry>,
}

impl Upload {
    /// Creates an upload from entries, keeping their order.
    pub fn new(entries: Vec<UploadEntry>) -> Self {
        Self { entries }
    }

    /// Collects every file under `dir`, recursively.
    ///
    /// Entries are ordered by full path so the same directory always yields
    /// the same upload.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, WachatError> {
        let dir = std::path::absolute(dir.as_ref())?;
        let mut paths = Vec::new();
        collect_files(&dir, &mut paths)?;
        paths.sort();

        tracing::debug!(dir = %dir.display(), files = paths.len(), "collected upload");

        Ok(Self::new(
            paths.into_iter().map(UploadEntry::from_path).collect(),
        ))
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: UploadEntry) {
        self.entries.push(entry);
    }

    /// Returns the entries in upload order.
    pub fn entries(&self) -> &[UploadEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the upload has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finds the chat log: the first entry whose name carries the chat
    /// extension.
    pub fn find_chat_file(&self, config: &ChatConfig) -> Result<&UploadEntry, WachatError> {
        self.entries
            .iter()
            .find(|entry| config.is_chat_file_name(&entry.name))
            .ok_or_else(|| {
                WachatError::missing_chat_file(&config.chat_file_extension, self.entries.len())
            })
    }

    /// Iterates over the entries that qualify as media.
    pub fn media_entries<'a>(
        &'a self,
        config: &'a ChatConfig,
    ) -> impl Iterator<Item = &'a UploadEntry> + 'a {
        self.entries.iter().filter(move |entry| entry.is_media(config))
    }
}

impl FromIterator<UploadEntry> for Upload {
    fn from_iter<I: IntoIterator<Item = UploadEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            collect_files(&path, out)?;
        } else {
            out.push(path);
        }
    }
    Ok(())
}

/// Guesses a MIME type from a file name, the way a browser file picker
/// would. Returns an empty string when the extension is unknown.
///
/// `.opus` is deliberately left untyped; most pickers don't know it, which is
/// why the media index also matches on suffix.
pub fn guess_content_type(name: &str) -> &'static str {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return "";
    };

    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "ogg" => "audio/ogg",
        "wav" => "audio/wav",
        "amr" => "audio/amr",
        "mp4" => "video/mp4",
        "3gp" => "video/3gpp",
        "txt" => "text/plain",
        "vcf" => "text/vcard",
        "pdf" => "application/pdf",
        _ => "",
    }
}
