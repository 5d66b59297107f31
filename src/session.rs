//! Holding the current export across uploads.
//!
//! A [`Session`] keeps at most one [`ChatExport`]. Each upload takes an
//! [`UploadTicket`] before parsing; only the holder of the most recent ticket
//! may publish. A slow parse that finishes after a newer upload started is
//! discarded instead of overwriting the newer result.
//!
//! Replacing or discarding an export drops it, and with it the media
//! handles its messages hold.
//!
//! # Example
//!
//! ```rust
//! use wachat::Session;
//! use wachat::upload::{Upload, UploadEntry};
//!
//! let session = Session::new();
//! let upload = Upload::new(vec![UploadEntry::from_bytes(
//!     "_chat.txt",
//!     "text/plain",
//!     "Chat de Familia\n[15/01/2024, 10:30:45] Ana: hola\n",
//! )]);
//!
//! let outcome = session.upload(&upload)?;
//! assert!(outcome.published);
//! assert_eq!(outcome.export.len(), 1);
//! assert_eq!(session.current().unwrap().title.as_deref(), Some("Familia"));
//! # Ok::<(), wachat::WachatError>(())
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::WachatError;
use crate::export::ChatExport;
use crate::media::HandleTracker;
use crate::parser::ChatParser;
use crate::upload::Upload;

/// Proof of when an upload started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UploadTicket(u64);

impl UploadTicket {
    /// Sequence number; later uploads get larger numbers.
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// What [`Session::upload`] produced.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// Ticket the upload parsed under.
    pub ticket: UploadTicket,
    /// The parsed export.
    pub export: Arc<ChatExport>,
    /// `false` when a newer upload began while this one was parsing; the
    /// export was then discarded instead of becoming current.
    pub published: bool,
}

/// The parsing session of one viewer.
#[derive(Debug, Default)]
pub struct Session {
    parser: ChatParser,
    generation: AtomicU64,
    current: Mutex<Option<Arc<ChatExport>>>,
    tracker: HandleTracker,
}

impl Session {
    /// Creates a session with the default parser.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with a custom parser.
    pub fn with_parser(parser: ChatParser) -> Self {
        Self {
            parser,
            ..Self::default()
        }
    }

    /// Registers a new upload. Any ticket issued earlier becomes stale.
    pub fn begin(&self) -> UploadTicket {
        UploadTicket(self.generation.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Returns `true` if no newer upload has begun since `ticket`.
    pub fn is_latest(&self, ticket: UploadTicket) -> bool {
        self.generation.load(Ordering::Acquire) == ticket.0
    }

    /// Publishes an export if `ticket` is still the latest.
    ///
    /// Returns `false` and drops `export` when a newer upload has begun. On
    /// success the previous export is dropped.
    pub fn publish(&self, ticket: UploadTicket, export: ChatExport) -> bool {
        self.publish_shared(ticket, Arc::new(export))
    }

    /// Parses `upload` and publishes the result.
    ///
    /// An upload without a chat log fails with
    /// [`WachatError::MissingChatFile`] before taking a ticket, so it neither
    /// replaces the current export nor invalidates an upload still parsing.
    /// On success the export is returned whether or not it became
    /// [`current`](Self::current); see [`UploadOutcome::published`].
    pub fn upload(&self, upload: &Upload) -> Result<UploadOutcome, WachatError> {
        upload.find_chat_file(self.parser.config())?;

        let ticket = self.begin();
        let parsed = self.parser.parse_upload_tracked(upload, &self.tracker)?;
        let export = Arc::new(parsed.export);
        let published = self.publish_shared(ticket, Arc::clone(&export));

        Ok(UploadOutcome {
            ticket,
            export,
            published,
        })
    }

    /// The current export, if any.
    pub fn current(&self) -> Option<Arc<ChatExport>> {
        self.slot().clone()
    }

    /// Drops the current export.
    pub fn clear(&self) {
        self.slot().take();
    }

    /// Media resources still alive from exports of this session.
    pub fn live_media_handles(&self) -> usize {
        self.tracker.live()
    }

    /// The parser used by [`upload`](Self::upload).
    pub fn parser(&self) -> &ChatParser {
        &self.parser
    }

    fn publish_shared(&self, ticket: UploadTicket, export: Arc<ChatExport>) -> bool {
        let mut slot = self.slot();
        // Checked under the lock so two publishers can't interleave.
        if !self.is_latest(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.generation.load(Ordering::Acquire),
                "discarding stale export"
            );
            return false;
        }

        tracing::info!(
            ticket = ticket.0,
            messages = export.len(),
            title = export.title.as_deref().unwrap_or(""),
            "published chat export"
        );
        *slot = Some(export);
        true
    }

    fn slot(&self) -> MutexGuard<'_, Option<Arc<ChatExport>>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::UploadEntry;

    fn upload(title: &str, image: &str) -> Upload {
        let log = format!(
            "Chat de {title}\n[15/01/2024, 10:30:45] Ana: <attached: {image}>\n"
        );
        Upload::new(vec![
            UploadEntry::from_bytes("_chat.txt", "text/plain", log),
            UploadEntry::from_bytes(image, "image/jpeg", vec![1u8]),
            UploadEntry::from_bytes("unused.jpg", "image/jpeg", vec![2u8]),
        ])
    }

    #[test]
    fn test_upload_publishes() {
        let session = Session::new();
        let outcome = session.upload(&upload("Uno", "IMG-photo-1.jpg")).unwrap();
        assert!(outcome.published);
        assert!(session.is_latest(outcome.ticket));
        assert_eq!(outcome.export.title.as_deref(), Some("Uno"));
        assert!(Arc::ptr_eq(&outcome.export, &session.current().unwrap()));
    }

    #[test]
    fn test_new_upload_replaces_and_releases() {
        let session = Session::new();
        let first = session.upload(&upload("Uno", "IMG-photo-1.jpg")).unwrap();
        assert_eq!(session.live_media_handles(), 1);
        drop(first);

        session.upload(&upload("Dos", "IMG-photo-2.jpg")).unwrap();
        assert_eq!(session.current().unwrap().title.as_deref(), Some("Dos"));
        assert_eq!(session.live_media_handles(), 1);

        session.clear();
        assert_eq!(session.live_media_handles(), 0);
    }

    #[test]
    fn test_missing_chat_file_keeps_previous() {
        let session = Session::new();
        session.upload(&upload("Uno", "IMG-photo-1.jpg")).unwrap();

        let bad = Upload::new(vec![UploadEntry::from_bytes("a.jpg", "image/jpeg", vec![1u8])]);
        let err = session.upload(&bad).unwrap_err();
        assert!(err.is_missing_chat_file());
        assert_eq!(session.current().unwrap().title.as_deref(), Some("Uno"));
    }

    #[test]
    fn test_missing_chat_file_keeps_pending_ticket() {
        let session = Session::new();
        let pending = session.begin();

        let bad = Upload::new(vec![UploadEntry::from_bytes("a.jpg", "image/jpeg", vec![1u8])]);
        assert!(session.upload(&bad).unwrap_err().is_missing_chat_file());

        assert!(session.is_latest(pending));
        assert!(session.publish(pending, ChatExport::new(Some("pending".into()), vec![])));
        assert_eq!(session.current().unwrap().title.as_deref(), Some("pending"));
    }

    #[test]
    fn test_upload_after_newer_ticket_is_published() {
        let session = Session::new();
        let stale = session.begin();
        let outcome = session.upload(&upload("Uno", "IMG-photo-1.jpg")).unwrap();

        assert!(outcome.published);
        assert!(outcome.ticket > stale);
        assert!(!session.publish(stale, ChatExport::default()));
        assert_eq!(session.current().unwrap().title.as_deref(), Some("Uno"));
    }

    #[test]
    fn test_stale_ticket_is_rejected() {
        let session = Session::new();
        let slow = session.begin();
        let fast = session.begin();

        assert!(session.publish(fast, ChatExport::new(Some("fast".into()), vec![])));
        assert!(!session.publish(slow, ChatExport::new(Some("slow".into()), vec![])));
        assert_eq!(session.current().unwrap().title.as_deref(), Some("fast"));
    }

    #[test]
    fn test_tickets_increase() {
        let session = Session::new();
        let a = session.begin();
        let b = session.begin();
        assert!(b > a);
        assert!(!session.is_latest(a));
        assert!(session.is_latest(b));
    }

    #[test]
    fn test_session_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Session>();
    }
}
