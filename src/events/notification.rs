//! # Notification payloads delivered to subscribers.
//!
//! The [`NotificationKind`] enum classifies payloads for the well-known
//! emission kinds (new video, community post) and leaves an escape hatch for
//! custom categories. The [`Notification`] struct carries the metadata a
//! consumer typically renders: title, author, optional body and link.
//!
//! The registry treats the whole value as opaque: it is delivered by
//! reference, verbatim, to every subscriber of the target category.
//!
//! ## Ordering guarantees
//! Each notification has a globally unique sequence number (`seq`) that
//! increases monotonically. Use `seq` to correlate deliveries across
//! subscribers and assert exact fan-out order in tests.
//!
//! ## Example
//! ```rust
//! use eventcast::{Notification, NotificationKind};
//!
//! let n = Notification::new_video("Top Gun: Maverick", "maverick")
//!     .with_link("https://example.test/v/42");
//!
//! assert_eq!(n.kind, NotificationKind::NewVideo);
//! assert_eq!(n.title.as_deref(), Some("Top Gun: Maverick"));
//! assert_eq!(n.author.as_deref(), Some("maverick"));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

/// Global sequence counter for notification ordering.
static NOTIFICATION_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of notification payloads.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationKind {
    /// A new video was uploaded.
    ///
    /// Sets:
    /// - `title`: video title
    /// - `author`: uploader name
    NewVideo,

    /// A new community post was written.
    ///
    /// Sets:
    /// - `title`: post title
    /// - `author`: writer name
    CommunityPost,

    /// Application-defined payload for a custom category.
    ///
    /// The label names the event type; metadata fields are set as the
    /// producer sees fit.
    Custom(Arc<str>),
}

/// Notification payload with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`NotificationKind`]
#[derive(Debug, Clone)]
pub struct Notification {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Payload classification.
    pub kind: NotificationKind,

    /// Title of the video or post, if applicable.
    pub title: Option<Arc<str>>,
    /// Who uploaded the video / wrote the post.
    pub author: Option<Arc<str>>,
    /// Free-form body text.
    pub body: Option<Arc<str>>,
    /// Link a consumer can open (video page, post URL, ...).
    pub link: Option<Arc<str>>,
}

impl Notification {
    /// Creates a new notification of the given kind with current timestamp
    /// and next sequence number.
    pub fn new(kind: NotificationKind) -> Self {
        Self {
            seq: NOTIFICATION_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            title: None,
            author: None,
            body: None,
            link: None,
        }
    }

    /// Creates a new-video notification with title and uploader set.
    pub fn new_video(title: impl Into<Arc<str>>, uploaded_by: impl Into<Arc<str>>) -> Self {
        Notification::new(NotificationKind::NewVideo)
            .with_title(title)
            .with_author(uploaded_by)
    }

    /// Creates a community-post notification with title and writer set.
    pub fn community_post(title: impl Into<Arc<str>>, written_by: impl Into<Arc<str>>) -> Self {
        Notification::new(NotificationKind::CommunityPost)
            .with_title(title)
            .with_author(written_by)
    }

    /// Creates a notification for a custom event type.
    pub fn custom(label: impl Into<Arc<str>>) -> Self {
        Notification::new(NotificationKind::Custom(label.into()))
    }

    /// Attaches a title.
    #[inline]
    pub fn with_title(mut self, title: impl Into<Arc<str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attaches an author (uploader or writer).
    #[inline]
    pub fn with_author(mut self, author: impl Into<Arc<str>>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Attaches free-form body text.
    #[inline]
    pub fn with_body(mut self, body: impl Into<Arc<str>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attaches a link.
    #[inline]
    pub fn with_link(mut self, link: impl Into<Arc<str>>) -> Self {
        self.link = Some(link.into());
        self
    }

    #[inline]
    pub fn is_video(&self) -> bool {
        matches!(self.kind, NotificationKind::NewVideo)
    }

    #[inline]
    pub fn is_post(&self) -> bool {
        matches!(self.kind, NotificationKind::CommunityPost)
    }
}
