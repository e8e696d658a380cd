//! # Built-in consumer for new-video notifications.
//!
//! [`VideoFeed`] keeps a per-instance log of rendered notification lines,
//! the kind of state a real consumer would show in a notification tray.
//! Side effects stay confined to the feed's own storage.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::Notification;

use super::Subscribe;

/// Notification-log consumer for the "new-video" category.
///
/// Each delivery appends one formatted line to the feed's log. The log is
/// readable at any time via [`VideoFeed::entries`], which makes the feed
/// handy both as a real consumer and as an assertion target in tests.
pub struct VideoFeed {
    id: String,
    log: Mutex<Vec<String>>,
}

impl VideoFeed {
    /// Creates a feed with the given identity, ready to register.
    pub fn new(id: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            id: id.into(),
            log: Mutex::new(Vec::new()),
        })
    }

    /// Snapshot of the rendered notification lines, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.log.lock().map(|l| l.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Subscribe for VideoFeed {
    fn id(&self) -> &str {
        &self.id
    }

    async fn update(&self, payload: &Notification) -> Result<(), SubscriberError> {
        let title = payload.title.as_deref().unwrap_or("untitled");
        let author = payload.author.as_deref().unwrap_or("unknown");

        let mut log = self
            .log
            .lock()
            .map_err(|_| SubscriberError::failed("notification log poisoned"))?;
        log.push(format!("{author} has uploaded a new video: {title}"));
        Ok(())
    }
}
