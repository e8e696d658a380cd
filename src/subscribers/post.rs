//! # Built-in consumer for community-post notifications.
//!
//! Same shape as [`VideoFeed`](crate::VideoFeed): a per-instance log of
//! rendered lines, appended on every delivery.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::Notification;

use super::Subscribe;

/// Notification-log consumer for the "community-post" category.
pub struct PostFeed {
    id: String,
    log: Mutex<Vec<String>>,
}

impl PostFeed {
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
impl Subscribe for PostFeed {
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
        log.push(format!("{author} has written a new community post: {title}"));
        Ok(())
    }
}
