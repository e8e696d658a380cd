//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogWriter`] prints notifications to stdout in a human-readable format.
//! This is primarily useful for development, debugging, and examples.
//!
//! ## Output format
//! ```text
//! [video] seq=3 title="Top Gun: Maverick" by="maverick"
//! [post] seq=4 title="hello" by="koishi"
//! [custom:livestream] seq=5 title=None by=None
//! ```

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::{Notification, NotificationKind};

use super::Subscribe;

/// Simple stdout logging subscriber.
///
/// Enabled via the `logging` feature. Prints human-readable notification
/// descriptions to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Subscribe`] for
/// structured logging or metrics collection.
pub struct LogWriter;

#[async_trait]
impl Subscribe for LogWriter {
    fn id(&self) -> &str {
        "log-writer"
    }

    async fn update(&self, payload: &Notification) -> Result<(), SubscriberError> {
        let title = payload.title.as_deref();
        let author = payload.author.as_deref();
        match &payload.kind {
            NotificationKind::NewVideo => {
                println!(
                    "[video] seq={} title={:?} by={:?}",
                    payload.seq, title, author
                );
            }
            NotificationKind::CommunityPost => {
                println!(
                    "[post] seq={} title={:?} by={:?}",
                    payload.seq, title, author
                );
            }
            NotificationKind::Custom(label) => {
                println!(
                    "[custom:{label}] seq={} title={:?} by={:?}",
                    payload.seq, title, author
                );
            }
        }
        Ok(())
    }
}
