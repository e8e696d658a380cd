//! # Subscribers: the consumer side of the registry.
//!
//! This module provides the [`Subscribe`] trait and built-in implementations
//! for reacting to notifications fanned out by the
//! [`Registry`](crate::Registry).
//!
//! ## Architecture
//! ```text
//! Notification flow:
//!   Publisher ── notify(category, &Notification) ──► Registry
//!                                                       │ (snapshot fan-out)
//!                                                  ┌────┴────┬──────────┐
//!                                                  ▼         ▼          ▼
//!                                              VideoFeed  PostFeed   custom
//!                                              update()   update()   update()
//! ```
//!
//! ## Implementing custom subscribers
//! ```rust
//! use async_trait::async_trait;
//! use eventcast::{Notification, Subscribe, SubscriberError};
//!
//! struct AlertSink {
//!     id: String,
//! }
//!
//! #[async_trait]
//! impl Subscribe for AlertSink {
//!     fn id(&self) -> &str {
//!         &self.id
//!     }
//!
//!     async fn update(&self, payload: &Notification) -> Result<(), SubscriberError> {
//!         // forward payload.title / payload.author somewhere...
//!         let _ = payload;
//!         Ok(())
//!     }
//! }
//! ```

mod post;
mod subscriber;
mod video;

pub use post::PostFeed;
pub use subscriber::Subscribe;
pub use video::VideoFeed;

#[cfg(feature = "logging")]
mod log;
#[cfg(feature = "logging")]
pub use log::LogWriter;
