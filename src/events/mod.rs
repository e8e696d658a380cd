//! Event data model: categories, subscriber identities, notification payloads.
//!
//! This module groups the identifier types used as registration keys and the
//! payload type delivered to subscribers.
//!
//! ## Contents
//! - [`Category`], [`SubscriberId`] opaque registration keys
//! - [`NotificationKind`], [`Notification`] payload classification and metadata
//!
//! ## Quick reference
//! - **Producers**: `Publisher` builds [`Notification`] values and hands them
//!   to `Registry::notify` with a fixed [`Category`].
//! - **Consumers**: `Subscribe::update` receives the payload by reference,
//!   verbatim; the registry never inspects or transforms it.

mod category;
mod notification;

pub use category::{Category, SubscriberId};
pub use notification::{Notification, NotificationKind};
