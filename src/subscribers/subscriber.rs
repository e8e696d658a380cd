//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging consumers into the
//! registry. A subscriber is registered under a category together with its
//! identity; the registry invokes `update` once per matching notification.
//!
//! ## Contract
//! - `id()` is the registration key within a category. Registering a second
//!   subscriber with the same id under the same category **replaces** the
//!   first one.
//! - `update` runs synchronously inside the notify call, in registration
//!   order. A slow or blocking subscriber stalls the whole fan-out; keep
//!   reactions fast and local (that is the caller's responsibility, not a
//!   registry guarantee).
//! - `update` may mutate only the subscriber's own state. It must not assume
//!   exclusive access to the registry or to other subscribers. Re-entering
//!   the registry (subscribe/unsubscribe) from inside `update` is allowed;
//!   the in-flight fan-out keeps iterating its snapshot.

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::Notification;

/// Contract for notification consumers.
///
/// Implementations are held behind `Arc<dyn Subscribe>` and shared between
/// the registry and the code that created them, so state a subscriber
/// mutates from `update` lives behind its own interior mutability.
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Identity used as the registration key within a category.
    fn id(&self) -> &str;

    /// React to a single notification.
    ///
    /// # Parameters
    /// - `payload`: the notification, delivered verbatim by reference
    ///
    /// Errors are collected by the registry and reported to the notify caller
    /// after the full fan-out; they never prevent delivery to the remaining
    /// subscribers in the same call.
    async fn update(&self, payload: &Notification) -> Result<(), SubscriberError>;
}
