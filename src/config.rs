//! # Registry configuration.
//!
//! Provides [`Config`] centralized settings for registry construction.
//!
//! Config is used in two ways:
//! 1. **Registry creation**: `Registry::new(&config)`
//! 2. **Publisher creation**: `Publisher::with_config(&config)` (the publisher
//!    forwards it to the registry it owns)
//!
//! ## Field semantics
//! - `catch_panics = true` → a panicking subscriber is reported as a delivery
//!   failure instead of unwinding through `notify`
//! - `drop_empty_categories = true` → unsubscribing the last entry of a
//!   category removes the category's (now empty) registration set

/// Configuration for a [`Registry`](crate::Registry).
///
/// All fields are public for flexibility; `Default` matches the behavior most
/// callers want (isolate panics, prune drained categories).
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether `notify` catches panics raised inside a subscriber's `update`.
    ///
    /// - `true`: the panic is converted into `SubscriberError::Panicked` and
    ///   reported with the other delivery failures; remaining subscribers in
    ///   the same fan-out still receive the payload.
    /// - `false`: the panic unwinds through `notify` (remaining subscribers
    ///   are skipped). Only useful when a supervising layer handles panics.
    pub catch_panics: bool,

    /// Whether a category's registration set is removed once it drains empty.
    ///
    /// Observable behavior is identical either way (an empty set and an
    /// absent set both make notify/unsubscribe no-ops); pruning only keeps
    /// `categories()` listings free of dead entries.
    pub drop_empty_categories: bool,
}

impl Default for Config {
    /// Provides a default configuration:
    /// - `catch_panics = true`
    /// - `drop_empty_categories = true`
    fn default() -> Self {
        Self {
            catch_panics: true,
            drop_empty_categories: true,
        }
    }
}
