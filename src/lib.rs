//! # eventcast
//!
//! **Eventcast** is a small in-process publish/subscribe library for Rust.
//!
//! It provides a notification [`Registry`] that fans typed payloads out to
//! dynamically registered subscribers, grouped by event category. Producers
//! and consumers stay decoupled: neither side knows the other's concrete type.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────────┐      ┌──────────────────────┐
//!     │     Publisher    │      │    client wiring     │
//!     │ (named emitters) │      │ (subscribe/unsub)    │
//!     └────────┬─────────┘      └──────────┬───────────┘
//!              │ announce_*(payload)       │
//!              ▼                           ▼
//! ┌───────────────────────────────────────────────────────────┐
//! │  Registry                                                 │
//! │  - store: category ──► [ (id, subscriber), ... ]          │
//! │  - subscribe / unsubscribe (sole mutators)                │
//! │  - notify: snapshot, then dispatch in insertion order     │
//! └────────┬──────────────────┬──────────────────┬────────────┘
//!          ▼                  ▼                  ▼
//!   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!   │  VideoFeed   │   │   PostFeed   │   │  custom sub  │
//!   │  update()    │   │   update()   │   │  update()    │
//!   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! ### Dispatch
//! ```text
//! notify(category, payload)
//!   ├─► read-lock store, clone the category's subscriber list, unlock
//!   ├─► for each (id, subscriber) in insertion order:
//!   │       ├─ update(payload)      (panics caught and isolated)
//!   │       ├─ Ok  ──► delivered += 1
//!   │       └─ Err ──► recorded, dispatch continues
//!   └─► all failures aggregated into one NotifyError after the full fan-out
//! ```
//!
//! Because dispatch iterates a snapshot, a subscriber may re-enter the
//! registry from its own `update` (subscribe or unsubscribe) without
//! corrupting or aborting the in-flight fan-out.
//!
//! ## Features
//! | Area             | Description                                            | Key types / traits                         |
//! |------------------|--------------------------------------------------------|--------------------------------------------|
//! | **Registry**     | Per-category registration store with snapshot fan-out. | [`Registry`]                               |
//! | **Subscribers**  | Plug in consumers keyed by identity.                   | [`Subscribe`], [`VideoFeed`], [`PostFeed`] |
//! | **Publishing**   | Named emission methods hiding raw category strings.    | [`Publisher`]                              |
//! | **Payloads**     | Typed notification values delivered verbatim.          | [`Notification`], [`NotificationKind`]     |
//! | **Errors**       | Aggregate per-subscriber failure reporting.            | [`NotifyError`], [`SubscriberError`]       |
//! | **Configuration**| Panic isolation and store pruning knobs.               | [`Config`]                                 |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use eventcast::{Publisher, VideoFeed};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let publisher = Publisher::new();
//!
//!     // Register a consumer for the "new-video" category.
//!     let feed = VideoFeed::new("couch-watcher");
//!     publisher
//!         .registry()
//!         .subscribe(publisher.video_category().clone(), feed.clone())
//!         .await;
//!
//!     // Announce through the publisher; the category string stays internal.
//!     let delivered = publisher.announce_new_video("Top Gun: Maverick", "maverick").await?;
//!     assert_eq!(delivered, 1);
//!     assert_eq!(feed.entries().len(), 1);
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod events;
mod publisher;
mod registry;
mod subscribers;

// ---- Public re-exports ----

pub use config::Config;
pub use error::{DeliveryFailure, Error, NotifyError, SubscriberError};
pub use events::{Category, Notification, NotificationKind, SubscriberId};
pub use publisher::{Publisher, COMMUNITY_POST, NEW_VIDEO};
pub use registry::Registry;
pub use subscribers::{PostFeed, Subscribe, VideoFeed};

// Optional: expose a simple built-in stdout subscriber (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use subscribers::LogWriter;
