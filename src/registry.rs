//! # Registry - per-category registration store and fan-out dispatcher.
//!
//! The registry owns the mapping from event category to the set of currently
//! subscribed consumers and is the only place subscription state mutates:
//! - `subscribe` → lazily creates the category set, replaces same-id entries
//! - `unsubscribe` → idempotent removal, prunes drained categories
//! - `notify` → snapshot the category set, dispatch in insertion order
//!
//! ## Architecture
//! ```text
//! store: RwLock< HashMap<Category, Vec<Entry>> >
//!                         │            │
//!                         │            └── insertion-ordered, one entry per id
//!                         └── created on first subscribe, removed when drained
//!
//! notify(category, payload)
//!   ├─► read-lock, clone entries, unlock     (snapshot)
//!   └─► sequential update() per entry        (no lock held)
//! ```
//!
//! ## Rules
//! - The registry never inspects or transforms payloads; they are delivered
//!   by reference, verbatim.
//! - An absent category and an empty category are indistinguishable:
//!   notify and unsubscribe on either are no-ops, never errors.
//! - Dispatch order within one notify call is the registration insertion
//!   order; replacing an entry keeps its original position.
//! - Dispatch iterates a snapshot: concurrent or re-entrant mutation cannot
//!   tear the iteration, deliver to a subscriber removed before the snapshot,
//!   or skip one removed after it.
//! - One failing subscriber never blocks the rest; failures are aggregated
//!   and surfaced only after the full fan-out.

use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::error::{DeliveryFailure, NotifyError, SubscriberError};
use crate::events::{Category, Notification, SubscriberId};
use crate::subscribers::Subscribe;

/// One registration: a subscriber and the identity it was keyed under.
///
/// The id is captured at subscribe time; a subscriber whose `id()` changes
/// afterwards stays registered under the captured key.
#[derive(Clone)]
struct Entry {
    id: SubscriberId,
    subscriber: Arc<dyn Subscribe>,
}

/// Per-category registration store with snapshot fan-out.
///
/// Cheap to share behind an `Arc`; all methods take `&self`. The store is
/// guarded by an async `RwLock`, so concurrent subscribe/unsubscribe/notify
/// from parallel tasks are safe.
pub struct Registry {
    store: RwLock<HashMap<Category, Vec<Entry>>>,
    catch_panics: bool,
    drop_empty_categories: bool,
}

impl Registry {
    /// Creates a registry with the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
            catch_panics: config.catch_panics,
            drop_empty_categories: config.drop_empty_categories,
        }
    }

    /// Registers a subscriber under a category.
    ///
    /// First use of a category creates its registration set. If an entry with
    /// the same id already exists in that category, the new subscriber
    /// **replaces** it in place (same position, no duplicate fan-out); the
    /// replaced instance receives no further deliveries.
    pub async fn subscribe(&self, category: Category, subscriber: Arc<dyn Subscribe>) {
        let id = SubscriberId::from(subscriber.id());

        let mut store = self.store.write().await;
        let entries = store.entry(category).or_default();
        match entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => entry.subscriber = subscriber,
            None => entries.push(Entry { id, subscriber }),
        }
    }

    /// Removes the registration for (category, id), if present.
    ///
    /// Idempotent: unknown categories and unknown ids are no-ops. When the
    /// last entry of a category is removed the category set is pruned
    /// (configurable via [`Config::drop_empty_categories`]).
    pub async fn unsubscribe(&self, category: &Category, id: &str) {
        let mut store = self.store.write().await;
        let Some(entries) = store.get_mut(category) else {
            return;
        };
        entries.retain(|e| e.id != *id);
        if self.drop_empty_categories && entries.is_empty() {
            store.remove(category);
        }
    }

    /// Delivers a payload to every subscriber currently registered for the
    /// category, in registration order.
    ///
    /// The subscriber set is snapshotted before the first `update` runs, so
    /// the fan-out targets exactly the registrations present at the moment
    /// the call began. An empty or unknown category is a no-op (`Ok(0)`).
    ///
    /// Returns the number of successful deliveries.
    ///
    /// # Errors
    /// [`NotifyError::DeliveryFailed`] when one or more subscribers failed;
    /// the fan-out still completed for every other subscriber first. Panics
    /// inside `update` are caught and reported the same way (unless
    /// [`Config::catch_panics`] is off).
    pub async fn notify(
        &self,
        category: &Category,
        payload: &Notification,
    ) -> Result<usize, NotifyError> {
        let snapshot: Vec<Entry> = {
            let store = self.store.read().await;
            match store.get(category) {
                Some(entries) => entries.clone(),
                None => return Ok(0),
            }
        };

        let mut delivered = 0usize;
        let mut failures: Vec<DeliveryFailure> = Vec::new();

        for entry in snapshot {
            let outcome = if self.catch_panics {
                let fut = entry.subscriber.update(payload);
                match AssertUnwindSafe(fut).catch_unwind().await {
                    Ok(result) => result,
                    Err(panic) => Err(SubscriberError::Panicked {
                        info: render_panic(panic.as_ref()),
                    }),
                }
            } else {
                entry.subscriber.update(payload).await
            };

            match outcome {
                Ok(()) => delivered += 1,
                Err(error) => failures.push(DeliveryFailure {
                    id: entry.id,
                    error,
                }),
            }
        }

        if failures.is_empty() {
            Ok(delivered)
        } else {
            Err(NotifyError::DeliveryFailed {
                category: category.clone(),
                delivered,
                failures,
            })
        }
    }

    /// Number of subscribers currently registered for a category.
    pub async fn subscriber_count(&self, category: &Category) -> usize {
        let store = self.store.read().await;
        store.get(category).map_or(0, Vec::len)
    }

    /// Sorted list of categories that currently have a registration set.
    pub async fn categories(&self) -> Vec<String> {
        let store = self.store.read().await;
        let mut names: Vec<String> = store.keys().map(|c| c.as_str().to_string()).collect();
        names.sort_unstable();
        names
    }

    /// True if no category has any registration.
    pub async fn is_empty(&self) -> bool {
        let store = self.store.read().await;
        store.values().all(Vec::is_empty)
    }

    /// Removes every registration from every category.
    pub async fn clear(&self) {
        self.store.write().await.clear();
    }
}

impl Default for Registry {
    fn default() -> Self {
        Registry::new(&Config::default())
    }
}

/// Renders a caught panic payload as text for error reporting.
fn render_panic(panic: &(dyn Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;

    /// Test subscriber that records deliveries into a shared call log.
    struct Probe {
        id: String,
        calls: Arc<Mutex<Vec<(String, u64)>>>,
        fail_with: Option<String>,
        panic_with: Option<String>,
    }

    impl Probe {
        fn new(id: &str, calls: &Arc<Mutex<Vec<(String, u64)>>>) -> Arc<Self> {
            Arc::new(Self {
                id: id.to_string(),
                calls: Arc::clone(calls),
                fail_with: None,
                panic_with: None,
            })
        }

        fn failing(id: &str, calls: &Arc<Mutex<Vec<(String, u64)>>>, reason: &str) -> Arc<Self> {
            Arc::new(Self {
                id: id.to_string(),
                calls: Arc::clone(calls),
                fail_with: Some(reason.to_string()),
                panic_with: None,
            })
        }

        fn panicking(id: &str, calls: &Arc<Mutex<Vec<(String, u64)>>>, info: &str) -> Arc<Self> {
            Arc::new(Self {
                id: id.to_string(),
                calls: Arc::clone(calls),
                fail_with: None,
                panic_with: Some(info.to_string()),
            })
        }
    }

    #[async_trait]
    impl Subscribe for Probe {
        fn id(&self) -> &str {
            &self.id
        }

        async fn update(&self, payload: &Notification) -> Result<(), SubscriberError> {
            self.calls
                .lock()
                .unwrap()
                .push((self.id.clone(), payload.seq));
            if let Some(info) = &self.panic_with {
                panic!("{}", info.clone());
            }
            if let Some(reason) = &self.fail_with {
                return Err(SubscriberError::failed(reason.clone()));
            }
            Ok(())
        }
    }

    fn calls_log() -> Arc<Mutex<Vec<(String, u64)>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn cat(name: &str) -> Category {
        Category::new(name).unwrap()
    }

    #[tokio::test]
    async fn test_notify_on_unknown_category_is_noop() {
        let registry = Registry::default();
        let n = Notification::new_video("t", "u");
        assert_eq!(registry.notify(&cat("never-seen"), &n).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_unsubscribe_is_idempotent() {
        let registry = Registry::default();
        let calls = calls_log();
        registry.subscribe(cat("a"), Probe::new("x", &calls)).await;

        registry.unsubscribe(&cat("a"), "x").await;
        registry.unsubscribe(&cat("a"), "x").await;
        registry.unsubscribe(&cat("missing"), "x").await;

        assert!(registry.is_empty().await);
        let n = Notification::new_video("t", "u");
        assert_eq!(registry.notify(&cat("a"), &n).await.unwrap(), 0);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fanout_reaches_every_subscriber_in_insertion_order() {
        let registry = Registry::default();
        let calls = calls_log();
        registry.subscribe(cat("a"), Probe::new("s1", &calls)).await;
        registry.subscribe(cat("a"), Probe::new("s2", &calls)).await;
        registry.subscribe(cat("a"), Probe::new("s3", &calls)).await;

        let n = Notification::new_video("t", "u");
        assert_eq!(registry.notify(&cat("a"), &n).await.unwrap(), 3);

        let seen = calls.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![
                ("s1".to_string(), n.seq),
                ("s2".to_string(), n.seq),
                ("s3".to_string(), n.seq),
            ]
        );
    }

    #[tokio::test]
    async fn test_categories_are_isolated() {
        let registry = Registry::default();
        let calls = calls_log();
        registry.subscribe(cat("a"), Probe::new("s1", &calls)).await;
        registry.subscribe(cat("b"), Probe::new("s2", &calls)).await;

        let n = Notification::new_video("t", "u");
        assert_eq!(registry.notify(&cat("a"), &n).await.unwrap(), 1);

        let seen = calls.lock().unwrap().clone();
        assert_eq!(seen, vec![("s1".to_string(), n.seq)]);
    }

    #[tokio::test]
    async fn test_same_id_replaces_keeping_position() {
        let registry = Registry::default();
        let calls = calls_log();
        let first = calls_log();

        registry.subscribe(cat("a"), Probe::new("x", &first)).await;
        registry.subscribe(cat("a"), Probe::new("y", &calls)).await;
        // Replacement: same id, different instance, logs into `calls`.
        registry.subscribe(cat("a"), Probe::new("x", &calls)).await;

        assert_eq!(registry.subscriber_count(&cat("a")).await, 2);

        let n = Notification::new_video("t", "u");
        assert_eq!(registry.notify(&cat("a"), &n).await.unwrap(), 2);

        // The first instance never hears about it.
        assert!(first.lock().unwrap().is_empty());
        // The replacement kept x's original (first) position.
        let seen = calls.lock().unwrap().clone();
        assert_eq!(
            seen,
            vec![("x".to_string(), n.seq), ("y".to_string(), n.seq)]
        );
    }

    #[tokio::test]
    async fn test_same_id_across_categories_is_independent() {
        let registry = Registry::default();
        let calls = calls_log();
        registry.subscribe(cat("a"), Probe::new("x", &calls)).await;
        registry.subscribe(cat("b"), Probe::new("x", &calls)).await;

        registry.unsubscribe(&cat("a"), "x").await;

        let n = Notification::new_video("t", "u");
        assert_eq!(registry.notify(&cat("a"), &n).await.unwrap(), 0);
        assert_eq!(registry.notify(&cat("b"), &n).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_aggregated_after_full_fanout() {
        let registry = Registry::default();
        let calls = calls_log();
        registry.subscribe(cat("a"), Probe::new("ok1", &calls)).await;
        registry
            .subscribe(cat("a"), Probe::failing("bad", &calls, "boom"))
            .await;
        registry.subscribe(cat("a"), Probe::new("ok2", &calls)).await;

        let n = Notification::new_video("t", "u");
        let err = registry.notify(&cat("a"), &n).await.unwrap_err();

        // The failing subscriber did not block the one after it.
        let seen: Vec<String> = calls
            .lock()
            .unwrap()
            .iter()
            .map(|(id, _)| id.clone())
            .collect();
        assert_eq!(seen, vec!["ok1", "bad", "ok2"]);

        match err {
            NotifyError::DeliveryFailed {
                category,
                delivered,
                failures,
            } => {
                assert_eq!(category, cat("a"));
                assert_eq!(delivered, 2);
                assert_eq!(failures.len(), 1);
                assert_eq!(&failures[0].id, "bad");
                assert_eq!(failures[0].error, SubscriberError::failed("boom"));
            }
        }
    }

    #[tokio::test]
    async fn test_panicking_subscriber_is_isolated() {
        let registry = Registry::default();
        let calls = calls_log();
        registry
            .subscribe(cat("a"), Probe::panicking("angry", &calls, "kaboom"))
            .await;
        registry.subscribe(cat("a"), Probe::new("calm", &calls)).await;

        let n = Notification::new_video("t", "u");
        let err = registry.notify(&cat("a"), &n).await.unwrap_err();

        match err {
            NotifyError::DeliveryFailed {
                delivered, failures, ..
            } => {
                assert_eq!(delivered, 1);
                assert_eq!(failures.len(), 1);
                assert_eq!(
                    failures[0].error,
                    SubscriberError::Panicked {
                        info: "kaboom".to_string()
                    }
                );
            }
        }
    }

    #[tokio::test]
    async fn test_drained_category_is_pruned_by_default() {
        let registry = Registry::default();
        let calls = calls_log();
        registry.subscribe(cat("a"), Probe::new("x", &calls)).await;
        registry.unsubscribe(&cat("a"), "x").await;

        assert!(registry.categories().await.is_empty());
    }

    #[tokio::test]
    async fn test_drained_category_kept_when_pruning_disabled() {
        let config = Config {
            drop_empty_categories: false,
            ..Config::default()
        };
        let registry = Registry::new(&config);
        let calls = calls_log();
        registry.subscribe(cat("a"), Probe::new("x", &calls)).await;
        registry.unsubscribe(&cat("a"), "x").await;

        assert_eq!(registry.categories().await, vec!["a".to_string()]);
        // Behaviorally still an empty category.
        let n = Notification::new_video("t", "u");
        assert_eq!(registry.notify(&cat("a"), &n).await.unwrap(), 0);
        assert!(registry.is_empty().await);
    }

    /// Subscriber that unsubscribes another id from inside its own update.
    struct Remover {
        id: String,
        victim: String,
        category: Category,
        registry: Arc<Registry>,
        calls: Arc<Mutex<Vec<(String, u64)>>>,
    }

    #[async_trait]
    impl Subscribe for Remover {
        fn id(&self) -> &str {
            &self.id
        }

        async fn update(&self, payload: &Notification) -> Result<(), SubscriberError> {
            self.calls
                .lock()
                .unwrap()
                .push((self.id.clone(), payload.seq));
            self.registry.unsubscribe(&self.category, &self.victim).await;
            Ok(())
        }
    }

    /// Subscriber that registers a newcomer from inside its own update.
    struct Adder {
        id: String,
        category: Category,
        registry: Arc<Registry>,
        newcomer: Mutex<Option<Arc<dyn Subscribe>>>,
        calls: Arc<Mutex<Vec<(String, u64)>>>,
    }

    #[async_trait]
    impl Subscribe for Adder {
        fn id(&self) -> &str {
            &self.id
        }

        async fn update(&self, payload: &Notification) -> Result<(), SubscriberError> {
            self.calls
                .lock()
                .unwrap()
                .push((self.id.clone(), payload.seq));
            let newcomer = self.newcomer.lock().unwrap().take();
            if let Some(subscriber) = newcomer {
                self.registry
                    .subscribe(self.category.clone(), subscriber)
                    .await;
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_reentrant_subscribe_misses_inflight_fanout() {
        let registry = Arc::new(Registry::default());
        let calls = calls_log();

        let newcomer: Arc<dyn Subscribe> = Probe::new("newcomer", &calls);
        let adder = Arc::new(Adder {
            id: "adder".to_string(),
            category: cat("a"),
            registry: Arc::clone(&registry),
            newcomer: Mutex::new(Some(newcomer)),
            calls: Arc::clone(&calls),
        });
        registry.subscribe(cat("a"), adder).await;

        // The newcomer registers mid-dispatch, after the snapshot was taken:
        // it must not hear the in-flight payload, and the write it performs
        // must not deadlock against the running notify.
        let n1 = Notification::new_video("t1", "u");
        assert_eq!(registry.notify(&cat("a"), &n1).await.unwrap(), 1);
        {
            let seen: Vec<String> = calls
                .lock()
                .unwrap()
                .iter()
                .map(|(id, _)| id.clone())
                .collect();
            assert_eq!(seen, vec!["adder"]);
        }
        assert_eq!(registry.subscriber_count(&cat("a")).await, 2);

        // Subsequent fan-outs include it, after the adder.
        let n2 = Notification::new_video("t2", "u");
        assert_eq!(registry.notify(&cat("a"), &n2).await.unwrap(), 2);
        let seen = calls.lock().unwrap().clone();
        assert_eq!(
            &seen[1..],
            &[
                ("adder".to_string(), n2.seq),
                ("newcomer".to_string(), n2.seq),
            ]
        );
    }

    #[tokio::test]
    async fn test_reentrant_unsubscribe_does_not_disturb_inflight_fanout() {
        let registry = Arc::new(Registry::default());
        let calls = calls_log();

        let remover = Arc::new(Remover {
            id: "remover".to_string(),
            victim: "victim".to_string(),
            category: cat("a"),
            registry: Arc::clone(&registry),
            calls: Arc::clone(&calls),
        });
        registry.subscribe(cat("a"), remover).await;
        registry.subscribe(cat("a"), Probe::new("victim", &calls)).await;

        // First fan-out iterates its snapshot: the victim was registered when
        // notify began, so it still receives this payload.
        let n1 = Notification::new_video("t1", "u");
        assert_eq!(registry.notify(&cat("a"), &n1).await.unwrap(), 2);
        {
            let seen: Vec<String> = calls
                .lock()
                .unwrap()
                .iter()
                .map(|(id, _)| id.clone())
                .collect();
            assert_eq!(seen, vec!["remover", "victim"]);
        }

        // The removal took effect for subsequent calls.
        let n2 = Notification::new_video("t2", "u");
        assert_eq!(registry.notify(&cat("a"), &n2).await.unwrap(), 1);
        let seen: Vec<(String, u64)> = calls.lock().unwrap().clone();
        assert_eq!(seen.last().unwrap(), &("remover".to_string(), n2.seq));
    }
}
