//! # Publisher - domain-facing façade over one registry.
//!
//! [`Publisher`] owns a [`Registry`] (composition: the registry lives and
//! dies with the publisher) and exposes a closed set of named emission
//! methods, each hard-wired to one category. Callers announce "a new video"
//! or "a community post"; the category strings stay an internal detail.
//!
//! Adding a new emission kind means adding one named method (and, if needed,
//! one category constant) - the registry and subscriber contracts never
//! change for it.
//!
//! Subscription wiring goes through [`Publisher::registry`], mirroring how
//! producers and consumers share nothing but the registry:
//!
//! ```rust
//! use eventcast::{PostFeed, Publisher, VideoFeed};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let publisher = Publisher::new();
//!
//! let videos = VideoFeed::new("koishi");
//! let posts = PostFeed::new("hoshino");
//! publisher
//!     .registry()
//!     .subscribe(publisher.video_category().clone(), videos.clone())
//!     .await;
//! publisher
//!     .registry()
//!     .subscribe(publisher.post_category().clone(), posts.clone())
//!     .await;
//!
//! publisher.announce_new_video("Top Gun: Maverick", "maverick").await?;
//! publisher.announce_community_post("hello world", "hoshino").await?;
//!
//! assert_eq!(videos.entries().len(), 1);
//! assert_eq!(posts.entries().len(), 1);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use crate::config::Config;
use crate::error::NotifyError;
use crate::events::{Category, Notification};
use crate::registry::Registry;
use crate::subscribers::Subscribe;

/// Category for new-video announcements.
pub const NEW_VIDEO: &str = "new-video";

/// Category for community-post announcements.
pub const COMMUNITY_POST: &str = "community-post";

/// Façade that owns one registry and publishes under fixed categories.
pub struct Publisher {
    registry: Registry,
    new_video: Category,
    community_post: Category,
}

impl Publisher {
    /// Creates a publisher with default registry configuration.
    pub fn new() -> Self {
        Publisher::with_config(&Config::default())
    }

    /// Creates a publisher whose registry uses the given configuration.
    pub fn with_config(config: &Config) -> Self {
        Self {
            registry: Registry::new(config),
            new_video: Category::from_static(NEW_VIDEO),
            community_post: Category::from_static(COMMUNITY_POST),
        }
    }

    /// The registry this publisher announces through.
    ///
    /// Consumers register and deregister here; the publisher itself only
    /// ever calls `notify`.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Category used by [`Publisher::announce_new_video`].
    pub fn video_category(&self) -> &Category {
        &self.new_video
    }

    /// Category used by [`Publisher::announce_community_post`].
    pub fn post_category(&self) -> &Category {
        &self.community_post
    }

    /// Shorthand for subscribing to new-video announcements.
    pub async fn subscribe_videos(&self, subscriber: Arc<dyn Subscribe>) {
        self.registry.subscribe(self.new_video.clone(), subscriber).await;
    }

    /// Shorthand for subscribing to community-post announcements.
    pub async fn subscribe_posts(&self, subscriber: Arc<dyn Subscribe>) {
        self.registry
            .subscribe(self.community_post.clone(), subscriber)
            .await;
    }

    /// Announces a newly uploaded video to every video subscriber.
    ///
    /// Returns the number of successful deliveries.
    ///
    /// # Errors
    /// [`NotifyError::DeliveryFailed`] when one or more subscribers failed;
    /// see [`Registry::notify`].
    pub async fn announce_new_video(
        &self,
        title: impl Into<Arc<str>>,
        uploaded_by: impl Into<Arc<str>>,
    ) -> Result<usize, NotifyError> {
        let payload = Notification::new_video(title, uploaded_by);
        self.registry.notify(&self.new_video, &payload).await
    }

    /// Announces a new community post to every post subscriber.
    ///
    /// Returns the number of successful deliveries.
    ///
    /// # Errors
    /// [`NotifyError::DeliveryFailed`] when one or more subscribers failed;
    /// see [`Registry::notify`].
    pub async fn announce_community_post(
        &self,
        title: impl Into<Arc<str>>,
        written_by: impl Into<Arc<str>>,
    ) -> Result<usize, NotifyError> {
        let payload = Notification::community_post(title, written_by);
        self.registry.notify(&self.community_post, &payload).await
    }
}

impl Default for Publisher {
    fn default() -> Self {
        Publisher::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subscribers::{PostFeed, VideoFeed};

    #[tokio::test]
    async fn test_announcements_stay_within_their_category() {
        let publisher = Publisher::new();

        let v1 = VideoFeed::new("v1");
        let v2 = VideoFeed::new("v2");
        let p1 = PostFeed::new("p1");
        publisher.subscribe_videos(v1.clone()).await;
        publisher.subscribe_videos(v2.clone()).await;
        publisher.subscribe_posts(p1.clone()).await;

        let delivered = publisher.announce_new_video("T", "U").await.unwrap();
        assert_eq!(delivered, 2);

        assert_eq!(v1.entries(), vec!["U has uploaded a new video: T"]);
        assert_eq!(v2.entries(), vec!["U has uploaded a new video: T"]);
        assert!(p1.entries().is_empty());
    }

    #[tokio::test]
    async fn test_unsubscribed_feed_misses_later_announcements() {
        let publisher = Publisher::new();

        let v1 = VideoFeed::new("v1");
        let v2 = VideoFeed::new("v2");
        publisher.subscribe_videos(v1.clone()).await;
        publisher.subscribe_videos(v2.clone()).await;

        publisher.announce_new_video("first", "U").await.unwrap();
        publisher
            .registry()
            .unsubscribe(publisher.video_category(), "v1")
            .await;
        publisher.announce_new_video("second", "U").await.unwrap();

        assert_eq!(v1.entries(), vec!["U has uploaded a new video: first"]);
        assert_eq!(
            v2.entries(),
            vec![
                "U has uploaded a new video: first",
                "U has uploaded a new video: second",
            ]
        );
    }

    #[tokio::test]
    async fn test_announce_with_no_subscribers_is_noop() {
        let publisher = Publisher::new();
        assert_eq!(publisher.announce_new_video("T", "U").await.unwrap(), 0);
        assert_eq!(
            publisher.announce_community_post("T", "W").await.unwrap(),
            0
        );
    }
}
