//! # Example: feed
//!
//! Demonstrates the full publish/subscribe loop with the built-in feeds.
//!
//! Shows how to:
//! - Wire [`VideoFeed`] / [`PostFeed`] consumers into a [`Publisher`].
//! - Announce through named emission methods (no raw category strings).
//! - Unsubscribe one consumer and announce again.
//!
//! ## Flow
//! ```text
//! Publisher::announce_new_video()
//!     └─► Registry::notify("new-video", payload)
//!           ├─► VideoFeed "koishi".update()
//!           └─► VideoFeed "hoshino".update()
//! Publisher::announce_community_post()
//!     └─► Registry::notify("community-post", payload)
//!           └─► PostFeed "yasuo".update()
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example feed
//! ```

use eventcast::{PostFeed, Publisher, VideoFeed};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let publisher = Publisher::new();

    let koishi = VideoFeed::new("koishi");
    let hoshino = VideoFeed::new("hoshino");
    let yasuo = PostFeed::new("yasuo");

    publisher.subscribe_videos(koishi.clone()).await;
    publisher.subscribe_videos(hoshino.clone()).await;
    publisher.subscribe_posts(yasuo.clone()).await;

    publisher
        .announce_new_video("Top Gun: Maverick", "maverick")
        .await?;
    publisher
        .announce_community_post("wind techniques, explained", "maverick")
        .await?;

    // hoshino loses interest in videos; only koishi hears the next one.
    publisher
        .registry()
        .unsubscribe(publisher.video_category(), "hoshino")
        .await;
    publisher
        .announce_new_video("Top Gun: Maverick 2", "maverick")
        .await?;

    for (who, entries) in [
        ("koishi", koishi.entries()),
        ("hoshino", hoshino.entries()),
        ("yasuo", yasuo.entries()),
    ] {
        println!("--- {who} ---");
        for line in entries {
            println!("  {line}");
        }
    }

    Ok(())
}
