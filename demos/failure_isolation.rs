//! # Example: failure_isolation
//!
//! Demonstrates that one misbehaving subscriber cannot break delivery to the
//! others: the registry completes the full fan-out, then reports every
//! failure to the notify caller in a single aggregate error.
//!
//! ## Run
//! ```bash
//! cargo run --example failure_isolation
//! ```

use eventcast::{Notification, Publisher, Subscribe, SubscriberError, VideoFeed};

/// Subscriber whose reaction always fails.
struct Flaky;

#[async_trait::async_trait]
impl Subscribe for Flaky {
    fn id(&self) -> &str {
        "flaky"
    }

    async fn update(&self, _payload: &Notification) -> Result<(), SubscriberError> {
        Err(SubscriberError::failed("downstream unavailable"))
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let publisher = Publisher::new();

    let before = VideoFeed::new("before-flaky");
    let after = VideoFeed::new("after-flaky");
    publisher.subscribe_videos(before.clone()).await;
    publisher.subscribe_videos(std::sync::Arc::new(Flaky)).await;
    publisher.subscribe_videos(after.clone()).await;

    match publisher.announce_new_video("T", "U").await {
        Ok(delivered) => println!("unexpected clean delivery to {delivered}"),
        Err(err) => {
            println!("label:   {}", err.as_label());
            println!("message: {}", err.as_message());
        }
    }

    // Both healthy feeds still received the payload.
    println!("before-flaky log: {:?}", before.entries());
    println!("after-flaky log:  {:?}", after.entries());

    Ok(())
}
