//! # Example: custom_subscriber
//!
//! Demonstrates how to build and attach a custom notification subscriber,
//! registered under an application-defined category.
//!
//! Shows how to:
//! - Implement the [`Subscribe`] trait.
//! - Inspect [`Notification`] / [`NotificationKind`] in a reaction.
//! - Use [`Registry`] directly with a custom [`Category`].
//!
//! ## Run
//! ```bash
//! cargo run --example custom_subscriber
//! ```

use std::sync::Arc;

use eventcast::{Category, Config, Notification, NotificationKind, Registry, SubscriberError};

/// A simple console subscriber that prints whatever it receives.
/// In real life, you could export metrics, push to a tray, or trigger alerts.
struct ConsoleSubscriber {
    id: &'static str,
}

#[async_trait::async_trait]
impl eventcast::Subscribe for ConsoleSubscriber {
    fn id(&self) -> &str {
        self.id
    }

    async fn update(&self, payload: &Notification) -> Result<(), SubscriberError> {
        let label = match &payload.kind {
            NotificationKind::NewVideo => "video".to_string(),
            NotificationKind::CommunityPost => "post".to_string(),
            NotificationKind::Custom(label) => label.to_string(),
            _ => "other".to_string(),
        };
        println!(
            "[{}] {label}: seq={} title={} by={}",
            self.id,
            payload.seq,
            payload.title.as_deref().unwrap_or("<none>"),
            payload.author.as_deref().unwrap_or("<none>"),
        );
        Ok(())
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Registry::new(&Config::default());
    let live = Category::new("livestream")?;

    registry
        .subscribe(live.clone(), Arc::new(ConsoleSubscriber { id: "console-1" }))
        .await;
    registry
        .subscribe(live.clone(), Arc::new(ConsoleSubscriber { id: "console-2" }))
        .await;

    let payload = Notification::custom("livestream")
        .with_title("premiere night")
        .with_author("maverick")
        .with_link("https://example.test/live/1");

    let delivered = registry.notify(&live, &payload).await?;
    println!("delivered to {delivered} subscribers");

    Ok(())
}
