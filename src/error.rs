//! Error types used by the registry and subscribers.
//!
//! This module defines three error enums:
//!
//! - [`Error`] — errors raised when constructing registry inputs (categories).
//! - [`NotifyError`] — aggregate dispatch failure returned by `notify`.
//! - [`SubscriberError`] — failure of a single subscriber's `update` call.
//!
//! All types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//!
//! Two conditions are deliberately **not** errors:
//! - an unknown category: subscribe lazily creates it, unsubscribe and notify
//!   treat it as empty;
//! - a duplicate registration: re-subscribing the same (category, id) silently
//!   replaces the prior entry.

use thiserror::Error;

use crate::events::{Category, SubscriberId};

/// # Errors produced when constructing registry inputs.
///
/// The registry itself never fails on lookup; the only validated input is the
/// category identifier, which must be non-empty.
#[non_exhaustive]
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Category identifier was empty.
    #[error("category name must not be empty")]
    EmptyCategory,
}

impl Error {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use eventcast::Error;
    ///
    /// assert_eq!(Error::EmptyCategory.as_label(), "empty_category");
    /// assert_eq!(Error::EmptyCategory.as_message(), "category name must not be empty");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            Error::EmptyCategory => "empty_category",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            Error::EmptyCategory => "category name must not be empty".to_string(),
        }
    }
}

/// # Failure of a single subscriber during dispatch.
///
/// Produced by a subscriber's `update` call (or synthesized by the registry
/// when an update panics and panic isolation is enabled).
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubscriberError {
    /// The subscriber's reaction failed with a reportable reason.
    #[error("update failed: {reason}")]
    Failed {
        /// Human-readable failure description.
        reason: String,
    },

    /// The subscriber's reaction panicked; the panic was caught by the registry.
    #[error("update panicked: {info}")]
    Panicked {
        /// Panic payload rendered as text.
        info: String,
    },
}

impl SubscriberError {
    /// Shorthand constructor for [`SubscriberError::Failed`].
    pub fn failed(reason: impl Into<String>) -> Self {
        SubscriberError::Failed {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            SubscriberError::Failed { .. } => "subscriber_failed",
            SubscriberError::Panicked { .. } => "subscriber_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SubscriberError::Failed { reason } => format!("error: {reason}"),
            SubscriberError::Panicked { info } => format!("panic: {info}"),
        }
    }
}

/// One failed delivery within a notify call: which subscriber, and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    /// Registration key of the failing subscriber.
    pub id: SubscriberId,
    /// What its `update` produced.
    pub error: SubscriberError,
}

/// # Aggregate dispatch failure returned by `notify`.
///
/// The registry never aborts a fan-out on the first failing subscriber: every
/// registered subscriber is attempted, and only afterwards are the collected
/// failures surfaced to the caller in a single error.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum NotifyError {
    /// One or more subscribers failed during the fan-out.
    #[error("{} of {} deliveries failed for category '{category}'", failures.len(), failures.len() + delivered)]
    DeliveryFailed {
        /// Category the fan-out targeted.
        category: Category,
        /// Number of subscribers that completed `update` successfully.
        delivered: usize,
        /// Every failed delivery, in dispatch order.
        failures: Vec<DeliveryFailure>,
    },
}

impl NotifyError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            NotifyError::DeliveryFailed { .. } => "notify_delivery_failed",
        }
    }

    /// Returns a human-readable message with per-subscriber details.
    pub fn as_message(&self) -> String {
        match self {
            NotifyError::DeliveryFailed {
                category,
                delivered,
                failures,
            } => {
                let detail: Vec<String> = failures
                    .iter()
                    .map(|f| format!("{}={}", f.id, f.error.as_message()))
                    .collect();
                format!(
                    "category '{category}': delivered={delivered} failed={} [{}]",
                    failures.len(),
                    detail.join(", ")
                )
            }
        }
    }
}
