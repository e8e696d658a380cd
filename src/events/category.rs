//! # Registration keys: event categories and subscriber identities.
//!
//! [`Category`] names a flat, unrelated class of events ("new-video",
//! "community-post", ...). There is no hierarchy and no wildcard matching.
//!
//! [`SubscriberId`] identifies a subscriber **within one category's**
//! registration set. Uniqueness is scoped per category, not global: the same
//! id may subscribe to many categories independently, and re-subscribing the
//! same (category, id) replaces the earlier registration.
//!
//! Both are thin wrappers over `Arc<str>`: cheap to clone, usable as map keys.

use std::fmt;
use std::sync::Arc;

use crate::error::Error;

/// Opaque identifier naming a class of events.
///
/// Construction validates exactly one thing: the name must be non-empty.
/// Everything else about the string is opaque to the registry.
///
/// ## Example
/// ```
/// use eventcast::Category;
///
/// let cat = Category::new("new-video").unwrap();
/// assert_eq!(cat.as_str(), "new-video");
/// assert!(Category::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(Arc<str>);

impl Category {
    /// Creates a category from a non-empty name.
    pub fn new(name: impl AsRef<str>) -> Result<Self, Error> {
        let name = name.as_ref();
        if name.is_empty() {
            return Err(Error::EmptyCategory);
        }
        Ok(Self(Arc::from(name)))
    }

    /// Creates a category from a compile-time constant name.
    ///
    /// Used for the publisher's well-known categories, which are known
    /// non-empty; debug builds still assert it.
    pub(crate) fn from_static(name: &'static str) -> Self {
        debug_assert!(!name.is_empty());
        Self(Arc::from(name))
    }

    /// The category name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Category {
    type Error = Error;

    fn try_from(name: &str) -> Result<Self, Error> {
        Category::new(name)
    }
}

/// Identity of a subscriber within one category's registration set.
///
/// The registry compares ids by string value; two subscriber instances that
/// report the same id collide within a category (the later registration wins).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SubscriberId(Arc<str>);

impl SubscriberId {
    /// The identity string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SubscriberId {
    fn from(id: &str) -> Self {
        Self(Arc::from(id))
    }
}

impl From<String> for SubscriberId {
    fn from(id: String) -> Self {
        Self(Arc::from(id.as_str()))
    }
}

impl fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for SubscriberId {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}
