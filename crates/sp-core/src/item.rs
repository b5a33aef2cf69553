//! Catalog item model
//!
//! The engine never inspects what an item *is* (a store, an activity, or a
//! user-entered custom row). It only needs the `ReelItem` capability: a
//! stable key, a display label, an optional secondary label, filter tags,
//! and an optional price tier. Each catalog variant implements the trait;
//! `CatalogItem` wraps them for heterogeneous lists.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable item identity, comparable across reloads of the same catalog
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey(String);

impl ItemKey {
    /// Create a new key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Key as string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Price tier classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceTier {
    /// Cheap / free
    Budget,
    /// Mid-range
    Standard,
    /// Expensive
    Premium,
}

/// Polymorphic item capability consumed by the reel engine
pub trait ReelItem {
    /// Stable identity across re-shuffles of the same collection
    fn key(&self) -> &ItemKey;

    /// Primary display label
    fn label(&self) -> &str;

    /// Optional secondary label (address, description, ...)
    fn sublabel(&self) -> Option<&str> {
        None
    }

    /// Filter tags (categories) this item belongs to
    fn tags(&self) -> &[String];

    /// Price tier, if the item has one
    fn tier(&self) -> Option<PriceTier> {
        None
    }
}

/// A store / venue entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreItem {
    pub key: ItemKey,
    pub name: String,
    /// Street address shown under the name
    pub address: Option<String>,
    pub tags: Vec<String>,
    pub tier: Option<PriceTier>,
}

impl StoreItem {
    /// Create a store entry
    pub fn new(key: impl Into<ItemKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            address: None,
            tags: Vec::new(),
            tier: None,
        }
    }

    /// Set the street address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Add a filter tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the price tier
    pub fn with_tier(mut self, tier: PriceTier) -> Self {
        self.tier = Some(tier);
        self
    }
}

impl ReelItem for StoreItem {
    fn key(&self) -> &ItemKey {
        &self.key
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn sublabel(&self) -> Option<&str> {
        self.address.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn tier(&self) -> Option<PriceTier> {
        self.tier
    }
}

/// An activity entry (no address, optional tier)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityItem {
    pub key: ItemKey,
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub tier: Option<PriceTier>,
}

impl ActivityItem {
    /// Create an activity entry
    pub fn new(key: impl Into<ItemKey>, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            description: None,
            tags: Vec::new(),
            tier: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a filter tag
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set the price tier
    pub fn with_tier(mut self, tier: PriceTier) -> Self {
        self.tier = Some(tier);
        self
    }
}

impl ReelItem for ActivityItem {
    fn key(&self) -> &ItemKey {
        &self.key
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn sublabel(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn tags(&self) -> &[String] {
        &self.tags
    }

    fn tier(&self) -> Option<PriceTier> {
        self.tier
    }
}

/// A free-form user entry (no tags, no tier)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomItem {
    pub key: ItemKey,
    pub text: String,
}

impl CustomItem {
    /// Create a custom entry
    pub fn new(key: impl Into<ItemKey>, text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            text: text.into(),
        }
    }
}

impl ReelItem for CustomItem {
    fn key(&self) -> &ItemKey {
        &self.key
    }

    fn label(&self) -> &str {
        &self.text
    }

    fn tags(&self) -> &[String] {
        &[]
    }
}

/// Heterogeneous catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CatalogItem {
    Store(StoreItem),
    Activity(ActivityItem),
    Custom(CustomItem),
}

impl ReelItem for CatalogItem {
    fn key(&self) -> &ItemKey {
        match self {
            Self::Store(s) => s.key(),
            Self::Activity(a) => a.key(),
            Self::Custom(c) => c.key(),
        }
    }

    fn label(&self) -> &str {
        match self {
            Self::Store(s) => s.label(),
            Self::Activity(a) => a.label(),
            Self::Custom(c) => c.label(),
        }
    }

    fn sublabel(&self) -> Option<&str> {
        match self {
            Self::Store(s) => s.sublabel(),
            Self::Activity(a) => a.sublabel(),
            Self::Custom(c) => c.sublabel(),
        }
    }

    fn tags(&self) -> &[String] {
        match self {
            Self::Store(s) => s.tags(),
            Self::Activity(a) => a.tags(),
            Self::Custom(c) => c.tags(),
        }
    }

    fn tier(&self) -> Option<PriceTier> {
        match self {
            Self::Store(s) => s.tier(),
            Self::Activity(a) => a.tier(),
            Self::Custom(c) => c.tier(),
        }
    }
}
