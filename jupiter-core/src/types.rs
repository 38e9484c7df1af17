//! Data model types for accounts, catalog items, and favorites.
//!
//! These types represent the persistent schema: accounts, items, and the
//! per-type groupings returned by favorite queries.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ── Account ─────────────────────────────────────────────────────────────────

/// A registered user account.
///
/// `password` holds the derived credential, never the raw password the user
/// typed (see [`crate::credential::encrypt_password`]).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub user_id: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl Account {
    /// Display name stored in the session after a successful login.
    pub fn display_name(&self) -> String {
        display_name(&self.first_name, &self.last_name)
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("user_id", &self.user_id)
            .field("password", &"****")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .finish()
    }
}

/// Join first and last name the way login responses present them.
pub fn display_name(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name, last_name)
}

/// Body returned to a client after its credentials check out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user_id: String,
    pub name: String,
}

// ── Item ────────────────────────────────────────────────────────────────────

/// Kind of catalog item. Every favorite query groups its results by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemType {
    Video,
    Stream,
    Clip,
}

impl ItemType {
    /// All variants, in bucket order.
    pub const ALL: [ItemType; 3] = [ItemType::Video, ItemType::Stream, ItemType::Clip];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "VIDEO",
            Self::Stream => "STREAM",
            Self::Clip => "CLIP",
        }
    }

    /// Parse a stored type name. Unlike loose parsers elsewhere this has no
    /// fallback: an unknown name means the row did not come from this crate.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "VIDEO" => Some(Self::Video),
            "STREAM" => Some(Self::Stream),
            "CLIP" => Some(Self::Clip),
            _ => None,
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A catalog item: a video, live stream, or clip.
///
/// Streams have no `url`; most videos have no `game_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub thumbnail_url: String,
    #[serde(alias = "user_name")]
    pub broadcaster_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub game_id: Option<String>,
    #[serde(rename = "item_type")]
    pub item_type: ItemType,
}

// ── Type Buckets ────────────────────────────────────────────────────────────

/// Values grouped by [`ItemType`], with one list for every type.
///
/// A bucket exists for each variant from construction onward, so lookups on
/// a valid type never miss. Lists keep the order values were pushed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TypeBuckets<T> {
    buckets: BTreeMap<ItemType, Vec<T>>,
}

impl<T> TypeBuckets<T> {
    pub fn new() -> Self {
        let buckets = ItemType::ALL
            .into_iter()
            .map(|item_type| (item_type, Vec::new()))
            .collect();
        Self { buckets }
    }

    /// Append a value to the bucket for `item_type`.
    pub fn push(&mut self, item_type: ItemType, value: T) {
        self.buckets.entry(item_type).or_default().push(value);
    }

    pub fn get(&self, item_type: ItemType) -> &[T] {
        self.buckets
            .get(&item_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Iterate over every bucket, including empty ones, in [`ItemType`] order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemType, &[T])> {
        self.buckets
            .iter()
            .map(|(item_type, values)| (*item_type, values.as_slice()))
    }

    /// Total number of values across all buckets.
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl<T> Default for TypeBuckets<T> {
    fn default() -> Self {
        Self::new()
    }
}
