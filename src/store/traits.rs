//! `DraftStore` trait — backend-agnostic key-value persistence.

use async_trait::async_trait;

use crate::error::StoreError;

/// Fixed storage keys. Only [`keys::PREFERENCES`] is written by the
/// wizard; the other two belong to collaborating components and are
/// listed here so nobody reuses them.
pub mod keys {
    /// The preference draft JSON blob.
    pub const PREFERENCES: &str = "user_preferences";
    /// Saved display name (written by the profile header, not us).
    pub const DISPLAY_NAME: &str = "display_name";
    /// Ad-hoc itinerary list maintained by the attractions map.
    pub const ITINERARY: &str = "itinerary";
}

/// Flat key-value blob store. No schema, no TTL, no partial merge —
/// every `set` is a full overwrite of the value under `key`.
#[async_trait]
pub trait DraftStore: Send + Sync {
    /// Fetch the value stored under `key`, if any.
    async fn get(&self, key: &str) -> Result<Option<serde_json::Value>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &serde_json::Value) -> Result<(), StoreError>;
}
