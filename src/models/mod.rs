use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier handed out by the identity provider
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Property listing as returned by the remote store
///
/// Records are read-only on this side. The only local mutation is dropping a
/// whole record after the store confirmed its deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub owner_id: Option<UserId>,
    pub name: String,
    pub location: String,
    pub price: f64,
    #[serde(default)]
    pub image: String,
}

impl Property {
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        self.owner_id.as_ref() == Some(user)
    }

    /// Detail page route for this record
    pub fn detail_path(&self) -> String {
        format!("/propertyDetails/{}", self.id)
    }
}
