//! Client-side filtering over a fetched property collection.
//!
//! Everything here is pure: views fetch the whole collection and hand it to
//! these functions. Source order is always preserved.

use crate::models::{Property, UserId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("search query is empty")]
    Empty,
}

/// Keep only the records owned by `user`. An unresolved user owns nothing.
pub fn owned_by(records: Vec<Property>, user: Option<&UserId>) -> Vec<Property> {
    match user {
        Some(user) => records.into_iter().filter(|p| p.is_owned_by(user)).collect(),
        None => Vec::new(),
    }
}

/// Drop the record with `id`, returning whether one was removed
pub fn remove_by_id(records: &mut Vec<Property>, id: &str) -> bool {
    let before = records.len();
    records.retain(|p| p.id != id);
    records.len() != before
}

/// Free-text search term, guaranteed to contain something besides whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    /// Validate user input. Only the emptiness check trims; the term itself is
    /// matched as typed.
    pub fn parse(raw: &str) -> Result<Self, QueryError> {
        if raw.trim().is_empty() {
            return Err(QueryError::Empty);
        }
        Ok(Self {
            raw: raw.to_string(),
            needle: raw.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive substring match on name or location
    pub fn matches(&self, property: &Property) -> bool {
        property.name.to_lowercase().contains(&self.needle)
            || property.location.to_lowercase().contains(&self.needle)
    }
}

pub fn search(records: Vec<Property>, query: &SearchQuery) -> Vec<Property> {
    records.into_iter().filter(|p| query.matches(p)).collect()
}
