//! Frontend Models
//!
//! Data structures matching the REST API documents.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Server-assigned list identifier
pub type ListId = String;
/// Client-generated item identifier, unique across the whole board
pub type ItemId = String;

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub content: String,
    /// Completion flag (`showTick` on the wire)
    #[serde(rename = "showTick", alias = "complete", default)]
    pub complete: bool,
}

impl Item {
    /// New incomplete item with a fresh random id
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            complete: false,
        }
    }
}

/// An ordered collection of items; the unit of persistence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    #[serde(rename = "_id")]
    pub id: ListId,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// Body of `POST /api/lists`
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewList {
    pub items: Vec<Item>,
}

/// Body of the atomic move request
#[derive(Debug, Clone, Serialize)]
pub struct MoveRequest<'a> {
    pub target: &'a str,
}

/// Server copies of both lists after an atomic move
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MovedLists {
    pub source: List,
    pub target: List,
}
