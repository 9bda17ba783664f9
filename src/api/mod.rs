//! REST API Layer
//!
//! Abstract access to the list store behind the board.
//! The browser talks to it over HTTP; tests use the in-memory double.

mod http;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{List, MovedLists};

pub use http::HttpListRepository;

/// Common result type for API calls
pub type ApiResult<T> = Result<T, ApiError>;

/// API-level errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("{url} answered {status}")]
    Status { status: u16, url: String },

    #[error("unexpected response body: {0}")]
    Decode(String),

    #[error("not found: {0}")]
    NotFound(String),
}

/// CRUD access to lists.
///
/// Futures are not `Send`: in the browser they run on the single UI thread
/// via `spawn_local`.
#[async_trait(?Send)]
pub trait ListRepository {
    /// `GET /api/lists`
    async fn list_all(&self) -> ApiResult<Vec<List>>;

    /// `POST /api/lists` with an empty item sequence
    async fn create(&self) -> ApiResult<List>;

    /// `PUT /api/lists/:id` with the complete document
    async fn update(&self, list: &List) -> ApiResult<()>;

    /// `DELETE /api/lists/:id`
    async fn delete(&self, list_id: &str) -> ApiResult<()>;

    /// Atomically move one item from `source_id` to the end of `target_id`
    async fn move_item(&self, source_id: &str, item_id: &str, target_id: &str) -> ApiResult<MovedLists>;
}
