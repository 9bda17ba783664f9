//! HTTP Repository
//!
//! `ListRepository` over the REST API. On wasm32 reqwest drives the
//! browser's `fetch`.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, ListRepository};
use crate::models::{List, MoveRequest, MovedLists, NewList};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Clone, Debug)]
pub struct HttpListRepository {
    base_url: String,
    client: Client,
}

impl HttpListRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn lists_url(&self) -> String {
        format!("{}/api/lists", self.base_url)
    }

    fn list_url(&self, list_id: &str) -> String {
        format!("{}/{}", self.lists_url(), segment(list_id))
    }

    fn move_url(&self, source_id: &str, item_id: &str) -> String {
        format!("{}/items/{}/move", self.list_url(source_id), segment(item_id))
    }
}

fn segment(raw: &str) -> String {
    utf8_percent_encode(raw, PATH_SEGMENT).to_string()
}

fn transport(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Non-2xx answers become errors
fn check(resp: Response) -> ApiResult<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let url = resp.url().to_string();
    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(url));
    }
    Err(ApiError::Status {
        status: status.as_u16(),
        url,
    })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> ApiResult<T> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ListRepository for HttpListRepository {
    async fn list_all(&self) -> ApiResult<Vec<List>> {
        let resp = self.client.get(self.lists_url()).send().await.map_err(transport)?;
        decode(check(resp)?).await
    }

    async fn create(&self) -> ApiResult<List> {
        let resp = self
            .client
            .post(self.lists_url())
            .json(&NewList::default())
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp)?).await
    }

    async fn update(&self, list: &List) -> ApiResult<()> {
        let resp = self
            .client
            .put(self.list_url(&list.id))
            .json(list)
            .send()
            .await
            .map_err(transport)?;
        check(resp).map(|_| ())
    }

    async fn delete(&self, list_id: &str) -> ApiResult<()> {
        let resp = self.client.delete(self.list_url(list_id)).send().await.map_err(transport)?;
        check(resp).map(|_| ())
    }

    async fn move_item(&self, source_id: &str, item_id: &str, target_id: &str) -> ApiResult<MovedLists> {
        let resp = self
            .client
            .post(self.move_url(source_id, item_id))
            .json(&MoveRequest { target: target_id })
            .send()
            .await
            .map_err(transport)?;
        decode(check(resp)?).await
    }
}
