//! In-memory repository for tests, with switchable failures.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::{ApiError, ApiResult, ListRepository};
use crate::board;
use crate::models::{List, MovedLists};

/// Call that should answer with an error
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    ListAll,
    Create,
    Update(String),
    Delete(String),
    Move,
}

#[derive(Default)]
pub struct MemoryListRepository {
    lists: RefCell<Vec<List>>,
    next_id: Cell<u32>,
    /// Failures with the number of calls still let through first
    failing: RefCell<Vec<(Failure, u32)>>,
    calls: RefCell<Vec<String>>,
}

impl MemoryListRepository {
    pub fn with_lists(lists: Vec<List>) -> Self {
        Self {
            lists: RefCell::new(lists),
            ..Default::default()
        }
    }

    pub fn fail(&self, failure: Failure) {
        self.fail_after(failure, 0);
    }

    /// Let `successes` matching calls through, then fail every later one
    pub fn fail_after(&self, failure: Failure, successes: u32) {
        self.failing.borrow_mut().push((failure, successes));
    }

    /// Server-side state
    pub fn stored(&self) -> Vec<List> {
        self.lists.borrow().clone()
    }

    /// Calls received so far, e.g. `PUT a`
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: String, failure: Failure) -> ApiResult<()> {
        self.calls.borrow_mut().push(call.clone());
        let mut failing = self.failing.borrow_mut();
        match failing.iter_mut().find(|(registered, _)| *registered == failure) {
            Some((_, 0)) => Err(ApiError::Status {
                status: 500,
                url: format!("memory://{}", call),
            }),
            Some((_, remaining)) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl ListRepository for MemoryListRepository {
    async fn list_all(&self) -> ApiResult<Vec<List>> {
        self.record("GET".to_string(), Failure::ListAll)?;
        Ok(self.stored())
    }

    async fn create(&self) -> ApiResult<List> {
        self.record("POST".to_string(), Failure::Create)?;
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        let list = List {
            id: format!("srv-{}", id),
            items: Vec::new(),
        };
        self.lists.borrow_mut().push(list.clone());
        Ok(list)
    }

    async fn update(&self, list: &List) -> ApiResult<()> {
        self.record(format!("PUT {}", list.id), Failure::Update(list.id.clone()))?;
        let mut lists = self.lists.borrow_mut();
        let stored = lists
            .iter_mut()
            .find(|stored| stored.id == list.id)
            .ok_or_else(|| ApiError::NotFound(list.id.clone()))?;
        *stored = list.clone();
        Ok(())
    }

    async fn delete(&self, list_id: &str) -> ApiResult<()> {
        self.record(format!("DELETE {}", list_id), Failure::Delete(list_id.to_string()))?;
        board::remove_list(&mut self.lists.borrow_mut(), list_id)
            .map(|_| ())
            .ok_or_else(|| ApiError::NotFound(list_id.to_string()))
    }

    async fn move_item(&self, source_id: &str, item_id: &str, target_id: &str) -> ApiResult<MovedLists> {
        self.record(format!("MOVE {} {} {}", source_id, item_id, target_id), Failure::Move)?;
        let edit = board::move_item(&mut self.lists.borrow_mut(), source_id, target_id, item_id)
            .ok_or_else(|| ApiError::NotFound(item_id.to_string()))?;
        let mut after = edit.after.into_iter();
        match (after.next(), after.next()) {
            (Some(source), Some(target)) => Ok(MovedLists { source, target }),
            _ => Err(ApiError::NotFound(target_id.to_string())),
        }
    }
}
