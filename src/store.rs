//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! All writes go through the pure functions in `board`.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board;
use crate::models::List;
use crate::sync::{self, Reconcile};

/// Board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// Lists in server order
    pub lists: Vec<List>,
    /// Set once the initial load has settled, successfully or not
    pub loaded: bool,
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection with a server response
pub fn store_replace_all(store: &BoardStore, lists: Vec<List>) {
    *store.lists().write() = lists;
}

pub fn store_mark_loaded(store: &BoardStore) {
    *store.loaded().write() = true;
}

/// Append a list created by the server
pub fn store_append_list(store: &BoardStore, list: List) {
    board::append_list(&mut store.lists().write(), list);
}

/// Remove a list by ID
pub fn store_remove_list(store: &BoardStore, list_id: &str) {
    board::remove_list(&mut store.lists().write(), list_id);
}

/// Apply the outcome of a persistence call
pub fn store_reconcile(store: &BoardStore, reconcile: Reconcile) {
    if reconcile != Reconcile::Keep {
        sync::apply(&mut store.lists().write(), reconcile);
    }
}
