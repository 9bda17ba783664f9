//! Board Actions
//!
//! User-action handlers: update the store, persist, reconcile.
//! Every handler reads the store when it runs, never a captured copy.
//! The `spawn_local` wrappers stay thin; the steps they run are generic over
//! the repository so they can be driven without a browser.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::DragPayload;

use crate::api::ListRepository;
use crate::board::{self, Edit};
use crate::config::MoveMode;
use crate::context::AppContext;
use crate::models::{Item, ListId};
use crate::store::{
    store_append_list, store_mark_loaded, store_reconcile, store_remove_list, store_replace_all,
    BoardStateStoreFields, BoardStore,
};
use crate::sync;

/// Initial fetch of the collection
pub fn load_board(ctx: AppContext, store: BoardStore) {
    spawn_local(async move { load_into(&ctx.repository(), &store).await });
}

async fn load_into<R: ListRepository + ?Sized>(repo: &R, store: &BoardStore) {
    if let Some(lists) = sync::load(repo).await {
        store_replace_all(store, lists);
    }
    store_mark_loaded(store);
}

/// Create an empty list; it appears once the server assigned its id
pub fn create_list(ctx: AppContext, store: BoardStore) {
    spawn_local(async move { create_into(&ctx.repository(), &store).await });
}

async fn create_into<R: ListRepository + ?Sized>(repo: &R, store: &BoardStore) {
    if let Some(list) = sync::create_list(repo).await {
        store_append_list(store, list);
    }
}

/// Add an item from prompt input (optimistic)
pub fn add_item(ctx: AppContext, store: BoardStore, list_id: ListId, input: String) {
    let Some(edit) = begin_add(&store, &list_id, &input) else {
        return;
    };
    spawn_local(async move { settle(&ctx.repository(), &store, edit).await });
}

fn begin_add(store: &BoardStore, list_id: &str, input: &str) -> Option<Edit> {
    let Some(content) = board::item_content(input) else {
        log::debug!(target: "board", "empty input, nothing added to {}", list_id);
        return None;
    };
    let edit = board::add_item(&mut store.lists().write(), list_id, Item::new(content));
    if edit.is_none() {
        log::warn!(target: "board", "list {} is gone, item not added", list_id);
    }
    edit
}

/// Delete a list; local state follows the server
pub fn delete_list(ctx: AppContext, store: BoardStore, list_id: ListId) {
    spawn_local(async move { delete_from(&ctx.repository(), &store, &list_id).await });
}

async fn delete_from<R: ListRepository + ?Sized>(repo: &R, store: &BoardStore, list_id: &str) {
    if sync::delete_list(repo, list_id).await {
        store_remove_list(store, list_id);
    }
}

/// Flip an item's completion flag (optimistic)
pub fn toggle_item(ctx: AppContext, store: BoardStore, list_id: ListId, item_id: String) {
    let Some(edit) = board::toggle_item(&mut store.lists().write(), &list_id, &item_id) else {
        log::warn!(target: "board", "item {} not found in list {}", item_id, list_id);
        return;
    };
    spawn_local(async move { settle(&ctx.repository(), &store, edit).await });
}

/// Move a dropped item onto `target` (optimistic)
pub fn drop_item(ctx: AppContext, store: BoardStore, payload: DragPayload, target: ListId) {
    let Some(edit) = board::move_item(&mut store.lists().write(), &payload.source, &target, &payload.entry) else {
        log::debug!(target: "board", "drop of {} from {} onto {} ignored", payload.entry, payload.source, target);
        return;
    };
    let mode = ctx.move_mode();
    spawn_local(async move { settle_move(&ctx.repository(), &store, mode, &payload.entry, edit).await });
}

async fn settle<R: ListRepository + ?Sized>(repo: &R, store: &BoardStore, edit: Edit) {
    let reconcile = sync::persist(repo, edit).await;
    store_reconcile(store, reconcile);
}

async fn settle_move<R: ListRepository + ?Sized>(
    repo: &R,
    store: &BoardStore,
    mode: MoveMode,
    item_id: &str,
    edit: Edit,
) {
    let reconcile = sync::persist_move(repo, mode, item_id, edit).await;
    store_reconcile(store, reconcile);
}
