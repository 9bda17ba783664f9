//! Server Synchronization
//!
//! Persists board mutations and decides how local state is reconciled
//! with the outcome. Failures are logged here and never surfaced further.

use crate::api::ListRepository;
use crate::board::{self, Edit, Undo};
use crate::config::MoveMode;
use crate::models::List;

/// What to do with local state once a persistence call settles
#[derive(Debug, Clone, PartialEq)]
pub enum Reconcile {
    /// Local state already matches the server
    Keep,
    /// Replace these lists (matched by id) in local state
    Replace(Vec<List>),
    /// Server state unknown: reverse just the failed mutation
    Undo(Undo),
}

/// Apply a reconciliation to the board
pub fn apply(lists: &mut [List], reconcile: Reconcile) {
    match reconcile {
        Reconcile::Keep => {}
        Reconcile::Replace(copies) => board::replace_lists(lists, copies),
        Reconcile::Undo(undo) => board::undo(lists, &undo),
    }
}

/// Fetch the whole collection
pub async fn load<R: ListRepository + ?Sized>(repo: &R) -> Option<Vec<List>> {
    match repo.list_all().await {
        Ok(lists) => {
            log::info!(target: "sync", "loaded {} lists", lists.len());
            Some(lists)
        }
        Err(e) => {
            log::error!(target: "sync", "error fetching lists: {}", e);
            None
        }
    }
}

/// Create an empty list on the server
pub async fn create_list<R: ListRepository + ?Sized>(repo: &R) -> Option<List> {
    match repo.create().await {
        Ok(list) => {
            log::debug!(target: "sync", "created list {}", list.id);
            Some(list)
        }
        Err(e) => {
            log::error!(target: "sync", "error creating list: {}", e);
            None
        }
    }
}

/// Delete a list; `true` once the server confirmed it
pub async fn delete_list<R: ListRepository + ?Sized>(repo: &R, list_id: &str) -> bool {
    match repo.delete(list_id).await {
        Ok(()) => true,
        Err(e) => {
            log::error!(target: "sync", "error deleting list {}: {}", list_id, e);
            false
        }
    }
}

/// After a failed write, adopt the server's copies of the lists the edit
/// touched. Later edits that did reach the server are kept that way.
/// If the server cannot be read either, only the failed mutation is undone.
async fn recover<R: ListRepository + ?Sized>(repo: &R, undo: Undo) -> Reconcile {
    match repo.list_all().await {
        Ok(server) => {
            let touched = undo.list_ids();
            let copies: Vec<List> = server
                .into_iter()
                .filter(|list| touched.contains(&list.id.as_str()))
                .collect();
            log::info!(target: "sync", "re-read {} lists after failed write", copies.len());
            Reconcile::Replace(copies)
        }
        Err(e) => {
            log::error!(target: "sync", "error re-reading lists, undoing locally: {}", e);
            Reconcile::Undo(undo)
        }
    }
}

/// Persist every list an optimistic edit touched
pub async fn persist<R: ListRepository + ?Sized>(repo: &R, edit: Edit) -> Reconcile {
    for list in &edit.after {
        if let Err(e) = repo.update(list).await {
            log::error!(target: "sync", "error updating list {}: {}", list.id, e);
            return recover(repo, edit.undo).await;
        }
    }
    Reconcile::Keep
}

/// Persist a cross-list move produced by [`crate::board::move_item`]
pub async fn persist_move<R: ListRepository + ?Sized>(
    repo: &R,
    mode: MoveMode,
    item_id: &str,
    edit: Edit,
) -> Reconcile {
    let (Some(source), Some(target)) = (edit.after.first(), edit.after.get(1)) else {
        log::warn!(target: "sync", "move of {} carries no source/target pair", item_id);
        return Reconcile::Keep;
    };

    match mode {
        MoveMode::Atomic => match repo.move_item(&source.id, item_id, &target.id).await {
            Ok(moved) => Reconcile::Replace(vec![moved.source, moved.target]),
            Err(e) => {
                log::error!(target: "sync", "error moving item {} from {} to {}: {}", item_id, source.id, target.id, e);
                recover(repo, edit.undo).await
            }
        },
        MoveMode::PutPair => {
            if let Err(e) = repo.update(source).await {
                log::error!(target: "sync", "error updating source list {}: {}", source.id, e);
                return recover(repo, edit.undo).await;
            }
            if let Err(e) = repo.update(target).await {
                log::error!(target: "sync", "error updating target list {}: {}", target.id, e);
                // Source no longer holds the item on the server: put it back.
                if let Some(source_before) = edit.before.first() {
                    if let Err(e) = repo.update(source_before).await {
                        log::error!(
                            target: "sync",
                            "could not restore list {}, item {} is missing on the server: {}",
                            source_before.id, item_id, e
                        );
                    }
                }
                return recover(repo, edit.undo).await;
            }
            Reconcile::Keep
        }
    }
}
