//! Board Updates
//!
//! Pure update functions over the list collection.
//! Every optimistic mutation returns an [`Edit`]: the lists to persist, and
//! an [`Undo`] that reverses only that mutation if the server rejects it.

use crate::models::{Item, List};

/// The inverse of one optimistic mutation.
///
/// Applied to whatever the board holds when the failure arrives, so edits
/// made in the meantime survive.
#[derive(Debug, Clone, PartialEq)]
pub enum Undo {
    /// Take a freshly added item back out
    RemoveItem { list_id: String, item_id: String },
    /// Flip a completion flag back
    Toggle { list_id: String, item_id: String },
    /// Return a moved item to its source list at its old index
    MoveBack {
        source_id: String,
        target_id: String,
        item_id: String,
        index: usize,
    },
}

impl Undo {
    /// Lists this undo touches
    pub fn list_ids(&self) -> Vec<&str> {
        match self {
            Undo::RemoveItem { list_id, .. } | Undo::Toggle { list_id, .. } => vec![list_id.as_str()],
            Undo::MoveBack { source_id, target_id, .. } => vec![source_id.as_str(), target_id.as_str()],
        }
    }
}

/// One optimistic mutation: copies of the touched lists before and after it
#[derive(Debug, Clone, PartialEq)]
pub struct Edit {
    pub before: Vec<List>,
    pub after: Vec<List>,
    pub undo: Undo,
}

pub fn find_list<'a>(lists: &'a [List], list_id: &str) -> Option<&'a List> {
    lists.iter().find(|list| list.id == list_id)
}

fn find_list_mut<'a>(lists: &'a mut [List], list_id: &str) -> Option<&'a mut List> {
    lists.iter_mut().find(|list| list.id == list_id)
}

/// Items of one list, empty when the list is gone
pub fn list_items(lists: &[List], list_id: &str) -> Vec<Item> {
    find_list(lists, list_id)
        .map(|list| list.items.clone())
        .unwrap_or_default()
}

/// 1-based position used for the list header
pub fn list_number(lists: &[List], list_id: &str) -> Option<usize> {
    lists.iter().position(|list| list.id == list_id).map(|idx| idx + 1)
}

/// Append a list created by the server
pub fn append_list(lists: &mut Vec<List>, list: List) {
    lists.push(list);
}

/// Remove a list by id, returning it
pub fn remove_list(lists: &mut Vec<List>, list_id: &str) -> Option<List> {
    let idx = lists.iter().position(|list| list.id == list_id)?;
    Some(lists.remove(idx))
}

/// Normalize prompt input; `None` means nothing should be created
pub fn item_content(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Append an item to a list
pub fn add_item(lists: &mut [List], list_id: &str, item: Item) -> Option<Edit> {
    let list = find_list_mut(lists, list_id)?;
    let before = list.clone();
    let undo = Undo::RemoveItem {
        list_id: list_id.to_string(),
        item_id: item.id.clone(),
    };
    list.items.push(item);
    Some(Edit {
        before: vec![before],
        after: vec![list.clone()],
        undo,
    })
}

/// Flip an item's completion flag
pub fn toggle_item(lists: &mut [List], list_id: &str, item_id: &str) -> Option<Edit> {
    let list = find_list_mut(lists, list_id)?;
    let before = list.clone();
    let item = list.items.iter_mut().find(|item| item.id == item_id)?;
    item.complete = !item.complete;
    Some(Edit {
        before: vec![before],
        after: vec![list.clone()],
        undo: Undo::Toggle {
            list_id: list_id.to_string(),
            item_id: item_id.to_string(),
        },
    })
}

/// Splice an item out of the source list and append it to the target list.
///
/// Returns `None` without touching anything when source and target are the
/// same list, or when either list or the item is missing.
/// `before` and `after` are ordered `[source, target]`.
pub fn move_item(lists: &mut [List], source_id: &str, target_id: &str, item_id: &str) -> Option<Edit> {
    if source_id == target_id {
        return None;
    }
    let source_idx = lists.iter().position(|list| list.id == source_id)?;
    let target_idx = lists.iter().position(|list| list.id == target_id)?;
    let item_idx = lists[source_idx].items.iter().position(|item| item.id == item_id)?;

    let before = vec![lists[source_idx].clone(), lists[target_idx].clone()];
    let item = lists[source_idx].items.remove(item_idx);
    lists[target_idx].items.push(item);

    Some(Edit {
        before,
        after: vec![lists[source_idx].clone(), lists[target_idx].clone()],
        undo: Undo::MoveBack {
            source_id: source_id.to_string(),
            target_id: target_id.to_string(),
            item_id: item_id.to_string(),
            index: item_idx,
        },
    })
}

/// Reverse one mutation against the current board.
/// Anything the undo refers to that has since disappeared is skipped.
pub fn undo(lists: &mut [List], undo: &Undo) {
    match undo {
        Undo::RemoveItem { list_id, item_id } => {
            if let Some(list) = find_list_mut(lists, list_id) {
                list.items.retain(|item| &item.id != item_id);
            }
        }
        Undo::Toggle { list_id, item_id } => {
            if let Some(item) = find_list_mut(lists, list_id)
                .and_then(|list| list.items.iter_mut().find(|item| &item.id == item_id))
            {
                item.complete = !item.complete;
            }
        }
        Undo::MoveBack { source_id, target_id, item_id, index } => {
            let Some(source_idx) = lists.iter().position(|list| &list.id == source_id) else {
                return;
            };
            let Some(target) = find_list_mut(lists, target_id) else {
                return;
            };
            let Some(item_idx) = target.items.iter().position(|item| &item.id == item_id) else {
                return;
            };
            let item = target.items.remove(item_idx);
            let source = &mut lists[source_idx];
            let at = (*index).min(source.items.len());
            source.items.insert(at, item);
        }
    }
}

/// Replace lists by id with the given copies.
/// Copies whose list has since been removed are dropped.
pub fn replace_lists(lists: &mut [List], replacements: Vec<List>) {
    for replacement in replacements {
        if let Some(list) = find_list_mut(lists, &replacement.id) {
            *list = replacement;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(id: &str, contents: &[&str]) -> List {
        List {
            id: id.to_string(),
            items: contents
                .iter()
                .map(|content| Item {
                    id: format!("{}-{}", id, content),
                    content: content.to_string(),
                    complete: false,
                })
                .collect(),
        }
    }

    fn count_item(lists: &[List], item_id: &str) -> usize {
        lists
            .iter()
            .flat_map(|list| list.items.iter())
            .filter(|item| item.id == item_id)
            .count()
    }

    #[test]
    fn test_append_list() {
        let mut lists = vec![make_list("a", &["x"])];
        append_list(&mut lists, make_list("b", &[]));

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[1].id, "b");
        assert!(lists[1].items.is_empty());
    }

    #[test]
    fn test_remove_list() {
        let mut lists = vec![make_list("a", &[]), make_list("b", &[])];

        let removed = remove_list(&mut lists, "a").expect("list a exists");
        assert_eq!(removed.id, "a");
        assert_eq!(lists.len(), 1);
        assert!(find_list(&lists, "a").is_none());
        assert!(remove_list(&mut lists, "a").is_none());
    }

    #[test]
    fn test_list_number_is_one_based() {
        let lists = vec![make_list("a", &[]), make_list("b", &[])];
        assert_eq!(list_number(&lists, "a"), Some(1));
        assert_eq!(list_number(&lists, "b"), Some(2));
        assert_eq!(list_number(&lists, "c"), None);
    }

    #[test]
    fn test_item_content() {
        assert_eq!(item_content("  milk "), Some("milk".to_string()));
        assert_eq!(item_content(""), None);
        assert_eq!(item_content("   "), None);
    }

    #[test]
    fn test_add_item() {
        let mut lists = vec![make_list("a", &["x"]), make_list("b", &[])];

        let edit = add_item(&mut lists, "a", Item::new("milk")).expect("list a exists");

        assert_eq!(lists[0].items.len(), 2);
        assert_eq!(lists[0].items[1].content, "milk");
        assert!(!lists[0].items[1].complete);
        assert_eq!(edit.before[0].items.len(), 1);
        assert_eq!(edit.after, vec![lists[0].clone()]);
        assert!(lists[1].items.is_empty());
    }

    #[test]
    fn test_add_item_to_missing_list() {
        let mut lists = vec![make_list("a", &[])];
        assert!(add_item(&mut lists, "zzz", Item::new("milk")).is_none());
        assert!(lists[0].items.is_empty());
    }

    #[test]
    fn test_toggle_twice_restores_flag() {
        let mut lists = vec![make_list("a", &["x", "y"])];

        let edit = toggle_item(&mut lists, "a", "a-x").expect("item exists");
        assert!(lists[0].items[0].complete);
        assert!(!edit.before[0].items[0].complete);
        assert!(!lists[0].items[1].complete);

        toggle_item(&mut lists, "a", "a-x").expect("item exists");
        assert!(!lists[0].items[0].complete);
    }

    #[test]
    fn test_toggle_missing_item() {
        let mut lists = vec![make_list("a", &["x"])];
        assert!(toggle_item(&mut lists, "a", "nope").is_none());
        assert!(toggle_item(&mut lists, "nope", "a-x").is_none());
    }

    #[test]
    fn test_move_item_between_lists() {
        let mut lists = vec![make_list("a", &["x", "y"]), make_list("b", &["z"])];

        let edit = move_item(&mut lists, "a", "b", "a-x").expect("move applies");

        assert_eq!(lists[0].items.len(), 1);
        assert_eq!(lists[1].items.len(), 2);
        assert_eq!(lists[1].items[1].id, "a-x");
        assert_eq!(count_item(&lists, "a-x"), 1);
        assert_eq!(edit.before[0].items.len(), 2);
        assert_eq!(edit.before[1].items.len(), 1);
        assert_eq!(edit.after, vec![lists[0].clone(), lists[1].clone()]);
    }

    #[test]
    fn test_move_onto_same_list_is_noop() {
        let mut lists = vec![make_list("a", &["x"])];
        assert!(move_item(&mut lists, "a", "a", "a-x").is_none());
        assert_eq!(lists[0].items.len(), 1);
    }

    #[test]
    fn test_move_missing_item_is_noop() {
        let mut lists = vec![make_list("a", &["x"]), make_list("b", &[])];
        let snapshot = lists.clone();

        assert!(move_item(&mut lists, "a", "b", "gone").is_none());
        assert!(move_item(&mut lists, "a", "missing", "a-x").is_none());
        assert_eq!(lists, snapshot);
    }

    #[test]
    fn test_milk_example() {
        let mut lists = vec![make_list("l1", &[]), make_list("l2", &[])];

        add_item(&mut lists, "l1", Item::new("milk")).expect("l1 exists");
        let milk_id = lists[0].items[0].id.clone();
        assert_eq!(lists[0].items[0].content, "milk");
        assert!(!lists[0].items[0].complete);

        move_item(&mut lists, "l1", "l2", &milk_id).expect("move applies");
        assert!(lists[0].items.is_empty());
        assert_eq!(lists[1].items.len(), 1);
        assert_eq!(lists[1].items[0].id, milk_id);
        assert_eq!(lists[1].items[0].content, "milk");
        assert!(!lists[1].items[0].complete);
    }

    #[test]
    fn test_replace_lists_skips_removed() {
        let mut lists = vec![make_list("a", &["x"]), make_list("b", &[])];

        replace_lists(&mut lists, vec![make_list("b", &["new"]), make_list("gone", &["q"])]);

        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].items.len(), 1);
        assert_eq!(lists[1].items[0].content, "new");
    }

    #[test]
    fn test_list_items() {
        let lists = vec![make_list("a", &["x", "y"])];
        assert_eq!(list_items(&lists, "a").len(), 2);
        assert!(list_items(&lists, "gone").is_empty());
    }

    #[test]
    fn test_undo_add_keeps_later_items() {
        let mut lists = vec![make_list("a", &["x"])];

        let first = add_item(&mut lists, "a", Item::new("milk")).unwrap();
        add_item(&mut lists, "a", Item::new("eggs")).unwrap();
        undo(&mut lists, &first.undo);

        let contents: Vec<_> = lists[0].items.iter().map(|item| item.content.as_str()).collect();
        assert_eq!(contents, vec!["x", "eggs"]);
    }

    #[test]
    fn test_undo_toggle_keeps_later_add() {
        let mut lists = vec![make_list("a", &["x"])];

        let toggle = toggle_item(&mut lists, "a", "a-x").unwrap();
        add_item(&mut lists, "a", Item::new("y")).unwrap();
        undo(&mut lists, &toggle.undo);

        assert!(!lists[0].items[0].complete);
        assert_eq!(lists[0].items.len(), 2);
        assert_eq!(lists[0].items[1].content, "y");
    }

    #[test]
    fn test_undo_move_restores_position() {
        let mut lists = vec![make_list("a", &["x", "y", "z"]), make_list("b", &[])];

        let edit = move_item(&mut lists, "a", "b", "a-y").unwrap();
        add_item(&mut lists, "b", Item::new("w")).unwrap();
        undo(&mut lists, &edit.undo);

        let source: Vec<_> = lists[0].items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(source, vec!["a-x", "a-y", "a-z"]);
        assert_eq!(lists[1].items.len(), 1);
        assert_eq!(lists[1].items[0].content, "w");
        assert_eq!(count_item(&lists, "a-y"), 1);
    }

    #[test]
    fn test_undo_skips_vanished_lists() {
        let mut lists = vec![make_list("a", &["x"]), make_list("b", &[])];

        let edit = move_item(&mut lists, "a", "b", "a-x").unwrap();
        remove_list(&mut lists, "a");
        undo(&mut lists, &edit.undo);

        assert_eq!(lists.len(), 1);
        assert_eq!(lists[0].items[0].id, "a-x");
        assert_eq!(edit.undo.list_ids(), vec!["a", "b"]);
    }
}
