//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos.
//! The dragged entry travels in the event's `DataTransfer`; hover state
//! for styling lives in signals.

use leptos::prelude::*;
use web_sys::DragEvent;

/// Transfer key holding the source container id
pub const SOURCE_KEY: &str = "listId";
/// Transfer key holding the dragged entry id
pub const ENTRY_KEY: &str = "itemId";

/// What was picked up: an entry and the container it came from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragPayload {
    pub source: String,
    pub entry: String,
}

impl DragPayload {
    pub fn new(source: impl Into<String>, entry: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            entry: entry.into(),
        }
    }

    /// Build a payload from raw transfer values.
    /// Empty values mean the drag did not originate from us.
    pub fn from_parts(source: String, entry: String) -> Option<Self> {
        if source.is_empty() || entry.is_empty() {
            return None;
        }
        Some(Self { source, entry })
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    /// Entry currently being dragged
    pub dragging_read: ReadSignal<Option<String>>,
    pub dragging_write: WriteSignal<Option<String>>,
    /// Container currently under the pointer
    pub over_read: ReadSignal<Option<String>>,
    pub over_write: WriteSignal<Option<String>>,
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<String>);
    let (over_read, over_write) = signal(None::<String>);
    DndSignals {
        dragging_read,
        dragging_write,
        over_read,
        over_write,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_write.set(None);
    dnd.over_write.set(None);
}

/// Write the payload into the event's transfer object
pub fn write_payload(ev: &DragEvent, payload: &DragPayload) -> bool {
    let Some(transfer) = ev.data_transfer() else {
        return false;
    };
    transfer.set_effect_allowed("move");
    transfer.set_data(SOURCE_KEY, &payload.source).is_ok()
        && transfer.set_data(ENTRY_KEY, &payload.entry).is_ok()
}

/// Read the payload back out of a drop event
pub fn read_payload(ev: &DragEvent) -> Option<DragPayload> {
    let transfer = ev.data_transfer()?;
    let source = transfer.get_data(SOURCE_KEY).ok()?;
    let entry = transfer.get_data(ENTRY_KEY).ok()?;
    DragPayload::from_parts(source, entry)
}

/// Create dragstart handler for draggable entries
pub fn make_on_dragstart(dnd: DndSignals, payload: DragPayload) -> impl Fn(DragEvent) + 'static {
    move |ev: DragEvent| {
        if write_payload(&ev, &payload) {
            dnd.dragging_write.set(Some(payload.entry.clone()));
        } else {
            log::warn!(target: "dnd", "could not stash drag payload for {}", payload.entry);
        }
    }
}

/// Create dragover handler for containers.
/// Cancelling the default is what makes the container a valid drop target.
pub fn make_on_dragover(dnd: DndSignals, container: String) -> impl Fn(DragEvent) + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
        if dnd.over_read.get_untracked().as_deref() != Some(container.as_str()) {
            dnd.over_write.set(Some(container.clone()));
        }
    }
}

/// Create dragleave handler for containers
pub fn make_on_dragleave(dnd: DndSignals, container: String) -> impl Fn(DragEvent) + 'static {
    move |_ev: DragEvent| {
        if dnd.over_read.get_untracked().as_deref() == Some(container.as_str()) {
            dnd.over_write.set(None);
        }
    }
}

/// Create dragend handler for draggable entries (fires on drop and on cancel)
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| end_drag(&dnd)
}

/// Create drop handler for containers.
/// `on_drop` receives the payload and the id of the container it landed on.
pub fn make_on_drop<F>(dnd: DndSignals, container: String, on_drop: F) -> impl Fn(DragEvent) + 'static
where
    F: Fn(DragPayload, String) + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        let payload = read_payload(&ev);
        end_drag(&dnd);
        match payload {
            Some(payload) => on_drop(payload, container.clone()),
            None => log::debug!(target: "dnd", "drop on {} without a payload", container),
        }
    }
}
