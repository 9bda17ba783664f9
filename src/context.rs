//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::{create_dnd_signals, DndSignals};

use crate::api::HttpListRepository;
use crate::config::{Config, MoveMode};
use crate::models::ListId;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<Config>,
    /// List waiting for new item text - read
    pub prompt_for: ReadSignal<Option<ListId>>,
    /// List waiting for new item text - write
    set_prompt_for: WriteSignal<Option<ListId>>,
    /// Drag-and-drop state shared by all lists
    pub dnd: DndSignals,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let (prompt_for, set_prompt_for) = signal(None::<ListId>);
        Self {
            config: StoredValue::new(config),
            prompt_for,
            set_prompt_for,
            dnd: create_dnd_signals(),
        }
    }

    /// REST client for the configured API origin
    pub fn repository(&self) -> HttpListRepository {
        self.config.with_value(|config| HttpListRepository::new(config.api_url.clone()))
    }

    pub fn move_mode(&self) -> MoveMode {
        self.config.with_value(|config| config.move_mode)
    }

    /// Ask the user for a new item in `list_id`
    pub fn open_prompt(&self, list_id: ListId) {
        self.set_prompt_for.set(Some(list_id));
    }

    pub fn close_prompt(&self) {
        self.set_prompt_for.set(None);
    }

    /// Close the prompt, returning the list it was opened for
    pub fn take_prompt(&self) -> Option<ListId> {
        let list_id = self.prompt_for.get_untracked();
        self.close_prompt();
        list_id
    }
}
