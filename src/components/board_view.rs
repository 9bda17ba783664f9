//! Board View Component
//!
//! The list collection: create button plus one column per list.

use leptos::prelude::*;

use crate::actions;
use crate::components::ListColumn;
use crate::context::AppContext;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    // Columns are keyed by list id; each column reads its own items
    let list_ids = move || {
        store
            .lists()
            .with(|lists| lists.iter().map(|list| list.id.clone()).collect::<Vec<_>>())
    };
    let is_empty = move || store.loaded().get() && store.lists().with(|lists| lists.is_empty());

    view! {
        <div class="board">
            <div class="create-list">
                <header>"Create new list"</header>
                <button on:click=move |_| actions::create_list(ctx, store)>"+"</button>
            </div>

            <For
                each=list_ids
                key=|id| id.clone()
                children=move |id| view! { <ListColumn list_id=id /> }
            />

            <Show when=is_empty>
                <p class="board-empty">"No lists yet"</p>
            </Show>
        </div>
    }
}
