//! List Column Component
//!
//! One list: header, items, add/delete buttons. The whole column is a
//! drop target for items dragged from other lists.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop};

use crate::actions;
use crate::board;
use crate::components::{ConfirmButton, ItemRow};
use crate::context::AppContext;
use crate::models::ListId;
use crate::store::{use_board_store, BoardStateStoreFields};

#[component]
pub fn ListColumn(list_id: ListId) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    // Memos keep an edit to another list from re-rendering this column
    let number = {
        let id = list_id.clone();
        Memo::new(move |_| store.lists().with(|lists| board::list_number(lists, &id)).unwrap_or_default())
    };
    let items = {
        let id = list_id.clone();
        Memo::new(move |_| store.lists().with(|lists| board::list_items(lists, &id)))
    };
    let column_class = {
        let id = list_id.clone();
        move || {
            let mut c = String::from("list");
            if ctx.dnd.over_read.get().as_deref() == Some(id.as_str()) {
                c.push_str(" drop-target");
            }
            c
        }
    };

    let on_dragover = make_on_dragover(ctx.dnd, list_id.clone());
    let on_dragleave = make_on_dragleave(ctx.dnd, list_id.clone());
    let on_drop = make_on_drop(ctx.dnd, list_id.clone(), move |payload, target| {
        actions::drop_item(ctx, store, payload, target)
    });

    let row_list_id = list_id.clone();
    let add_id = list_id.clone();
    let delete_id = list_id;

    view! {
        <div
            class=column_class
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <header>"List: " {move || number.get()}</header>

            <For
                each=move || items.get()
                key=|item| {
                    // Completion is part of the key so a toggle re-renders the row
                    (item.id.clone(), item.complete)
                }
                children=move |item| view! { <ItemRow list_id=row_list_id.clone() item=item /> }
            />

            <div class="list-actions">
                <button
                    class="add-btn"
                    title="Add item"
                    on:click=move |_| ctx.open_prompt(add_id.clone())
                >
                    "+"
                </button>
                <ConfirmButton
                    class="delete-btn"
                    label="Delete"
                    question="Delete list?"
                    on_confirm=Callback::new(move |_: ()| actions::delete_list(ctx, store, delete_id.clone()))
                />
            </div>
        </div>
    }
}
