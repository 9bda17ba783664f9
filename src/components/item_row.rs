//! Item Row Component
//!
//! A draggable item with its completion tick.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragend, make_on_dragstart, DragPayload};

use crate::actions;
use crate::context::AppContext;
use crate::models::{Item, ListId};
use crate::store::use_board_store;

#[component]
pub fn ItemRow(list_id: ListId, item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_board_store();

    let Item { id, content, complete } = item;

    let row_class = {
        let id = id.clone();
        move || {
            let mut c = String::from("list-item");
            if complete { c.push_str(" completed"); }
            if ctx.dnd.dragging_read.get().as_deref() == Some(id.as_str()) { c.push_str(" dragging"); }
            c
        }
    };

    let on_dragstart = make_on_dragstart(ctx.dnd, DragPayload::new(list_id.clone(), id.clone()));
    let on_dragend = make_on_dragend(ctx.dnd);

    view! {
        <div
            class=row_class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
        >
            <div
                class="tick"
                on:click=move |_| actions::toggle_item(ctx, store, list_id.clone(), id.clone())
            >
                {complete.then_some("✓")}
            </div>
            <p>{content}</p>
        </div>
    }
}
