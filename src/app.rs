//! List Board App
//!
//! Root component: provides the store and context, loads the board.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{BoardView, PromptDialog};
use crate::config::Config;
use crate::context::AppContext;
use crate::store::BoardState;

#[component]
pub fn App(config: Config) -> impl IntoView {
    let store = Store::new(BoardState::default());
    provide_context(store);

    let ctx = AppContext::new(config);
    provide_context(ctx);

    // Load lists on mount
    Effect::new(move |_| actions::load_board(ctx, store));

    let on_submit = Callback::new(move |text: String| {
        if let Some(list_id) = ctx.take_prompt() {
            actions::add_item(ctx, store, list_id, text);
        }
    });

    view! {
        <main class="board-app">
            <BoardView />

            <PromptDialog
                message="Enter the content for the new item:"
                open=Signal::derive(move || ctx.prompt_for.get().is_some())
                on_submit=on_submit
                on_cancel=Callback::new(move |_: ()| ctx.close_prompt())
            />
        </main>
    }
}
