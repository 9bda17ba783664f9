//! Confirm Button Component
//!
//! A button that asks before it acts. Clicking it swaps the button for a
//! question with Yes/No; only Yes runs the action.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Armed,
    Asking,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Press {
    Trigger,
    Yes,
    No,
}

/// Next stage, and whether the action fires
fn next(stage: Stage, press: Press) -> (Stage, bool) {
    match (stage, press) {
        (Stage::Armed, Press::Trigger) => (Stage::Asking, false),
        (Stage::Asking, Press::Yes) => (Stage::Armed, true),
        (Stage::Asking, Press::No) => (Stage::Armed, false),
        (stage, _) => (stage, false),
    }
}

#[component]
pub fn ConfirmButton(
    #[prop(into)] class: String,
    #[prop(into)] label: String,
    #[prop(into)] question: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let stage = RwSignal::new(Stage::Armed);
    let press = move |press: Press| {
        let (to, fire) = next(stage.get_untracked(), press);
        stage.set(to);
        if fire {
            on_confirm.run(());
        }
    };
    let class = StoredValue::new(class);
    let label = StoredValue::new(label);
    let question = StoredValue::new(question);

    move || match stage.get() {
        Stage::Armed => view! {
            <button
                class=class.get_value()
                title=label.get_value()
                on:click=move |_| press(Press::Trigger)
            >
                {label.get_value()}
            </button>
        }
        .into_any(),
        Stage::Asking => view! {
            <span class="confirm" role="group">
                <span class="confirm-question">{question.get_value()}</span>
                <button class="confirm-yes" on:click=move |_| press(Press::Yes)>"Yes"</button>
                <button class="confirm-no" on:click=move |_| press(Press::No)>"No"</button>
            </span>
        }
        .into_any(),
    }
}
