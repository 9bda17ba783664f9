//! Prompt Dialog Component
//!
//! Non-blocking text prompt. The result is delivered through callbacks
//! instead of stalling the page like `window.prompt`.

use leptos::prelude::*;

#[component]
pub fn PromptDialog(
    #[prop(into)] message: String,
    #[prop(into)] open: Signal<bool>,
    /// Receives the raw text; validation is up to the caller
    #[prop(into)] on_submit: Callback<String>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    // The input is created each time the dialog opens; focus it once mounted
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        if let Some(input) = input_ref.get() {
            if let Err(e) = input.focus() {
                log::debug!(target: "board", "prompt input not focusable: {:?}", e);
            }
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let value = text.get_untracked();
        set_text.set(String::new());
        on_submit.run(value);
    };
    let cancel = move || {
        set_text.set(String::new());
        on_cancel.run(());
    };

    view! {
        <Show when=move || open.get()>
            <div class="prompt-backdrop">
                <form class="prompt-dialog" on:submit=submit>
                    <label for="prompt-input">{message.clone()}</label>
                    <input
                        id="prompt-input"
                        type="text"
                        node_ref=input_ref
                        prop:value=move || text.get()
                        on:input=move |ev| set_text.set(event_target_value(&ev))
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Escape" {
                                cancel();
                            }
                        }
                    />
                    <div class="prompt-actions">
                        <button type="submit">"OK"</button>
                        <button type="button" on:click=move |_| cancel()>"Cancel"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
