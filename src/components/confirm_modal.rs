//! Confirmation dialog for destructive actions.

use leptos::prelude::*;

/// Modal asking the user to confirm a delete. Clicking the backdrop or
/// the cancel button dismisses it; the confirm button shows a busy label
/// while the action is in flight.
#[component]
pub fn ConfirmModal(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p class="dialog__message">{message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| on_confirm.run(())
                    >
                        {move || if busy.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
