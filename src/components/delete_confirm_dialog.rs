//! Delete Confirm Dialog Component
//!
//! Second step of a delete: the row's "Delete" opens this, its own "Delete" sends the request.

use leptos::prelude::*;

use crate::context::BugListContext;

/// Delete confirmation with confirm/cancel actions
#[component]
pub fn DeleteConfirmDialog() -> impl IntoView {
    let ctx = use_context::<BugListContext>().expect("BugListContext should be provided");
    let page = ctx.page;

    let confirm = Memo::new(move |_| page.with(|page| page.confirm().cloned().unwrap_or_default()));
    let submitting = move || confirm.get().submitting;

    view! {
        <div class="modal-backdrop">
            <div class="delete-confirm modal" role="dialog">
                <h2>{move || confirm.get().heading}</h2>
                <p class="delete-confirm-text">{move || confirm.get().message}</p>
                {move || confirm.get().error.map(|error| view! { <p class="form-error">{error}</p> })}
                <div class="modal-actions">
                    <button
                        class="cancel-btn"
                        disabled=submitting
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.cancel();
                        }
                    >
                        "Cancel"
                    </button>
                    <button
                        class="confirm-btn"
                        disabled=submitting
                        on:click=move |ev| {
                            ev.stop_propagation();
                            ctx.confirm_delete();
                        }
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
