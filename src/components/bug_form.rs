//! Bug Form Component
//!
//! Modal form shared by "Add New Bug" and "Edit Bug".

use leptos::prelude::*;

use bug_list_core::{Priority, Status, PRIORITY_LABELS, STATUS_LABELS};

use crate::components::LabelSelector;
use crate::context::BugListContext;

/// Add/edit form for the open modal
#[component]
pub fn BugForm() -> impl IntoView {
    let ctx = use_context::<BugListContext>().expect("BugListContext should be provided");
    let page = ctx.page;

    let form = Memo::new(move |_| page.with(|page| page.form().cloned().unwrap_or_default()));
    let submitting = move || form.get().submitting;

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <div class="modal-backdrop">
            <form class="bug-form modal" on:submit=submit>
                <h2>{move || form.get().heading}</h2>

                <label for="bug-title">"Title"</label>
                <input
                    id="bug-title"
                    type="text"
                    prop:value=move || form.get().input.title
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.edit_form(|input| input.title = value);
                    }
                />

                <label for="bug-description">"Description"</label>
                <textarea
                    id="bug-description"
                    prop:value=move || form.get().input.description
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.edit_form(|input| input.description = value);
                    }
                />

                <label>"Status"</label>
                <LabelSelector
                    labels=STATUS_LABELS
                    current=Signal::derive(move || form.get().input.status.as_str().to_string())
                    on_change=move |label: String| ctx.edit_form(|input| input.status = Status::from_label(&label))
                />

                <label>"Priority"</label>
                <LabelSelector
                    labels=PRIORITY_LABELS
                    current=Signal::derive(move || form.get().input.priority.as_str().to_string())
                    on_change=move |label: String| ctx.edit_form(|input| input.priority = Priority::from_label(&label))
                />

                {move || form.get().error.map(|error| view! { <p class="form-error">{error}</p> })}

                <div class="modal-actions">
                    <button type="button" class="cancel-btn" disabled=submitting on:click=move |_| ctx.cancel()>
                        "Cancel"
                    </button>
                    <button type="submit" class="submit-btn" disabled=submitting>
                        {move || form.get().submit_label}
                    </button>
                </div>
            </form>
        </div>
    }
}
