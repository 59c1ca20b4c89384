//! Bug Row Component
//!
//! One bug in the table, with its badges and row actions.

use leptos::prelude::*;

use bug_list_core::{Badge, Row};

use crate::context::BugListContext;

/// A single bug row
#[component]
pub fn BugRow(row: Row) -> impl IntoView {
    let ctx = use_context::<BugListContext>().expect("BugListContext should be provided");

    let id = row.id;

    view! {
        <div class="bug-row" data-bug-id=id.to_string()>
            <div class="bug-main">
                <span class="bug-title">{row.title}</span>
                <p class="bug-description">{row.description}</p>
            </div>

            <BadgeLabel badge=row.status />
            <BadgeLabel badge=row.priority />

            <button class="edit-btn" on:click=move |_| ctx.open_edit(id)>"Edit"</button>
            // First step only; the API is called from the confirmation
            <button class="delete-btn" on:click=move |_| ctx.request_delete(id)>"Delete"</button>
        </div>
    }
}

/// Status or priority badge
#[component]
pub fn BadgeLabel(badge: Badge) -> impl IntoView {
    let class = badge.class();
    view! { <span class=class>{badge.label}</span> }
}
