//! Bug List Component
//!
//! The page body: notifications, the bug table, and whichever modal is open.

use leptos::prelude::*;

use bug_list_core::page::{EMPTY_TEXT, LOADING_TEXT};
use bug_list_core::{Body, ModalKind, Row};

use crate::components::{BugForm, BugRow, DeleteConfirmDialog, NotificationBanners};
use crate::context::BugListContext;

/// Settled shape of the body, without the rows
#[derive(Clone, PartialEq)]
enum BodyState {
    Loading,
    Error(String),
    List(&'static str),
}

/// Bug list page
#[component]
pub fn BugList() -> impl IntoView {
    let ctx = use_context::<BugListContext>().expect("BugListContext should be provided");
    let page = ctx.page;

    let body_state = Memo::new(move |_| {
        page.with(|page| match &page.body {
            Body::Loading => BodyState::Loading,
            Body::Error(message) => BodyState::Error(message.clone()),
            Body::List { heading, .. } => BodyState::List(*heading),
        })
    });
    let rows = move || page.with(|page| page.rows().to_vec());

    let body = move || match body_state.get() {
        BodyState::Loading => view! { <p class="loading">{LOADING_TEXT}</p> }.into_any(),
        BodyState::Error(message) => view! { <p class="error-banner" role="alert">{message}</p> }.into_any(),
        BodyState::List(heading) => view! {
            <section class="bug-table">
                <h2>{heading}</h2>
                <Show when=move || rows().is_empty()>
                    <p class="empty">{EMPTY_TEXT}</p>
                </Show>
                <For
                    each=rows
                    key=|row: &Row| {
                        // Every displayed field, so an edited bug re-renders
                        (
                            row.id,
                            row.title.clone(),
                            row.description.clone(),
                            row.status.label.clone(),
                            row.priority.label.clone(),
                        )
                    }
                    children=move |row: Row| view! { <BugRow row=row /> }
                />
            </section>
        }
        .into_any(),
    };

    let modal = move || match ctx.modal_key.get().0 {
        ModalKind::Add | ModalKind::Edit => Some(view! { <BugForm /> }.into_any()),
        ModalKind::Delete => Some(view! { <DeleteConfirmDialog /> }.into_any()),
        ModalKind::None => None,
    };

    view! {
        <div class="bug-list">
            <NotificationBanners />
            <div class="bug-list-toolbar">
                <button class="add-btn" on:click=move |_| ctx.open_add()>"Add New Bug"</button>
            </div>
            {body}
            {modal}
        </div>
    }
}
