//! BugList Frontend App
//!
//! Nav header over the bug list page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{BugList, NavHeader};
use crate::context::BugListContext;
use crate::navigation::current_route;
use crate::store::BugListState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(BugListState::new(current_route()));
    let ctx = BugListContext::new(store);

    // Provide context to all children
    provide_context(ctx);

    // Load bugs on mount
    Effect::new(move |_| {
        log::debug!("[APP] Mounting bug list");
        ctx.reload();
    });

    view! {
        <div class="app-layout">
            <NavHeader />
            <main class="main-content">
                <BugList />
            </main>
        </div>
    }
}
