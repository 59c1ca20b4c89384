//! Nav Header Component
//!
//! Top navigation bar with the app title and version.

use leptos::prelude::*;

use bug_list_core::config;

/// Header shown above every state of the page, loading included
#[component]
pub fn NavHeader() -> impl IntoView {
    view! {
        <nav class="nav-header">
            <div class="nav-brand">
                <span class="nav-title">"Bug Tracker"</span>
            </div>
            <span class="nav-version">{config::version_label()}</span>
        </nav>
    }
}
