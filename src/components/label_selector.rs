//! Label Selector Component
//!
//! Reusable buttons for picking one of a fixed set of labels.

use leptos::prelude::*;

/// One button per label, the current one marked active
#[component]
pub fn LabelSelector(
    labels: &'static [&'static str],
    current: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="label-selector">
            {labels.iter().map(|label| {
                let val = label.to_string();
                let val_clone = val.clone();
                let is_selected = move || current.get() == val;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "label-btn active" } else { "label-btn" }
                        on:click=move |_| on_change(val_clone.clone())
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
