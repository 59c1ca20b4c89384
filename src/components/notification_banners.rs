//! Notification Banners Component
//!
//! Success banners announced through the route query.

use leptos::prelude::*;

use bug_list_core::Notification;

use crate::context::BugListContext;

/// Banners for the current route's notifications
#[component]
pub fn NotificationBanners() -> impl IntoView {
    let ctx = use_context::<BugListContext>().expect("BugListContext should be provided");
    let page = ctx.page;

    let banners = Memo::new(move |_| page.with(|page| page.banners.clone()));

    view! {
        <div class="notifications">
            {move || banners.get().into_iter().map(|banner| {
                let class = match banner.notification {
                    Notification::Created { .. } => "notification success created",
                    Notification::Deleted { .. } => "notification success deleted",
                };
                view! {
                    <div class=class role="status">
                        <span class="notification-text">{banner.text}</span>
                        <button class="dismiss-btn" title="Dismiss" on:click=move |_| ctx.dismiss_notifications()>
                            "×"
                        </button>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
