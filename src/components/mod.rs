//! UI Components
//!
//! Leptos components for the BugList page.

mod bug_list;
mod bug_row;
mod bug_form;
mod label_selector;
mod delete_confirm_dialog;
mod notification_banners;
mod nav_header;

pub use bug_list::BugList;
pub use bug_row::{BugRow, BadgeLabel};
pub use bug_form::BugForm;
pub use label_selector::LabelSelector;
pub use delete_confirm_dialog::DeleteConfirmDialog;
pub use notification_banners::NotificationBanners;
pub use nav_header::NavHeader;
