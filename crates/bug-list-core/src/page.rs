//! Page Render Model
//!
//! What the BugList page shows for a given view state and route query.
//! The Leptos components draw this structure one-to-one.

use crate::badge::Badge;
use crate::models::{BugId, BugInput};
use crate::navigation::{Notification, Query};
use crate::state::{Modal, ViewState};

pub const LIST_HEADING: &str = "All Bugs";
pub const ADD_HEADING: &str = "Add New Bug";
pub const EDIT_HEADING: &str = "Edit Bug";
pub const DELETE_HEADING: &str = "Delete Bug";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No bugs found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// `v<APP_VERSION>`, shown in the nav header
    pub version_label: String,
    pub banners: Vec<Banner>,
    pub body: Body,
    pub modal: Option<ModalView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub notification: Notification,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Loading,
    Error(String),
    List { heading: &'static str, rows: Vec<Row> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: BugId,
    pub title: String,
    pub description: String,
    pub status: Badge,
    pub priority: Badge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalView {
    Form(FormView),
    ConfirmDelete(ConfirmView),
}

/// Add or edit form
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub heading: &'static str,
    pub submit_label: &'static str,
    pub input: BugInput,
    pub submitting: bool,
    pub error: Option<String>,
}

/// Second step of a delete
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfirmView {
    pub heading: &'static str,
    pub message: String,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Page {
    pub fn render(state: &ViewState, query: &Query, version: &str) -> Self {
        let banners = Notification::from_query(query)
            .into_iter()
            .map(|notification| Banner {
                text: notification.message(),
                notification,
            })
            .collect();

        let body = if state.loading {
            Body::Loading
        } else if let Some(error) = &state.error {
            Body::Error(format!("Error: {}", error))
        } else {
            Body::List {
                heading: LIST_HEADING,
                rows: state
                    .bugs
                    .iter()
                    .map(|bug| Row {
                        id: bug.id,
                        title: bug.title.clone(),
                        description: bug.description.clone(),
                        status: Badge::for_status(&bug.status),
                        priority: Badge::for_priority(&bug.priority),
                    })
                    .collect(),
            }
        };

        let modal = match &state.modal {
            Modal::None => None,
            Modal::Add(form) => Some(ModalView::Form(FormView {
                heading: ADD_HEADING,
                submit_label: "Add Bug",
                input: form.input.clone(),
                submitting: form.submitting,
                error: form.error.clone(),
            })),
            Modal::Edit(_, form) => Some(ModalView::Form(FormView {
                heading: EDIT_HEADING,
                submit_label: "Save changes",
                input: form.input.clone(),
                submitting: form.submitting,
                error: form.error.clone(),
            })),
            Modal::Delete(bug, confirm) => Some(ModalView::ConfirmDelete(ConfirmView {
                heading: DELETE_HEADING,
                message: format!("Are you sure you want to delete \"{}\"?", bug.title),
                submitting: confirm.submitting,
                error: confirm.error.clone(),
            })),
        };

        Page {
            version_label: format!("v{}", version),
            banners,
            body,
            modal,
        }
    }

    pub fn rows(&self) -> &[Row] {
        match &self.body {
            Body::List { rows, .. } => rows,
            _ => &[],
        }
    }

    pub fn form(&self) -> Option<&FormView> {
        match &self.modal {
            Some(ModalView::Form(form)) => Some(form),
            _ => None,
        }
    }

    pub fn confirm(&self) -> Option<&ConfirmView> {
        match &self.modal {
            Some(ModalView::ConfirmDelete(confirm)) => Some(confirm),
            _ => None,
        }
    }

    /// All visible text, one fragment per line, in document order
    pub fn text(&self) -> String {
        let mut lines = vec![self.version_label.clone()];
        lines.extend(self.banners.iter().map(|banner| banner.text.clone()));
        match &self.body {
            Body::Loading => lines.push(LOADING_TEXT.to_string()),
            Body::Error(message) => lines.push(message.clone()),
            Body::List { heading, rows } => {
                lines.push(heading.to_string());
                if rows.is_empty() {
                    lines.push(EMPTY_TEXT.to_string());
                }
                for row in rows {
                    lines.push(row.title.clone());
                    lines.push(row.description.clone());
                    lines.push(row.status.label.clone());
                    lines.push(row.priority.label.clone());
                }
            }
        }
        match &self.modal {
            Some(ModalView::Form(form)) => {
                lines.push(form.heading.to_string());
                lines.extend(form.error.clone());
            }
            Some(ModalView::ConfirmDelete(confirm)) => {
                lines.push(confirm.heading.to_string());
                lines.push(confirm.message.clone());
                lines.extend(confirm.error.clone());
            }
            None => {}
        }
        lines.join("\n")
    }
}
