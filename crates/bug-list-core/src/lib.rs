//! BugList Core
//!
//! Platform-independent half of the BugList view:
//! - models: bug entities and form input
//! - api: capability traits for the bug API and navigation
//! - state: the view's state machine
//! - page: render model derived from state and route
//! - controller: async driver wiring state to the capabilities
//! - endpoint: REST routes and response checks for the browser client

pub mod api;
pub mod badge;
pub mod config;
pub mod controller;
pub mod endpoint;
pub mod error;
pub mod models;
pub mod navigation;
pub mod page;
pub mod state;

#[cfg(test)]
mod testing;


pub use api::{BugApi, Navigator};
pub use badge::{Badge, Tone};
pub use controller::{dismiss_notifications, perform, BugListController};
pub use endpoint::Endpoint;
pub use error::{ApiError, ApiResult};
pub use models::{Bug, BugId, BugInput, Priority, Status, PRIORITY_LABELS, STATUS_LABELS};
pub use navigation::{Notification, Query, Route};
pub use page::{Banner, Body, ConfirmView, FormView, ModalView, Page, Row};
pub use state::{FollowUp, LoadTicket, Modal, ModalKind, Outcome, Submission, ViewState};
