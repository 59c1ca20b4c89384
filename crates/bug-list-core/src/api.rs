//! Capability Traits
//!
//! Abstract interfaces for the bug API and the navigation layer.
//! The browser build implements them over `fetch` and `history`,
//! tests substitute in-memory fakes.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{Bug, BugInput};
use crate::navigation::{Query, Route};

/// Remote CRUD API for bugs
///
/// Ids are passed in their external string form.
/// Futures are not `Send`: the browser implementation holds JS values across awaits.
#[async_trait(?Send)]
pub trait BugApi {
    /// List all bugs in server order
    async fn get_bugs(&self) -> ApiResult<Vec<Bug>>;

    /// Create a bug, returning the stored record
    async fn create_bug(&self, input: &BugInput) -> ApiResult<Bug>;

    /// Replace a bug's fields, returning the stored record
    async fn update_bug(&self, id: &str, input: &BugInput) -> ApiResult<Bug>;

    /// Delete a bug
    async fn delete_bug(&self, id: &str) -> ApiResult<()>;
}

/// Read/replace access to the current route
pub trait Navigator {
    fn pathname(&self) -> String;

    fn query(&self) -> Query;

    /// Swap the current route without pushing history
    fn replace(&self, route: Route);
}
