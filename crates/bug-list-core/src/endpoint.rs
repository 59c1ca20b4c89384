//! REST Endpoints
//!
//! Methods, paths and response checks for the bug REST API.
//! The browser client sends the requests; everything here is plain data.

use serde::Serialize;

use crate::error::{ApiError, ApiResult};

/// One bug API route. Ids are in their external string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    ListBugs,
    CreateBug,
    UpdateBug(&'a str),
    DeleteBug(&'a str),
}

impl Endpoint<'_> {
    pub fn method(&self) -> &'static str {
        match self {
            Endpoint::ListBugs => "GET",
            Endpoint::CreateBug => "POST",
            Endpoint::UpdateBug(_) => "PUT",
            Endpoint::DeleteBug(_) => "DELETE",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::ListBugs | Endpoint::CreateBug => "/bugs".to_string(),
            Endpoint::UpdateBug(id) | Endpoint::DeleteBug(id) => format!("/bugs/{}", id),
        }
    }

    /// Full request URL under `base`; a trailing slash on `base` is ignored
    pub fn url(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Error for a non-2xx response carrying `body`
pub fn status_error(status: u16, body: &str) -> ApiError {
    let body = body.trim();
    ApiError::Status {
        status,
        message: if body.is_empty() {
            "request failed".to_string()
        } else {
            body.to_string()
        },
    }
}

/// JSON request body
pub fn encode_body<T: Serialize>(value: &T) -> ApiResult<String> {
    serde_json::to_string(value)
        .map_err(|e| ApiError::Transport(format!("could not encode request: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BugId, BugInput};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_routes() {
        let id = BugId(7).to_string();
        assert_eq!(Endpoint::ListBugs.url("/api"), "/api/bugs");
        assert_eq!(Endpoint::CreateBug.method(), "POST");
        assert_eq!(Endpoint::UpdateBug(&id).method(), "PUT");
        assert_eq!(Endpoint::UpdateBug(&id).url("/api"), "/api/bugs/7");
        assert_eq!(Endpoint::DeleteBug(&id).method(), "DELETE");
        assert_eq!(Endpoint::DeleteBug(&id).url("https://bugs.test/v1/"), "https://bugs.test/v1/bugs/7");
    }

    #[test]
    fn test_status_mapping() {
        assert!(is_success(200));
        assert!(is_success(204));
        assert!(!is_success(304));
        assert!(!is_success(404));
        assert_eq!(
            status_error(500, " database offline\n"),
            ApiError::Status { status: 500, message: "database offline".to_string() }
        );
        assert_eq!(
            status_error(404, ""),
            ApiError::Status { status: 404, message: "request failed".to_string() }
        );
    }

    #[test]
    fn test_encode_body_uses_wire_labels() {
        let body = encode_body(&BugInput::new("New Bug", "Test")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["title"], "New Bug");
        assert_eq!(value["status"], "Open");
        assert_eq!(value["priority"], "Low");
    }
}
