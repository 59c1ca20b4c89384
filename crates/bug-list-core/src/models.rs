//! Bug Models
//!
//! Data structures matching the bug API's JSON entities.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status options offered by the bug form
pub const STATUS_LABELS: &[&str] = &["Open", "In Progress", "Closed"];

/// Priority options offered by the bug form
pub const PRIORITY_LABELS: &[&str] = &["Low", "Medium", "High"];

/// Server-assigned bug identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BugId(pub u64);

/// The API addresses bugs by the decimal string form of their id.
impl fmt::Display for BugId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for BugId {
    fn from(id: u64) -> Self {
        BugId(id)
    }
}

/// Workflow status of a bug.
///
/// Labels are matched case-sensitively; anything the server sends outside the
/// known set is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    #[default]
    Open,
    InProgress,
    Closed,
    Other(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Closed => "Closed",
            Status::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Open" => Status::Open,
            "In Progress" => Status::InProgress,
            "Closed" => Status::Closed,
            other => Status::Other(other.to_string()),
        }
    }
}

impl From<String> for Status {
    fn from(label: String) -> Self {
        Status::from_label(&label)
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bug priority, same label rules as [`Status`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
    Other(String),
}

impl Priority {
    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Other(label) => label,
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Low" => Priority::Low,
            "Medium" => Priority::Medium,
            "High" => Priority::High,
            other => Priority::Other(other.to_string()),
        }
    }
}

impl From<String> for Priority {
    fn from(label: String) -> Self {
        Priority::from_label(&label)
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        priority.as_str().to_string()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tracked issue as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bug {
    pub id: BugId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
}

/// Form values sent on create and update
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BugInput {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub priority: Priority,
}

impl BugInput {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Default::default()
        }
    }

    /// Whether the title has any non-whitespace content
    pub fn has_title(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Materialize the input as a bug with the given id
    pub fn into_bug(self, id: BugId) -> Bug {
        Bug {
            id,
            title: self.title,
            description: self.description,
            status: self.status,
            priority: self.priority,
        }
    }
}

impl From<&Bug> for BugInput {
    fn from(bug: &Bug) -> Self {
        Self {
            title: bug.title.clone(),
            description: bug.description.clone(),
            status: bug.status.clone(),
            priority: bug.priority.clone(),
        }
    }
}
