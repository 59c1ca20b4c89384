//! Status and priority badges.

use crate::models::{Priority, Status};

/// Badge color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Red,
    Yellow,
    Green,
}

impl Tone {
    pub fn class(&self) -> &'static str {
        match self {
            Tone::Red => "badge bg-red-500",
            Tone::Yellow => "badge bg-yellow-500",
            Tone::Green => "badge bg-green-500",
        }
    }
}

/// A label rendered with a tone-dependent class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub tone: Tone,
}

impl Badge {
    pub fn for_status(status: &Status) -> Self {
        let tone = match status {
            Status::Open => Tone::Red,
            Status::InProgress => Tone::Yellow,
            _ => Tone::Green,
        };
        Self {
            label: status.as_str().to_string(),
            tone,
        }
    }

    pub fn for_priority(priority: &Priority) -> Self {
        let tone = match priority {
            Priority::High => Tone::Red,
            Priority::Medium => Tone::Yellow,
            _ => Tone::Green,
        };
        Self {
            label: priority.as_str().to_string(),
            tone,
        }
    }

    pub fn class(&self) -> &'static str {
        self.tone.class()
    }
}
