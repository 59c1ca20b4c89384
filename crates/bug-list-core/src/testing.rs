//! Test Doubles
//!
//! Deterministic stand-ins for the bug API and the navigation layer.

use std::cell::RefCell;
use std::collections::HashSet;

use async_trait::async_trait;

use crate::api::{BugApi, Navigator};
use crate::error::{ApiError, ApiResult};
use crate::models::{Bug, BugId, BugInput, Priority, Status};
use crate::navigation::{Query, Route};

/// API operations, for scripting failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    GetBugs,
    Create,
    Update,
    Delete,
}

/// One recorded API call, ids in the string form they were sent with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCall {
    GetBugs,
    Create(BugInput),
    Update(String, BugInput),
    Delete(String),
}

impl ApiCall {
    pub fn operation(&self) -> Operation {
        match self {
            ApiCall::GetBugs => Operation::GetBugs,
            ApiCall::Create(_) => Operation::Create,
            ApiCall::Update(..) => Operation::Update,
            ApiCall::Delete(_) => Operation::Delete,
        }
    }
}

#[derive(Default)]
struct Inner {
    bugs: Vec<Bug>,
    next_id: u64,
    failing: HashSet<Operation>,
    calls: Vec<ApiCall>,
}

/// In-memory bug API that records every call
#[derive(Default)]
pub struct InMemoryBugApi {
    inner: RefCell<Inner>,
}

impl InMemoryBugApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bugs(bugs: Vec<Bug>) -> Self {
        let next_id = bugs.iter().map(|bug| bug.id.0).max().unwrap_or(0) + 1;
        Self {
            inner: RefCell::new(Inner {
                bugs,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Make every following call of `operation` fail
    pub fn fail(&self, operation: Operation) {
        self.inner.borrow_mut().failing.insert(operation);
    }

    pub fn recover(&self, operation: Operation) {
        self.inner.borrow_mut().failing.remove(&operation);
    }

    pub fn calls(&self) -> Vec<ApiCall> {
        self.inner.borrow().calls.clone()
    }

    pub fn call_count(&self, operation: Operation) -> usize {
        self.inner
            .borrow()
            .calls
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    /// Server-side contents
    pub fn bugs(&self) -> Vec<Bug> {
        self.inner.borrow().bugs.clone()
    }

    fn record(&self, call: ApiCall) -> ApiResult<()> {
        let mut inner = self.inner.borrow_mut();
        let operation = call.operation();
        inner.calls.push(call);
        if inner.failing.contains(&operation) {
            return Err(ApiError::Status {
                status: 500,
                message: format!("{:?} failed", operation),
            });
        }
        Ok(())
    }
}

fn parse_id(id: &str) -> ApiResult<BugId> {
    id.parse::<u64>().map(BugId).map_err(|_| ApiError::Status {
        status: 400,
        message: format!("invalid bug id {:?}", id),
    })
}

fn not_found(id: BugId) -> ApiError {
    ApiError::Status {
        status: 404,
        message: format!("bug {} not found", id),
    }
}

#[async_trait(?Send)]
impl BugApi for InMemoryBugApi {
    async fn get_bugs(&self) -> ApiResult<Vec<Bug>> {
        self.record(ApiCall::GetBugs)?;
        Ok(self.bugs())
    }

    async fn create_bug(&self, input: &BugInput) -> ApiResult<Bug> {
        self.record(ApiCall::Create(input.clone()))?;
        let mut inner = self.inner.borrow_mut();
        let id = BugId(inner.next_id.max(1));
        inner.next_id = id.0 + 1;
        let bug = input.clone().into_bug(id);
        inner.bugs.push(bug.clone());
        Ok(bug)
    }

    async fn update_bug(&self, id: &str, input: &BugInput) -> ApiResult<Bug> {
        self.record(ApiCall::Update(id.to_string(), input.clone()))?;
        let id = parse_id(id)?;
        let mut inner = self.inner.borrow_mut();
        let slot = inner
            .bugs
            .iter_mut()
            .find(|bug| bug.id == id)
            .ok_or_else(|| not_found(id))?;
        *slot = input.clone().into_bug(id);
        Ok(slot.clone())
    }

    async fn delete_bug(&self, id: &str) -> ApiResult<()> {
        self.record(ApiCall::Delete(id.to_string()))?;
        let id = parse_id(id)?;
        let mut inner = self.inner.borrow_mut();
        let before = inner.bugs.len();
        inner.bugs.retain(|bug| bug.id != id);
        if inner.bugs.len() == before {
            return Err(not_found(id));
        }
        Ok(())
    }
}

/// Navigator holding a route in memory and recording every replace
#[derive(Default)]
pub struct RecordingNavigator {
    current: RefCell<Route>,
    replaced: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new(pathname: &str) -> Self {
        Self::at(Route::new(pathname, Query::new()))
    }

    pub fn at(route: Route) -> Self {
        Self {
            current: RefCell::new(route),
            replaced: RefCell::new(Vec::new()),
        }
    }

    pub fn route(&self) -> Route {
        self.current.borrow().clone()
    }

    pub fn replaced(&self) -> Vec<Route> {
        self.replaced.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn pathname(&self) -> String {
        self.current.borrow().pathname.clone()
    }

    fn query(&self) -> Query {
        self.current.borrow().query.clone()
    }

    fn replace(&self, route: Route) {
        self.replaced.borrow_mut().push(route.clone());
        *self.current.borrow_mut() = route;
    }
}

/// Two bugs covering the red and yellow badge tones
pub fn sample_bugs() -> Vec<Bug> {
    vec![
        Bug {
            id: BugId(1),
            title: "Bug 1".to_string(),
            description: "Description 1".to_string(),
            status: Status::Open,
            priority: Priority::High,
        },
        Bug {
            id: BugId(2),
            title: "Bug 2".to_string(),
            description: "Description 2".to_string(),
            status: Status::InProgress,
            priority: Priority::Medium,
        },
    ]
}
