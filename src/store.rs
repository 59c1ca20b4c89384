//! BugList State Store
//!
//! Uses Leptos reactive_stores so the view state and the route are tracked separately.

use reactive_stores::Store;

use bug_list_core::{Route, ViewState};

/// Reactive state behind the BugList page
#[derive(Clone, Debug, Default, Store)]
pub struct BugListState {
    /// View state machine
    pub view: ViewState,
    /// Mirror of the browser route, updated on every replace
    pub route: Route,
}

impl BugListState {
    pub fn new(route: Route) -> Self {
        Self {
            view: ViewState::new(),
            route,
        }
    }
}

/// Type alias for the store
pub type BugStore = Store<BugListState>;
