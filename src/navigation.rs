//! Browser Navigation
//!
//! `Navigator` backed by `window.location` and `history.replaceState`.

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use bug_list_core::{Navigator, Query, Route};

use crate::store::{BugListStateStoreFields, BugStore};

/// Route the page was loaded with
pub fn current_route() -> Route {
    let Some(window) = web_sys::window() else {
        return Route::new("/", Query::new());
    };
    let location = window.location();
    let pathname = location.pathname().unwrap_or_else(|_| "/".to_string());
    let search = location.search().unwrap_or_default();
    Route::new(pathname, Query::parse(&search))
}

/// Reads the route from the store and writes it through to the address bar
#[derive(Clone, Copy)]
pub struct BrowserNavigator {
    store: BugStore,
}

impl BrowserNavigator {
    pub fn new(store: BugStore) -> Self {
        Self { store }
    }
}

impl Navigator for BrowserNavigator {
    fn pathname(&self) -> String {
        self.store.route().read_untracked().pathname.clone()
    }

    fn query(&self) -> Query {
        self.store.route().read_untracked().query.clone()
    }

    fn replace(&self, route: Route) {
        let url = route.to_url();
        log::debug!("Replacing route with {}", url);
        if let Some(window) = web_sys::window() {
            let replaced = window
                .history()
                .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(&url)));
            if let Err(err) = replaced {
                log::warn!("history.replaceState failed: {:?}", err);
            }
        }
        *self.store.route().write() = route;
    }
}
