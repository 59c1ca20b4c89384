//! Navigation State
//!
//! Routes, query strings, and the notification messages carried in them.

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in query keys and values
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

pub const SHOW_CREATE_NOTIFICATION: &str = "showCreateNotification";
pub const CREATED_BUG_TITLE: &str = "createdBugTitle";
pub const SHOW_DELETE_NOTIFICATION: &str = "showDeleteNotification";
pub const DELETED_BUG_TITLE: &str = "deletedBugTitle";

/// Query parameters of a route, kept sorted by key
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Query(BTreeMap<String, String>);

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a URL search string, with or without the leading `?`
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let params = search
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Query(params)
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// `true` for the values a checkbox-style flag is set with
    pub fn flag(&self, key: &str) -> bool {
        matches!(self.get(key), Some("true") | Some("1"))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a search string, `?` included; empty for an empty query
    pub fn to_search_string(&self) -> String {
        if self.0.is_empty() {
            return String::new();
        }
        let pairs: Vec<String> = self
            .0
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY_ENCODE_SET),
                    utf8_percent_encode(v, QUERY_ENCODE_SET)
                )
            })
            .collect();
        format!("?{}", pairs.join("&"))
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// A location within the app
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Route {
    pub pathname: String,
    pub query: Query,
}

impl Route {
    pub fn new(pathname: impl Into<String>, query: Query) -> Self {
        Self {
            pathname: pathname.into(),
            query,
        }
    }

    /// Path plus search string, as handed to `history.replaceState`
    pub fn to_url(&self) -> String {
        format!("{}{}", self.pathname, self.query.to_search_string())
    }
}

/// Outcome announcement passed to the next render through the route query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Created { title: String },
    Deleted { title: String },
}

impl Notification {
    /// Notifications announced by a query, creation first
    pub fn from_query(query: &Query) -> Vec<Notification> {
        let mut found = Vec::new();
        if query.flag(SHOW_CREATE_NOTIFICATION) {
            found.push(Notification::Created {
                title: query.get(CREATED_BUG_TITLE).unwrap_or_default().to_string(),
            });
        }
        if query.flag(SHOW_DELETE_NOTIFICATION) {
            found.push(Notification::Deleted {
                title: query.get(DELETED_BUG_TITLE).unwrap_or_default().to_string(),
            });
        }
        found
    }

    pub fn to_query(&self) -> Query {
        match self {
            Notification::Created { title } => Query::new()
                .with(CREATED_BUG_TITLE, title.as_str())
                .with(SHOW_CREATE_NOTIFICATION, "true"),
            Notification::Deleted { title } => Query::new()
                .with(DELETED_BUG_TITLE, title.as_str())
                .with(SHOW_DELETE_NOTIFICATION, "true"),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notification::Created { title } => format!("Successfully created bug \"{}\"", title),
            Notification::Deleted { title } => format!("Successfully deleted bug \"{}\"", title),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_search_string() {
        let query = Query::parse("?showCreateNotification=true&createdBugTitle=New%20Bug");
        assert_eq!(query.get(CREATED_BUG_TITLE), Some("New Bug"));
        assert!(query.flag(SHOW_CREATE_NOTIFICATION));
    }

    #[test]
    fn test_parse_plus_as_space_and_bare_keys() {
        let query = Query::parse("createdBugTitle=New+Bug&orphan");
        assert_eq!(query.get(CREATED_BUG_TITLE), Some("New Bug"));
        assert_eq!(query.get("orphan"), Some(""));
        assert!(Query::parse("").is_empty());
        assert!(Query::parse("?").is_empty());
    }

    #[test]
    fn test_flag_values() {
        let query = Query::parse("a=true&b=1&c=false&d=yes");
        assert!(query.flag("a"));
        assert!(query.flag("b"));
        assert!(!query.flag("c"));
        assert!(!query.flag("d"));
        assert!(!query.flag("missing"));
    }

    #[test]
    fn test_route_url_escapes_values() {
        let route = Route::new(
            "/bugs",
            Notification::Created { title: "A & B \"quoted\"".to_string() }.to_query(),
        );
        assert_eq!(
            route.to_url(),
            "/bugs?createdBugTitle=A%20%26%20B%20%22quoted%22&showCreateNotification=true"
        );
        assert_eq!(Route::new("/", Query::new()).to_url(), "/");
    }

    #[test]
    fn test_notifications_read_back_from_url() {
        let route = Route::new("/", Notification::Deleted { title: "Bug 1".to_string() }.to_query());
        let search = route.to_url().trim_start_matches('/').to_string();
        let found = Notification::from_query(&Query::parse(&search));
        assert_eq!(found, vec![Notification::Deleted { title: "Bug 1".to_string() }]);
    }

    #[test]
    fn test_both_notifications_create_first() {
        let query = Query::parse(
            "showDeleteNotification=true&deletedBugTitle=Old&showCreateNotification=1&createdBugTitle=New",
        );
        let found = Notification::from_query(&query);
        assert_eq!(
            found,
            vec![
                Notification::Created { title: "New".to_string() },
                Notification::Deleted { title: "Old".to_string() },
            ]
        );
    }

    #[test]
    fn test_flag_without_title() {
        let found = Notification::from_query(&Query::parse("showCreateNotification=true"));
        assert_eq!(found[0].message(), "Successfully created bug \"\"");
    }

    #[test]
    fn test_messages() {
        let created = Notification::Created { title: "New Bug".to_string() };
        assert_eq!(created.message(), "Successfully created bug \"New Bug\"");
        let deleted = Notification::Deleted { title: "Bug 1".to_string() };
        assert!(deleted.message().starts_with("Successfully deleted bug"));
        assert!(deleted.message().contains("Bug 1"));
    }
}
