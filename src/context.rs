//! BugList Context
//!
//! Shared handles provided via Leptos Context API, plus the actions that
//! drive the view state machine from event handlers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use bug_list_core::config::APP_VERSION;
use bug_list_core::{
    dismiss_notifications, perform, BugApi, BugId, BugInput, FollowUp, ModalKind, Page, Submission,
};

use crate::commands::HttpBugApi;
use crate::navigation::BrowserNavigator;
use crate::store::{BugListStateStoreFields, BugStore};

/// Page-wide handles, all `Copy`
#[derive(Clone, Copy)]
pub struct BugListContext {
    store: BugStore,
    /// Render model for the current state and route
    pub page: Memo<Page>,
    /// Which modal is open and for which bug; the modal remounts only when it changes
    pub modal_key: Memo<(ModalKind, Option<BugId>)>,
}

impl BugListContext {
    pub fn new(store: BugStore) -> Self {
        let page = Memo::new(move |_| {
            let view = store.view().read();
            let route = store.route().read();
            Page::render(&view, &route.query, APP_VERSION)
        });
        let modal_key = Memo::new(move |_| {
            let view = store.view().read();
            (view.modal.kind(), view.modal.target_id())
        });
        Self {
            store,
            page,
            modal_key,
        }
    }

    fn navigator(&self) -> BrowserNavigator {
        BrowserNavigator::new(self.store)
    }

    /// Fetch the bug list; results of superseded fetches are dropped
    pub fn reload(&self) {
        let store = self.store;
        let ticket = store.view().write().begin_load();
        spawn_local(async move {
            let result = HttpBugApi.get_bugs().await;
            store.view().write().finish_load(ticket, result);
        });
    }

    pub fn open_add(&self) {
        self.store.view().write().open_add();
    }

    pub fn open_edit(&self, id: BugId) {
        self.store.view().write().open_edit(id);
    }

    pub fn request_delete(&self, id: BugId) {
        self.store.view().write().request_delete(id);
    }

    pub fn cancel(&self) {
        self.store.view().write().cancel();
    }

    /// Change the open form's values
    pub fn edit_form(&self, edit: impl FnOnce(&mut BugInput)) {
        if let Some(input) = self.store.view().write().form_input_mut() {
            edit(input);
        }
    }

    /// Submit the open add/edit form
    pub fn submit(&self) {
        let submission = self.store.view().write().begin_submit();
        if let Some(submission) = submission {
            self.run(submission);
        }
    }

    /// Accept the open delete confirmation
    pub fn confirm_delete(&self) {
        let submission = self.store.view().write().begin_delete();
        if let Some(submission) = submission {
            self.run(submission);
        }
    }

    pub fn dismiss_notifications(&self) {
        dismiss_notifications(&self.navigator());
    }

    fn run(&self, submission: Submission) {
        let ctx = *self;
        spawn_local(async move {
            let outcome = perform(&HttpBugApi, &ctx.navigator(), submission).await;
            let follow_up = ctx.store.view().write().finish_submit(outcome);
            if follow_up == FollowUp::Reload {
                ctx.reload();
            }
        });
    }
}
