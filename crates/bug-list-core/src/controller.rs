//! BugList Controller
//!
//! Drives [`ViewState`] against a [`BugApi`] and a [`Navigator`].
//! The browser build runs the same steps from Leptos tasks, reusing [`perform`].

use crate::api::{BugApi, Navigator};
use crate::config;
use crate::models::{BugId, BugInput};
use crate::navigation::{Notification, Query, Route};
use crate::page::Page;
use crate::state::{FollowUp, Outcome, Submission, ViewState};

/// Send a submission to the API and announce successful creates and deletes
/// through the navigator.
pub async fn perform<A, N>(api: &A, navigator: &N, submission: Submission) -> Outcome
where
    A: BugApi + ?Sized,
    N: Navigator + ?Sized,
{
    let kind = submission.kind();
    let result = match submission {
        Submission::Create(input) => api.create_bug(&input).await.map(|bug| {
            announce(navigator, Notification::Created { title: input.title.clone() });
            Outcome::Created(bug)
        }),
        Submission::Update(id, input) => api
            .update_bug(&id.to_string(), &input)
            .await
            .map(Outcome::Updated),
        Submission::Delete(bug) => api.delete_bug(&bug.id.to_string()).await.map(|()| {
            announce(navigator, Notification::Deleted { title: bug.title.clone() });
            Outcome::Deleted(bug.id)
        }),
    };
    result.unwrap_or_else(|err| Outcome::Failed(kind, err))
}

fn announce<N: Navigator + ?Sized>(navigator: &N, notification: Notification) {
    navigator.replace(Route::new(navigator.pathname(), notification.to_query()));
}

/// Drop any banner by clearing the query of the current route
pub fn dismiss_notifications<N: Navigator + ?Sized>(navigator: &N) {
    if Notification::from_query(&navigator.query()).is_empty() {
        return;
    }
    navigator.replace(Route::new(navigator.pathname(), Query::new()));
}

/// Owns a view instance and its collaborators
pub struct BugListController<A, N> {
    api: A,
    navigator: N,
    state: ViewState,
}

impl<A: BugApi, N: Navigator> BugListController<A, N> {
    pub fn new(api: A, navigator: N) -> Self {
        Self {
            api,
            navigator,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// First render: fetch the list
    pub async fn mount(&mut self) {
        self.reload().await;
    }

    pub async fn reload(&mut self) {
        let ticket = self.state.begin_load();
        let result = self.api.get_bugs().await;
        self.state.finish_load(ticket, result);
    }

    pub fn open_add(&mut self) -> bool {
        self.state.open_add()
    }

    pub fn open_edit(&mut self, id: BugId) -> bool {
        self.state.open_edit(id)
    }

    pub fn request_delete(&mut self, id: BugId) -> bool {
        self.state.request_delete(id)
    }

    pub fn cancel(&mut self) -> bool {
        self.state.cancel()
    }

    /// Change the open form's values; no-op without an idle form
    pub fn edit_form(&mut self, edit: impl FnOnce(&mut BugInput)) -> bool {
        match self.state.form_input_mut() {
            Some(input) => {
                edit(input);
                true
            }
            None => false,
        }
    }

    /// Submit the open add/edit form
    pub async fn submit(&mut self) {
        if let Some(submission) = self.state.begin_submit() {
            self.run(submission).await;
        }
    }

    /// Accept the open delete confirmation
    pub async fn confirm_delete(&mut self) {
        if let Some(submission) = self.state.begin_delete() {
            self.run(submission).await;
        }
    }

    async fn run(&mut self, submission: Submission) {
        let outcome = perform(&self.api, &self.navigator, submission).await;
        if self.state.finish_submit(outcome) == FollowUp::Reload {
            self.reload().await;
        }
    }

    pub fn dismiss_notifications(&self) {
        dismiss_notifications(&self.navigator);
    }

    pub fn page(&self) -> Page {
        Page::render(&self.state, &self.navigator.query(), config::APP_VERSION)
    }
}
