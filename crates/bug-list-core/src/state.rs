//! BugList View State
//!
//! Every transition of the view is a synchronous method on [`ViewState`].
//! Async work happens between a `begin_*` call, which hands out what to
//! send, and the matching `finish_*` call, which applies the result.
//! No state is borrowed across an await.

use crate::error::{ApiError, ApiResult};
use crate::models::{Bug, BugId, BugInput};

/// Banner text for a failed list fetch
pub const FETCH_ERROR: &str = "Failed to fetch bugs";

/// Local form error for a blank title
pub const TITLE_REQUIRED: &str = "Title is required";

/// Identifies one list fetch; only the newest one is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Add/edit form contents
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Form {
    pub input: BugInput,
    pub submitting: bool,
    pub error: Option<String>,
}

impl Form {
    fn new(input: BugInput) -> Self {
        Self {
            input,
            ..Default::default()
        }
    }
}

/// Delete confirmation state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Confirm {
    pub submitting: bool,
    pub error: Option<String>,
}

/// The secondary surface currently shown, at most one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    None,
    Add(Form),
    Edit(Bug, Form),
    Delete(Bug, Confirm),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    None,
    Add,
    Edit,
    Delete,
}

impl ModalKind {
    /// Error shown in the modal when its API call fails
    pub fn failure_message(&self) -> &'static str {
        match self {
            ModalKind::Add => "Failed to create bug",
            ModalKind::Edit => "Failed to update bug",
            ModalKind::Delete => "Failed to delete bug",
            ModalKind::None => "",
        }
    }
}

impl Modal {
    pub fn kind(&self) -> ModalKind {
        match self {
            Modal::None => ModalKind::None,
            Modal::Add(_) => ModalKind::Add,
            Modal::Edit(..) => ModalKind::Edit,
            Modal::Delete(..) => ModalKind::Delete,
        }
    }

    /// Bug the modal acts on, if any
    pub fn target_id(&self) -> Option<BugId> {
        match self {
            Modal::Edit(bug, _) | Modal::Delete(bug, _) => Some(bug.id),
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        match self {
            Modal::None => false,
            Modal::Add(form) | Modal::Edit(_, form) => form.submitting,
            Modal::Delete(_, confirm) => confirm.submitting,
        }
    }

    fn settle(&mut self, error: Option<String>) {
        match self {
            Modal::None => {}
            Modal::Add(form) | Modal::Edit(_, form) => {
                form.submitting = false;
                form.error = error;
            }
            Modal::Delete(_, confirm) => {
                confirm.submitting = false;
                confirm.error = error;
            }
        }
    }
}

/// An API mutation requested by the view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(BugInput),
    Update(BugId, BugInput),
    Delete(Bug),
}

impl Submission {
    pub fn kind(&self) -> ModalKind {
        match self {
            Submission::Create(_) => ModalKind::Add,
            Submission::Update(..) => ModalKind::Edit,
            Submission::Delete(_) => ModalKind::Delete,
        }
    }
}

/// Settled result of a [`Submission`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Created(Bug),
    Updated(Bug),
    Deleted(BugId),
    Failed(ModalKind, ApiError),
}

/// What the driver must do after applying an [`Outcome`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUp {
    None,
    Reload,
}

/// In-memory state of the BugList view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Bugs from the latest successful fetch, in server order
    pub bugs: Vec<Bug>,
    pub loading: bool,
    pub error: Option<String>,
    pub modal: Modal,
    latest_ticket: u64,
}

impl Default for ViewState {
    /// Starts out loading; nothing is listed before the first fetch settles.
    fn default() -> Self {
        Self {
            bugs: Vec::new(),
            loading: true,
            error: None,
            modal: Modal::None,
            latest_ticket: 0,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bug(&self, id: BugId) -> Option<&Bug> {
        self.bugs.iter().find(|bug| bug.id == id)
    }

    // ========================
    // Loading
    // ========================

    /// Enter the loading state, keeping the current list until the fetch settles
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket += 1;
        self.loading = true;
        LoadTicket(self.latest_ticket)
    }

    /// Apply a fetch result. Returns `false` when a newer fetch superseded it.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: ApiResult<Vec<Bug>>) -> bool {
        if ticket.0 != self.latest_ticket {
            log::debug!("Discarding stale bug list (ticket {} < {})", ticket.0, self.latest_ticket);
            return false;
        }
        self.loading = false;
        match result {
            Ok(bugs) => {
                log::debug!("Loaded {} bugs", bugs.len());
                self.bugs = bugs;
                self.error = None;
            }
            Err(err) => {
                log::error!("Failed to fetch bugs: {}", err);
                self.error = Some(FETCH_ERROR.to_string());
            }
        }
        true
    }

    // ========================
    // Modals
    // ========================

    pub fn open_add(&mut self) -> bool {
        if self.modal.is_submitting() {
            return false;
        }
        self.modal = Modal::Add(Form::new(BugInput::default()));
        true
    }

    /// Open the edit form pre-filled from the bug's current values
    pub fn open_edit(&mut self, id: BugId) -> bool {
        if self.modal.is_submitting() {
            return false;
        }
        let Some(bug) = self.bug(id).cloned() else {
            return false;
        };
        let input = BugInput::from(&bug);
        self.modal = Modal::Edit(bug, Form::new(input));
        true
    }

    /// First delete step: show the confirmation, nothing is sent yet
    pub fn request_delete(&mut self, id: BugId) -> bool {
        if self.modal.is_submitting() {
            return false;
        }
        let Some(bug) = self.bug(id).cloned() else {
            return false;
        };
        self.modal = Modal::Delete(bug, Confirm::default());
        true
    }

    /// Close whatever modal is open, unless its request is in flight
    pub fn cancel(&mut self) -> bool {
        if self.modal.is_submitting() {
            return false;
        }
        self.modal = Modal::None;
        true
    }

    /// Editable form values, while an add/edit form is open and idle
    pub fn form_input_mut(&mut self) -> Option<&mut BugInput> {
        match &mut self.modal {
            Modal::Add(form) | Modal::Edit(_, form) if !form.submitting => Some(&mut form.input),
            _ => None,
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Start submitting the open add/edit form.
    ///
    /// A blank title is rejected locally and nothing is returned.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        let (edit_id, form) = match &mut self.modal {
            Modal::Add(form) => (None, form),
            Modal::Edit(bug, form) => (Some(bug.id), form),
            _ => return None,
        };
        if form.submitting {
            return None;
        }
        if !form.input.has_title() {
            form.error = Some(TITLE_REQUIRED.to_string());
            return None;
        }
        form.submitting = true;
        form.error = None;
        let input = form.input.clone();
        Some(match edit_id {
            Some(id) => Submission::Update(id, input),
            None => Submission::Create(input),
        })
    }

    /// Second delete step: the confirmation was accepted
    pub fn begin_delete(&mut self) -> Option<Submission> {
        match &mut self.modal {
            Modal::Delete(bug, confirm) if !confirm.submitting => {
                confirm.submitting = true;
                confirm.error = None;
                Some(Submission::Delete(bug.clone()))
            }
            _ => None,
        }
    }

    /// Apply a settled submission
    pub fn finish_submit(&mut self, outcome: Outcome) -> FollowUp {
        match outcome {
            Outcome::Created(bug) => {
                log::debug!("Created bug {}", bug.id);
                if self.modal.kind() == ModalKind::Add {
                    self.modal = Modal::None;
                }
                FollowUp::Reload
            }
            Outcome::Updated(bug) => {
                if matches!(&self.modal, Modal::Edit(open, _) if open.id == bug.id) {
                    self.modal = Modal::None;
                }
                match self.bugs.iter_mut().find(|existing| existing.id == bug.id) {
                    Some(existing) => {
                        *existing = bug;
                        self.supersede_pending_load()
                    }
                    None => FollowUp::Reload,
                }
            }
            Outcome::Deleted(id) => {
                if matches!(&self.modal, Modal::Delete(open, _) if open.id == id) {
                    self.modal = Modal::None;
                }
                self.bugs.retain(|bug| bug.id != id);
                self.supersede_pending_load()
            }
            Outcome::Failed(kind, err) => {
                log::warn!("{}: {}", kind.failure_message(), err);
                if self.modal.kind() == kind {
                    self.modal.settle(Some(kind.failure_message().to_string()));
                }
                FollowUp::None
            }
        }
    }

    /// A fetch issued before a local patch may still return the pre-patch list.
    /// Drop it and fetch again so the applied list reflects the mutation.
    fn supersede_pending_load(&mut self) -> FollowUp {
        if !self.loading {
            return FollowUp::None;
        }
        log::debug!("Superseding bug list fetch {}", self.latest_ticket);
        self.latest_ticket += 1;
        FollowUp::Reload
    }
}
