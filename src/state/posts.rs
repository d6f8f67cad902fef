//! Dashboard state: the paginated post list plus the create/edit editor.
//!
//! DESIGN
//! ======
//! The state machine is pure. Operations that need the network return a plan
//! (`ListRequest`, `SubmitPlan`, a delete id); the page performs the request
//! and reports back through the matching `apply_*` / `fail_*` method. This
//! keeps every transition testable without a browser.
//!
//! Editor modes:
//!
//! ```text
//! Create --start_edit(owned post)--> Editing{id}
//! Editing{id} --apply_edited / cancel_edit--> Create
//! ```
//!
//! Only one post is in `Editing` at a time. Ownership gating here is display
//! only; the server must re-check authorship on edit and delete.

#[cfg(test)]
#[path = "posts_test.rs"]
mod posts_test;

use std::collections::HashSet;

use crate::net::types::{Post, PostDraft, PostPage};
use crate::util::request::RequestSeq;
use crate::util::validation::{Field, FieldError, validate_post};

pub const CREATE_FAILED: &str = "Error creating post. Please try again.";
pub const UPDATE_FAILED: &str = "Error updating post. Please try again.";
pub const DELETE_FAILED: &str = "There was an error deleting the post.";
pub const DELETED: &str = "Your post has been deleted.";
pub const LIST_FAILED: &str = "Error fetching posts.";

/// Which submission the editor form will perform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditorMode {
    #[default]
    Create,
    Editing {
        id: String,
    },
}

/// Editor form contents. Attachments are tracked by file name; the page holds
/// the browser file handles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub attachments: Vec<String>,
}

impl PostForm {
    pub fn draft(&self) -> PostDraft {
        PostDraft { title: self.title.clone(), content: self.content.clone() }
    }
}

/// Per-field validation messages shown under the inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<&'static str>,
    pub content: Option<&'static str>,
}

impl FormErrors {
    fn from_errors(errors: &[FieldError]) -> Self {
        let find = |field: Field| errors.iter().find(|e| e.field == field).map(|e| e.message);
        Self { title: find(Field::Title), content: find(Field::Content) }
    }
}

/// A numbered list fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ListRequest {
    pub seq: u64,
    pub page: u32,
    pub limit: u32,
}

/// Submission the page should send.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitPlan {
    Create(PostDraft),
    Edit { id: String, draft: PostDraft },
}

impl SubmitPlan {
    pub fn draft(&self) -> &PostDraft {
        match self {
            Self::Create(draft) | Self::Edit { draft, .. } => draft,
        }
    }

    /// Message shown when the request fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Create(_) => CREATE_FAILED,
            Self::Edit { .. } => UPDATE_FAILED,
        }
    }
}

/// Why `begin_submit` produced no plan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// Local validation failed; nothing is sent.
    Invalid(Vec<FieldError>),
    /// A previous submission has not resolved yet.
    InFlight,
}

/// Rendered form of a post body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentPreview {
    pub text: String,
    /// Content exceeds the limit, so an expand/collapse control is shown.
    pub truncatable: bool,
}

/// Truncate `content` to `limit` characters plus `...` unless expanded.
pub fn preview(content: &str, limit: usize, expanded: bool) -> ContentPreview {
    let truncatable = content.chars().count() > limit;
    let text = if truncatable && !expanded {
        let prefix: String = content.chars().take(limit).collect();
        format!("{prefix}...")
    } else {
        content.to_owned()
    };
    ContentPreview { text, truncatable }
}

pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded { "Show Less" } else { "Read More" }
}

/// Whether the edit/delete menu is shown for `post`.
pub fn can_manage(post: &Post, user_id: Option<&str>) -> bool {
    user_id.is_some_and(|id| id == post.author_id)
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardState {
    pub posts: Vec<Post>,
    pub current_page: u32,
    pub total_pages: u32,
    pub page_size: u32,
    pub loading: bool,
    pub mode: EditorMode,
    pub form: PostForm,
    pub field_errors: FormErrors,
    /// Inline error for the last failed operation.
    pub error: Option<String>,
    /// Acknowledgement after a completed delete.
    pub notice: Option<String>,
    pub submitting: bool,
    /// Post whose action menu is open.
    pub menu_post_id: Option<String>,
    /// Post awaiting delete confirmation.
    pub pending_delete: Option<String>,
    pub deleting: bool,
    pub expanded: HashSet<String>,
    list_seq: RequestSeq,
}

impl DashboardState {
    pub fn new(page_size: u32) -> Self {
        Self {
            posts: Vec::new(),
            current_page: 1,
            total_pages: 0,
            page_size,
            loading: false,
            mode: EditorMode::Create,
            form: PostForm::default(),
            field_errors: FormErrors::default(),
            error: None,
            notice: None,
            submitting: false,
            menu_post_id: None,
            pending_delete: None,
            deleting: false,
            expanded: HashSet::new(),
            list_seq: RequestSeq::default(),
        }
    }

    // ---------------------------------------------------------
    // List + pagination
    // ---------------------------------------------------------

    /// Number and describe a fetch of the current page.
    pub fn begin_list(&mut self) -> ListRequest {
        self.loading = true;
        ListRequest { seq: self.list_seq.issue(), page: self.current_page, limit: self.page_size }
    }

    /// Replace the list with a fetched page. Returns `false` when the response
    /// was superseded and dropped.
    pub fn apply_list(&mut self, seq: u64, page: PostPage) -> bool {
        if !self.list_seq.accept(seq) {
            log::debug!("dropping stale post list response {seq}");
            return false;
        }
        self.posts = page.items;
        self.total_pages = page.total_pages;
        if self.list_seq.is_latest(seq) {
            self.loading = false;
        }
        true
    }

    pub fn fail_list(&mut self, seq: u64, message: impl Into<String>) {
        if self.list_seq.is_latest(seq) {
            self.loading = false;
            self.error = Some(message.into());
        }
    }

    /// Advance one page. Returns whether the list must be refreshed.
    pub fn next_page(&mut self) -> bool {
        if self.current_page >= self.total_pages {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Go back one page. Returns whether the list must be refreshed.
    pub fn previous_page(&mut self) -> bool {
        if self.current_page <= 1 {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// "Page X of Y"; an empty or not-yet-loaded list still counts one page.
    pub fn page_label(&self) -> String {
        format!("Page {} of {}", self.current_page, self.total_pages.max(1))
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    // ---------------------------------------------------------
    // Editor
    // ---------------------------------------------------------

    pub fn editing_id(&self) -> Option<&str> {
        match &self.mode {
            EditorMode::Editing { id } => Some(id),
            EditorMode::Create => None,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing_id().is_some()
    }

    pub fn set_attachments(&mut self, names: Vec<String>) {
        self.form.attachments = names;
    }

    /// Enter editing for `post`, preloading its text. Existing images are not
    /// re-uploaded; only newly attached files are sent.
    pub fn start_edit(&mut self, post: &Post) {
        self.mode = EditorMode::Editing { id: post.id.clone() };
        self.form = PostForm { title: post.title.clone(), content: post.content.clone(), attachments: Vec::new() };
        self.field_errors = FormErrors::default();
        self.error = None;
        self.menu_post_id = None;
    }

    pub fn cancel_edit(&mut self) {
        self.reset_editor();
    }

    /// Validate the form and describe the request to send.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitBlocked::Invalid`] with per-field errors (also stored
    /// in `field_errors`), or [`SubmitBlocked::InFlight`] while a previous
    /// submission is outstanding.
    pub fn begin_submit(&mut self) -> Result<SubmitPlan, SubmitBlocked> {
        if self.submitting {
            return Err(SubmitBlocked::InFlight);
        }
        let draft = self.form.draft();
        if let Err(errors) = validate_post(&draft) {
            self.field_errors = FormErrors::from_errors(&errors);
            return Err(SubmitBlocked::Invalid(errors));
        }
        self.field_errors = FormErrors::default();
        self.error = None;
        self.submitting = true;
        Ok(match &self.mode {
            EditorMode::Create => SubmitPlan::Create(draft),
            EditorMode::Editing { id } => SubmitPlan::Edit { id: id.clone(), draft },
        })
    }

    /// Append a newly created post, clear the form, and plan a refetch of the
    /// current page so page totals catch up with the server.
    pub fn apply_created(&mut self, post: Post) -> ListRequest {
        self.posts.push(post);
        self.submitting = false;
        self.reset_editor();
        self.begin_list()
    }

    /// Replace post `id` in place with the server's record, keeping the text
    /// that was submitted, return to create mode, and plan a refetch.
    pub fn apply_edited(&mut self, id: &str, draft: &PostDraft, post: Post) -> ListRequest {
        if let Some(slot) = self.posts.iter_mut().find(|p| p.id == id) {
            *slot = Post {
                id: id.to_owned(),
                title: draft.title.clone(),
                content: draft.content.clone(),
                ..post
            };
        }
        self.submitting = false;
        self.reset_editor();
        self.begin_list()
    }

    /// Record a failed submission; the form is left as-is for retry.
    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.error = Some(message.into());
    }

    fn reset_editor(&mut self) {
        self.mode = EditorMode::Create;
        self.form = PostForm::default();
        self.field_errors = FormErrors::default();
    }

    // ---------------------------------------------------------
    // Menu + delete
    // ---------------------------------------------------------

    pub fn open_menu(&mut self, id: &str) {
        self.menu_post_id = Some(id.to_owned());
    }

    pub fn close_menu(&mut self) {
        self.menu_post_id = None;
    }

    pub fn is_menu_open(&self, id: &str) -> bool {
        self.menu_post_id.as_deref() == Some(id)
    }

    /// Ask for confirmation before deleting `id`.
    pub fn request_delete(&mut self, id: &str) {
        self.pending_delete = Some(id.to_owned());
        self.menu_post_id = None;
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Whether the pending confirmation can be acted on now. While another
    /// delete is in flight the request stays queued.
    pub fn can_confirm_delete(&self) -> bool {
        !self.deleting && self.pending_delete.is_some()
    }

    /// Consume the pending confirmation and return the id to delete.
    pub fn confirm_delete(&mut self) -> Option<String> {
        if self.deleting {
            return None;
        }
        let id = self.pending_delete.take()?;
        self.deleting = true;
        Some(id)
    }

    /// Remove exactly the entry matching `id` and acknowledge.
    pub fn apply_deleted(&mut self, id: &str) {
        if let Some(index) = self.posts.iter().position(|p| p.id == id) {
            self.posts.remove(index);
        }
        self.expanded.remove(id);
        if self.editing_id() == Some(id) {
            self.reset_editor();
        }
        self.deleting = false;
        self.notice = Some(DELETED.to_owned());
    }

    /// Record a failed delete without touching the list.
    pub fn fail_delete(&mut self) {
        self.deleting = false;
        self.error = Some(DELETE_FAILED.to_owned());
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ---------------------------------------------------------
    // Truncation
    // ---------------------------------------------------------

    pub fn toggle_expanded(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_owned());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}
