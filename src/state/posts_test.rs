use super::*;

fn post(id: &str, author: &str) -> Post {
    Post {
        id: id.to_owned(),
        author_id: author.to_owned(),
        author_name: Some(format!("{author}-name")),
        title: format!("title {id}"),
        content: format!("content {id}"),
        images: vec![format!("https://cdn.example.test/{id}.png")],
        created_at: "2024-05-01T10:00:00.000Z".to_owned(),
    }
}

fn page(ids: &[&str], total_pages: u32) -> PostPage {
    PostPage { items: ids.iter().map(|id| post(id, "u1")).collect(), current_page: 1, total_pages }
}

fn loaded(ids: &[&str], total_pages: u32) -> DashboardState {
    let mut state = DashboardState::new(8);
    let req = state.begin_list();
    assert!(state.apply_list(req.seq, page(ids, total_pages)));
    state
}

fn ids(state: &DashboardState) -> Vec<&str> {
    state.posts.iter().map(|p| p.id.as_str()).collect()
}

// =============================================================
// List
// =============================================================

#[test]
fn new_state_starts_on_page_one_in_create_mode() {
    let state = DashboardState::new(8);
    assert_eq!(state.current_page, 1);
    assert_eq!(state.total_pages, 0);
    assert_eq!(state.mode, EditorMode::Create);
    assert!(state.posts.is_empty());
}

#[test]
fn begin_list_requests_current_page_with_page_size() {
    let mut state = DashboardState::new(8);
    let req = state.begin_list();
    assert_eq!(req, ListRequest { seq: 1, page: 1, limit: 8 });
    assert!(state.loading);
}

#[test]
fn apply_list_replaces_posts_and_total() {
    let mut state = loaded(&["a", "b"], 2);
    let req = state.begin_list();
    assert!(state.apply_list(req.seq, page(&["c"], 5)));
    assert_eq!(ids(&state), vec!["c"]);
    assert_eq!(state.total_pages, 5);
    assert!(!state.loading);
}

#[test]
fn apply_list_with_empty_page_renders_nothing() {
    let mut state = loaded(&["a"], 1);
    let req = state.begin_list();
    let body = serde_json::json!({ "posts": "not-an-array", "totalPages": 1 });
    assert!(state.apply_list(req.seq, PostPage::from_response(&body, 1)));
    assert!(state.posts.is_empty());
}

#[test]
fn stale_list_response_is_dropped() {
    let mut state = DashboardState::new(8);
    let first = state.begin_list();
    let second = state.begin_list();
    assert!(state.apply_list(second.seq, page(&["new"], 2)));
    assert!(!state.apply_list(first.seq, page(&["old"], 9)));
    assert_eq!(ids(&state), vec!["new"]);
    assert_eq!(state.total_pages, 2);
}

#[test]
fn older_response_arriving_first_keeps_loading_until_latest() {
    let mut state = DashboardState::new(8);
    let first = state.begin_list();
    let second = state.begin_list();
    assert!(state.apply_list(first.seq, page(&["old"], 1)));
    assert!(state.loading);
    assert!(state.apply_list(second.seq, page(&["new"], 1)));
    assert!(!state.loading);
    assert_eq!(ids(&state), vec!["new"]);
}

#[test]
fn fail_list_only_reports_latest_request() {
    let mut state = DashboardState::new(8);
    let first = state.begin_list();
    let second = state.begin_list();
    state.fail_list(first.seq, LIST_FAILED);
    assert_eq!(state.error, None);
    state.fail_list(second.seq, LIST_FAILED);
    assert_eq!(state.error.as_deref(), Some(LIST_FAILED));
    assert!(!state.loading);
}

// =============================================================
// Pagination
// =============================================================

#[test]
fn previous_is_noop_on_first_page() {
    let mut state = loaded(&["a"], 3);
    assert!(!state.previous_page());
    assert_eq!(state.current_page, 1);
    assert!(!state.has_previous());
}

#[test]
fn next_is_noop_on_last_page() {
    let mut state = loaded(&["a"], 2);
    assert!(state.next_page());
    assert!(!state.next_page());
    assert_eq!(state.current_page, 2);
    assert!(!state.has_next());
}

#[test]
fn next_is_noop_before_first_load() {
    let mut state = DashboardState::new(8);
    assert!(!state.next_page());
    assert_eq!(state.current_page, 1);
}

#[test]
fn page_label_counts_at_least_one_page() {
    assert_eq!(DashboardState::new(8).page_label(), "Page 1 of 1");
    assert_eq!(loaded(&[], 0).page_label(), "Page 1 of 1");
    let mut state = loaded(&["a"], 3);
    state.next_page();
    assert_eq!(state.page_label(), "Page 2 of 3");
}

#[test]
fn next_and_previous_move_exactly_one_page() {
    let mut state = loaded(&["a"], 4);
    assert!(state.next_page());
    assert_eq!(state.current_page, 2);
    assert_eq!(state.begin_list().page, 2);
    assert!(state.previous_page());
    assert_eq!(state.current_page, 1);
}

// =============================================================
// Create
// =============================================================

#[test]
fn submit_with_empty_title_reports_title_error_and_sends_nothing() {
    let mut state = DashboardState::new(8);
    state.form.content = "body".to_owned();
    let blocked = state.begin_submit().unwrap_err();
    assert!(matches!(blocked, SubmitBlocked::Invalid(ref errors) if errors.len() == 1));
    assert_eq!(state.field_errors.title, Some("Title is required"));
    assert_eq!(state.field_errors.content, None);
    assert!(!state.submitting);
}

#[test]
fn submit_with_both_fields_empty_reports_both_errors() {
    let mut state = DashboardState::new(8);
    assert!(state.begin_submit().is_err());
    assert_eq!(state.field_errors.title, Some("Title is required"));
    assert_eq!(state.field_errors.content, Some("Content is required"));
}

#[test]
fn submit_without_images_is_allowed() {
    let mut state = DashboardState::new(8);
    state.form.title = "t".to_owned();
    state.form.content = "c".to_owned();
    let plan = state.begin_submit().unwrap();
    assert_eq!(plan, SubmitPlan::Create(PostDraft { title: "t".to_owned(), content: "c".to_owned() }));
    assert_eq!(state.field_errors, FormErrors::default());
    assert!(state.submitting);
}

#[test]
fn second_submit_while_in_flight_is_blocked() {
    let mut state = DashboardState::new(8);
    state.form.title = "t".to_owned();
    state.form.content = "c".to_owned();
    assert!(state.begin_submit().is_ok());
    assert_eq!(state.begin_submit(), Err(SubmitBlocked::InFlight));
}

#[test]
fn apply_created_appends_and_clears_form() {
    let mut state = loaded(&["a"], 1);
    state.form = PostForm { title: "t".to_owned(), content: "c".to_owned(), attachments: vec!["x.png".to_owned()] };
    state.begin_submit().unwrap();
    state.apply_created(post("new", "u1"));
    assert_eq!(ids(&state), vec!["a", "new"]);
    assert_eq!(state.form, PostForm::default());
    assert!(!state.submitting);
}

#[test]
fn successful_submit_plans_one_refresh_of_current_page() {
    let mut state = loaded(&["a"], 1);
    state.form.title = "t".to_owned();
    state.form.content = "c".to_owned();
    state.begin_submit().unwrap();
    let req = state.apply_created(post("new", "u1"));
    assert_eq!(req, ListRequest { seq: 2, page: 1, limit: 8 });
    assert!(state.loading);
}

#[test]
fn creates_past_page_size_unlock_next_page_after_refresh() {
    let mut state = loaded(&[], 0);
    let mut last = None;
    for n in 0..12 {
        state.form.title = format!("t{n}");
        state.form.content = "c".to_owned();
        state.begin_submit().unwrap();
        last = Some(state.apply_created(post(&format!("p{n}"), "u1")));
    }
    assert!(!state.has_next());

    let req = last.unwrap();
    let first_page: Vec<String> = (0..8).map(|n| format!("p{n}")).collect();
    let first_page: Vec<&str> = first_page.iter().map(String::as_str).collect();
    assert!(state.apply_list(req.seq, page(&first_page, 2)));
    assert_eq!(state.posts.len(), 8);
    assert!(state.has_next());
    assert!(state.next_page());
}

#[test]
fn successful_edit_plans_refresh() {
    let mut state = loaded(&["a"], 1);
    let target = state.posts[0].clone();
    state.start_edit(&target);
    let plan = state.begin_submit().unwrap();
    let req = state.apply_edited("a", plan.draft(), post("a", "u1"));
    assert_eq!(req.page, 1);
    assert!(state.apply_list(req.seq, page(&["a"], 1)));
    assert!(!state.loading);
}

#[test]
fn failed_create_keeps_form_for_retry() {
    let mut state = DashboardState::new(8);
    state.form.title = "t".to_owned();
    state.form.content = "c".to_owned();
    let plan = state.begin_submit().unwrap();
    state.fail_submit(plan.failure_message());
    assert_eq!(state.error.as_deref(), Some("Error creating post. Please try again."));
    assert_eq!(state.form.title, "t");
    assert_eq!(state.form.content, "c");
    assert!(!state.submitting);
    assert!(state.begin_submit().is_ok());
}

// =============================================================
// Edit
// =============================================================

#[test]
fn start_edit_preloads_text_without_images() {
    let mut state = loaded(&["a", "b"], 1);
    let target = state.posts[1].clone();
    state.open_menu("b");
    state.start_edit(&target);
    assert_eq!(state.editing_id(), Some("b"));
    assert_eq!(state.form.title, "title b");
    assert_eq!(state.form.content, "content b");
    assert!(state.form.attachments.is_empty());
    assert_eq!(state.menu_post_id, None);
}

#[test]
fn edit_submit_targets_post_id() {
    let mut state = loaded(&["a"], 1);
    let target = state.posts[0].clone();
    state.start_edit(&target);
    state.form.title = "renamed".to_owned();
    let plan = state.begin_submit().unwrap();
    assert!(matches!(plan, SubmitPlan::Edit { ref id, .. } if id == "a"));
    assert_eq!(plan.failure_message(), UPDATE_FAILED);
}

#[test]
fn apply_edited_replaces_in_place_and_leaves_others() {
    let mut state = loaded(&["a", "b", "c"], 1);
    let before_a = state.posts[0].clone();
    let before_c = state.posts[2].clone();
    let target = state.posts[1].clone();
    state.start_edit(&target);
    state.form.title = "new title".to_owned();
    state.form.content = "new content".to_owned();
    let plan = state.begin_submit().unwrap();

    let mut returned = post("b", "u1");
    returned.images = vec!["https://cdn.example.test/b2.png".to_owned()];
    state.apply_edited("b", plan.draft(), returned);

    assert_eq!(ids(&state), vec!["a", "b", "c"]);
    assert_eq!(state.posts[0], before_a);
    assert_eq!(state.posts[2], before_c);
    assert_eq!(state.posts[1].title, "new title");
    assert_eq!(state.posts[1].content, "new content");
    assert_eq!(state.posts[1].images, vec!["https://cdn.example.test/b2.png"]);
    assert_eq!(state.mode, EditorMode::Create);
    assert_eq!(state.form, PostForm::default());
}

#[test]
fn failed_edit_stays_in_editing_mode() {
    let mut state = loaded(&["a"], 1);
    let target = state.posts[0].clone();
    state.start_edit(&target);
    let plan = state.begin_submit().unwrap();
    state.fail_submit(plan.failure_message());
    assert_eq!(state.editing_id(), Some("a"));
    assert_eq!(state.error.as_deref(), Some(UPDATE_FAILED));
    assert_eq!(state.posts[0], post("a", "u1"));
}

#[test]
fn cancel_edit_returns_to_create_with_clean_form() {
    let mut state = loaded(&["a"], 1);
    let target = state.posts[0].clone();
    state.start_edit(&target);
    state.cancel_edit();
    assert!(!state.is_editing());
    assert_eq!(state.form, PostForm::default());
}

// =============================================================
// Delete
// =============================================================

#[test]
fn confirmed_delete_removes_exactly_one_and_keeps_order() {
    let mut state = loaded(&["a", "b", "c", "d"], 1);
    state.request_delete("b");
    let id = state.confirm_delete().unwrap();
    assert_eq!(id, "b");
    state.apply_deleted(&id);
    assert_eq!(ids(&state), vec!["a", "c", "d"]);
    assert_eq!(state.notice.as_deref(), Some(DELETED));
    assert!(!state.deleting);
}

#[test]
fn declined_delete_leaves_list_untouched() {
    let mut state = loaded(&["a", "b"], 1);
    let before = state.posts.clone();
    state.request_delete("a");
    state.cancel_delete();
    assert_eq!(state.confirm_delete(), None);
    assert_eq!(state.posts, before);
}

#[test]
fn second_delete_waits_until_first_finishes() {
    let mut state = loaded(&["a", "b"], 1);
    state.request_delete("a");
    let first = state.confirm_delete().unwrap();

    state.request_delete("b");
    assert!(!state.can_confirm_delete());
    assert_eq!(state.confirm_delete(), None);
    assert_eq!(state.pending_delete.as_deref(), Some("b"));

    state.apply_deleted(&first);
    assert!(state.can_confirm_delete());
    assert_eq!(state.confirm_delete().as_deref(), Some("b"));
}

#[test]
fn delete_without_request_does_nothing() {
    let mut state = loaded(&["a"], 1);
    assert_eq!(state.confirm_delete(), None);
    assert!(!state.deleting);
}

#[test]
fn failed_delete_reports_without_mutating() {
    let mut state = loaded(&["a", "b"], 1);
    let before = state.posts.clone();
    state.request_delete("a");
    state.confirm_delete().unwrap();
    state.fail_delete();
    assert_eq!(state.posts, before);
    assert_eq!(state.error.as_deref(), Some(DELETE_FAILED));
    assert!(!state.deleting);
}

#[test]
fn deleting_post_under_edit_resets_editor() {
    let mut state = loaded(&["a", "b"], 1);
    let target = state.posts[0].clone();
    state.start_edit(&target);
    state.request_delete("a");
    let id = state.confirm_delete().unwrap();
    state.apply_deleted(&id);
    assert!(!state.is_editing());
}

// =============================================================
// Ownership + truncation
// =============================================================

#[test]
fn can_manage_only_own_posts() {
    let mine = post("a", "u1");
    assert!(can_manage(&mine, Some("u1")));
    assert!(!can_manage(&mine, Some("u2")));
    assert!(!can_manage(&mine, None));
}

#[test]
fn preview_short_content_is_untouched() {
    let p = preview("short", 100, false);
    assert_eq!(p, ContentPreview { text: "short".to_owned(), truncatable: false });
}

#[test]
fn preview_long_content_is_truncated_with_ellipsis() {
    let content = "x".repeat(150);
    let p = preview(&content, 100, false);
    assert!(p.truncatable);
    assert_eq!(p.text, format!("{}...", "x".repeat(100)));
}

#[test]
fn preview_expanded_shows_full_content() {
    let content = "y".repeat(101);
    let p = preview(&content, 100, true);
    assert!(p.truncatable);
    assert_eq!(p.text, content);
}

#[test]
fn preview_counts_characters_not_bytes() {
    let content = "é".repeat(5);
    assert_eq!(preview(&content, 3, false).text, "ééé...");
    assert!(!preview(&content, 5, false).truncatable);
}

#[test]
fn toggle_expanded_is_idempotent_under_double_toggle() {
    let mut state = loaded(&["a", "b"], 1);
    state.toggle_expanded("a");
    assert!(state.is_expanded("a"));
    assert!(!state.is_expanded("b"));
    state.toggle_expanded("a");
    assert!(!state.is_expanded("a"));
    assert_eq!(toggle_label(false), "Read More");
    assert_eq!(toggle_label(true), "Show Less");
}
