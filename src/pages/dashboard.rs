//! Dashboard page: paginated post list with create, edit, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. All bookkeeping lives in
//! `DashboardState`; this page only issues the requests it plans and feeds
//! the outcomes back. Responses arriving after the page is torn down are
//! dropped, and a 401 from any request ends the session.

use std::future::Future;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::components::post_card::PostCard;
use crate::components::post_editor::PostEditor;
use crate::components::sidebar::Sidebar;
use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::error::ApiError;
use crate::net::types::{Attachment, Post};
use crate::state::auth::{AuthContext, AuthState};
use crate::state::posts::{DashboardState, LIST_FAILED, ListRequest, SubmitBlocked, SubmitPlan};
use crate::util::auth::sign_out;
use crate::util::request::CancelHandle;

/// What every dashboard request needs once it has been planned.
#[derive(Clone)]
struct Requests {
    config: ClientConfig,
    auth: AuthContext,
    auth_state: RwSignal<AuthState>,
    alive: CancelHandle,
}

impl Requests {
    fn api(&self) -> ApiClient {
        ApiClient::from_session(&self.config, &self.auth.session())
    }

    fn is_live(&self) -> bool {
        self.alive.is_live()
    }

    fn report(&self, action: &str, err: &ApiError) {
        log::warn!("{action} failed: {err}");
        if err.is_unauthorized() {
            log::info!("session rejected by server; signing out");
            sign_out(&self.auth, self.auth_state);
        }
    }
}

/// Run a request future on the browser executor. Native builds have no
/// executor, so the future is dropped unpolled.
fn spawn(fut: impl Future<Output = ()> + 'static) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(fut);
    #[cfg(not(feature = "csr"))]
    drop(fut);
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<AuthContext>();
    let auth_state = expect_context::<RwSignal<AuthState>>();
    let preview_chars = config.preview_chars;

    let state = RwSignal::new(DashboardState::new(config.page_size));
    let files = RwSignal::new_local(Vec::<Attachment>::new());

    let alive = CancelHandle::new();
    on_cleanup({
        let alive = alive.clone();
        move || alive.cancel()
    });
    let requests = Requests { config, auth, auth_state, alive };

    let load = Callback::new({
        let requests = requests.clone();
        move |req: ListRequest| {
            let api = requests.api();
            let requests = requests.clone();
            spawn(async move {
                let result = api.fetch_posts(req.page, req.limit).await;
                if !requests.is_live() {
                    return;
                }
                match result {
                    Ok(page) => {
                        let _ = state.try_update(|s| s.apply_list(req.seq, page));
                    }
                    Err(e) => {
                        requests.report("fetch posts", &e);
                        let _ = state.try_update(|s| s.fail_list(req.seq, LIST_FAILED));
                    }
                }
            });
        }
    });

    let refresh = Callback::new(move |()| {
        if let Some(req) = state.try_update(DashboardState::begin_list) {
            load.run(req);
        }
    });

    let on_submit = Callback::new({
        let requests = requests.clone();
        move |()| {
            let plan = match state.try_update(DashboardState::begin_submit) {
                Some(Ok(plan)) => plan,
                Some(Err(SubmitBlocked::InFlight)) => {
                    log::debug!("submit ignored while another is pending");
                    return;
                }
                Some(Err(SubmitBlocked::Invalid(_))) | None => return,
            };
            let images = files.get_untracked();
            let api = requests.api();
            let requests = requests.clone();
            spawn(async move {
                let result = match &plan {
                    SubmitPlan::Create(draft) => api.create_post(draft, &images).await,
                    SubmitPlan::Edit { id, draft } => api.edit_post(id, draft, &images).await,
                };
                if !requests.is_live() {
                    return;
                }
                match result {
                    Ok(post) => {
                        let refetch = state.try_update(|s| match &plan {
                            SubmitPlan::Create(_) => s.apply_created(post),
                            SubmitPlan::Edit { id, draft } => s.apply_edited(id, draft, post),
                        });
                        let _ = files.try_set(Vec::new());
                        if let Some(req) = refetch {
                            load.run(req);
                        }
                    }
                    Err(e) => {
                        requests.report("save post", &e);
                        let _ = state.try_update(|s| s.fail_submit(plan.failure_message()));
                    }
                }
            });
        }
    });

    let on_edit = Callback::new(move |post: Post| {
        state.update(|s| s.start_edit(&post));
        files.set(Vec::new());
    });

    let on_cancel_edit = Callback::new(move |()| {
        state.update(DashboardState::cancel_edit);
        files.set(Vec::new());
    });

    let on_next = Callback::new(move |()| {
        if state.try_update(DashboardState::next_page).unwrap_or(false) {
            refresh.run(());
        }
    });

    let on_previous = Callback::new(move |()| {
        if state.try_update(DashboardState::previous_page).unwrap_or(false) {
            refresh.run(());
        }
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(id) = state.try_update(DashboardState::confirm_delete).flatten() else {
            return;
        };
        let api = requests.api();
        let requests = requests.clone();
        spawn(async move {
            let result = api.delete_post(&id).await;
            if !requests.is_live() {
                return;
            }
            match result {
                Ok(()) => {
                    let _ = state.try_update(|s| s.apply_deleted(&id));
                }
                Err(e) => {
                    requests.report("delete post", &e);
                    let _ = state.try_update(DashboardState::fail_delete);
                }
            }
        });
    });

    let on_cancel_delete = Callback::new(move |()| state.update(DashboardState::cancel_delete));

    refresh.run(());

    let posts = Memo::new(move |_| state.with(|s| s.posts.clone()));
    let is_empty = move || state.with(|s| !s.loading && s.posts.is_empty());
    let notice = move || state.with(|s| s.notice.clone().unwrap_or_default());

    view! {
        <div class="dashboard-page">
            <Sidebar/>
            <main class="dashboard-main">
                <PostEditor state=state files=files on_submit=on_submit on_cancel=on_cancel_edit/>
                <Show when=move || state.with(|s| s.loading)>
                    <p class="dashboard-empty">"Loading posts..."</p>
                </Show>
                <Show when=is_empty>
                    <p class="dashboard-empty">"No posts yet."</p>
                </Show>
                <div class="post-grid">
                    {move || {
                        posts
                            .get()
                            .into_iter()
                            .map(|post| {
                                view! {
                                    <PostCard post=post state=state preview_chars=preview_chars on_edit=on_edit/>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <Pagination state=state on_previous=on_previous on_next=on_next/>
            </main>

            <Show when=move || state.with(|s| s.pending_delete.is_some())>
                <ConfirmDialog
                    title="Are you sure?"
                    message="You won't be able to revert this!"
                    confirm_label="Yes, delete it!"
                    cancel_label="No, keep it"
                    busy=Signal::derive(move || !state.with(DashboardState::can_confirm_delete))
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>

            <Show when=move || state.with(|s| s.notice.is_some())>
                <div class="dialog-backdrop">
                    <div class="dialog" role="alertdialog">
                        <h2>"Deleted!"</h2>
                        <p>{notice}</p>
                        <div class="dialog__actions">
                            <button
                                class="btn btn--primary"
                                on:click=move |_| state.update(DashboardState::dismiss_notice)
                            >
                                "OK"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
