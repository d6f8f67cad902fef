//! Card rendering a single post with its owner-only action menu.

use leptos::prelude::*;

use crate::net::types::Post;
use crate::state::auth::AuthState;
use crate::state::posts::{DashboardState, can_manage, preview, toggle_label};

/// Shown when a post has no images.
const PLACEHOLDER_IMAGE: &str = "https://source.unsplash.com/random/300x300/?1";

/// Post card: cover image, author, title, truncatable content.
///
/// The edit/delete menu only renders for the post's author. It is a display
/// convenience; the server decides whether the action is allowed.
#[component]
pub fn PostCard(
    post: Post,
    state: RwSignal<DashboardState>,
    preview_chars: usize,
    on_edit: Callback<Post>,
) -> impl IntoView {
    let auth_state = expect_context::<RwSignal<AuthState>>();

    let cover = post.cover_image().unwrap_or(PLACEHOLDER_IMAGE).to_owned();
    let author = post.author_name.clone().unwrap_or_default();
    let title = post.title.clone();
    let truncatable = preview(&post.content, preview_chars, false).truncatable;
    let post = StoredValue::new(post);

    let owned = Memo::new(move |_| post.with_value(|p| auth_state.with(|a| can_manage(p, a.user_id()))));
    let expanded = Memo::new(move |_| post.with_value(|p| state.with(|s| s.is_expanded(&p.id))));
    let menu_open = Memo::new(move |_| post.with_value(|p| state.with(|s| s.is_menu_open(&p.id))));
    let body = move || post.with_value(|p| preview(&p.content, preview_chars, expanded.get()).text);

    let on_menu_toggle = move |_| {
        post.with_value(|p| {
            state.update(|s| if s.is_menu_open(&p.id) { s.close_menu() } else { s.open_menu(&p.id) });
        });
    };
    let on_edit_click = move |_| on_edit.run(post.get_value());
    let on_delete_click = move |_| post.with_value(|p| state.update(|s| s.request_delete(&p.id)));
    let on_toggle_expand = move |_| post.with_value(|p| state.update(|s| s.toggle_expanded(&p.id)));

    view! {
        <article class="post-card">
            <img class="post-card__cover" src=cover alt=title.clone()/>
            <div class="post-card__body">
                <span class="post-card__author">{author}</span>
                <Show when=move || owned.get()>
                    <button class="post-card__menu-toggle" on:click=on_menu_toggle title="Post actions">
                        "⋮"
                    </button>
                    <Show when=move || menu_open.get()>
                        <ul class="post-card__menu">
                            <li>
                                <button class="post-card__menu-item" on:click=on_edit_click>
                                    "Edit"
                                </button>
                            </li>
                            <li>
                                <button class="post-card__menu-item" on:click=on_delete_click>
                                    "Delete"
                                </button>
                            </li>
                        </ul>
                    </Show>
                </Show>
                <h3 class="post-card__title">{title}</h3>
                <p class="post-card__content">{body}</p>
                <Show when=move || truncatable>
                    <button class="btn btn--small post-card__expand" on:click=on_toggle_expand>
                        {move || toggle_label(expanded.get())}
                    </button>
                </Show>
            </div>
        </article>
    }
}
