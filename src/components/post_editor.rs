//! Create/edit form for posts.
//!
//! The same form serves both editor modes; the heading, submit label, and the
//! presence of a cancel button follow `DashboardState::mode`. Picked image
//! files live in a local-storage signal owned by the page because browser
//! `File` handles cannot cross threads.

use leptos::prelude::*;

use crate::net::types::Attachment;
use crate::state::posts::DashboardState;

#[component]
pub fn PostEditor(
    state: RwSignal<DashboardState>,
    files: RwSignal<Vec<Attachment>, LocalStorage>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_editing = move || state.with(DashboardState::is_editing);

    let on_files = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                let picked: Vec<Attachment> = input
                    .files()
                    .map(|list| (0..list.length()).filter_map(|i| list.get(i)).map(Attachment::from_file).collect())
                    .unwrap_or_default();
                state.update(|s| s.set_attachments(picked.iter().map(|a| a.name.clone()).collect()));
                files.set(picked);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = files;
            move |_ev: leptos::ev::Event| {}
        }
    };

    let attachment_summary = move || {
        state.with(|s| match s.form.attachments.len() {
            0 => String::new(),
            1 => s.form.attachments[0].clone(),
            n => format!("{n} images selected"),
        })
    };

    view! {
        <section class="post-editor">
            <h2 class="post-editor__heading">
                {move || if is_editing() { "Edit Post" } else { "Create New Post" }}
            </h2>
            <Show when=move || state.with(|s| s.error.is_some())>
                <p class="post-editor__error">{move || state.with(|s| s.error.clone().unwrap_or_default())}</p>
            </Show>
            <form
                class="post-editor__form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <label class="post-editor__label">
                    "Title"
                    <input
                        class="post-editor__input"
                        type="text"
                        prop:value=move || state.with(|s| s.form.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form.title = value);
                        }
                    />
                </label>
                {move || {
                    state
                        .with(|s| s.field_errors.title)
                        .map(|msg| view! { <p class="post-editor__field-error">{msg}</p> })
                }}
                <label class="post-editor__label">
                    "Content"
                    <textarea
                        class="post-editor__input post-editor__input--content"
                        rows="4"
                        prop:value=move || state.with(|s| s.form.content.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            state.update(|s| s.form.content = value);
                        }
                    ></textarea>
                </label>
                {move || {
                    state
                        .with(|s| s.field_errors.content)
                        .map(|msg| view! { <p class="post-editor__field-error">{msg}</p> })
                }}
                <div class="post-editor__actions">
                    <label class="btn post-editor__images">
                        "Add images"
                        <input type="file" accept="image/*" multiple=true hidden=true on:change=on_files/>
                    </label>
                    <span class="post-editor__attachments">{attachment_summary}</span>
                    <Show when=is_editing>
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </Show>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || state.with(|s| s.submitting)
                    >
                        {move || if is_editing() { "Update Post" } else { "Create Post" }}
                    </button>
                </div>
            </form>
        </section>
    }
}
