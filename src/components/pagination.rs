//! Previous/next controls for the post list.

use leptos::prelude::*;

use crate::state::posts::DashboardState;

#[component]
pub fn Pagination(state: RwSignal<DashboardState>, on_previous: Callback<()>, on_next: Callback<()>) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn pagination__previous"
                disabled=move || !state.with(DashboardState::has_previous)
                on:click=move |_| on_previous.run(())
            >
                "Previous"
            </button>
            <span class="pagination__label">
                {move || state.with(DashboardState::page_label)}
            </span>
            <button
                class="btn pagination__next"
                disabled=move || !state.with(DashboardState::has_next)
                on:click=move |_| on_next.run(())
            >
                "Next"
            </button>
        </div>
    }
}
