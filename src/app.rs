//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guards::{AuthRoute, ProtectedRoute};
use crate::config::ClientConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, signup::SignupPage};
use crate::state::auth::AuthContext;
use crate::state::session::default_store;

/// Root application component.
///
/// Provides the client configuration, the session store, and the reactive
/// auth snapshot, then sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env_or_default();
    let auth = AuthContext::new(default_store());
    let auth_state = RwSignal::new(auth.state());

    provide_context(config);
    provide_context(auth);
    provide_context(auth_state);

    view! {
        <Title text="Postboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <AuthRoute><LoginPage/></AuthRoute> }/>
                <Route path=StaticSegment("login") view=|| view! { <AuthRoute><LoginPage/></AuthRoute> }/>
                <Route path=StaticSegment("signup") view=|| view! { <AuthRoute><SignupPage/></AuthRoute> }/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                />
            </Routes>
        </Router>
    }
}
