use crate::model::AppConfig;
use crate::pages;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

/// Root layout: navigation bar above the routed page.
///
/// An [`AppConfig`] already in context wins over the default one, which is how
/// the users endpoint is swapped out.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    if use_context::<AppConfig>().is_none() {
        provide_context(AppConfig::default());
    }

    view! {
        <Title formatter=|text: String| format!("{text} | User Directory") />
        <Router>
            <nav>
                <A href="/" exact=true>
                    "Home"
                </A>
                <A href="/users">"Users"</A>
            </nav>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=pages::HomePage />
                <Route path=path!("/users") view=pages::UsersPage />
            </Routes>
        </Router>
    }
}
