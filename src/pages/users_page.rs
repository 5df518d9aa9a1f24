use crate::components::{QueryStatus, UsersQuery};
use crate::model::{self, AppConfig};
use leptos::{logging::*, prelude::*};
use leptos_meta::Title;

/// Loads the users once per visit and renders them in a sortable table.
///
/// The resource belongs to this page, so leaving the route drops it and coming
/// back fetches again.
#[component]
pub fn UsersPage() -> impl IntoView {
    let config = use_context::<AppConfig>().unwrap_or_default();

    let users = LocalResource::new(move || {
        let endpoint = config.users_endpoint.clone();
        async move {
            let client = reqwest::Client::new();
            let result = model::fetch_users(&client, &endpoint).await;
            if let Err(e) = &result {
                error!("failed to load users: {}", e);
            }
            result
        }
    });

    view! {
        <Title text="Users" />
        <main id="users-page">
            <h1>"Users"</h1>
            <Suspense fallback=|| {
                view! { <QueryStatus state=UsersQuery::Loading /> }
            }>
                {move || Suspend::new(async move {
                    let state = UsersQuery::from(users.await);
                    view! { <QueryStatus state /> }
                })}
            </Suspense>
        </main>
    }
}
