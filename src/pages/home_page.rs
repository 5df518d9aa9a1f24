use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Home" />
        <main id="home-page">
            <h1>"Home"</h1>
            <p>"A small directory of users loaded from a public REST API."</p>
            <A href="/users">"Browse users"</A>
        </main>
    }
}
