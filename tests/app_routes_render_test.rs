//! Server-renders the whole app at a given path and checks routing and layout.

use any_spawner::Executor;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use leptos_meta::ServerMetaContext;
use leptos_router::location::RequestUrl;
use tokio::task::LocalSet;
use user_directory::app::App;
use user_directory::model::AppConfig;

async fn render_app(path: &str) -> String {
    // the users page spawns its fetch on the local executor
    let _ = Executor::init_tokio();
    let path = path.to_string();

    LocalSet::new()
        .run_until(async move {
            let owner = Owner::new();
            owner.set();
            provide_context(RequestUrl::new(&path));
            let (meta_context, _meta_output) = ServerMetaContext::new();
            provide_context(meta_context);
            // never reached: the fetch stays pending while rendering on the server
            provide_context(AppConfig::new("http://127.0.0.1:9/users"));

            let rendered = view! { <App /> };
            rendered.to_html()
        })
        .await
}

/// The full `<a ...>` start tag whose href is `href`.
fn anchor_tag<'a>(html: &'a str, href: &str) -> &'a str {
    let attr = format!(r#"href="{href}""#);
    let at = html.find(&attr).expect("anchor rendered");
    let start = html[..at].rfind("<a").expect("anchor start");
    let end = at + html[at..].find('>').expect("anchor end");
    &html[start..=end]
}

#[tokio::test]
async fn test_home_route_renders_nav_and_home_page() {
    let html = render_app("/").await;

    assert!(html.contains("<nav>"), "got {html}");
    assert!(html.contains(r#"href="/""#), "got {html}");
    assert!(html.contains(r#"href="/users""#), "got {html}");
    assert!(html.contains("<h1>Home</h1>"), "got {html}");
    assert!(!html.contains("Loading..."), "got {html}");
    assert!(
        anchor_tag(&html, "/").contains(r#"aria-current="page""#),
        "home link is active on / in {html}"
    );
    assert_eq!(html.matches(r#"aria-current="page""#).count(), 1, "got {html}");
}

#[tokio::test]
async fn test_users_route_shows_loading_while_fetching() {
    let html = render_app("/users").await;

    assert!(html.contains("<nav>"), "got {html}");
    assert!(html.contains("<h1>Users</h1>"), "got {html}");
    assert!(html.contains("Loading..."), "got {html}");
    assert!(!html.contains("<table"), "got {html}");
    assert!(!html.contains("<h1>Home</h1>"), "got {html}");
    assert!(
        anchor_tag(&html, "/users").contains(r#"aria-current="page""#),
        "users link is active on /users in {html}"
    );
    assert!(
        !anchor_tag(&html, "/").contains("aria-current"),
        "home link only matches exactly, got {html}"
    );
}

#[tokio::test]
async fn test_unknown_route_renders_fallback() {
    let html = render_app("/nope").await;

    assert!(html.contains("<nav>"), "got {html}");
    assert!(html.contains("Page not found."), "got {html}");
    assert!(!html.contains("<h1>Home</h1>"), "got {html}");
    assert!(!html.contains("<h1>Users</h1>"), "got {html}");
}
