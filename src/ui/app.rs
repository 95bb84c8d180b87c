//! Root branding component and the page document.

use leptos::prelude::*;

use crate::model::User;
use crate::ui::account::Account;
use crate::ui::server_info::ServerInfo;

/// Root branding component.
///
/// Static markup only. The chain handles live in server state and are not
/// touched during rendering.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="App">
            <header class="App-header">
                <img src="/static/logo.svg" class="App-logo" alt="logo"/>
                <p>
                    "Edit " <code>"src/ui/app.rs"</code> " and save to reload."
                </p>
                <a
                    class="App-link"
                    href="https://leptos.dev"
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "Learn Leptos"
                </a>
            </header>
        </div>
    }
}

/// Complete HTML document for the single page.
#[component]
pub fn Shell(
    /// Profile shown in the server info panel.
    user: User,
) -> impl IntoView {
    view! {
        <!doctype html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Grassroots"</title>
                <link rel="stylesheet" href="/static/app.css"/>
            </head>
            <body>
                <App/>
                <ServerInfo user=user/>
                <Account/>
            </body>
        </html>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::render_to_html;

    #[test]
    fn test_app_renders_branding() {
        let html = render_to_html(|| view! { <App/> });
        assert!(html.contains(r#"class="App-header""#), "{html}");
        assert!(html.contains("/static/logo.svg"), "{html}");
        assert!(html.contains("Learn Leptos"), "{html}");
    }

    #[test]
    fn test_shell_composes_all_panels() {
        let user = User::new("alice", "/static/alice.png");
        let html = render_to_html(move || view! { <Shell user=user/> });

        assert!(html.to_lowercase().starts_with("<!doctype html>"), "{html}");
        assert!(html.contains(r#"class="App""#));
        assert!(html.contains(r#"id="Server-Info""#));
        assert!(html.contains("alice"));
        assert!(html.contains("craig.tf"));
    }
}
