//! Server info panel: user profile header and channel list.

use std::sync::Arc;

use leptos::prelude::*;

use crate::model::{Channel, User};
use crate::ui::components::Avatar;

/// Lifecycle extension points for [`ServerInfo`].
///
/// Every method defaults to a no-op, so implementors only override what they
/// need (e.g. loading channels once mounted).
pub trait ServerInfoHooks: Send + Sync {
    /// Called once before the view is built.
    fn will_mount(&self, _user: &User) {}

    /// Called after the view is mounted. Only runs where effects run (the
    /// browser), never during server rendering.
    fn did_mount(&self, _user: &User) {}

    /// Called when the owning reactive scope is cleaned up.
    fn will_unmount(&self, _user: &User) {}
}

/// Hooks that do nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl ServerInfoHooks for NoopHooks {}

/// Profile header plus the (currently empty) channel container.
#[component]
pub fn ServerInfo(
    /// Profile to display.
    user: User,
    /// Lifecycle hooks. Defaults to [`NoopHooks`].
    #[prop(optional)]
    hooks: Option<Arc<dyn ServerInfoHooks>>,
) -> impl IntoView {
    let hooks = hooks.unwrap_or_else(|| Arc::new(NoopHooks));
    let channels: Vec<Channel> = Vec::new();

    hooks.will_mount(&user);
    // Effects only run in the browser.
    #[cfg(target_arch = "wasm32")]
    {
        let hooks = Arc::clone(&hooks);
        let user = user.clone();
        Effect::new(move |_| hooks.did_mount(&user));
    }
    {
        let hooks = Arc::clone(&hooks);
        let user = user.clone();
        on_cleanup(move || hooks.will_unmount(&user));
    }

    view! {
        <div id="Server-Info" class="flexColumn">
            <div id="User-Profile" class="row flexFit">
                <div class="col-3">
                    <Avatar image=user.image size="userIcon-large" class="shadow"/>
                </div>
                <div class="col-1"></div>
                <div class="col-7 top7">
                    <span class="userName">{user.profile_name}</span>
                </div>
            </div>
            <div id="Server-Channels">
                {channels
                    .into_iter()
                    .map(|channel| view! { <div class="channel">{channel.name}</div> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::ui::render_to_html;

    #[derive(Default)]
    struct CountingHooks {
        will_mount: AtomicUsize,
        will_unmount: AtomicUsize,
    }

    impl ServerInfoHooks for CountingHooks {
        fn will_mount(&self, _user: &User) {
            self.will_mount.fetch_add(1, Ordering::SeqCst);
        }

        fn will_unmount(&self, _user: &User) {
            self.will_unmount.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Inner HTML of the channel container, hydration markers stripped.
    fn channel_container(html: &str) -> String {
        let open = r#"<div id="Server-Channels">"#;
        let start = html.find(open).expect("channel container missing") + open.len();
        let end = start + html[start..].find("</div>").expect("unclosed container");
        html[start..end].replace("<!>", "").trim().to_string()
    }

    #[test]
    fn test_renders_name_and_background_image() {
        let user = User::new("X", "http://img");
        let html = render_to_html(move || view! { <ServerInfo user=user/> });

        assert!(html.contains(r#"<span class="userName">X</span>"#), "{html}");
        assert!(html.contains("background-image"), "{html}");
        assert!(html.contains("http://img"), "{html}");
        assert!(html.contains("userIcon-large shadow"), "{html}");
    }

    #[test]
    fn test_channel_container_is_empty() {
        for user in [
            User::new("X", "http://img"),
            User::new("", ""),
            User::new("a very long display name", "/static/avatar.png"),
        ] {
            let html = render_to_html(move || view! { <ServerInfo user=user/> });
            assert_eq!(channel_container(&html), "", "{html}");
        }
    }

    #[test]
    fn test_noop_hooks_are_callable() {
        let user = User::new("X", "http://img");
        let hooks = NoopHooks;
        hooks.will_mount(&user);
        hooks.did_mount(&user);
        hooks.will_unmount(&user);
    }

    #[test]
    fn test_custom_hooks_see_mount_and_cleanup() {
        let hooks = Arc::new(CountingHooks::default());
        let shared: Arc<dyn ServerInfoHooks> = Arc::clone(&hooks) as Arc<dyn ServerInfoHooks>;
        let user = User::new("X", "http://img");

        render_to_html(move || view! { <ServerInfo user=user hooks=shared/> });

        assert_eq!(hooks.will_mount.load(Ordering::SeqCst), 1);
        assert_eq!(hooks.will_unmount.load(Ordering::SeqCst), 1);
    }
}
