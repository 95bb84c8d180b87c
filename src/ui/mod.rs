//! UI components and layouts.
//!
//! Leptos components rendered on the server to plain HTML.
//!
//! # Structure
//!
//! - [`app`]: Root branding component and the page document
//! - [`server_info`]: User profile header and channel list
//! - [`account`]: Account name and sign-in flag
//! - [`components`]: Reusable building blocks

pub mod account;
pub mod app;
pub mod components;
pub mod server_info;

use leptos::prelude::*;

pub use account::Account;
pub use app::{App, Shell};
pub use server_info::{NoopHooks, ServerInfo, ServerInfoHooks};

/// Render a view to an HTML string inside a fresh reactive owner.
///
/// The owner is cleaned up once rendering finishes, which fires any
/// `on_cleanup` callbacks registered by the rendered components.
pub fn render_to_html<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    let html = owner.with(|| view().to_html());
    owner.cleanup();
    html
}
