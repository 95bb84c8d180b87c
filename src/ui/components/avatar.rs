//! Avatar drawn as a CSS background image.

use leptos::prelude::*;

/// Avatar component for displaying user images.
///
/// The image is applied as `background-image` so it scales with the
/// container instead of being an `<img>` element.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Avatar image="/images/user.jpg" size="userIcon-large" />
/// }
/// ```
#[component]
pub fn Avatar(
    /// Image URL.
    #[prop(into)]
    image: String,
    /// Size class.
    #[prop(default = "userIcon")]
    size: &'static str,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = format!("{size} {class}").trim_end().to_string();
    let style = background_image(&image);

    view! { <div class=classes style=style></div> }
}

/// Inline `background-image` declaration with `image` as a quoted CSS string.
fn background_image(image: &str) -> String {
    let mut quoted = String::with_capacity(image.len());
    for c in image.chars() {
        if matches!(c, '"' | '\\') {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    format!("background-image: url(\"{quoted}\")")
}
