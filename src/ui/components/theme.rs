//! Theme toggle control.

use dioxus::prelude::*;

use crate::theme::ThemePreference;

/// Toggle between dark and light.
///
/// A plain form posting to the toggle route, so it works without scripts.
/// The server flips the cookie and redirects back to `return_to`.
#[component]
pub fn ThemeToggle(action: String, return_to: String, current: ThemePreference) -> Element {
    let glyph = if current.is_dark() { "\u{2600}" } else { "\u{263E}" };

    rsx! {
        form {
            class: "theme-toggle",
            method: "post",
            action: "{action}",
            input { r#type: "hidden", name: "return_to", value: "{return_to}" }
            button {
                r#type: "submit",
                title: current.toggle_label(),
                "data-theme": current.as_str(),
                span { aria_hidden: "true", "{glyph}" }
                span { class: "sr-only", "Toggle Theme" }
            }
        }
    }
}
