//! Page shown for any address the site doesn't know.

use dioxus::prelude::*;

use crate::theme::Presentation;
use crate::ui::components::Layout;
use crate::ui::Site;

#[component]
pub fn NotFoundPage(site: Site, theme: Presentation, return_to: String) -> Element {
    let home = site.home();

    rsx! {
        Layout {
            title: "Not Found".to_string(),
            site: site.clone(),
            theme,
            return_to,

            section { class: "not-found",
                h1 { "Page not found" }
                p { class: "muted", "There is nothing at this address." }
                a { class: "button", href: "{home}", "Back to Home" }
            }
        }
    }
}
