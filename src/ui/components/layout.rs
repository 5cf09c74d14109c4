//! Layout component wrapping all pages.

use dioxus::prelude::*;

use super::theme::ThemeToggle;
use crate::theme::Presentation;
use crate::ui::{assets, Site};

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    pub site: Site,
    /// Presentation derived from the visitor's theme
    pub theme: Presentation,
    /// Path the theme toggle returns to
    pub return_to: String,
    /// Page content
    pub children: Element,
    /// Optional additional scripts to include
    #[props(default)]
    pub scripts: Option<String>,
}

/// Main layout component wrapping all pages.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    let version = env!("BLOG_VERSION");
    let site = &props.site;
    let home = site.home();
    let stylesheet = site.asset(assets::STYLESHEET);
    let body_style = props.theme.body_style();

    rsx! {
        head {
            meta { charset: "utf-8" }
            meta { name: "viewport", content: "width=device-width, initial-scale=1" }
            title { "{props.title} - {site.blog_title}" }
            link { rel: "stylesheet", href: "{stylesheet}" }
        }
        body { style: "{body_style}",
            header { class: "site-header",
                a { class: "brand", href: "{home}", "{site.blog_title}" }
                ThemeToggle {
                    action: site.toggle(),
                    return_to: props.return_to.clone(),
                    current: props.theme.preference,
                }
            }
            main { class: "container",
                {props.children}
            }
            footer { class: "site-footer",
                small { "\u{00A9} {site.blog_title} \u{00B7} v{version}" }
            }
            if let Some(scripts) = props.scripts {
                script { dangerous_inner_html: "{scripts}" }
            }
        }
    }
}
