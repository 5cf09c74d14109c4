//! Article detail page component.

use dioxus::prelude::*;

use crate::content::{Article, Block};
use crate::theme::Presentation;
use crate::ui::components::Layout;
use crate::ui::Site;

#[derive(Props, Clone, PartialEq)]
pub struct ArticlePageProps {
    pub site: Site,
    pub theme: Presentation,
    pub return_to: String,
    pub article: Article,
}

#[component]
pub fn ArticlePage(props: ArticlePageProps) -> Element {
    let summary = &props.article.summary;
    let hero = props.site.asset(&props.article.hero_image);
    let home = props.site.home();
    let date = summary.date.format("%B %-d, %Y").to_string();

    rsx! {
        Layout {
            title: summary.title.clone(),
            site: props.site.clone(),
            theme: props.theme,
            return_to: props.return_to.clone(),

            a { class: "back-link", href: "{home}", "\u{2190} Back to Home" }

            article { class: "post",
                header {
                    h1 { "{summary.title}" }
                    p { class: "muted",
                        "Published: {date} | Category: {summary.category}"
                    }
                }
                img { class: "hero-image", src: "{hero}", alt: "{summary.title}" }
                for block in props.article.body.iter() {
                    {render_block(block)}
                }
            }
        }
    }
}

/// Markup for one body block
fn render_block(block: &Block) -> Element {
    match block {
        Block::Paragraph { text } => rsx! { p { "{text}" } },
        Block::Heading { text } => rsx! { h2 { "{text}" } },
        Block::Subheading { text } => rsx! { h3 { "{text}" } },
        Block::List { items } => rsx! {
            ul {
                for item in items.iter() {
                    li {
                        if let Some(term) = &item.term {
                            strong { "{term}: " }
                        }
                        "{item.text}"
                    }
                }
            }
        },
        Block::OrderedList { items } => rsx! {
            ol {
                for item in items.iter() {
                    li { "{item}" }
                }
            }
        },
        Block::Code { code } => rsx! {
            pre {
                code { "{code}" }
            }
        },
    }
}
