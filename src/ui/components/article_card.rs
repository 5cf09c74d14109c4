//! Card for one article in the home page listings.

use dioxus::prelude::*;

use crate::content::ArticleSummary;
use crate::ui::Site;

#[component]
pub fn ArticleCard(site: Site, article: ArticleSummary) -> Element {
    let href = site.article(&article.slug);
    let image = site.asset(&article.image);
    let date = article.date.format("%B %-d, %Y").to_string();

    rsx! {
        article { class: "card",
            a { href: "{href}",
                img { class: "card-image", src: "{image}", alt: "{article.title}" }
            }
            div { class: "card-body",
                span { class: "tag", "{article.category}" }
                h3 {
                    a { href: "{href}", "{article.title}" }
                }
                p { "{article.summary}" }
                small { class: "muted", "{date}" }
                a { class: "read-more", href: "{href}", "Read More \u{2192}" }
            }
        }
    }
}
