//! Home page component.
//!
//! Sections, top to bottom:
//! - Hero with the revealed greeting, intro and floating icons
//! - Featured Posts (every article, authored order)
//! - Latest Articles (newest first)
//! - Tech Categories
//! - About Me and social links

use dioxus::prelude::*;

use crate::content::{ArticleSummary, Category, Profile};
use crate::motion::FloatingIcon;
use crate::theme::Presentation;
use crate::ui::components::motion::motion_scripts;
use crate::ui::components::{ArticleCard, FloatingIcons, Layout, RevealTitle};
use crate::ui::Site;

/// Milliseconds between revealed letters of the greeting
const GREETING_SPEED_MS: u32 = 80;

#[derive(Props, Clone, PartialEq)]
pub struct HomePageProps {
    pub site: Site,
    pub theme: Presentation,
    pub return_to: String,
    pub profile: Profile,
    pub featured: Vec<ArticleSummary>,
    pub latest: Vec<ArticleSummary>,
    pub categories: Vec<Category>,
    pub icons: Vec<FloatingIcon>,
}

#[component]
pub fn HomePage(props: HomePageProps) -> Element {
    let site = props.site.clone();
    let portrait = site.asset(&props.profile.portrait);

    rsx! {
        Layout {
            title: "Home".to_string(),
            site: site.clone(),
            theme: props.theme,
            return_to: props.return_to.clone(),
            scripts: Some(motion_scripts()),

            section { class: "hero",
                FloatingIcons { icons: props.icons.clone() }
                div { class: "hero-content",
                    RevealTitle { text: props.profile.greeting.clone(), speed: GREETING_SPEED_MS }
                    p { class: "intro", "{props.profile.intro}" }
                    div { class: "hero-actions",
                        a { class: "button", href: "#latest", "Latest Posts" }
                        a { class: "button outline", href: "#about", "About Me" }
                    }
                }
            }

            section { id: "featured",
                h2 { "Featured Posts" }
                div { class: "card-grid",
                    for article in props.featured.iter() {
                        ArticleCard { key: "{article.id}", site: site.clone(), article: article.clone() }
                    }
                }
            }

            section { id: "latest",
                h2 { "Latest Articles" }
                if props.latest.is_empty() {
                    p { class: "muted", "Nothing published yet." }
                }
                ul { class: "latest-list",
                    for article in props.latest.iter() {
                        LatestEntry { key: "{article.id}", site: site.clone(), article: article.clone() }
                    }
                }
            }

            section { id: "categories",
                h2 { "Tech Categories" }
                div { class: "tags",
                    for category in props.categories.iter() {
                        span { class: "tag", "{category}" }
                    }
                }
            }

            section { id: "about",
                h2 { "About Me" }
                div { class: "about",
                    img { class: "portrait", src: "{portrait}", alt: "{props.profile.author}" }
                    div {
                        for paragraph in props.profile.about.iter() {
                            p { "{paragraph}" }
                        }
                    }
                }
            }

            section { id: "connect",
                h2 { "Connect With Me" }
                div { class: "social",
                    for link in props.profile.links.iter() {
                        a {
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            aria_label: "{link.label}",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LatestEntry(site: Site, article: ArticleSummary) -> Element {
    let href = site.article(&article.slug);
    let date = article.date.format("%B %-d, %Y").to_string();

    rsx! {
        li {
            h3 {
                a { href: "{href}", "{article.title}" }
            }
            small { class: "muted", "{date} \u{00B7} {article.category}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentRegistry;
    use crate::motion::HOME_ICON_COUNT;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn render(latest_count: usize) -> String {
        let registry = ContentRegistry::builtin().expect("builtin content");
        let site = Site {
            base_path: String::new(),
            blog_title: registry.profile().blog_title.clone(),
        };
        let latest: Vec<ArticleSummary> = registry
            .select_latest(latest_count)
            .into_iter()
            .cloned()
            .collect();

        dioxus::ssr::render_element(rsx! {
            HomePage {
                site,
                theme: Presentation::DARK,
                return_to: "/".to_string(),
                profile: registry.profile().clone(),
                featured: registry.featured().cloned().collect::<Vec<_>>(),
                latest,
                categories: registry.categories().to_vec(),
                icons: FloatingIcon::scatter(HOME_ICON_COUNT, &mut StdRng::seed_from_u64(3)),
            }
        })
    }

    #[test]
    fn renders_all_sections() {
        let html = render(3);
        for heading in [
            "Featured Posts",
            "Latest Articles",
            "Tech Categories",
            "About Me",
            "Connect With Me",
        ] {
            assert!(html.contains(heading), "missing {heading}");
        }
        for category in Category::ALL {
            assert!(html.contains(category.label()));
        }
    }

    #[test]
    fn latest_lists_newest_first() {
        let html = render(3);
        let latest = &html[html.find("latest-list").expect("latest list")..];
        let cloud = latest.find("/article/scalable-systems-cloud").expect("cloud");
        let react = latest.find("/article/mastering-react-hooks").expect("react");
        let ai = latest.find("/article/future-of-ai").expect("ai");
        assert!(cloud < react && react < ai);
    }

    #[test]
    fn latest_respects_count() {
        let html = render(1);
        let latest = &html[html.find("latest-list").expect("latest list")..];
        let latest = &latest[..latest.find("id=\"categories\"").expect("categories")];
        assert_eq!(latest.matches("<li").count(), 1);
    }
}
