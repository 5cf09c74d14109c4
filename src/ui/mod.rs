//! Web UI handlers - server-rendered blog pages
//!
//! Pages are Dioxus components rendered to HTML with SSR:
//! - components/ - Shared components (layout, theme toggle, cards, motion)
//! - pages/ - Page components (home, article, not found)
//!
//! Every page handler takes a [`ThemeSession`] so the markup is produced with
//! the visitor's theme already applied, and returns the session's cookie jar
//! so the preference is written back on every response.

pub mod assets;
pub mod components;
pub mod pages;

use axum::{
    extract::{OriginalUri, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus::prelude::*;

use crate::api::AppState;
use crate::content::ArticleSummary;
use crate::motion::{FloatingIcon, HOME_ICON_COUNT};
use crate::theme::cookie::ThemeSession;
use crate::theme::Presentation;
use pages::{ArticlePage, HomePage, NotFoundPage};

/// Addresses of the site, relative to its mount point
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    /// "" when mounted at the root, otherwise "/prefix"
    pub base_path: String,
    pub blog_title: String,
}

impl Site {
    pub fn home(&self) -> String {
        if self.base_path.is_empty() {
            "/".to_string()
        } else {
            self.base_path.clone()
        }
    }

    pub fn article(&self, slug: &str) -> String {
        format!("{}/article/{}", self.base_path, slug)
    }

    pub fn asset(&self, name: &str) -> String {
        format!("{}/assets/{}", self.base_path, name)
    }

    pub fn toggle(&self) -> String {
        format!("{}/theme/toggle", self.base_path)
    }
}

/// Wrap rendered components in a full HTML document
fn html_doc(presentation: Presentation, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n{}\n{}</html>",
        presentation.html_open_tag(),
        body
    )
}

/// GET / - Home page with featured/latest posts, categories and profile
pub async fn home_page(
    State(state): State<AppState>,
    theme: ThemeSession,
    OriginalUri(uri): OriginalUri,
) -> impl IntoResponse {
    let registry = &state.registry;
    let presentation = theme.presentation();

    let featured: Vec<ArticleSummary> = registry.featured().cloned().collect();
    let latest: Vec<ArticleSummary> = registry
        .select_latest(state.latest_count)
        .into_iter()
        .cloned()
        .collect();
    let icons = FloatingIcon::scatter(HOME_ICON_COUNT, &mut rand::thread_rng());

    let html = dioxus::ssr::render_element(rsx! {
        HomePage {
            site: state.site.clone(),
            theme: presentation,
            return_to: uri.path().to_string(),
            profile: registry.profile().clone(),
            featured,
            latest,
            categories: registry.categories().to_vec(),
            icons,
        }
    });

    (theme.into_jar(), Html(html_doc(presentation, &html)))
}

/// GET /article/{slug} - Article detail page
pub async fn article_page(
    State(state): State<AppState>,
    theme: ThemeSession,
    OriginalUri(uri): OriginalUri,
    Path(slug): Path<String>,
) -> Response {
    let Some(article) = state.registry.article(&slug) else {
        tracing::debug!("No article for slug {}", slug);
        return render_not_found(&state, theme, uri.path());
    };

    let presentation = theme.presentation();
    let html = dioxus::ssr::render_element(rsx! {
        ArticlePage {
            site: state.site.clone(),
            theme: presentation,
            return_to: uri.path().to_string(),
            article: article.clone(),
        }
    });

    (theme.into_jar(), Html(html_doc(presentation, &html))).into_response()
}

/// Fallback - any unmatched address renders the not-found page
pub async fn not_found_page(
    State(state): State<AppState>,
    theme: ThemeSession,
    OriginalUri(uri): OriginalUri,
) -> Response {
    render_not_found(&state, theme, uri.path())
}

fn render_not_found(state: &AppState, theme: ThemeSession, path: &str) -> Response {
    let presentation = theme.presentation();
    let html = dioxus::ssr::render_element(rsx! {
        NotFoundPage {
            site: state.site.clone(),
            theme: presentation,
            return_to: path.to_string(),
        }
    });

    (
        StatusCode::NOT_FOUND,
        theme.into_jar(),
        Html(html_doc(presentation, &html)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_paths_at_root() {
        let site = Site {
            base_path: String::new(),
            blog_title: "B".into(),
        };
        assert_eq!(site.home(), "/");
        assert_eq!(site.article("future-of-ai"), "/article/future-of-ai");
        assert_eq!(site.asset("blog.css"), "/assets/blog.css");
        assert_eq!(site.toggle(), "/theme/toggle");
    }

    #[test]
    fn site_paths_under_prefix() {
        let site = Site {
            base_path: "/aishwarya-blog".into(),
            blog_title: "B".into(),
        };
        assert_eq!(site.home(), "/aishwarya-blog");
        assert_eq!(
            site.article("scalable-systems-cloud"),
            "/aishwarya-blog/article/scalable-systems-cloud"
        );
        assert_eq!(site.toggle(), "/aishwarya-blog/theme/toggle");
    }

    #[test]
    fn document_carries_root_marker() {
        let doc = html_doc(Presentation::DARK, "<body></body>");
        assert!(doc.starts_with("<!DOCTYPE html>\n<html lang=\"en\" class=\"dark\">"));
        assert!(doc.ends_with("</html>"));

        let doc = html_doc(Presentation::LIGHT, "");
        assert!(doc.contains("<html lang=\"en\">"));
    }
}
