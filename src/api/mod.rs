//! HTTP routing, shared state and the non-page handlers

use crate::content::ContentRegistry;
use crate::theme::cookie::ThemeSession;
use crate::ui::{self, Site};
use axum::{
    extract::State,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ContentRegistry>,
    pub site: Site,
    pub latest_count: usize,
}

impl AppState {
    pub fn new(registry: ContentRegistry, base_path: &str, latest_count: usize) -> Self {
        let site = Site {
            base_path: base_path.to_string(),
            blog_title: registry.profile().blog_title.clone(),
        };
        Self {
            registry: Arc::new(registry),
            site,
            latest_count,
        }
    }
}

/// Build the full router. Routes are mounted under the configured base path.
pub fn router(state: AppState) -> Router {
    let site_routes = Router::new()
        .route("/", get(ui::home_page))
        .route("/article/{slug}", get(ui::article_page))
        .route("/theme/toggle", post(toggle_theme_handler))
        .route("/assets/{*path}", get(ui::assets::asset_handler))
        .route("/healthz", get(status_handler));

    let base_path = state.site.base_path.clone();
    let app = if base_path.is_empty() {
        site_routes
    } else {
        // nest() only matches the bare prefix; "/prefix/" is home too
        Router::new()
            .route(&format!("{base_path}/"), get(ui::home_page))
            .nest(&base_path, site_routes)
    };

    app.fallback(ui::not_found_page)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// General status response
#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub version: &'static str,
    pub git_sha: &'static str,
    pub articles: usize,
}

/// GET /healthz - Service health check
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "aishwarya-blog",
        version: env!("BLOG_VERSION"),
        git_sha: env!("BLOG_GIT_SHA"),
        articles: state.registry.len(),
    })
}

#[derive(Debug, Deserialize)]
pub struct ToggleForm {
    /// Page to go back to after toggling
    #[serde(default)]
    pub return_to: Option<String>,
}

/// POST /theme/toggle - Flip the theme, persist it, and go back
pub async fn toggle_theme_handler(
    State(state): State<AppState>,
    mut theme: ThemeSession,
    Form(form): Form<ToggleForm>,
) -> impl IntoResponse {
    let manager = theme.manager_mut();
    manager.subscribe(|pref| tracing::info!("Theme preference changed to {}", pref));
    manager.toggle();

    let target = safe_return_to(form.return_to.as_deref(), &state.site);
    (theme.into_jar(), Redirect::to(&target))
}

/// Only absolute paths inside the mounted site are followed; anything else goes home.
fn safe_return_to(raw: Option<&str>, site: &Site) -> String {
    match raw {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control)
                && within_base(path, &site.base_path) =>
        {
            path.to_string()
        }
        Some(other) => {
            tracing::debug!("Ignoring unsafe return_to: {:?}", other);
            site.home()
        }
        None => site.home(),
    }
}

/// `path` is the base itself or below it ("/blogger" is not under "/blog")
fn within_base(path: &str, base_path: &str) -> bool {
    base_path.is_empty()
        || path
            .strip_prefix(base_path)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}
