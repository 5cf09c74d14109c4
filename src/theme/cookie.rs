//! Cookie-backed preference storage and the per-request theme session.
//!
//! The browser keeps the `theme` cookie; every response writes it back so a
//! missing or garbled value is normalized on the next page load.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use super::{PreferenceStore, Presentation, ThemeManager, ThemePreference};

/// How long the browser keeps the preference
const COOKIE_MAX_AGE_DAYS: i64 = 365;

/// [`PreferenceStore`] over the request's cookie jar.
#[derive(Debug, Clone)]
pub struct CookieStore {
    jar: CookieJar,
}

impl CookieStore {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// Jar to attach to the response (carries `Set-Cookie` deltas)
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl PreferenceStore for CookieStore {
    fn read(&self, key: &str) -> Option<String> {
        self.jar.get(key).map(|c| c.value().to_string())
    }

    fn write(&mut self, key: &str, value: &str) {
        let cookie = Cookie::build((key.to_string(), value.to_string()))
            .path("/")
            .same_site(SameSite::Lax)
            .max_age(time::Duration::days(COOKIE_MAX_AGE_DAYS))
            .build();
        self.jar = std::mem::replace(&mut self.jar, CookieJar::new()).add(cookie);
    }
}

/// Theme state for one request, extracted from its cookies.
pub struct ThemeSession {
    manager: ThemeManager<CookieStore>,
}

impl ThemeSession {
    pub fn from_jar(jar: CookieJar) -> Self {
        Self {
            manager: ThemeManager::initialize(CookieStore::new(jar)),
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.manager.get()
    }

    pub fn presentation(&self) -> Presentation {
        self.manager.presentation()
    }

    pub fn manager_mut(&mut self) -> &mut ThemeManager<CookieStore> {
        &mut self.manager
    }

    pub fn into_jar(self) -> CookieJar {
        self.manager.into_store().into_jar()
    }
}

impl<S> FromRequestParts<S> for ThemeSession
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_jar(CookieJar::from_headers(&parts.headers)))
    }
}
