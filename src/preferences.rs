//! Per-visitor display preferences (language and theme).
//!
//! Both live in cookies so every page render can resolve them without
//! server-side session state.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::{HeaderMap, header};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::i18n::{Language, Translator};

/// Cookie holding the language code.
pub const LANGUAGE_COOKIE: &str = "museum-language";

/// Cookie holding the theme name.
pub const THEME_COOKIE: &str = "museum-theme";

/// Colour scheme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name stored in the cookie and the `data-theme` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Preferences resolved for one request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub language: Language,
    pub theme: Theme,
}

impl Preferences {
    /// Resolve from cookies, then `Accept-Language`, then defaults.
    #[must_use]
    pub fn resolve(jar: &CookieJar, headers: &HeaderMap) -> Self {
        let language = jar
            .get(LANGUAGE_COOKIE)
            .and_then(|c| Language::from_code(c.value()))
            .or_else(|| {
                headers
                    .get(header::ACCEPT_LANGUAGE)
                    .and_then(|v| v.to_str().ok())
                    .map(Language::detect)
            })
            .unwrap_or_default();

        let theme = jar
            .get(THEME_COOKIE)
            .and_then(|c| Theme::from_name(c.value()))
            .unwrap_or_default();

        Self { language, theme }
    }

    /// Translator bound to the resolved language.
    #[must_use]
    pub fn translator(&self) -> Translator {
        Translator::new(self.language)
    }
}

impl<S> FromRequestParts<S> for Preferences
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self::resolve(&jar, &parts.headers))
    }
}

/// Long-lived, site-wide preference cookie.
#[must_use]
pub fn preference_cookie(name: &'static str, value: &'static str) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .same_site(SameSite::Lax)
        .permanent()
        .build()
}

/// Same-origin path to send the visitor back to after a preference change.
///
/// Only the path of a `Referer` on this host is honoured; anything else falls
/// back to `/`.
#[must_use]
pub fn return_path(headers: &HeaderMap) -> String {
    let host = headers.get(header::HOST).and_then(|v| v.to_str().ok());
    headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .and_then(|referer| url::Url::parse(referer).ok())
        .filter(|url| match (url.host_str(), host) {
            (Some(referer_host), Some(host)) => {
                let with_port = match url.port() {
                    Some(port) => format!("{referer_host}:{port}"),
                    None => referer_host.to_string(),
                };
                with_port == host || referer_host == host
            }
            _ => false,
        })
        .map(|url| {
            let mut path = url.path().to_string();
            if let Some(query) = url.query() {
                path.push('?');
                path.push_str(query);
            }
            path
        })
        .unwrap_or_else(|| "/".to_string())
}
