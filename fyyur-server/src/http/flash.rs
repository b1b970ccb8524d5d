//! One-shot flash messages carried across a redirect
//!
//! The message is stored percent-encoded in a short-lived cookie and
//! cleared by the next page that displays it.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};

/// Cookie holding the pending message
pub const FLASH_COOKIE: &str = "fyyur_flash";

/// Flash message pending for this request, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flash(Option<String>);

impl Flash {
    pub fn message(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn into_message(self) -> Option<String> {
        self.0
    }

    /// Find the flash cookie among `Cookie` header values.
    pub fn from_cookie_headers<'a, I>(headers: I) -> Self
    where
        I: IntoIterator<Item = &'a HeaderValue>,
    {
        let message = headers
            .into_iter()
            .filter_map(|h| h.to_str().ok())
            .flat_map(|h| h.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == FLASH_COOKIE)
            .and_then(|(_, value)| urlencoding::decode(value).ok())
            .map(|value| value.into_owned())
            .filter(|value| !value.is_empty());

        Self(message)
    }
}

impl<S> FromRequestParts<S> for Flash
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_cookie_headers(parts.headers.get_all(COOKIE)))
    }
}

/// `Set-Cookie` value storing `message` for the next request.
pub fn set_cookie(message: &str) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        FLASH_COOKIE,
        urlencoding::encode(message)
    )
}

/// `Set-Cookie` value removing a displayed message.
pub fn clear_cookie() -> String {
    format!("{}=; Path=/; Max-Age=0; HttpOnly; SameSite=Lax", FLASH_COOKIE)
}

/// See-other redirect that leaves a flash message behind.
pub fn redirect_with(to: &str, message: &str) -> Response {
    (
        AppendHeaders([(SET_COOKIE, set_cookie(message))]),
        Redirect::to(to),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn reads_encoded_message() {
        let cookie = HeaderValue::from_str(&format!(
            "theme=dark; {}",
            set_cookie("Venue The Musical Hop was successfully updated!")
                .split(';')
                .next()
                .unwrap()
        ))
        .unwrap();

        let flash = Flash::from_cookie_headers([&cookie]);
        assert_eq!(
            flash.message(),
            Some("Venue The Musical Hop was successfully updated!")
        );
    }

    #[test]
    fn missing_or_cleared_cookie_is_none() {
        let other = HeaderValue::from_static("theme=dark");
        assert_eq!(Flash::from_cookie_headers([&other]), Flash::default());

        let cleared = HeaderValue::from_static("fyyur_flash=");
        assert_eq!(Flash::from_cookie_headers([&cleared]).message(), None);
    }

    #[test]
    fn redirect_sets_cookie() {
        let response = redirect_with("/venues/3", "done; really");
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/venues/3");

        let cookie = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(cookie.starts_with("fyyur_flash=done%3B%20really;"));
    }
}
