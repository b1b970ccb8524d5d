//! Server-rendered HTML pages
//!
//! Views are plain functions from query results to a [`Page`]. Every
//! interpolated value goes through [`escape`].

pub mod errors;
pub mod forms;
pub mod home;
pub mod venues;
pub mod artists;
pub mod shows;

use std::fmt::Write;

use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::{AppendHeaders, Html, IntoResponse, Response};

use super::flash::{self, Flash};

/// A rendered page waiting for the site layout
#[derive(Debug, Clone)]
pub struct Page {
    pub title: String,
    pub body: String,
    pub flash: Option<String>,
    pub status: StatusCode,
    clear_flash: bool,
}

impl Page {
    pub fn new(title: impl Into<String>, body: String) -> Self {
        Self {
            title: title.into(),
            body,
            flash: None,
            status: StatusCode::OK,
            clear_flash: false,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Show a message produced while handling this request.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.flash = Some(message.into());
        self
    }

    /// Show (and consume) a message left by a previous redirect.
    pub fn with_flash(mut self, pending: Flash) -> Self {
        if let Some(message) = pending.into_message() {
            self.flash = Some(message);
            self.clear_flash = true;
        }
        self
    }

    /// Full HTML document.
    pub fn render(&self) -> String {
        let mut html = String::with_capacity(self.body.len() + 1024);
        let _ = write!(
            html,
            r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title} | Fyyur</title>
</head>
<body>
<nav>
<a href="/">Fyyur</a>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
<form method="post" action="/venues/search"><input name="search_term" placeholder="Find a venue"></form>
<form method="post" action="/artists/search"><input name="search_term" placeholder="Find an artist"></form>
</nav>
"#,
            title = escape(&self.title)
        );
        if let Some(message) = &self.flash {
            let _ = writeln!(html, r#"<div class="flash">{}</div>"#, escape(message));
        }
        html.push_str("<main>\n");
        html.push_str(&self.body);
        html.push_str("</main>\n</body>\n</html>\n");
        html
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let html = Html(self.render());
        if self.clear_flash {
            (
                self.status,
                AppendHeaders([(SET_COOKIE, flash::clear_cookie())]),
                html,
            )
                .into_response()
        } else {
            (self.status, html).into_response()
        }
    }
}

/// Escape text for HTML element content and quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<img>` tag for an optional image link.
pub(crate) fn image(link: Option<&str>, alt: &str) -> String {
    match link {
        Some(src) => format!(r#"<img src="{}" alt="{}">"#, escape(src), escape(alt)),
        None => String::new(),
    }
}

/// `<a>` tag for an optional external link.
pub(crate) fn external_link(link: Option<&str>, label: &str) -> String {
    match link {
        Some(href) => format!(
            r#"<p><a href="{}" target="_blank" rel="noopener">{}</a></p>"#,
            escape(href),
            escape(label)
        ),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape(r#"<b>"Rock" & 'Roll'</b>"#),
            "&lt;b&gt;&quot;Rock&quot; &amp; &#39;Roll&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn flash_is_rendered_escaped() {
        let html = Page::new("Home", String::new())
            .with_message("Venue <x> was successfully listed!")
            .render();
        assert!(html.contains(r#"<div class="flash">Venue &lt;x&gt; was successfully listed!</div>"#));
    }

    #[test]
    fn consumed_flash_clears_cookie() {
        let cookie = HeaderValue::from_static("fyyur_flash=hello");
        let response = Page::new("Home", String::new())
            .with_flash(Flash::from_cookie_headers([&cookie]))
            .into_response();

        let set = response.headers()[SET_COOKIE].to_str().unwrap();
        assert!(set.contains("Max-Age=0"));
    }

    #[test]
    fn no_flash_no_cookie() {
        let response = Page::new("Home", String::new())
            .with_flash(Flash::default())
            .into_response();
        assert!(response.headers().get(SET_COOKIE).is_none());
    }
}
