//! Error pages

use super::{escape, Page};

pub fn not_found() -> Page {
    Page::new(
        "Not Found",
        "<h1>404</h1>\n<p>Sorry, the page you requested doesn't exist.</p>\n<p><a href=\"/\">Back home</a></p>\n"
            .to_owned(),
    )
}

pub fn server_error() -> Page {
    Page::new(
        "Server Error",
        "<h1>500</h1>\n<p>Something went wrong on our end. Please try again later.</p>\n".to_owned(),
    )
}

pub fn bad_request(reason: &str) -> Page {
    Page::new(
        "Bad Request",
        format!("<h1>400</h1>\n<p>{}</p>\n", escape(reason)),
    )
}

pub fn not_supported(operation: &str) -> Page {
    Page::new(
        "Not Supported",
        format!(
            "<h1>501</h1>\n<p>{} is not supported.</p>\n",
            escape(operation)
        ),
    )
}
