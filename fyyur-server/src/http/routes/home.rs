//! Landing page

use axum::{routing::get, Router};

use crate::http::flash::Flash;
use crate::http::views::{self, Page};

/// GET /
async fn index(flash: Flash) -> Page {
    views::home::home().with_flash(flash)
}

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
