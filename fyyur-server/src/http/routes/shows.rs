//! Show endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Router};

use super::now;
use crate::db::repos::{ArtistRepo, ShowRepo, VenueRepo};
use crate::http::error::ApiError;
use crate::http::extractors::FormBody;
use crate::http::flash::Flash;
use crate::http::server::AppState;
use crate::http::views::{self, Page};
use crate::models::{FormFields, ShowForm};

/// GET /shows - every show with venue and artist
async fn list_shows(
    State(state): State<Arc<AppState>>,
    flash: Flash,
) -> Result<Page, ApiError> {
    let shows = ShowRepo::new(&state.pool).list().await?;
    Ok(views::shows::list(&shows).with_flash(flash))
}

/// GET /shows/create - scheduling form
async fn create_show_form(State(state): State<Arc<AppState>>) -> Result<Page, ApiError> {
    show_form(&state, &FormFields::default(), None).await
}

/// POST /shows/create - schedule a show
async fn create_show(
    State(state): State<Arc<AppState>>,
    FormBody(form): FormBody,
) -> Result<Page, ApiError> {
    let show = match ShowForm::from_fields(&form) {
        Ok(show) => show,
        Err(e) => {
            return Ok(show_form(&state, &form, Some(&e.to_string()))
                .await?
                .with_status(StatusCode::BAD_REQUEST))
        }
    };

    let message = match ShowRepo::new(&state.pool).create(&show).await {
        Ok(created) => {
            tracing::info!(
                show_id = created.id,
                venue_id = created.venue_id,
                artist_id = created.artist_id,
                "Show created"
            );
            "Show was successfully listed!".to_owned()
        }
        Err(e) => {
            tracing::warn!(error = %e, "Show insert rolled back");
            format!("An error occurred. Show could not be listed. {}", e)
        }
    };

    Ok(views::home::home().with_message(message))
}

async fn show_form(
    state: &AppState,
    values: &FormFields,
    error: Option<&str>,
) -> Result<Page, ApiError> {
    let current = now();
    let artists = ArtistRepo::new(&state.pool).list(current).await?;
    let venues = VenueRepo::new(&state.pool).list(current).await?;
    Ok(views::forms::show_form(values, error, &artists, &venues))
}

/// Show routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/shows", get(list_shows))
        .route("/shows/create", get(create_show_form).post(create_show))
}
