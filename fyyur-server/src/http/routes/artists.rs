//! Artist endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use super::now;
use crate::db::repos::{ArtistRepo, DbError};
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, FormBody};
use crate::http::flash::{self, Flash};
use crate::http::server::AppState;
use crate::http::views::{self, forms::ProfileKind, Page};
use crate::models::{ArtistForm, FormFields, SearchResults, SearchTerm};

/// GET /artists - every artist, ordered by name
async fn list_artists(
    State(state): State<Arc<AppState>>,
    flash: Flash,
) -> Result<Page, ApiError> {
    let artists = ArtistRepo::new(&state.pool).list(now()).await?;
    Ok(views::artists::list(&artists).with_flash(flash))
}

/// POST /artists/search - case-insensitive partial name match
async fn search_artists(
    State(state): State<Arc<AppState>>,
    FormBody(form): FormBody,
) -> Result<Page, ApiError> {
    let term = SearchTerm::new(form.get("search_term").unwrap_or_default());
    let artists = ArtistRepo::new(&state.pool).search(&term, now()).await?;
    tracing::debug!(term = term.as_str(), hits = artists.len(), "Artist search");

    Ok(views::artists::search(&SearchResults::from(artists), term.as_str()))
}

/// GET /artists/{id} - artist detail with shows
async fn show_artist(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flash: Flash,
) -> Result<Page, ApiError> {
    let detail = ArtistRepo::new(&state.pool).detail(id, now()).await?;
    Ok(views::artists::detail(&detail).with_flash(flash))
}

/// GET /artists/create - blank artist form
async fn create_artist_form() -> Page {
    new_artist_form(&FormFields::default(), None)
}

/// POST /artists/create - insert an artist from the artist form
async fn create_artist(State(state): State<Arc<AppState>>, FormBody(form): FormBody) -> Page {
    let artist = match ArtistForm::from_fields(&form) {
        Ok(artist) => artist,
        Err(e) => {
            return new_artist_form(&form, Some(&e.to_string()))
                .with_status(StatusCode::BAD_REQUEST)
        }
    };

    let message = match ArtistRepo::new(&state.pool).create(&artist).await {
        Ok(created) => {
            tracing::info!(artist_id = created.id, name = %created.name, "Artist created");
            format!("Artist {} was successfully listed!", created.name)
        }
        Err(e) => {
            tracing::warn!(error = %e, name = %artist.name(), "Artist insert rolled back");
            format!(
                "An error occurred. Artist {} could not be listed. {}",
                artist.name(),
                e
            )
        }
    };

    views::home::home().with_message(message)
}

/// GET /artists/{id}/edit - form pre-filled with the stored artist
async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Page, ApiError> {
    let artist = ArtistRepo::new(&state.pool).get(id).await?;
    Ok(edit_form(id, &views::forms::artist_fields(&artist), None))
}

/// POST /artists/{id}/edit - overwrite the artist and go back to its page
async fn edit_artist(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    FormBody(form): FormBody,
) -> Result<Response, ApiError> {
    let repo = ArtistRepo::new(&state.pool);
    let artist = match ArtistForm::from_fields(&form) {
        Ok(artist) => artist,
        Err(e) => {
            // Unknown ids are a 404 whatever was submitted
            repo.get(id).await?;
            return Ok(edit_form(id, &form, Some(&e.to_string()))
                .with_status(StatusCode::BAD_REQUEST)
                .into_response())
        }
    };

    let message = match repo.update(id, &artist).await {
        Ok(updated) => {
            tracing::info!(artist_id = id, "Artist updated");
            format!("Artist {} was successfully updated!", updated.name)
        }
        Err(e @ DbError::NotFound { .. }) => return Err(e.into()),
        Err(e) => {
            tracing::warn!(artist_id = id, error = %e, "Artist update rolled back");
            format!(
                "An error occurred. Artist {} could not be updated. {}",
                artist.name(),
                e
            )
        }
    };

    Ok(flash::redirect_with(&format!("/artists/{id}"), &message))
}

fn new_artist_form(values: &FormFields, error: Option<&str>) -> Page {
    views::forms::profile_form(
        ProfileKind::Artist,
        "List a new artist",
        "/artists/create",
        values,
        error,
    )
}

fn edit_form(id: i32, values: &FormFields, error: Option<&str>) -> Page {
    views::forms::profile_form(
        ProfileKind::Artist,
        "Edit artist",
        &format!("/artists/{id}/edit"),
        values,
        error,
    )
}

/// Artist routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/artists", get(list_artists))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(create_artist_form).post(create_artist))
        .route("/artists/{id}", get(show_artist))
        .route("/artists/{id}/edit", get(edit_artist_form).post(edit_artist))
}
