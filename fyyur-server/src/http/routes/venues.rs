//! Venue endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};

use super::now;
use crate::db::repos::{DbError, VenueRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, FormBody};
use crate::http::flash::{self, Flash};
use crate::http::server::AppState;
use crate::http::views::{self, forms::ProfileKind, Page};
use crate::models::{group_by_area, FormFields, SearchResults, SearchTerm, VenueForm};

/// GET /venues - venues grouped by city and state
async fn list_venues(
    State(state): State<Arc<AppState>>,
    flash: Flash,
) -> Result<Page, ApiError> {
    let venues = VenueRepo::new(&state.pool).list(now()).await?;
    let areas = group_by_area(venues, |v| (v.city.as_str(), v.state.as_str()));
    Ok(views::venues::list(&areas).with_flash(flash))
}

/// POST /venues/search - case-insensitive partial name match
async fn search_venues(
    State(state): State<Arc<AppState>>,
    FormBody(form): FormBody,
) -> Result<Page, ApiError> {
    let term = SearchTerm::new(form.get("search_term").unwrap_or_default());
    let venues = VenueRepo::new(&state.pool).search(&term, now()).await?;
    tracing::debug!(term = term.as_str(), hits = venues.len(), "Venue search");

    Ok(views::venues::search(&SearchResults::from(venues), term.as_str()))
}

/// GET /venues/{id} - venue detail with shows
async fn show_venue(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    flash: Flash,
) -> Result<Page, ApiError> {
    let detail = VenueRepo::new(&state.pool).detail(id, now()).await?;
    Ok(views::venues::detail(&detail).with_flash(flash))
}

/// GET /venues/create - blank venue form
async fn create_venue_form() -> Page {
    new_venue_form(&FormFields::default(), None)
}

/// POST /venues/create - insert a venue
///
/// Store failures are rolled back and reported as a flash message on the
/// home page, alongside the success case.
async fn create_venue(State(state): State<Arc<AppState>>, FormBody(form): FormBody) -> Page {
    let venue = match VenueForm::from_fields(&form) {
        Ok(venue) => venue,
        Err(e) => {
            return new_venue_form(&form, Some(&e.to_string())).with_status(StatusCode::BAD_REQUEST)
        }
    };

    let message = match VenueRepo::new(&state.pool).create(&venue).await {
        Ok(created) => {
            tracing::info!(venue_id = created.id, name = %created.name, "Venue created");
            format!("Venue {} was successfully listed!", created.name)
        }
        Err(e) => {
            tracing::warn!(error = %e, name = %venue.name(), "Venue insert rolled back");
            format!(
                "An error occurred. Venue {} could not be listed. {}",
                venue.name(),
                e
            )
        }
    };

    views::home::home().with_message(message)
}

/// DELETE /venues/{id} - not offered; answers 501 and leaves the venue
async fn delete_venue(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    VenueRepo::new(&state.pool).delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /venues/{id}/edit - form pre-filled with the stored venue
async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Page, ApiError> {
    let venue = VenueRepo::new(&state.pool).get(id).await?;
    Ok(edit_form(id, &views::forms::venue_fields(&venue), None))
}

/// POST /venues/{id}/edit - overwrite the venue and go back to its page
async fn edit_venue(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    FormBody(form): FormBody,
) -> Result<Response, ApiError> {
    let repo = VenueRepo::new(&state.pool);
    let venue = match VenueForm::from_fields(&form) {
        Ok(venue) => venue,
        Err(e) => {
            // Unknown ids are a 404 whatever was submitted
            repo.get(id).await?;
            return Ok(edit_form(id, &form, Some(&e.to_string()))
                .with_status(StatusCode::BAD_REQUEST)
                .into_response())
        }
    };

    let detail_url = format!("/venues/{id}");
    let message = match repo.update(id, &venue).await {
        Ok(updated) => {
            tracing::info!(venue_id = id, "Venue updated");
            format!("Venue {} was successfully updated!", updated.name)
        }
        Err(e @ DbError::NotFound { .. }) => return Err(e.into()),
        Err(e) => {
            tracing::warn!(venue_id = id, error = %e, "Venue update rolled back");
            format!(
                "An error occurred. Venue {} could not be updated. {}",
                venue.name(),
                e
            )
        }
    };

    Ok(flash::redirect_with(&detail_url, &message))
}

fn new_venue_form(values: &FormFields, error: Option<&str>) -> Page {
    views::forms::profile_form(
        ProfileKind::Venue,
        "List a new venue",
        "/venues/create",
        values,
        error,
    )
}

fn edit_form(id: i32, values: &FormFields, error: Option<&str>) -> Page {
    views::forms::profile_form(
        ProfileKind::Venue,
        "Edit venue",
        &format!("/venues/{id}/edit"),
        values,
        error,
    )
}

/// Venue routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/venues", get(list_venues))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(create_venue_form).post(create_venue))
        .route("/venues/{id}", get(show_venue).delete(delete_venue))
        .route("/venues/{id}/edit", get(edit_venue_form).post(edit_venue))
}
