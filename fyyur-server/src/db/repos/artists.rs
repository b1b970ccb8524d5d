//! Artist repository
//!
//! Mirrors the venue repository: list/search with upcoming counts, detail
//! with shows joined to venues, transactional create and update.

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool, Postgres, Transaction};

use super::DbError;
use crate::db::tx::finish;
use crate::models::{partition_shows, ArtistForm, SearchTerm, ShowSplit};

/// Artist record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Artist row for list and search pages
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ArtistSummary {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: i64,
}

/// A show by an artist, seen from the artist's side
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ArtistShow {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Artist detail page data
#[derive(Debug, Clone)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub shows: ShowSplit<ArtistShow>,
}

const ARTIST_COLUMNS: &str = "id, name, city, state, phone, website, facebook_link, \
                              image_link, genres, seeking_talent, seeking_description";

/// Artist repository
pub struct ArtistRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ArtistRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All artists ordered by name.
    pub async fn list(&self, now: NaiveDateTime) -> Result<Vec<ArtistSummary>, DbError> {
        let artists = sqlx::query_as::<_, ArtistSummary>(
            r#"
            SELECT
                a.id,
                a.name,
                COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows
            FROM artists a
            LEFT JOIN shows s ON s.artist_id = a.id
            GROUP BY a.id
            ORDER BY a.name
            "#,
        )
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(artists)
    }

    /// Artists whose name contains `term`, ignoring case.
    pub async fn search(
        &self,
        term: &SearchTerm,
        now: NaiveDateTime,
    ) -> Result<Vec<ArtistSummary>, DbError> {
        let artists = sqlx::query_as::<_, ArtistSummary>(
            r#"
            SELECT
                a.id,
                a.name,
                COUNT(s.id) FILTER (WHERE s.start_time >= $2) AS num_upcoming_shows
            FROM artists a
            LEFT JOIN shows s ON s.artist_id = a.id
            WHERE a.name ILIKE $1 ESCAPE '\'
            GROUP BY a.id
            ORDER BY a.name
            "#,
        )
        .bind(term.like_pattern())
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(artists)
    }

    /// Get a single artist by id.
    pub async fn get(&self, id: i32) -> Result<Artist, DbError> {
        let artist = sqlx::query_as::<_, Artist>(&format!(
            "SELECT {ARTIST_COLUMNS} FROM artists WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        Ok(artist)
    }

    /// Shows an artist is booked into, joined to their venues, oldest first.
    pub async fn shows(&self, id: i32) -> Result<Vec<ArtistShow>, DbError> {
        let shows = sqlx::query_as::<_, ArtistShow>(
            r#"
            SELECT
                v.id AS venue_id,
                v.name AS venue_name,
                v.image_link AS venue_image_link,
                s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            WHERE s.artist_id = $1
            ORDER BY s.start_time
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(shows)
    }

    /// Artist with shows split into past and upcoming.
    pub async fn detail(&self, id: i32, now: NaiveDateTime) -> Result<ArtistDetail, DbError> {
        let artist = self.get(id).await?;
        let shows = partition_shows(self.shows(id).await?, now, |s| s.start_time);
        Ok(ArtistDetail { artist, shows })
    }

    /// Insert an artist (atomic).
    pub async fn create(&self, form: &ArtistForm) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;
        let result = insert(&mut tx, form).await;
        finish(tx, result).await
    }

    /// Overwrite every editable field of an artist (atomic).
    pub async fn update(&self, id: i32, form: &ArtistForm) -> Result<Artist, DbError> {
        let mut tx = self.pool.begin().await?;
        let result = overwrite(&mut tx, id, form).await;
        finish(tx, result).await
    }
}

fn not_found(id: i32) -> DbError {
    DbError::NotFound {
        resource: "artist",
        id: id.to_string(),
    }
}

async fn insert(
    tx: &mut Transaction<'static, Postgres>,
    form: &ArtistForm,
) -> Result<Artist, DbError> {
    let p = &form.profile;
    let artist = sqlx::query_as::<_, Artist>(&format!(
        r#"
        INSERT INTO artists
            (name, city, state, phone, website, facebook_link,
             image_link, genres, seeking_talent, seeking_description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
        RETURNING {ARTIST_COLUMNS}
        "#
    ))
    .bind(&p.name)
    .bind(&p.city)
    .bind(p.state.as_str())
    .bind(&p.phone)
    .bind(&p.website)
    .bind(&p.facebook_link)
    .bind(&p.image_link)
    .bind(p.genre_labels())
    .bind(p.seeking_talent)
    .bind(&p.seeking_description)
    .fetch_one(&mut **tx)
    .await?;

    Ok(artist)
}

async fn overwrite(
    tx: &mut Transaction<'static, Postgres>,
    id: i32,
    form: &ArtistForm,
) -> Result<Artist, DbError> {
    let exists: Option<(i32,)> = sqlx::query_as("SELECT id FROM artists WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    if exists.is_none() {
        return Err(not_found(id));
    }

    let p = &form.profile;
    let artist = sqlx::query_as::<_, Artist>(&format!(
        r#"
        UPDATE artists SET
            name = $2,
            city = $3,
            state = $4,
            phone = $5,
            website = $6,
            facebook_link = $7,
            image_link = $8,
            genres = $9,
            seeking_talent = $10,
            seeking_description = $11
        WHERE id = $1
        RETURNING {ARTIST_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&p.name)
    .bind(&p.city)
    .bind(p.state.as_str())
    .bind(&p.phone)
    .bind(&p.website)
    .bind(&p.facebook_link)
    .bind(&p.image_link)
    .bind(p.genre_labels())
    .bind(p.seeking_talent)
    .bind(&p.seeking_description)
    .fetch_one(&mut **tx)
    .await?;

    Ok(artist)
}
