//! Venue repository
//!
//! - list: venues with upcoming-show counts, one query
//! - detail: venue row plus its shows joined to artists
//! - create/update: single transaction, rolled back on any failure
//! - delete: not supported

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool, Postgres, Transaction};

use super::DbError;
use crate::db::tx::finish;
use crate::models::{partition_shows, SearchTerm, ShowSplit, VenueForm};

/// Venue record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Venue {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub image_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Venue with upcoming show count for list and search pages
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct VenueSummary {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}

/// A show at a venue, seen from the venue's side
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct VenueShow {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Venue detail page data
#[derive(Debug, Clone)]
pub struct VenueDetail {
    pub venue: Venue,
    pub shows: ShowSplit<VenueShow>,
}

const VENUE_COLUMNS: &str = "id, name, city, state, address, phone, website, facebook_link, \
                             image_link, genres, seeking_talent, seeking_description";

/// Venue repository
pub struct VenueRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> VenueRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All venues with the number of shows starting at or after `now`.
    ///
    /// Ordered by state, city, name so callers can group by area.
    pub async fn list(&self, now: NaiveDateTime) -> Result<Vec<VenueSummary>, DbError> {
        let venues = sqlx::query_as::<_, VenueSummary>(
            r#"
            SELECT
                v.id,
                v.name,
                v.city,
                v.state,
                COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            GROUP BY v.id
            ORDER BY v.state, v.city, v.name
            "#,
        )
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(venues)
    }

    /// Venues whose name contains `term`, ignoring case.
    pub async fn search(
        &self,
        term: &SearchTerm,
        now: NaiveDateTime,
    ) -> Result<Vec<VenueSummary>, DbError> {
        let venues = sqlx::query_as::<_, VenueSummary>(
            r#"
            SELECT
                v.id,
                v.name,
                v.city,
                v.state,
                COUNT(s.id) FILTER (WHERE s.start_time >= $2) AS num_upcoming_shows
            FROM venues v
            LEFT JOIN shows s ON s.venue_id = v.id
            WHERE v.name ILIKE $1 ESCAPE '\'
            GROUP BY v.id
            ORDER BY v.name
            "#,
        )
        .bind(term.like_pattern())
        .bind(now)
        .fetch_all(self.pool)
        .await?;

        Ok(venues)
    }

    /// Get a single venue by id.
    pub async fn get(&self, id: i32) -> Result<Venue, DbError> {
        let venue = sqlx::query_as::<_, Venue>(&format!(
            "SELECT {VENUE_COLUMNS} FROM venues WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or_else(|| not_found(id))?;

        Ok(venue)
    }

    /// Shows booked at a venue, joined to their artists, oldest first.
    pub async fn shows(&self, id: i32) -> Result<Vec<VenueShow>, DbError> {
        let shows = sqlx::query_as::<_, VenueShow>(
            r#"
            SELECT
                a.id AS artist_id,
                a.name AS artist_name,
                a.image_link AS artist_image_link,
                s.start_time
            FROM shows s
            JOIN artists a ON a.id = s.artist_id
            WHERE s.venue_id = $1
            ORDER BY s.start_time
            "#,
        )
        .bind(id)
        .fetch_all(self.pool)
        .await?;

        Ok(shows)
    }

    /// Venue with its shows split into past and upcoming.
    pub async fn detail(&self, id: i32, now: NaiveDateTime) -> Result<VenueDetail, DbError> {
        let venue = self.get(id).await?;
        let shows = partition_shows(self.shows(id).await?, now, |s| s.start_time);
        Ok(VenueDetail { venue, shows })
    }

    /// Insert a venue (atomic).
    pub async fn create(&self, form: &VenueForm) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;
        let result = insert(&mut tx, form).await;
        finish(tx, result).await
    }

    /// Overwrite every editable field of a venue (atomic).
    ///
    /// The row is locked before the update; a missing id rolls back and
    /// returns `NotFound`.
    pub async fn update(&self, id: i32, form: &VenueForm) -> Result<Venue, DbError> {
        let mut tx = self.pool.begin().await?;
        let result = overwrite(&mut tx, id, form).await;
        finish(tx, result).await
    }

    /// Deleting venues is not offered; the record is left untouched.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        tracing::debug!(venue_id = id, "Venue delete requested");
        Err(DbError::NotSupported {
            operation: "delete venue",
        })
    }
}

fn not_found(id: i32) -> DbError {
    DbError::NotFound {
        resource: "venue",
        id: id.to_string(),
    }
}

async fn insert(tx: &mut Transaction<'static, Postgres>, form: &VenueForm) -> Result<Venue, DbError> {
    let p = &form.profile;
    let venue = sqlx::query_as::<_, Venue>(&format!(
        r#"
        INSERT INTO venues
            (name, city, state, address, phone, website, facebook_link,
             image_link, genres, seeking_talent, seeking_description)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
        RETURNING {VENUE_COLUMNS}
        "#
    ))
    .bind(&p.name)
    .bind(&p.city)
    .bind(p.state.as_str())
    .bind(&form.address)
    .bind(&p.phone)
    .bind(&p.website)
    .bind(&p.facebook_link)
    .bind(&p.image_link)
    .bind(p.genre_labels())
    .bind(p.seeking_talent)
    .bind(&p.seeking_description)
    .fetch_one(&mut **tx)
    .await?;

    Ok(venue)
}

async fn overwrite(
    tx: &mut Transaction<'static, Postgres>,
    id: i32,
    form: &VenueForm,
) -> Result<Venue, DbError> {
    let exists: Option<(i32,)> = sqlx::query_as("SELECT id FROM venues WHERE id = $1 FOR UPDATE")
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;
    if exists.is_none() {
        return Err(not_found(id));
    }

    let p = &form.profile;
    let venue = sqlx::query_as::<_, Venue>(&format!(
        r#"
        UPDATE venues SET
            name = $2,
            city = $3,
            state = $4,
            address = $5,
            phone = $6,
            website = $7,
            facebook_link = $8,
            image_link = $9,
            genres = $10,
            seeking_talent = $11,
            seeking_description = $12
        WHERE id = $1
        RETURNING {VENUE_COLUMNS}
        "#
    ))
    .bind(id)
    .bind(&p.name)
    .bind(&p.city)
    .bind(p.state.as_str())
    .bind(&form.address)
    .bind(&p.phone)
    .bind(&p.website)
    .bind(&p.facebook_link)
    .bind(&p.image_link)
    .bind(p.genre_labels())
    .bind(p.seeking_talent)
    .bind(&p.seeking_description)
    .fetch_one(&mut **tx)
    .await?;

    Ok(venue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations;
    use crate::models::form::fields;
    use chrono::{Duration, Local};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p fyyur-server -- --ignored

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");
        pool
    }

    fn form(name: &str, city: &str, state: &str) -> VenueForm {
        VenueForm::from_fields(&fields(&[
            ("name", name),
            ("city", city),
            ("state", state),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("website", "https://www.themusicalhop.com"),
            ("genres", "Jazz"),
            ("genres", "Folk"),
            ("seeking_talent", "y"),
            ("seeking_description", "Looking for local artists"),
        ]))
        .expect("valid form")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips_fields() {
        let pool = pool().await;
        let repo = VenueRepo::new(&pool);

        let created = repo.create(&form("Round Trip Hall", "San Francisco", "CA")).await.unwrap();
        let fetched = repo.get(created.id).await.unwrap();

        assert_eq!(created, fetched);
        assert_eq!(fetched.genres, vec!["Jazz", "Folk"]);
        assert!(fetched.seeking_talent);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_overwrites_every_field() {
        let pool = pool().await;
        let repo = VenueRepo::new(&pool);

        let created = repo.create(&form("Before", "San Francisco", "CA")).await.unwrap();
        let edit = VenueForm::from_fields(&fields(&[
            ("name", "After"),
            ("city", "New York"),
            ("state", "NY"),
            ("address", "335 Delancey Street"),
            ("genres", "Classical"),
        ]))
        .unwrap();

        let updated = repo.update(created.id, &edit).await.unwrap();
        assert_eq!(updated.name, "After");
        assert_eq!(updated.city, "New York");
        assert_eq!(updated.address, "335 Delancey Street");
        assert_eq!(updated.phone, None);
        assert_eq!(updated.website, None);
        assert_eq!(updated.genres, vec!["Classical"]);
        assert!(!updated.seeking_talent);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_is_not_found() {
        let pool = pool().await;
        let err = VenueRepo::new(&pool)
            .update(i32::MAX, &form("Ghost", "Nowhere", "NV"))
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { resource: "venue", .. }));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn search_matches_partial_names_only() {
        let pool = pool().await;
        let repo = VenueRepo::new(&pool);

        let tag = std::process::id();
        let hall = repo
            .create(&form(&format!("Park Square Live {tag} Hall"), "San Francisco", "CA"))
            .await
            .unwrap();
        let discount = repo
            .create(&form(&format!("Club 50% {tag}"), "San Francisco", "CA"))
            .await
            .unwrap();
        let now = Local::now().naive_local();

        // Partial and differently-cased terms still find the venue
        let hits = repo
            .search(&SearchTerm::new(&format!("live {tag} HALL")), now)
            .await
            .unwrap();
        assert_eq!(hits.iter().map(|v| v.id).collect::<Vec<_>>(), vec![hall.id]);

        // `%` is a literal, not a wildcard
        let hits = repo
            .search(&SearchTerm::new(&format!("50% {tag}")), now)
            .await
            .unwrap();
        assert_eq!(hits.iter().map(|v| v.id).collect::<Vec<_>>(), vec![discount.id]);
        let misses = repo
            .search(&SearchTerm::new(&format!("Club 5% {tag}")), now)
            .await
            .unwrap();
        assert!(misses.is_empty());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_leaves_record() {
        let pool = pool().await;
        let repo = VenueRepo::new(&pool);

        let created = repo.create(&form("Stays Put", "Austin", "TX")).await.unwrap();
        let err = repo.delete(created.id).await.unwrap_err();

        assert!(matches!(err, DbError::NotSupported { .. }));
        assert!(repo.get(created.id).await.is_ok());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn detail_partitions_own_shows() {
        let pool = pool().await;
        let venues = VenueRepo::new(&pool);
        let artists = crate::db::ArtistRepo::new(&pool);
        let shows = crate::db::ShowRepo::new(&pool);

        let venue = venues.create(&form("Detail Hall", "Seattle", "WA")).await.unwrap();
        let other = venues.create(&form("Other Hall", "Seattle", "WA")).await.unwrap();
        let artist = artists
            .create(&crate::models::ArtistForm::from_fields(&fields(&[
                ("name", "Detail Band"),
                ("city", "Seattle"),
                ("state", "WA"),
                ("genres", "Punk"),
            ]))
            .unwrap())
            .await
            .unwrap();

        let now = Local::now().naive_local();
        for (venue_id, offset) in [(venue.id, -2), (venue.id, -1), (venue.id, 3), (other.id, -5)] {
            let show = crate::models::ShowForm {
                artist_id: artist.id,
                venue_id,
                start_time: now + Duration::days(offset),
            };
            shows.create(&show).await.unwrap();
        }

        let detail = venues.detail(venue.id, now).await.unwrap();
        assert_eq!(detail.shows.past_count(), 2);
        assert_eq!(detail.shows.upcoming_count(), 1);
        assert!(detail.shows.past.iter().all(|s| s.start_time < now));
        assert!(detail.shows.upcoming.iter().all(|s| s.start_time >= now));
    }
}
