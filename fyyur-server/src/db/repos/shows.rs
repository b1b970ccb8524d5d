//! Show repository
//!
//! Shows are create-only; the listing is a single three-way JOIN.

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::db::tx::finish;
use crate::models::ShowForm;

/// Show record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Show {
    pub id: i32,
    pub venue_id: i32,
    pub artist_id: i32,
    pub start_time: NaiveDateTime,
}

/// Show joined to its venue and artist for the shows page
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ShowListing {
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Show repository
pub struct ShowRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> ShowRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every show with venue and artist names, soonest first.
    pub async fn list(&self) -> Result<Vec<ShowListing>, DbError> {
        let shows = sqlx::query_as::<_, ShowListing>(
            r#"
            SELECT
                v.id AS venue_id,
                v.name AS venue_name,
                a.id AS artist_id,
                a.name AS artist_name,
                a.image_link AS artist_image_link,
                s.start_time
            FROM shows s
            JOIN venues v ON v.id = s.venue_id
            JOIN artists a ON a.id = s.artist_id
            ORDER BY s.start_time, s.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(shows)
    }

    /// Schedule a show (atomic).
    ///
    /// Unknown venue or artist ids violate the foreign keys; the insert is
    /// rolled back and the database error returned.
    pub async fn create(&self, form: &ShowForm) -> Result<Show, DbError> {
        let mut tx = self.pool.begin().await?;
        let result = sqlx::query_as::<_, Show>(
            r#"
            INSERT INTO shows (venue_id, artist_id, start_time)
            VALUES ($1, $2, $3)
            RETURNING id, venue_id, artist_id, start_time
            "#,
        )
        .bind(form.venue_id)
        .bind(form.artist_id)
        .bind(form.start_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(DbError::from);

        finish(tx, result).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations;
    use chrono::Local;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn dangling_reference_rolls_back() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        migrations::run(&pool).await.expect("migrations failed");

        let before: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows")
            .fetch_one(&pool)
            .await
            .unwrap();

        let form = ShowForm {
            artist_id: i32::MAX,
            venue_id: i32::MAX,
            start_time: Local::now().naive_local(),
        };
        let err = ShowRepo::new(&pool).create(&form).await.unwrap_err();
        assert!(matches!(err, DbError::Sqlx(_)));

        let after: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(before, after);
    }
}
