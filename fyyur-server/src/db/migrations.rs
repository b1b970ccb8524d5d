//! Schema for venues, artists and shows

use sqlx::PgPool;

/// Create all tables if they don't exist yet.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running Fyyur migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            address TEXT NOT NULL,
            phone TEXT,
            website TEXT,
            facebook_link TEXT,
            image_link TEXT,
            genres TEXT[] NOT NULL DEFAULT '{}',
            seeking_talent BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            phone TEXT,
            website TEXT,
            facebook_link TEXT,
            image_link TEXT,
            genres TEXT[] NOT NULL DEFAULT '{}',
            seeking_talent BOOLEAN NOT NULL DEFAULT FALSE,
            seeking_description TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            id SERIAL PRIMARY KEY,
            venue_id INTEGER NOT NULL REFERENCES venues(id),
            artist_id INTEGER NOT NULL REFERENCES artists(id),
            start_time TIMESTAMP NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Indexes for the detail-page joins
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue ON shows(venue_id, start_time)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist ON shows(artist_id, start_time)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_venues_area ON venues(state, city)")
        .execute(pool)
        .await?;

    tracing::info!("Fyyur migrations complete");
    Ok(())
}
