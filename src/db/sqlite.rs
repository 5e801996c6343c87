use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// Opens the SQLite database holding recommendation history
///
/// The pool holds a single connection that lives for the whole process, so
/// in-memory databases keep their contents and writes never contend.
pub async fn create_pool(database_url: &str) -> anyhow::Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(database_url)
        .await?;

    init_schema(&pool).await?;

    tracing::info!(database_url = %database_url, "Recommendation store ready");

    Ok(pool)
}

/// Creates the recommendations table if it does not exist yet
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS recommendations (
            id INTEGER PRIMARY KEY,
            sentiment TEXT NOT NULL,
            movie_title TEXT NOT NULL,
            overview TEXT NOT NULL,
            release_date TEXT NOT NULL,
            rating REAL NOT NULL,
            user_name TEXT NOT NULL,
            user_age INTEGER NOT NULL,
            user_gender TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
