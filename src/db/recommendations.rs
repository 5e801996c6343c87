use sqlx::SqlitePool;

use crate::{
    error::AppResult,
    models::{HistoryEntry, MovieRecommendation, Sentiment, UserProfile},
};

/// Append-only log of recommendations shown to users
#[derive(Clone)]
pub struct RecommendationStore {
    pool: SqlitePool,
}

impl RecommendationStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts one row per recommendation and commits before returning
    ///
    /// Either every row of the batch is stored or none is.
    pub async fn append(
        &self,
        records: &[MovieRecommendation],
        sentiment: Sentiment,
        user: &UserProfile,
    ) -> AppResult<u64> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = 0;

        for record in records {
            let result = sqlx::query(
                r#"
                INSERT INTO recommendations
                    (sentiment, movie_title, overview, release_date, rating, user_name, user_age, user_gender)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(sentiment.as_str())
            .bind(&record.title)
            .bind(&record.overview)
            .bind(&record.release_date)
            .bind(record.rating)
            .bind(&user.name)
            .bind(user.age)
            .bind(&user.gender)
            .execute(&mut *tx)
            .await?;

            inserted += result.rows_affected();
        }

        tx.commit().await?;

        tracing::info!(
            rows = inserted,
            sentiment = %sentiment,
            user = %user.name,
            "Recommendations saved"
        );

        Ok(inserted)
    }

    /// Every stored row, most recent first
    pub async fn list_history(&self) -> AppResult<Vec<HistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryEntry>(
            r#"
            SELECT user_name, user_age, user_gender, sentiment, movie_title, release_date, rating
            FROM recommendations
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Releases the database handle
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
