use sqlx::{Sqlite, SqlitePool};

use crate::{errors::ApiError, models::Topic};

pub async fn list_topics_in_db(pool: &SqlitePool) -> Result<Vec<Topic>, ApiError> {
    let mut tx = pool.begin().await?;
    let topics = sqlx::query_as::<Sqlite, Topic>("SELECT slug, description FROM topics")
        .fetch_all(&mut tx)
        .await?;
    tx.commit().await?;
    Ok(topics)
}
