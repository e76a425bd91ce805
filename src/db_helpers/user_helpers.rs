use sqlx::{Sqlite, SqlitePool};

use crate::{errors::ApiError, models::User};

pub async fn list_users_in_db(pool: &SqlitePool) -> Result<Vec<User>, ApiError> {
    let mut tx = pool.begin().await?;
    let users = sqlx::query_as::<Sqlite, User>("SELECT username, name, avatar_url FROM users")
        .fetch_all(&mut tx)
        .await?;
    tx.commit().await?;
    Ok(users)
}
