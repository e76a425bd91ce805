use sqlx::SqlitePool;

use crate::errors::ApiError;

mod article_helpers;
mod comment_helpers;
mod topic_helpers;
mod user_helpers;

pub use article_helpers::*;
pub use comment_helpers::*;
pub use topic_helpers::*;
pub use user_helpers::*;

// ----------------- Helper Functions -----------------

async fn check_article_exists(pool: &SqlitePool, article_id: i64) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;
    let article = sqlx::query("SELECT article_id FROM articles WHERE article_id = $1")
        .bind(article_id)
        .fetch_optional(&mut tx)
        .await?;
    tx.commit().await?;
    match article {
        Some(_) => Ok(()),
        None => Err(ApiError::NotFound(format!(
            "Article not found for article_id: {}",
            article_id
        ))),
    }
}

async fn check_author_exists(pool: &SqlitePool, username: &str) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;
    let user = sqlx::query("SELECT username FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(&mut tx)
        .await?;
    tx.commit().await?;
    match user {
        Some(_) => Ok(()),
        None => Err(ApiError::NotFound(String::from("Author not found"))),
    }
}
