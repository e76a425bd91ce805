use sqlx::{Sqlite, SqlitePool};

use crate::{errors::ApiError, models::Comment};

use super::{check_article_exists, check_author_exists};

// An article with no comments is an empty list, not a 404; only a missing
// article rejects.
pub async fn list_comments_for_article_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Vec<Comment>, ApiError> {
    check_article_exists(pool, article_id).await?;

    let mut tx = pool.begin().await?;
    let comments = sqlx::query_as::<Sqlite, Comment>(
        r#"
        SELECT comment_id, article_id, author, body, votes, created_at
        FROM comments
        WHERE article_id = $1
        ORDER BY created_at DESC
        "#,
    )
    .bind(article_id)
    .fetch_all(&mut tx)
    .await?;
    tx.commit().await?;
    Ok(comments)
}

// The two existence checks and the insert are separate statements with no
// spanning transaction; a row deleted in between surfaces as a database
// error from the insert.
pub async fn insert_comment_in_db(
    pool: &SqlitePool,
    article_id: i64,
    username: &str,
    body: &str,
) -> Result<Comment, ApiError> {
    check_article_exists(pool, article_id).await?;
    check_author_exists(pool, username).await?;

    let mut tx = pool.begin().await?;
    let comment = sqlx::query_as::<Sqlite, Comment>(
        r#"
        INSERT INTO comments (article_id, author, body)
        VALUES ($1, $2, $3)
        RETURNING comment_id, article_id, author, body, votes, created_at
        "#,
    )
    .bind(article_id)
    .bind(username)
    .bind(body)
    .fetch_one(&mut tx)
    .await?;
    tx.commit().await?;

    Ok(comment)
}

pub async fn delete_comment_in_db(pool: &SqlitePool, comment_id: i64) -> Result<(), ApiError> {
    let mut tx = pool.begin().await?;
    let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
        .bind(comment_id)
        .execute(&mut tx)
        .await?;
    tx.commit().await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(format!(
            "Comment not found for comment_id: {}",
            comment_id
        )));
    }
    Ok(())
}
