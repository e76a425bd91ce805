use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::ArticleQueryParams;
use crate::errors::ApiError;
use crate::models::{Article, ArticleWithCount};

const ARTICLE_WITH_COUNT_QUERY: &str = r#"
            SELECT articles.article_id          AS "article_id",
                   articles.title               AS "title",
                   articles.topic               AS "topic",
                   articles.author              AS "author",
                   articles.body                AS "body",
                   articles.created_at          AS "created_at",
                   articles.votes               AS "votes",
                   articles.article_img_url     AS "article_img_url",
                   Count(comments.comment_id)   AS "comment_count"
            FROM   articles
                LEFT JOIN comments
                       ON comments.article_id = articles.article_id
    "#;

// ORDER BY cannot take bind parameters, so both pieces are validated against
// fixed lists before they are spliced into the query.
const VALID_SORT_COLUMNS: &[&str] = &[
    "article_id",
    "title",
    "topic",
    "author",
    "created_at",
    "votes",
    "comment_count",
];

fn build_order_clause(sort_by: &str, order: &str) -> Result<String, ApiError> {
    if !VALID_SORT_COLUMNS.contains(&sort_by) {
        return Err(ApiError::BadRequest("Bad request: invalid sort_by query"));
    }
    let direction = match order.to_lowercase().as_str() {
        "asc" => "ASC",
        "desc" => "DESC",
        _ => return Err(ApiError::BadRequest("Bad request: invalid order query")),
    };
    // comment_count is an aggregate alias, the rest are real columns
    let column = if sort_by == "comment_count" {
        String::from("comment_count")
    } else {
        format!("articles.{}", sort_by)
    };
    Ok(format!("ORDER BY {} {}", column, direction))
}

pub async fn list_articles_in_db(
    pool: &SqlitePool,
    ArticleQueryParams {
        topic,
        sort_by,
        order,
    }: ArticleQueryParams,
) -> Result<Vec<ArticleWithCount>, ApiError> {
    let order_clause = build_order_clause(&sort_by, &order)?;
    let query = match &topic {
        Some(_) => format!(
            "{} WHERE articles.topic = $1 GROUP BY articles.article_id {}",
            ARTICLE_WITH_COUNT_QUERY, order_clause
        ),
        None => format!(
            "{} GROUP BY articles.article_id {}",
            ARTICLE_WITH_COUNT_QUERY, order_clause
        ),
    };

    let mut tx = pool.begin().await?;
    let mut articles = sqlx::query_as::<Sqlite, ArticleWithCount>(&query);
    if let Some(topic) = &topic {
        articles = articles.bind(topic.clone());
    }
    let articles = articles.fetch_all(&mut tx).await?;
    tx.commit().await?;

    if articles.is_empty() {
        if let Some(topic) = topic {
            return Err(ApiError::NotFound(format!(
                "Articles not found for topic: {}",
                topic
            )));
        }
    }
    Ok(articles)
}

pub async fn get_article_by_id_in_db(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<ArticleWithCount, ApiError> {
    let query = format!(
        "{} WHERE articles.article_id = $1 GROUP BY articles.article_id",
        ARTICLE_WITH_COUNT_QUERY
    );

    let mut tx = pool.begin().await?;
    let article = sqlx::query_as::<Sqlite, ArticleWithCount>(&query)
        .bind(article_id)
        .fetch_optional(&mut tx)
        .await?;
    tx.commit().await?;

    match article {
        Some(article) => Ok(article),
        None => Err(ApiError::NotFound(format!(
            "Article not found for article_id: {}",
            article_id
        ))),
    }
}

pub async fn update_article_votes_in_db(
    pool: &SqlitePool,
    article_id: i64,
    inc_votes: i64,
) -> Result<Article, ApiError> {
    let mut tx = pool.begin().await?;
    let article = sqlx::query_as::<Sqlite, Article>(
        r#"
        UPDATE articles
        SET votes = votes + $1
        WHERE article_id = $2
        RETURNING article_id, title, topic, author, body, created_at, votes, article_img_url
        "#,
    )
    .bind(inc_votes)
    .bind(article_id)
    .fetch_optional(&mut tx)
    .await?;
    tx.commit().await?;

    match article {
        Some(article) => Ok(article),
        None => Err(ApiError::NotFound(format!(
            "Article not found for article_id: {}",
            article_id
        ))),
    }
}
