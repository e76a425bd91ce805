use chrono::NaiveDateTime;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Article {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: String,
}

// The read shape for articles: comment_count is computed by the query, never stored.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ArticleWithCount {
    pub article_id: i64,
    pub title: String,
    pub topic: String,
    pub author: String,
    pub body: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: String,
    pub comment_count: i64,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i64,
    pub article_id: i64,
    pub author: String,
    pub body: String,
    pub votes: i64,
    pub created_at: NaiveDateTime,
}
