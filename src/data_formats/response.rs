use serde::{Deserialize, Serialize};

use crate::models::{Article, ArticleWithCount, Comment, Topic, User};

#[derive(Deserialize, Serialize, Debug)]
pub struct TopicResponse {
    pub slug: String,
    pub description: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UserResponse {
    pub username: String,
    pub name: String,
    pub avatar_url: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleResponse {
    article_id: i64,
    title: String,
    topic: String,
    author: String,
    body: String,
    created_at: String,
    votes: i64,
    article_img_url: String,
    // Present on reads, absent on the vote update, which returns the bare row
    #[serde(skip_serializing_if = "Option::is_none")]
    comment_count: Option<i64>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CommentResponse {
    comment_id: i64,
    article_id: i64,
    author: String,
    body: String,
    votes: i64,
    created_at: String,
}

impl TopicResponse {
    pub fn new(Topic { slug, description }: Topic) -> Self {
        TopicResponse { slug, description }
    }
}

impl UserResponse {
    pub fn new(
        User {
            username,
            name,
            avatar_url,
        }: User,
    ) -> Self {
        UserResponse {
            username,
            name,
            avatar_url,
        }
    }
}

impl ArticleResponse {
    pub fn new(
        Article {
            article_id,
            title,
            topic,
            author,
            body,
            created_at,
            votes,
            article_img_url,
        }: Article,
    ) -> Self {
        ArticleResponse {
            article_id,
            title,
            topic,
            author,
            body,
            created_at: created_at.to_string(),
            votes,
            article_img_url,
            comment_count: None,
        }
    }

    pub fn with_count(
        ArticleWithCount {
            article_id,
            title,
            topic,
            author,
            body,
            created_at,
            votes,
            article_img_url,
            comment_count,
        }: ArticleWithCount,
    ) -> Self {
        ArticleResponse {
            article_id,
            title,
            topic,
            author,
            body,
            created_at: created_at.to_string(),
            votes,
            article_img_url,
            comment_count: Some(comment_count),
        }
    }
}

impl CommentResponse {
    pub fn new(
        Comment {
            comment_id,
            article_id,
            author,
            body,
            votes,
            created_at,
        }: Comment,
    ) -> Self {
        CommentResponse {
            comment_id,
            article_id,
            author,
            body,
            votes,
            created_at: created_at.to_string(),
        }
    }
}
