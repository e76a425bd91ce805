use serde::{Deserialize, Serialize};

use super::response::{ArticleResponse, CommentResponse, TopicResponse, UserResponse};

#[derive(Debug, Deserialize, Serialize)]
pub struct TopicsWrapper {
    pub topics: Vec<TopicResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct UsersWrapper {
    pub users: Vec<UserResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ArticlesWrapper {
    pub articles: Vec<ArticleResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ArticleWrapper {
    pub article: ArticleResponse,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommentsWrapper {
    pub comments: Vec<CommentResponse>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommentWrapper {
    pub comment: CommentResponse,
}
