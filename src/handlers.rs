use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use sqlx::SqlitePool;

use crate::{
    data_formats::{
        ArticleQueryParams, ArticleResponse, ArticleWrapper, ArticlesWrapper, CommentResponse,
        CommentWrapper, CommentsWrapper, NewCommentRequest, TopicResponse, TopicsWrapper,
        UpdateVotesRequest, UserResponse, UsersWrapper,
    },
    db_helpers::{
        delete_comment_in_db, get_article_by_id_in_db, insert_comment_in_db,
        list_articles_in_db, list_comments_for_article_in_db, list_topics_in_db,
        list_users_in_db, update_article_votes_in_db,
    },
    errors::{ApiError, ApiErrorJson},
    JsonResponse,
};

type JsonResult<T> = Result<Json<T>, ApiError>;

const ENDPOINTS_JSON: &str = include_str!("../endpoints.json");

// Path segments arrive as raw strings so a non-numeric id can be rejected
// with a 400 instead of axum's default rejection body.
fn parse_id(id: &str) -> Result<i64, ApiError> {
    id.parse().map_err(|_| ApiError::BadRequest("Bad request"))
}

// ----------------- Api Handlers -----------------

pub async fn get_endpoints() -> JsonResult<serde_json::Value> {
    let endpoints = serde_json::from_str(ENDPOINTS_JSON).map_err(|_| ApiError::ServerError)?;
    Ok(Json(endpoints))
}

pub async fn route_not_found() -> JsonResponse<ApiErrorJson> {
    (
        StatusCode::NOT_FOUND,
        Json(ApiErrorJson::new("Route not found")),
    )
}

// ----------------- Topic Handlers -----------------

pub async fn get_topics(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<TopicsWrapper> {
    let topics = list_topics_in_db(&pool).await?;
    let topics = topics.into_iter().map(TopicResponse::new).collect();
    Ok(Json(TopicsWrapper { topics }))
}

// ----------------- Article Handlers -----------------

pub async fn get_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Query(params): Query<ArticleQueryParams>,
) -> JsonResult<ArticlesWrapper> {
    let articles = list_articles_in_db(&pool, params).await?;
    let articles = articles.into_iter().map(ArticleResponse::with_count).collect();
    Ok(Json(ArticlesWrapper { articles }))
}

pub async fn get_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> JsonResult<ArticleWrapper> {
    let article_id = parse_id(&article_id)?;
    let article = get_article_by_id_in_db(&pool, article_id).await?;
    Ok(Json(ArticleWrapper {
        article: ArticleResponse::with_count(article),
    }))
}

pub async fn patch_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    body: Option<Json<UpdateVotesRequest>>,
) -> JsonResult<ArticleWrapper> {
    let article_id = parse_id(&article_id)?;
    let inc_votes = body
        .and_then(|Json(request)| request.inc_votes)
        .ok_or(ApiError::BadRequest("Bad request: must include inc_votes"))?;
    let article = update_article_votes_in_db(&pool, article_id, inc_votes).await?;
    Ok(Json(ArticleWrapper {
        article: ArticleResponse::new(article),
    }))
}

// ----------------- Comment Handlers -----------------

pub async fn get_comments_by_article_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> JsonResult<CommentsWrapper> {
    let article_id = parse_id(&article_id)?;
    let comments = list_comments_for_article_in_db(&pool, article_id).await?;
    let comments = comments.into_iter().map(CommentResponse::new).collect();
    Ok(Json(CommentsWrapper { comments }))
}

pub async fn post_comment_by_article_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    body: Option<Json<NewCommentRequest>>,
) -> Result<JsonResponse<CommentWrapper>, ApiError> {
    let article_id = parse_id(&article_id)?;
    let (username, body) = match body {
        Some(Json(NewCommentRequest {
            username: Some(username),
            body: Some(body),
        })) => (username, body),
        _ => {
            return Err(ApiError::BadRequest(
                "Bad request: must include both username and body",
            ))
        }
    };
    let comment = insert_comment_in_db(&pool, article_id, &username, &body).await?;
    Ok((
        StatusCode::CREATED,
        Json(CommentWrapper {
            comment: CommentResponse::new(comment),
        }),
    ))
}

pub async fn delete_comment_by_comment_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let comment_id = parse_id(&comment_id)?;
    delete_comment_in_db(&pool, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- User Handlers -----------------

pub async fn get_users(Extension(pool): Extension<Arc<SqlitePool>>) -> JsonResult<UsersWrapper> {
    let users = list_users_in_db(&pool).await?;
    let users = users.into_iter().map(UserResponse::new).collect();
    Ok(Json(UsersWrapper { users }))
}
