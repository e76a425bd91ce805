use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::JsonResponse;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(&'static str),
    NotFound(String),
    DatabaseError(sqlx::Error),
    ServerError,
}

#[derive(serde::Serialize)]
pub struct ApiErrorJson {
    msg: String,
}

impl ApiErrorJson {
    pub fn new(msg: &str) -> ApiErrorJson {
        ApiErrorJson {
            msg: msg.to_string(),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(value: sqlx::Error) -> Self {
        Self::DatabaseError(value)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl ApiError {
    pub fn to_json_response(&self) -> JsonResponse<ApiErrorJson> {
        let (status_code, json) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiErrorJson::new(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiErrorJson::new(msg)),
            ApiError::DatabaseError(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorJson::new("server error!"),
                )
            }
            ApiError::ServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiErrorJson::new("server error!"),
            ),
        };
        (status_code, Json(json))
    }
}
