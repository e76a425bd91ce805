mod data_formats;
mod db_helpers;
mod errors;
mod handlers;
mod models;
pub mod seed;

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use data_formats::*;
use handlers::*;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::{net::TcpListener, sync::Arc};

pub type JsonResponse<T> = (StatusCode, Json<T>);

pub async fn run_app(app: Router, listener: TcpListener, pool: SqlitePool) -> Result<()> {
    let app = app.layer(Extension(Arc::new(pool)));
    axum::Server::from_tcp(listener)
        .context("Failed to attach to the listener")?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db(db_url: &str) -> Result<SqlitePool> {
    if !Sqlite::database_exists(db_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", db_url);
        Sqlite::create_database(db_url)
            .await
            .context("Failed to create database")?;
    }
    let pool = SqlitePool::connect(db_url).await?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    Ok(pool)
}

// Binding stays with the returned listener so the port cannot be taken
// between here and serving.
pub fn bind_free_port() -> (u16, TcpListener) {
    let listener = TcpListener::bind("localhost:0").unwrap();
    match listener.local_addr() {
        Ok(addr) => (addr.port(), listener),
        Err(_) => panic!("Could not get a free port"),
    }
}

pub fn make_router() -> Router {
    Router::new()
        .route("/api", get(get_endpoints))
        .route("/api/topics", get(get_topics))
        .route("/api/articles", get(get_articles))
        .route(
            "/api/articles/:article_id",
            get(get_article_by_id).patch(patch_article_by_id),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_comments_by_article_id).post(post_comment_by_article_id),
        )
        .route("/api/comments/:comment_id", delete(delete_comment_by_comment_id))
        .route("/api/users", get(get_users))
        .fallback(route_not_found)
}
