mod data_formats;
mod db_helpers;
mod errors;
mod handlers;
pub mod models;

use anyhow::Context;
pub use anyhow::Result;
use axum::http::StatusCode;
use axum::{routing::*, Extension, Json, Router};
pub use data_formats::*;
use handlers::*;
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::{
    net::{SocketAddr, TcpListener},
    sync::Arc,
};

pub type JsonResponse<T> = (StatusCode, Json<T>);

pub async fn run_app(app: Router, address: SocketAddr, db: SqlitePool) -> Result<()> {
    let app = app.layer(Extension(Arc::new(db)));
    axum::Server::bind(&address)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}

pub async fn init_db() -> Result<SqlitePool> {
    let db_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    if !Sqlite::database_exists(&db_url).await.unwrap_or(false) {
        tracing::info!("Creating database {}", db_url);
        Sqlite::create_database(&db_url)
            .await
            .context("Failed to create database")?;
    }
    let pool = SqlitePool::connect(&db_url).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    tracing::info!("Running migrations");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;
    Ok(())
}

pub fn get_random_free_port() -> (u16, SocketAddr) {
    let listener = TcpListener::bind("localhost:0").unwrap();
    match listener.local_addr() {
        Ok(addr) => (addr.port(), addr),
        Err(_) => panic!("Could not get a free port"),
    }
}

// Every method router carries its own fallback so that an unmatched method
// on a known path collapses to the same generic 500 as an unknown path.
pub fn make_router() -> Router {
    Router::new()
        .route("/api", get(get_api).fallback(unhandled_route))
        .route(
            "/api/topics",
            get(get_topics).post(post_topic).fallback(unhandled_route),
        )
        .route(
            "/api/articles",
            get(get_articles)
                .post(post_article)
                .fallback(unhandled_route),
        )
        .route(
            "/api/articles/:article_id",
            get(get_article_by_id)
                .patch(patch_article_by_id)
                .delete(delete_article_by_id)
                .fallback(unhandled_route),
        )
        .route(
            "/api/articles/:article_id/comments",
            get(get_comments_by_article_id)
                .post(post_comment_by_article_id)
                .fallback(unhandled_route),
        )
        .route(
            "/api/comments/:comment_id",
            get(get_comment_by_id)
                .patch(patch_comment_by_id)
                .delete(delete_comment_by_id)
                .fallback(unhandled_route),
        )
        .route(
            "/api/users",
            get(get_users).post(post_user).fallback(unhandled_route),
        )
        .route(
            "/api/users/:username",
            get(get_user_by_username).fallback(unhandled_route),
        )
        .fallback(unhandled_route)
}
