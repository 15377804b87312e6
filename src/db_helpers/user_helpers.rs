use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::CreateUserRequest;
use crate::errors::RequestError;
use crate::models::User;

const USER_COLUMNS: &str = "username, name, avatar_url, password";

// Unlike topics, an empty users table is served as an empty list.
pub async fn select_users(pool: &SqlitePool) -> Result<Vec<User>, RequestError> {
    let query = format!("SELECT {USER_COLUMNS} FROM users");
    let users = sqlx::query_as::<Sqlite, User>(&query)
        .fetch_all(pool)
        .await?;
    Ok(users)
}

pub async fn select_user_by_username(
    pool: &SqlitePool,
    username: &str,
) -> Result<User, RequestError> {
    let query = format!("SELECT {USER_COLUMNS} FROM users WHERE username = $1");
    let user = sqlx::query_as::<Sqlite, User>(&query)
        .bind(username)
        .fetch_optional(pool)
        .await?;

    user.ok_or(RequestError::NotFound)
}

pub async fn insert_user(
    pool: &SqlitePool,
    CreateUserRequest {
        username,
        name,
        avatar_url,
        password,
    }: CreateUserRequest,
) -> Result<User, RequestError> {
    let query = format!(
        "INSERT INTO users (username, name, avatar_url, password) \
         VALUES ($1, $2, $3, $4) \
         RETURNING {USER_COLUMNS}"
    );
    let user = sqlx::query_as::<Sqlite, User>(&query)
        .bind(username)
        .bind(name)
        .bind(avatar_url)
        .bind(password)
        .fetch_one(pool)
        .await?;
    Ok(user)
}
