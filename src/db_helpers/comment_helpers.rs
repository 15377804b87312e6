use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::CreateCommentRequest;
use crate::errors::RequestError;
use crate::models::Comment;

const COMMENT_COLUMNS: &str = "comment_id, body, article_id, author, votes, created_at";

pub async fn select_comments_by_article_id(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<Vec<Comment>, RequestError> {
    let query = format!(
        "SELECT {COMMENT_COLUMNS} FROM comments WHERE article_id = $1 ORDER BY created_at DESC"
    );
    let comments = sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(article_id)
        .fetch_all(pool)
        .await?;

    // Zero rows covers both "article has no comments" and "no such article";
    // callers cannot tell the two apart without a separate existence check.
    if comments.is_empty() {
        return Err(RequestError::NotFound);
    }
    Ok(comments)
}

pub async fn select_comment_by_id(
    pool: &SqlitePool,
    comment_id: i64,
) -> Result<Comment, RequestError> {
    let query = format!("SELECT {COMMENT_COLUMNS} FROM comments WHERE comment_id = $1");
    let comment = sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(comment_id)
        .fetch_optional(pool)
        .await?;

    comment.ok_or(RequestError::NotFound)
}

pub async fn insert_comment(
    pool: &SqlitePool,
    article_id: i64,
    CreateCommentRequest { username, body }: CreateCommentRequest,
) -> Result<Comment, RequestError> {
    // An unknown author or article surfaces as a foreign-key violation,
    // a missing body or username as a not-null violation.
    let query = format!(
        "INSERT INTO comments (body, article_id, author) \
         VALUES ($1, $2, $3) \
         RETURNING {COMMENT_COLUMNS}"
    );
    let comment = sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(body)
        .bind(article_id)
        .bind(username)
        .fetch_one(pool)
        .await?;
    Ok(comment)
}

pub async fn update_comment_votes(
    pool: &SqlitePool,
    comment_id: i64,
    inc_votes: i64,
) -> Result<Comment, RequestError> {
    let query = format!(
        "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2 \
         RETURNING {COMMENT_COLUMNS}"
    );
    let comment = sqlx::query_as::<Sqlite, Comment>(&query)
        .bind(inc_votes)
        .bind(comment_id)
        .fetch_optional(pool)
        .await?;

    comment.ok_or(RequestError::NotFound)
}

pub async fn delete_comment(pool: &SqlitePool, comment_id: i64) -> Result<(), RequestError> {
    let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
        .bind(comment_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RequestError::NotFound);
    }
    Ok(())
}
