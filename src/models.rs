use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Topic {
    pub slug: String,
    pub description: String,
}

/// A full article row as stored. `comment_count` is never persisted;
/// see [`ArticleWithCommentCount`] for the read-time shape.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Article {
    pub article_id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: String,
}

/// Single-article read shape: the stored row plus the derived comment count.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArticleWithCommentCount {
    pub article_id: i64,
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: String,
    pub comment_count: i64,
}

/// List read shape: no body, derived comment count included.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ArticleSummary {
    pub article_id: i64,
    pub author: String,
    pub title: String,
    pub topic: String,
    pub created_at: NaiveDateTime,
    pub votes: i64,
    pub article_img_url: String,
    pub comment_count: i64,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Comment {
    pub comment_id: i64,
    pub body: String,
    pub article_id: i64,
    pub author: String,
    pub votes: i64,
    pub created_at: NaiveDateTime,
}

// Passwords are stored as received (matching the upstream behavior) but are
// never serialized back out.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    pub username: String,
    pub name: String,
    pub avatar_url: Option<String>,
    #[serde(skip_serializing)]
    pub password: Option<String>,
}
