use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::{ArticleQueryParams, CreateArticleRequest};
use crate::errors::RequestError;
use crate::models::{Article, ArticleSummary, ArticleWithCommentCount};

/// Applied when a create request carries no image URL.
const DEFAULT_ARTICLE_IMG_URL: &str =
    "https://images.pexels.com/photos/97050/pexels-photo-97050.jpeg?w=700&h=700";

/// Columns a list request may sort on. Anything else is rejected before a
/// query is built; the ORDER BY fragment is only ever assembled from values
/// taken out of this table.
const SORTABLE_COLUMNS: &[&str] = &[
    "author",
    "title",
    "article_id",
    "topic",
    "created_at",
    "votes",
    "comment_count",
];

fn resolve_sort_by(sort_by: Option<&str>) -> Result<&'static str, RequestError> {
    match sort_by {
        None => Ok("created_at"),
        Some(requested) => SORTABLE_COLUMNS
            .iter()
            .find(|column| **column == requested)
            .copied()
            .ok_or(RequestError::BadRequest),
    }
}

// Case-sensitive, like the upstream allow-list.
fn resolve_order(order: Option<&str>) -> Result<&'static str, RequestError> {
    match order {
        None | Some("DESC") => Ok("DESC"),
        Some("ASC") => Ok("ASC"),
        Some(_) => Err(RequestError::BadRequest),
    }
}

pub async fn select_article_by_id(
    pool: &SqlitePool,
    article_id: i64,
) -> Result<ArticleWithCommentCount, RequestError> {
    // LEFT JOIN so an article with zero comments still comes back with
    // comment_count = 0 rather than vanishing from the join.
    let article = sqlx::query_as::<Sqlite, ArticleWithCommentCount>(
        r#"
        SELECT articles.article_id               AS article_id,
               articles.author                   AS author,
               articles.title                    AS title,
               articles.body                     AS body,
               articles.topic                    AS topic,
               articles.created_at               AS created_at,
               articles.votes                    AS votes,
               articles.article_img_url          AS article_img_url,
               COUNT(comments.comment_id)        AS comment_count
        FROM   articles
               LEFT JOIN comments
                      ON comments.article_id = articles.article_id
        WHERE  articles.article_id = $1
        GROUP  BY articles.article_id
        "#,
    )
    .bind(article_id)
    .fetch_optional(pool)
    .await?;

    article.ok_or(RequestError::NotFound)
}

pub async fn select_articles(
    pool: &SqlitePool,
    ArticleQueryParams {
        topic,
        sort_by,
        order,
    }: ArticleQueryParams,
) -> Result<Vec<ArticleSummary>, RequestError> {
    let sort_by = resolve_sort_by(sort_by.as_deref())?;
    let order = resolve_order(order.as_deref())?;

    // sort_by and order come out of the allow-lists above, never from the
    // request; the topic filter stays a bound parameter.
    let query = format!(
        r#"
        SELECT articles.article_id               AS article_id,
               articles.author                   AS author,
               articles.title                    AS title,
               articles.topic                    AS topic,
               articles.created_at               AS created_at,
               articles.votes                    AS votes,
               articles.article_img_url          AS article_img_url,
               COUNT(comments.comment_id)        AS comment_count
        FROM   articles
               LEFT JOIN comments
                      ON comments.article_id = articles.article_id
        WHERE  ( articles.topic = $1
                 OR $1 IS NULL )
        GROUP  BY articles.article_id
        ORDER  BY {sort_by} {order}
        "#
    );

    let articles = sqlx::query_as::<Sqlite, ArticleSummary>(&query)
        .bind(topic)
        .fetch_all(pool)
        .await?;

    // Zero rows covers both "no such topic" and "topic with no articles";
    // the two are deliberately indistinguishable here.
    if articles.is_empty() {
        return Err(RequestError::NotFound);
    }
    Ok(articles)
}

pub async fn insert_article(
    pool: &SqlitePool,
    CreateArticleRequest {
        author,
        title,
        body,
        topic,
        article_img_url,
    }: CreateArticleRequest,
) -> Result<ArticleWithCommentCount, RequestError> {
    let article = sqlx::query_as::<Sqlite, ArticleWithCommentCount>(
        r#"
        INSERT INTO articles (author, title, body, topic, article_img_url)
        VALUES ($1, $2, $3, $4, COALESCE($5, $6))
        RETURNING article_id,
                  author,
                  title,
                  body,
                  topic,
                  created_at,
                  votes,
                  article_img_url,
                  0 AS comment_count
        "#,
    )
    .bind(author)
    .bind(title)
    .bind(body)
    .bind(topic)
    .bind(article_img_url)
    .bind(DEFAULT_ARTICLE_IMG_URL)
    .fetch_one(pool)
    .await?;
    Ok(article)
}

pub async fn update_article_votes(
    pool: &SqlitePool,
    article_id: i64,
    inc_votes: i64,
) -> Result<Article, RequestError> {
    let article = sqlx::query_as::<Sqlite, Article>(
        r#"
        UPDATE articles
        SET    votes = votes + $1
        WHERE  article_id = $2
        RETURNING article_id,
                  author,
                  title,
                  body,
                  topic,
                  created_at,
                  votes,
                  article_img_url
        "#,
    )
    .bind(inc_votes)
    .bind(article_id)
    .fetch_optional(pool)
    .await?;

    article.ok_or(RequestError::NotFound)
}

pub async fn delete_article(pool: &SqlitePool, article_id: i64) -> Result<(), RequestError> {
    let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
        .bind(article_id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RequestError::NotFound);
    }
    Ok(())
}
