use sqlx::{Sqlite, SqlitePool};

use crate::data_formats::CreateTopicRequest;
use crate::errors::RequestError;
use crate::models::Topic;

pub async fn select_topics(pool: &SqlitePool) -> Result<Vec<Topic>, RequestError> {
    let topics = sqlx::query_as::<Sqlite, Topic>("SELECT slug, description FROM topics")
        .fetch_all(pool)
        .await?;
    // An empty topics table is treated as an error, not a valid empty list.
    if topics.is_empty() {
        return Err(RequestError::NotFound);
    }
    Ok(topics)
}

pub async fn insert_topic(
    pool: &SqlitePool,
    CreateTopicRequest { slug, description }: CreateTopicRequest,
) -> Result<Topic, RequestError> {
    let topic = sqlx::query_as::<Sqlite, Topic>(
        r#"
        INSERT INTO topics (slug, description)
        VALUES ($1, $2)
        RETURNING slug, description
        "#,
    )
    .bind(slug)
    .bind(description)
    .fetch_one(pool)
    .await?;
    Ok(topic)
}
