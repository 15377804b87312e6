use std::sync::Arc;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use sqlx::SqlitePool;

use crate::{
    data_formats::{
        ArticleQueryParams, ArticlesWrapper, ArticleWrapper, CommentsWrapper, CommentWrapper,
        CreateArticleRequest, CreateCommentRequest, CreateTopicRequest, CreateUserRequest,
        EndpointsWrapper, PostedCommentWrapper, TopicsWrapper, TopicWrapper,
        UpdatedArticleWrapper, UpdatedCommentWrapper, UpdateVotesRequest, UsersWrapper,
        UserWrapper,
    },
    db_helpers,
    errors::RequestError,
    JsonResponse,
};

type HandlerResult<T> = Result<JsonResponse<T>, RequestError>;

static ENDPOINTS_JSON: &str = include_str!("../endpoints.json");

/// Route parameters arrive as text; anything that does not parse as an
/// integer id is rejected before a query runs.
fn parse_id(raw: &str) -> Result<i64, RequestError> {
    raw.parse::<i64>().map_err(|_| RequestError::BadRequest)
}

/// Absent delta and non-integer delta are distinct failures.
fn extract_inc_votes(request: UpdateVotesRequest) -> Result<i64, RequestError> {
    let value = request.inc_votes.ok_or(RequestError::MissingInformation)?;
    value.as_i64().ok_or(RequestError::BadRequest)
}

/// A request with no body (or a non-JSON one) is handled as an empty body,
/// so missing fields take the usual missing-information path rather than the
/// framework's extractor rejection.
fn body_or_default<T: Default>(body: Option<Json<T>>) -> T {
    body.map(|Json(request)| request).unwrap_or_default()
}

// ----------------- Metadata Handlers -----------------

pub async fn get_api() -> HandlerResult<EndpointsWrapper> {
    let endpoints =
        serde_json::from_str(ENDPOINTS_JSON).map_err(|_| RequestError::ServerError)?;
    Ok((StatusCode::OK, Json(EndpointsWrapper { endpoints })))
}

// Everything not in the routing table collapses to a generic 500.
pub async fn unhandled_route() -> RequestError {
    RequestError::ServerError
}

// ----------------- Topic Handlers -----------------

pub async fn get_topics(
    Extension(pool): Extension<Arc<SqlitePool>>,
) -> HandlerResult<TopicsWrapper> {
    let topics = db_helpers::select_topics(&pool).await?;
    Ok((StatusCode::OK, Json(TopicsWrapper { topics })))
}

pub async fn post_topic(
    Extension(pool): Extension<Arc<SqlitePool>>,
    body: Option<Json<CreateTopicRequest>>,
) -> HandlerResult<TopicWrapper> {
    let topic = db_helpers::insert_topic(&pool, body_or_default(body)).await?;
    Ok((StatusCode::CREATED, Json(TopicWrapper { topic })))
}

// ----------------- Article Handlers -----------------

pub async fn get_articles(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Query(params): Query<ArticleQueryParams>,
) -> HandlerResult<ArticlesWrapper> {
    let articles = db_helpers::select_articles(&pool, params).await?;
    Ok((StatusCode::OK, Json(ArticlesWrapper { articles })))
}

pub async fn get_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> HandlerResult<ArticleWrapper> {
    let article_id = parse_id(&article_id)?;
    let article = db_helpers::select_article_by_id(&pool, article_id).await?;
    Ok((StatusCode::OK, Json(ArticleWrapper { article })))
}

pub async fn post_article(
    Extension(pool): Extension<Arc<SqlitePool>>,
    body: Option<Json<CreateArticleRequest>>,
) -> HandlerResult<ArticleWrapper> {
    let article = db_helpers::insert_article(&pool, body_or_default(body)).await?;
    Ok((StatusCode::CREATED, Json(ArticleWrapper { article })))
}

pub async fn patch_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    body: Option<Json<UpdateVotesRequest>>,
) -> HandlerResult<UpdatedArticleWrapper> {
    let article_id = parse_id(&article_id)?;
    let inc_votes = extract_inc_votes(body_or_default(body))?;
    let updated_article = db_helpers::update_article_votes(&pool, article_id, inc_votes).await?;
    Ok((
        StatusCode::CREATED,
        Json(UpdatedArticleWrapper { updated_article }),
    ))
}

pub async fn delete_article_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> Result<StatusCode, RequestError> {
    let article_id = parse_id(&article_id)?;
    db_helpers::delete_article(&pool, article_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- Comment Handlers -----------------

pub async fn get_comments_by_article_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
) -> HandlerResult<CommentsWrapper> {
    let article_id = parse_id(&article_id)?;
    let comments = db_helpers::select_comments_by_article_id(&pool, article_id).await?;
    Ok((StatusCode::OK, Json(CommentsWrapper { comments })))
}

pub async fn post_comment_by_article_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(article_id): Path<String>,
    body: Option<Json<CreateCommentRequest>>,
) -> HandlerResult<PostedCommentWrapper> {
    let article_id = parse_id(&article_id)?;
    let posted_comment =
        db_helpers::insert_comment(&pool, article_id, body_or_default(body)).await?;
    Ok((
        StatusCode::CREATED,
        Json(PostedCommentWrapper { posted_comment }),
    ))
}

pub async fn get_comment_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
) -> HandlerResult<CommentWrapper> {
    let comment_id = parse_id(&comment_id)?;
    let comment = db_helpers::select_comment_by_id(&pool, comment_id).await?;
    Ok((StatusCode::OK, Json(CommentWrapper { comment })))
}

pub async fn patch_comment_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
    body: Option<Json<UpdateVotesRequest>>,
) -> HandlerResult<UpdatedCommentWrapper> {
    let comment_id = parse_id(&comment_id)?;
    let inc_votes = extract_inc_votes(body_or_default(body))?;
    let updated_comment = db_helpers::update_comment_votes(&pool, comment_id, inc_votes).await?;
    Ok((
        StatusCode::CREATED,
        Json(UpdatedCommentWrapper { updated_comment }),
    ))
}

pub async fn delete_comment_by_id(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(comment_id): Path<String>,
) -> Result<StatusCode, RequestError> {
    let comment_id = parse_id(&comment_id)?;
    db_helpers::delete_comment(&pool, comment_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ----------------- User Handlers -----------------

pub async fn get_users(Extension(pool): Extension<Arc<SqlitePool>>) -> HandlerResult<UsersWrapper> {
    let users = db_helpers::select_users(&pool).await?;
    Ok((StatusCode::OK, Json(UsersWrapper { users })))
}

pub async fn post_user(
    Extension(pool): Extension<Arc<SqlitePool>>,
    body: Option<Json<CreateUserRequest>>,
) -> HandlerResult<UserWrapper> {
    let user = db_helpers::insert_user(&pool, body_or_default(body)).await?;
    Ok((StatusCode::CREATED, Json(UserWrapper { user })))
}

pub async fn get_user_by_username(
    Extension(pool): Extension<Arc<SqlitePool>>,
    Path(username): Path<String>,
) -> HandlerResult<UserWrapper> {
    let user = db_helpers::select_user_by_username(&pool, &username).await?;
    Ok((StatusCode::OK, Json(UserWrapper { user })))
}
