use serde::Serialize;

use crate::models::{Article, ArticleSummary, ArticleWithCommentCount, Comment, Topic, User};

// Every success body wraps its payload under a resource-named key,
// e.g. {"topics": [...]}, {"updatedArticle": {...}}.

#[derive(Debug, Serialize)]
pub struct EndpointsWrapper {
    pub endpoints: serde_json::Value,
}

#[derive(Debug, Serialize)]
pub struct TopicsWrapper {
    pub topics: Vec<Topic>,
}

#[derive(Debug, Serialize)]
pub struct TopicWrapper {
    pub topic: Topic,
}

#[derive(Debug, Serialize)]
pub struct ArticlesWrapper {
    pub articles: Vec<ArticleSummary>,
}

#[derive(Debug, Serialize)]
pub struct ArticleWrapper {
    pub article: ArticleWithCommentCount,
}

#[derive(Debug, Serialize)]
pub struct UpdatedArticleWrapper {
    #[serde(rename = "updatedArticle")]
    pub updated_article: Article,
}

#[derive(Debug, Serialize)]
pub struct CommentsWrapper {
    pub comments: Vec<Comment>,
}

#[derive(Debug, Serialize)]
pub struct CommentWrapper {
    pub comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct PostedCommentWrapper {
    #[serde(rename = "postedComment")]
    pub posted_comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct UpdatedCommentWrapper {
    #[serde(rename = "updatedComment")]
    pub updated_comment: Comment,
}

#[derive(Debug, Serialize)]
pub struct UsersWrapper {
    pub users: Vec<User>,
}

#[derive(Debug, Serialize)]
pub struct UserWrapper {
    pub user: User,
}
