use serde::{Deserialize, Serialize};

// Required fields are deserialized as Options so that an absent field reaches
// the database as NULL and surfaces as a not-null violation, which the error
// layer maps to "Missing some required information". Unknown extra fields are
// ignored by serde, matching the upstream API.

// Requests also derive Default: a request with no body (or a non-JSON one)
// is treated as an empty body, so the usual missing-information path applies
// instead of the framework's own extractor rejection.

// ----------------- Topic Requests -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateTopicRequest {
    pub slug: Option<String>,
    pub description: Option<String>,
}

// ----------------- Article Requests -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateArticleRequest {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
    #[serde(default)]
    pub article_img_url: Option<String>,
}

/// PATCH body for vote updates. `inc_votes` is kept as raw JSON so the
/// handler can tell "absent" (missing information) apart from "present but
/// not an integer" (bad request).
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct UpdateVotesRequest {
    pub inc_votes: Option<serde_json::Value>,
}

// ----------------- Comment Requests -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateCommentRequest {
    pub username: Option<String>,
    pub body: Option<String>,
}

// ----------------- User Requests -----------------
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct CreateUserRequest {
    pub username: Option<String>,
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}
