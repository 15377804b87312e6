use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::JsonResponse;

#[derive(Debug)]
pub enum RequestError {
    NotFound,
    BadRequest,
    MissingInformation,
    ServerError,
    DatabaseError(sqlx::Error),
}

#[derive(serde::Serialize)]
pub struct RequestErrorJson {
    msg: String,
}

impl RequestErrorJson {
    pub fn new(msg: &str) -> RequestErrorJson {
        RequestErrorJson {
            msg: msg.to_string(),
        }
    }
}

impl From<sqlx::Error> for RequestError {
    fn from(value: sqlx::Error) -> Self {
        Self::DatabaseError(value)
    }
}

impl IntoResponse for RequestError {
    fn into_response(self) -> axum::response::Response {
        self.to_json_response().into_response()
    }
}

impl RequestError {
    pub fn to_json_response(&self) -> JsonResponse<RequestErrorJson> {
        let (status_code, json) = match self {
            RequestError::NotFound => (StatusCode::NOT_FOUND, RequestErrorJson::new("Not found")),
            RequestError::BadRequest => (
                StatusCode::BAD_REQUEST,
                RequestErrorJson::new("Bad request"),
            ),
            RequestError::MissingInformation => (
                StatusCode::BAD_REQUEST,
                RequestErrorJson::new("Missing some required information"),
            ),
            RequestError::ServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                RequestErrorJson::new("Internal server error"),
            ),
            RequestError::DatabaseError(e) => return database_error_response(e),
        };
        (status_code, Json(json))
    }
}

/// Maps engine constraint violations onto the fixed client-facing messages.
/// Anything unrecognized is logged and collapsed to a generic 500.
fn database_error_response(error: &sqlx::Error) -> JsonResponse<RequestErrorJson> {
    if let sqlx::Error::Database(e) = error {
        if e.message().contains("FOREIGN KEY constraint failed") {
            return (
                StatusCode::NOT_FOUND,
                Json(RequestErrorJson::new("Username or article does not exist")),
            );
        }
        if e.message().contains("NOT NULL constraint failed") {
            return (
                StatusCode::BAD_REQUEST,
                Json(RequestErrorJson::new("Missing some required information")),
            );
        }
    }
    tracing::error!("database error: {}", error);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(RequestErrorJson::new("Internal server error")),
    )
}
