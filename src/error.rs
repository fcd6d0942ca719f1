use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Illegal operation: {0}")]
    IllegalOperation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn illegal(msg: impl Into<String>) -> Self {
        Self::IllegalOperation(msg.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::IllegalOperation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_)
            | Self::Serialization(_)
            | Self::Configuration(_)
            | Self::Internal(_)
            | Self::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            Self::Database(ref e) => {
                tracing::error!("Database error: {}", e);
                "Database error occurred"
            }
            Self::Serialization(ref e) => {
                tracing::error!("Serialization error: {}", e);
                "Data processing error"
            }
            Self::NotFound(ref msg) => msg.as_str(),
            Self::IllegalOperation(ref msg) => msg.as_str(),
            Self::Configuration(ref msg) => msg.as_str(),
            Self::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                msg.as_str()
            }
            Self::Other(ref e) => {
                tracing::error!("Unexpected error: {}", e);
                "An unexpected error occurred"
            }
        };

        let body = Json(json!({
            "error": error_message,
            "details": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Messages shared by services and asserted on by tests.
pub mod messages {
    pub const ARTIST_NOT_FOUND: &str = "The artist with the given id was not found";
    pub const MUSEUM_NOT_FOUND: &str = "The museum with the given id was not found";
    pub const ARTWORK_NOT_FOUND: &str = "The artwork with the given id was not found";
    pub const MOVEMENT_NOT_FOUND: &str = "The artistic movement with the given id was not found";
    pub const COUNTRY_NOT_FOUND: &str = "The country with the given id was not found";
    pub const CITY_NOT_FOUND: &str = "The city with the given id was not found";
    pub const EMPLOYEE_NOT_FOUND: &str = "The employee with the given id was not found";
    pub const COMMENT_NOT_FOUND: &str = "The comment with the given id was not found";

    pub const ARTIST_MUSEUM_NOT_ASSOCIATED: &str = "The museum is not associated to the artist";
    pub const ARTIST_MOVEMENT_NOT_ASSOCIATED: &str =
        "The artistic movement is not associated to the artist";
    pub const ARTIST_ARTWORK_NOT_ASSOCIATED: &str = "The artwork is not associated to the artist";
    pub const MUSEUM_MOVEMENT_NOT_ASSOCIATED: &str =
        "The artistic movement is not associated to the museum";
    pub const MUSEUM_ARTWORK_NOT_ASSOCIATED: &str = "The artwork is not associated to the museum";
    pub const MOVEMENT_ARTWORK_NOT_ASSOCIATED: &str =
        "The artwork is not associated to the artistic movement";
    pub const CITY_COUNTRY_NOT_ASSOCIATED: &str = "The country is not associated to the city";
    pub const MUSEUM_HAS_NO_COUNTRY: &str = "The museum has no location";
    pub const MOVEMENT_HAS_NO_COUNTRY: &str = "The artistic movement has no country of origin";
    pub const EMPLOYEE_HAS_NO_MUSEUM: &str = "The employee does not work at any museum";
    pub const COMMENT_HAS_NO_ARTWORK: &str = "The comment is not attached to any artwork";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_client_statuses() {
        assert_eq!(AppError::not_found("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::illegal("x").status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn infrastructure_errors_map_to_500() {
        let db = AppError::from(sea_orm::DbErr::Custom("boom".into()));
        assert_eq!(db.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            AppError::Internal("x".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn response_carries_message_and_status() {
        let response = AppError::illegal("The name is empty").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn display_prefixes_kind() {
        assert_eq!(
            AppError::not_found(messages::ARTIST_NOT_FOUND).to_string(),
            format!("Not found: {}", messages::ARTIST_NOT_FOUND)
        );
    }
}
