use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, HotelError>;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ResponseError for HotelError {
    fn status_code(&self) -> StatusCode {
        match self {
            HotelError::Decode(_) | HotelError::Validation(_) => StatusCode::BAD_REQUEST,
            HotelError::NotFound(_) => StatusCode::NOT_FOUND,
            HotelError::Conflict(_) => StatusCode::CONFLICT,
            HotelError::Storage(_) | HotelError::Migration(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Driver messages stay in the log, not in the response body.
        let message = match self {
            HotelError::Storage(e) => {
                log::error!("storage failure: {}", e);
                "Database error".to_string()
            }
            HotelError::Migration(e) => {
                log::error!("migration failure: {}", e);
                "Database error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse { error: message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn maps_kinds_to_status_codes() {
        assert_eq!(
            HotelError::Decode("bad json".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HotelError::Validation("invalid format".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            HotelError::NotFound("Guest not found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            HotelError::Conflict("Room 101 is not available".into()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            HotelError::Storage(sqlx::Error::RowNotFound).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn storage_errors_hide_driver_detail() {
        let resp = HotelError::Storage(sqlx::Error::PoolTimedOut).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Database error");
    }

    #[actix_web::test]
    async fn domain_errors_carry_their_message() {
        let resp = HotelError::NotFound("Guest 7 not found".into()).error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "Guest 7 not found");
    }
}
