use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiMessage;

/// Every failure path in the API funnels through this type; handlers and
/// repositories return [`AppResult`] and the `IntoResponse` impl below is the
/// single place where failures become HTTP responses.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed required parameter. The body text is the wire
    /// contract, so the variant renders verbatim.
    #[error("KEY_ERROR")]
    KeyError,

    /// Listing request asked for more than [`crate::routes::params::MAX_LIST_LIMIT`] rows.
    #[error("Too Many Datas")]
    TooManyDatas,

    #[error("{0}")]
    BadRequest(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Not Found")]
    NotFound,

    #[error("Database error")]
    Db(#[from] sqlx::Error),

    #[error("Database error")]
    Orm(#[from] sea_orm::DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::KeyError | AppError::TooManyDatas | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Db(_) | AppError::Orm(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Database failures must not be swallowed on their way out; log them
        // here with the cause before they collapse into a generic 500.
        match &self {
            AppError::Db(err) => tracing::error!(error = %err, "database error"),
            AppError::Orm(err) => tracing::error!(error = %err, "orm error"),
            AppError::Internal(err) => tracing::error!(error = %err, "internal error"),
            _ => {}
        }

        let body = ApiMessage::new(self.to_string());
        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::AppError;

    #[test]
    fn guard_messages_match_the_wire_contract() {
        assert_eq!(AppError::TooManyDatas.to_string(), "Too Many Datas");
        assert_eq!(AppError::KeyError.to_string(), "KEY_ERROR");
        assert_eq!(
            AppError::BadRequest("amount must be greater than 0".into()).to_string(),
            "amount must be greater than 0"
        );
    }
}
