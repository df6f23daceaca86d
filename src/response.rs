use serde::Serialize;
use utoipa::ToSchema;

/// Success envelope: every read endpoint answers `{"data": ...}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Message envelope: write confirmations and every error answer
/// `{"message": ...}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
