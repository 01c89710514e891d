use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("failed to encode record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("store connection poisoned")]
    Poisoned,
}

#[derive(Debug, thiserror::Error)]
pub enum FulfillmentError {
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),

    #[error("missing required slot: {0}")]
    MissingSlot(&'static str),

    #[error("failed to write record: {0}")]
    StoreWrite(#[from] StoreError),
}

impl IntoResponse for FulfillmentError {
    fn into_response(self) -> Response {
        let status = match &self {
            FulfillmentError::UnsupportedIntent(_) => StatusCode::BAD_REQUEST,
            FulfillmentError::MissingSlot(_) => StatusCode::UNPROCESSABLE_ENTITY,
            FulfillmentError::StoreWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
