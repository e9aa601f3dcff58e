pub mod a001_pizza;
pub mod a002_accompaniment;
pub mod a003_promotion;
pub mod a004_client;
pub mod a005_order;
pub mod a006_ingredient;
pub mod dashboards;
pub mod reports;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::shared::error::PosError;

impl PosError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PosError::Validation(_) => StatusCode::BAD_REQUEST,
            PosError::NotFound(_) => StatusCode::NOT_FOUND,
            PosError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PosError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Текстовый ответ (чеки, отчёты)
pub(crate) fn plain_text(body: String) -> Response {
    (
        [(axum::http::header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            PosError::validation("x").into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            PosError::not_found("x").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            PosError::Storage("disk".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
