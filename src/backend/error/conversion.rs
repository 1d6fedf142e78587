/**
 * Error Conversion
 *
 * Renders backend errors as JSON HTTP responses:
 *
 * ```json
 * {
 *   "error": "Unknown collection 'grades'",
 *   "status": 404
 * }
 * ```
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!("[Http] {}", message);
        } else {
            tracing::debug!("[Http] {} {}", status.as_u16(), message);
        }

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}
