use axum::http::StatusCode;
use quill_infra::json_error;

use crate::LogError;

pub fn log_error_to_response(err: LogError) -> axum::response::Response {
    match err {
        LogError::Poisoned => json_error(StatusCode::INTERNAL_SERVER_ERROR, "log_unavailable", err.to_string()),
    }
}
