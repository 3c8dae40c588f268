use axum::http::StatusCode;
use quill_infra::json_error;

use crate::ServiceError;

pub fn service_error_to_response(err: ServiceError) -> axum::response::Response {
    match err {
        ServiceError::IdSpaceExhausted { .. } => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "id_exhausted", err.to_string())
        }
        ServiceError::Store(_) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable", err.to_string())
        }
    }
}
