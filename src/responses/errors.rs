use crate::errors::ServerError;
use crate::responses::json::json_with_status;
use astra::{Body, Response};
use serde_json::json;

/// Convert a ServerError into a JSON `{"error": ...}` response.
pub fn error_to_response(err: ServerError) -> Response {
    let status = err.status();
    json_with_status(status, &json!({ "error": err.to_string() }))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
