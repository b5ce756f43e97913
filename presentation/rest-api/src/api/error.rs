use poem::http::StatusCode;
use poem_openapi::payload::Json;

/// Error bodies are the bare human-readable message as a JSON string.
pub type MessageBody = Json<String>;

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, MessageBody);
}
