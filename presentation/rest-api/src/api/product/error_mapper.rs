use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;
use business::domain::product::status::OperationStatus;

use crate::api::error::{IntoErrorResponse, MessageBody};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, MessageBody) {
        let status = StatusCode::from_u16(OperationStatus::from(&self).code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.to_string()))
    }
}
