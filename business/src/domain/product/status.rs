use super::errors::ProductError;

/// Outcome classification of a catalog operation, mirroring HTTP status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationStatus {
    Ok,
    Created,
    BadRequest,
    NotFound,
    InternalError,
}

impl OperationStatus {
    pub fn code(self) -> u16 {
        match self {
            OperationStatus::Ok => 200,
            OperationStatus::Created => 201,
            OperationStatus::BadRequest => 400,
            OperationStatus::NotFound => 404,
            OperationStatus::InternalError => 500,
        }
    }
}

impl From<&ProductError> for OperationStatus {
    fn from(error: &ProductError) -> Self {
        match error {
            ProductError::MissingProductFields
            | ProductError::NegativeAmount
            | ProductError::AlreadyExists
            | ProductError::MissingUpdateFields
            | ProductError::NameRequired => OperationStatus::BadRequest,
            ProductError::NotFound => OperationStatus::NotFound,
            ProductError::Repository(_) => OperationStatus::InternalError,
        }
    }
}
