use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use crate::protocol::MessageResponse;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Doctor not found")]
    DoctorNotFound,
    #[error("Appointment not found")]
    AppointmentNotFound,
    #[error("All fields are required (missing: {})", .0.join(", "))]
    Validation(Vec<&'static str>),
    #[error("Slot is not available")]
    SlotUnavailable,
    #[error("Invalid request: {0}")]
    BadRequest(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::DoctorNotFound | ApiError::AppointmentNotFound => StatusCode::NOT_FOUND,
            ApiError::Validation(_) | ApiError::SlotUnavailable | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(MessageResponse::new(self))
    }
}
