use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Why a booking or availability request was refused. All of these are
/// answered to the caller and never retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Incomplete request")]
    MalformedRequest,

    #[error("Invalid date, expected YYYY-MM-DD")]
    InvalidDate,

    #[error("Invalid time format, expected HH:MM")]
    InvalidTimeFormat,

    #[error("Time is outside business hours or the range is invalid")]
    OutOfHours,

    #[error("The requested time is already taken")]
    SlotTaken,
}

impl RejectionReason {
    pub fn kind(&self) -> &'static str {
        match self {
            RejectionReason::MalformedRequest => "malformed_request",
            RejectionReason::InvalidDate => "invalid_date",
            RejectionReason::InvalidTimeFormat => "invalid_time_format",
            RejectionReason::OutOfHours => "out_of_hours",
            RejectionReason::SlotTaken => "slot_taken",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RejectionReason::SlotTaken => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for RejectionReason {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
