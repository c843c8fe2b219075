use crate::application_port::BirthdayError;
use serde::Serialize;
use std::convert::Infallible;
use thiserror::Error;
use tracing::warn;
use warp::http::StatusCode;
use warp::{Rejection, reject};

/// Body returned on every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub message: String,
}

#[derive(Debug, Clone, Error)]
pub enum ApiErrorCode {
    #[error("Invalid username, must contain only letters")]
    InvalidUsername,
    #[error("Invalid date format, must be YYYY-MM-DD")]
    InvalidDate,
    #[error("User not found")]
    UserNotFound,
    #[error("Service unavailable")]
    ServiceUnavailable,
}

impl ApiErrorCode {
    fn status(&self) -> StatusCode {
        match self {
            ApiErrorCode::InvalidUsername | ApiErrorCode::InvalidDate => StatusCode::BAD_REQUEST,
            ApiErrorCode::UserNotFound => StatusCode::NOT_FOUND,
            ApiErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl reject::Reject for ApiErrorCode {}

impl From<BirthdayError> for ApiErrorCode {
    fn from(error: BirthdayError) -> Self {
        match error {
            BirthdayError::InvalidUsername => ApiErrorCode::InvalidUsername,
            BirthdayError::InvalidDate => ApiErrorCode::InvalidDate,
            BirthdayError::UserNotFound => ApiErrorCode::UserNotFound,
            BirthdayError::Store(e) => {
                warn!("store failure: {}", e);
                ApiErrorCode::ServiceUnavailable
            }
        }
    }
}

pub async fn recover_error(err: Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, message) = if let Some(err) = err.find::<ApiErrorCode>() {
        (err.status(), err.to_string())
    } else if err
        .find::<warp::filters::body::BodyDeserializeError>()
        .is_some()
    {
        (StatusCode::BAD_REQUEST, "Invalid request body".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed".to_string(),
        )
    } else if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found".to_string())
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Unhandled error: {:?}", err),
        )
    };

    let json = warp::reply::json(&ErrorMessage { message });
    Ok(warp::reply::with_status(json, status))
}
