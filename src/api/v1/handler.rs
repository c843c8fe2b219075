use super::error::ApiErrorCode;
use crate::application_port::BirthdayService;
use crate::domain_port::UpsertOutcome;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warp::http::StatusCode;
use warp::{self, reject};

#[derive(Debug, Deserialize)]
pub struct RecordBirthdayRequest {
    #[serde(rename = "dateOfBirth")]
    pub date_of_birth: String,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: String,
}

pub async fn days_until_birthday(
    username: String,
    birthday_service: Arc<dyn BirthdayService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let days = birthday_service
        .days_until_birthday(&username)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    let message = if days == 0 {
        format!("Happy Birthday, {}!", username)
    } else {
        format!("Hello, {}! Your birthday is in {} days.", username, days)
    };

    Ok(warp::reply::json(&GreetingResponse { message }))
}

pub async fn record_date_of_birth(
    username: String,
    body: RecordBirthdayRequest,
    birthday_service: Arc<dyn BirthdayService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    let outcome = birthday_service
        .record_date_of_birth(&username, &body.date_of_birth)
        .await
        .map_err(ApiErrorCode::from)
        .map_err(reject::custom)?;

    let status = match outcome {
        UpsertOutcome::Created => StatusCode::CREATED,
        UpsertOutcome::Updated => StatusCode::OK,
    };

    Ok(warp::reply::with_status(warp::reply(), status))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

pub async fn health() -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&HealthResponse { status: "ok" }))
}
