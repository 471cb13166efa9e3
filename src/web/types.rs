// src/web/types.rs
use rocket::http::{ContentType, Status};
use rocket::response::{self, Responder};
use rocket::serde::Serialize;
use rocket::{Request, Response};

use crate::core::{ApiError, ReviewApiClient};
use crate::types::{Recruiter, Review};

pub struct ServerConfig {
    pub review_client: ReviewApiClient,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct HomePageData {
    pub reviews: Vec<Review>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct RecruiterPageData {
    pub recruiter: Recruiter,
    pub reviews: Vec<Review>,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
#[serde(rename_all = "camelCase")]
pub struct LinkedinUsernameData {
    pub username: String,
    pub profile_url: String,
}

#[derive(Serialize)]
#[serde(crate = "rocket::serde")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub error_code: String,
}

impl ErrorResponse {
    pub fn new(error: String, error_code: String) -> Self {
        Self {
            success: false,
            error,
            error_code,
        }
    }
}

/// A page-load failure: an HTTP status plus a JSON error body
pub struct PageError {
    pub status: Status,
    pub body: ErrorResponse,
}

impl PageError {
    pub fn new(status: Status, error: String, error_code: &str) -> Self {
        Self {
            status,
            body: ErrorResponse::new(error, error_code.to_string()),
        }
    }

    pub fn internal(error: String) -> Self {
        Self::new(Status::InternalServerError, error, "INTERNAL_ERROR")
    }

    pub fn from_upstream(err: &ApiError, error: String, error_code: &str) -> Self {
        Self::new(upstream_status(err), error, error_code)
    }
}

/// Status a failed backend fetch maps to: non-success upstream statuses
/// pass through, transport failures become 500
pub fn upstream_status(err: &ApiError) -> Status {
    match err {
        ApiError::UnexpectedStatus { status, .. } => Status::new(status.as_u16()),
        ApiError::Http(_) => Status::InternalServerError,
    }
}

impl<'r> Responder<'r, 'static> for PageError {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let body = rocket::serde::json::serde_json::to_vec(&self.body)
            .map_err(|_| Status::InternalServerError)?;

        Response::build()
            .status(self.status)
            .header(ContentType::JSON)
            .sized_body(body.len(), std::io::Cursor::new(body))
            .ok()
    }
}
