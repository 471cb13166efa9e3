// src/core/review_client.rs
//! HTTP client for the external review-and-recruiter backend API

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::trace;

use crate::types::{Recruiter, Review};

const RECENT_REVIEWS_ENDPOINT: &str = "/api/v1/reviews/recent";
const REVIEWS_ENDPOINT: &str = "/api/v1/reviews";
const RECRUITER_ENDPOINT: &str = "/api/v1/recruiter";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("review service returned {status}: {body}")]
    UnexpectedStatus { status: StatusCode, body: String },
}

#[derive(Debug, Clone)]
pub struct ReviewApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ReviewApiClient {
    /// Create a new client for the backend at `base_url`
    pub fn new(base_url: String, timeout_secs: u64) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Most recent reviews across all recruiters, newest first
    pub async fn recent_reviews(&self, limit: u32) -> Result<Vec<Review>, ApiError> {
        self.get_json(RECENT_REVIEWS_ENDPOINT, &recent_reviews_query(limit))
            .await
    }

    /// A single recruiter by id
    pub async fn recruiter(&self, id: &str) -> Result<Recruiter, ApiError> {
        self.get_json(&recruiter_endpoint(id), &[]).await
    }

    /// Reviews left for one recruiter
    pub async fn reviews_for_recruiter(
        &self,
        recruiter_id: &str,
        limit: u32,
    ) -> Result<Vec<Review>, ApiError> {
        self.get_json(REVIEWS_ENDPOINT, &reviews_query(recruiter_id, limit))
            .await
    }

    async fn get_json<R>(&self, endpoint: &str, query: &[(&str, String)]) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        trace!("Calling review service: {}", url);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await?;

        let status = response.status();
        trace!("Response status: {}", status);

        if status.is_success() {
            Ok(response.json::<R>().await?)
        } else {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            Err(ApiError::UnexpectedStatus { status, body })
        }
    }
}

fn recruiter_endpoint(id: &str) -> String {
    format!("{}/{}", RECRUITER_ENDPOINT, id)
}

fn recent_reviews_query(limit: u32) -> Vec<(&'static str, String)> {
    vec![("limit", limit.to_string())]
}

fn reviews_query(recruiter_id: &str, limit: u32) -> Vec<(&'static str, String)> {
    vec![
        ("recruiterId", recruiter_id.to_string()),
        ("limit", limit.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_slash_from_base_url() {
        let client = ReviewApiClient::new("http://127.0.0.1:8000/".to_string(), 5).unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn keeps_base_url_without_trailing_slash() {
        let client = ReviewApiClient::new("https://api.recruview.app".to_string(), 5).unwrap();
        assert_eq!(client.base_url, "https://api.recruview.app");
    }

    #[test]
    fn builds_recruiter_endpoint() {
        assert_eq!(recruiter_endpoint("rec-42"), "/api/v1/recruiter/rec-42");
    }

    #[test]
    fn builds_review_queries() {
        assert_eq!(
            recent_reviews_query(6),
            vec![("limit", "6".to_string())]
        );
        assert_eq!(
            reviews_query("rec-42", 10),
            vec![
                ("recruiterId", "rec-42".to_string()),
                ("limit", "10".to_string()),
            ]
        );
    }

    #[test]
    fn renders_unexpected_status_with_body() {
        let err = ApiError::UnexpectedStatus {
            status: StatusCode::NOT_FOUND,
            body: "no such recruiter".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "review service returned 404 Not Found: no such recruiter"
        );
    }
}
