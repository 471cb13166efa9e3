//! Wire models for the review backend API, camelCase on the wire

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recruiter {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub linkedin_username: String,
    pub job_title: Option<String>,
    pub image_url: Option<String>,
    pub rating: f64,
    pub current_company: Option<String>,
    pub verified: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub recruiter_id: String,
    pub created_at: DateTime<Utc>,
    pub rating: i32,
    pub description: String,
    pub thumbs_down_count: i64,
    pub thumbs_up_count: i64,
    pub recruiter_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_recruiter_payload() {
        let json = r#"{
            "id": "rec-42",
            "createdAt": "2025-11-03T09:15:00Z",
            "name": "Jane Doe",
            "firstName": "Jane",
            "lastName": "Doe",
            "linkedinUsername": "jane-doe123",
            "jobTitle": "Technical Recruiter",
            "imageUrl": null,
            "rating": 4.2,
            "currentCompany": "Acme",
            "verified": true
        }"#;

        let recruiter: Recruiter = serde_json::from_str(json).unwrap();
        assert_eq!(recruiter.id, "rec-42");
        assert_eq!(recruiter.linkedin_username, "jane-doe123");
        assert_eq!(recruiter.job_title.as_deref(), Some("Technical Recruiter"));
        assert_eq!(recruiter.image_url, None);
        assert!(recruiter.verified);
    }

    #[test]
    fn deserializes_review_without_recruiter_name() {
        let json = r#"{
            "id": "rev-7",
            "recruiterId": "rec-42",
            "createdAt": "2025-11-04T18:30:00Z",
            "rating": 5,
            "description": "Responsive and honest about the role.",
            "thumbsDownCount": 0,
            "thumbsUpCount": 3
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        assert_eq!(review.recruiter_id, "rec-42");
        assert_eq!(review.rating, 5);
        assert_eq!(review.recruiter_name, None);
    }

    #[test]
    fn reserializes_in_camel_case() {
        let json = r#"{
            "id": "rev-7",
            "recruiterId": "rec-42",
            "createdAt": "2025-11-04T18:30:00Z",
            "rating": 4,
            "description": "ok",
            "thumbsDownCount": 1,
            "thumbsUpCount": 2,
            "recruiterName": "Jane Doe"
        }"#;

        let review: Review = serde_json::from_str(json).unwrap();
        let value = serde_json::to_value(&review).unwrap();
        assert_eq!(value["recruiterId"], "rec-42");
        assert_eq!(value["thumbsUpCount"], 2);
        assert_eq!(value["recruiterName"], "Jane Doe");
    }
}
