// src/web/handlers/page_handlers.rs
use crate::core::ApiError;
use crate::utils::{extract_linkedin_username, linkedin_profile_url};
use crate::web::types::{
    HomePageData, LinkedinUsernameData, PageError, RecruiterPageData, ServerConfig,
};
use rocket::serde::json::Json;
use rocket::State;
use tracing::{error, info, warn};

const HOME_RECENT_REVIEWS_LIMIT: u32 = 6;
const RECRUITER_REVIEWS_LIMIT: u32 = 10;

pub async fn home_page_handler(
    config: &State<ServerConfig>,
) -> Result<Json<HomePageData>, PageError> {
    match config
        .review_client
        .recent_reviews(HOME_RECENT_REVIEWS_LIMIT)
        .await
    {
        Ok(reviews) => Ok(Json(HomePageData { reviews })),
        Err(err @ ApiError::UnexpectedStatus { .. }) => {
            error!("Recent reviews fetch failed: {}", err);
            Err(PageError::from_upstream(
                &err,
                "Failed to fetch reviews".to_string(),
                "REVIEWS_FETCH_FAILED",
            ))
        }
        Err(err) => {
            error!("Error fetching reviews: {}", err);
            Err(PageError::internal("Failed to load reviews".to_string()))
        }
    }
}

pub async fn recruiter_page_handler(
    id: String,
    config: &State<ServerConfig>,
) -> Result<Json<RecruiterPageData>, PageError> {
    info!("Loading recruiter page for: {}", id);

    let recruiter = match config.review_client.recruiter(&id).await {
        Ok(recruiter) => recruiter,
        Err(err @ ApiError::UnexpectedStatus { .. }) => {
            error!("Recruiter fetch failed for {}: {}", id, err);
            return Err(PageError::from_upstream(
                &err,
                "Recruiter not found".to_string(),
                "RECRUITER_NOT_FOUND",
            ));
        }
        Err(err) => {
            error!("Error loading recruiter {}: {}", id, err);
            return Err(PageError::internal(format!(
                "Failed to load recruiter data: {}",
                err
            )));
        }
    };

    // A broken reviews fetch does not take the whole page down
    let reviews = match config
        .review_client
        .reviews_for_recruiter(&id, RECRUITER_REVIEWS_LIMIT)
        .await
    {
        Ok(reviews) => reviews,
        Err(err) => {
            warn!("Reviews fetch failed for {}, returning empty list: {}", id, err);
            Vec::new()
        }
    };

    Ok(Json(RecruiterPageData { recruiter, reviews }))
}

pub async fn linkedin_username_handler(reference: String) -> Json<LinkedinUsernameData> {
    let username = extract_linkedin_username(&reference);
    let profile_url = linkedin_profile_url(&username);

    Json(LinkedinUsernameData {
        username,
        profile_url,
    })
}
