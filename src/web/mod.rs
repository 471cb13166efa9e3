// src/web/mod.rs
pub mod handlers;
pub mod types;

pub use types::*;

use crate::core::ReviewApiClient;
use crate::environment::EnvironmentConfig;
use anyhow::Result;
use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, routes, Request, Response, State};
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
        response.set_header(Header::new("Access-Control-Allow-Credentials", "true"));
    }
}

#[get("/pages/home")]
pub async fn home_page(
    config: &State<ServerConfig>,
) -> Result<Json<HomePageData>, PageError> {
    handlers::home_page_handler(config).await
}

#[get("/pages/recruiter/<id>")]
pub async fn recruiter_page(
    id: String,
    config: &State<ServerConfig>,
) -> Result<Json<RecruiterPageData>, PageError> {
    handlers::recruiter_page_handler(id, config).await
}

#[get("/linkedin/username?<reference>")]
pub async fn linkedin_username(reference: String) -> Json<LinkedinUsernameData> {
    handlers::linkedin_username_handler(reference).await
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
    ))
}

// Main server start function
pub async fn start_web_server(environment: EnvironmentConfig, port: u16) -> Result<()> {
    let review_client = ReviewApiClient::new(
        environment.review_api_url.clone(),
        environment.request_timeout_secs,
    )?;

    let server_config = ServerConfig { review_client };

    info!("Starting Recruiter Review API server");
    info!("Proxying review backend at {}", environment.review_api_url);

    let figment = rocket::Config::figment().merge(("port", port));

    rocket::custom(figment)
        .attach(Cors)
        .manage(server_config)
        .register("/api", catchers![bad_request, internal_error])
        .mount(
            "/api",
            routes![
                home_page,
                recruiter_page,
                linkedin_username,
                health,
                options,
            ],
        )
        .launch()
        .await?;

    Ok(())
}
