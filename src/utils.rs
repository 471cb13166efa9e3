// src/utils.rs
use regex::Regex;
use std::sync::OnceLock;

// Accepted profile reference forms:
// - linkedin.com/in/username
// - www.linkedin.com/in/username
// - https://linkedin.com/in/username
// - https://www.linkedin.com/in/username/
fn linkedin_profile_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"(?i)(?:https?://)?(?:www\.)?linkedin\.com/in/([A-Za-z0-9_-]+)/?")
            .expect("linkedin profile regex should compile")
    })
}

/// Extract the canonical username from a user-supplied LinkedIn profile
/// reference. Inputs that do not look like a profile URL are assumed to
/// already be a bare username and are returned trimmed but otherwise
/// untouched.
pub fn extract_linkedin_username(input: &str) -> String {
    let input = input.trim();

    if let Some(captures) = linkedin_profile_regex().captures(input) {
        if let Some(username) = captures.get(1) {
            return username.as_str().to_string();
        }
    }

    input.to_string()
}

/// Canonical profile URL for a username
pub fn linkedin_profile_url(username: &str) -> String {
    format!("https://www.linkedin.com/in/{}", username)
}
