pub mod recruiter;

pub use recruiter::{Recruiter, Review};
