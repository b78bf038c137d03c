pub mod client;
pub mod error;
pub mod models;

pub use client::{GithubClient, MAX_ISSUES, PER_PAGE};
pub use error::FetchError;
pub use models::*;
