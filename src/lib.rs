//! Typed GeoGuessr Web API Client
//!
//! This library provides a single, parameterized way to call the GeoGuessr
//! web API: endpoints are static descriptors, responses decode into typed
//! shapes, and every failure surfaces as a classified [`ApiError`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use geoguessr_api::api::{ApiClient, Credentials, RequestParams, catalog};
//! use geoguessr_api::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = ApiClient::from_config(&config)?;
//!     let credentials = Credentials::new(std::env::var("GEOGUESSR_COOKIE").unwrap_or_default());
//!
//!     // Challenge leaderboard
//!     let params = RequestParams::new().path("token", "6G9h2UPctmUmUtaa");
//!     let scores = client
//!         .invoke(&catalog::CHALLENGE_HIGHSCORES, &params, Some(&credentials))
//!         .await?;
//!     for (player, score) in scores.ranking() {
//!         println!("{} {:?}", player.nick, score);
//!     }
//!
//!     // Friends' activity, two pages at most
//!     let pages = client
//!         .collect_pages(&catalog::FRIENDS_FEED, &RequestParams::new(), Some(&credentials), 2)
//!         .await?;
//!     println!("{} feed pages", pages.len());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use api::{ApiClient, Credentials, Endpoint, Paginated, RequestParams, catalog};
pub use config::Config;
pub use error::{ApiError, AppError, TransportFailureKind};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
