//! Application-wide constants and configuration values
//!
//! This module centralizes base URLs, defaults and environment variable names
//! so the client, config and CLI layers agree on them.

/// Default base URL of the main web API
pub const DEFAULT_API_BASE_URL: &str = "https://www.geoguessr.com";

/// Default base URL of the game server (duels, replays)
pub const DEFAULT_GAME_SERVER_URL: &str = "https://game-server.geoguessr.com";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of idle connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 16;

/// Cookie that carries the session token
pub const SESSION_COOKIE_NAME: &str = "_ncfa";

/// Number of body characters kept in malformed-response diagnostics
pub const BODY_PREVIEW_CHARS: usize = 200;

/// Number of body characters written to debug logs
pub const LOG_PREVIEW_CHARS: usize = 1024;

/// Default number of feed pages fetched by the CLI
pub const DEFAULT_FEED_PAGES: usize = 1;

/// Log file name used when no custom path is configured
pub const LOG_FILE_NAME: &str = "geoguessr_api.log";

/// Environment variable names
pub mod env_vars {
    /// Session cookie value
    pub const COOKIE: &str = "GEOGUESSR_COOKIE";

    /// Account email used by the sign-in command
    pub const EMAIL: &str = "GEOGUESSR_EMAIL";

    /// Account password used by the sign-in command
    pub const PASSWORD: &str = "GEOGUESSR_PASSWORD";

    /// Override for the web API base URL
    pub const API_BASE_URL: &str = "GEOGUESSR_API_BASE_URL";

    /// Override for the game server base URL
    pub const GAME_SERVER_URL: &str = "GEOGUESSR_GAME_SERVER_URL";

    /// Override for the log file path
    pub const LOG_FILE: &str = "GEOGUESSR_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "GEOGUESSR_HTTP_TIMEOUT";
}
