use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing client settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the web API. Should include the https:// prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Base URL of the game server that serves duels and replays.
    #[serde(default = "default_game_server_url")]
    pub game_server_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Name of the cookie the session token is sent in.
    #[serde(default = "default_session_cookie_name")]
    pub session_cookie_name: String,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_game_server_url() -> String {
    constants::DEFAULT_GAME_SERVER_URL.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_session_cookie_name() -> String {
    constants::SESSION_COOKIE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            game_server_url: default_game_server_url(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            session_cookie_name: default_session_cookie_name(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error: the built-in defaults are used.
    /// Environment variables override config file values.
    ///
    /// # Environment Variables
    /// - `GEOGUESSR_API_BASE_URL` - Override web API base URL
    /// - `GEOGUESSR_GAME_SERVER_URL` - Override game server base URL
    /// - `GEOGUESSR_LOG_FILE` - Override log file path
    /// - `GEOGUESSR_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    ///
    /// # Returns
    /// * `Ok(Config)` - Loaded, overridden and validated configuration
    /// * `Err(AppError)` - The file could not be read or parsed, or validation failed
    ///
    /// # Notes
    /// - Config file is stored in the platform-specific config directory
    /// - Environment variables take precedence over config file values
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Config::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration from a custom file path without applying
    /// environment overrides.
    ///
    /// # Returns
    /// * `Ok(Config)` - Parsed configuration, with defaults for absent keys
    /// * `Err(AppError::Io)` - The file does not exist or cannot be read
    /// * `Err(AppError::TomlDeserialize)` - The file is not valid config TOML
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Replaces values with those found in the environment.
    ///
    /// # Notes
    /// - Only variables that are set replace a value
    /// - Unparseable timeout values are ignored
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(game_server_url) = std::env::var(env_vars::GAME_SERVER_URL) {
            self.game_server_url = game_server_url;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError::Config)` - A base URL, the timeout or the log path is invalid
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_base_url,
            &self.game_server_url,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Returns
    /// * `Ok(())` - Successfully saved configuration
    /// * `Err(AppError)` - Error occurred during save
    ///
    /// # Notes
    /// - Creates the config directory if it doesn't exist
    /// - Uses TOML format for storage
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    ///
    /// # Notes
    /// - Uses the platform config directory (e.g., ~/.config on Linux)
    /// - Falls back to the current directory if there is none
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    ///
    /// # Returns
    /// String containing the path of the `logs` directory next to the config file
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Renders the current configuration for the `list-config` command.
    ///
    /// # Arguments
    /// * `config_path` - Where the config file is expected
    /// * `file_exists` - Whether that file was found, so defaults can be flagged
    ///
    /// # Returns
    /// One labelled block per setting, separated by horizontal rules
    pub fn describe(&self, config_path: &str, file_exists: bool) -> String {
        let log_location = match &self.log_file_path {
            Some(custom_path) => custom_path.clone(),
            None => format!(
                "{}/{} (default location)",
                get_log_dir_path(),
                constants::LOG_FILE_NAME
            ),
        };
        let source = if file_exists {
            config_path.to_string()
        } else {
            format!("{config_path} (not found, using defaults)")
        };

        [
            ("Config Location", source),
            ("API Base URL", self.api_base_url.clone()),
            ("Game Server URL", self.game_server_url.clone()),
            ("HTTP Timeout", format!("{} seconds", self.http_timeout_seconds)),
            ("Session Cookie", self.session_cookie_name.clone()),
            ("Log File Location", log_location),
        ]
        .iter()
        .map(|(label, value)| format!("{label}:\n{value}"))
        .collect::<Vec<_>>()
        .join("\n────────────────────────────────────\n")
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if needed and normalizes both base URLs
    /// to carry an https:// prefix and no trailing slash.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            api_base_url: normalize_base_url(&self.api_base_url),
            game_server_url: normalize_base_url(&self.game_server_url),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

/// Ensures a base URL has a scheme and no trailing slash. Plain `http://`
/// is kept for local addresses and upgraded otherwise.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("https://") {
        return trimmed.to_string();
    }
    let host = trimmed.trim_start_matches("http://");
    if host.starts_with("localhost") || host.starts_with("127.0.0.1") {
        format!("http://{host}")
    } else {
        format!("https://{host}")
    }
}
