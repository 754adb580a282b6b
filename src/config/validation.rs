use crate::error::AppError;
use std::path::Path;
use url::Url;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Both base URLs must parse as absolute http(s) URLs without query or fragment
/// - HTTP timeout must be positive
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    api_base_url: &str,
    game_server_url: &str,
    http_timeout_seconds: u64,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    validate_base_url("API base URL", api_base_url)?;
    validate_base_url("Game server URL", game_server_url)?;

    if http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least one second",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

fn validate_base_url(label: &str, value: &str) -> Result<(), AppError> {
    if value.is_empty() {
        return Err(AppError::config_error(format!("{label} cannot be empty")));
    }

    let url = Url::parse(value)
        .map_err(|e| AppError::config_error(format!("{label} '{value}' is invalid: {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(AppError::config_error(format!(
            "{label} must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(AppError::config_error(format!(
            "{label} must not contain a query or fragment"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_configs() {
        assert!(
            validate_config(
                "https://www.geoguessr.com",
                "https://game-server.geoguessr.com",
                30,
                &None
            )
            .is_ok()
        );
        assert!(validate_config("http://localhost:8080", "http://127.0.0.1:9000", 1, &None).is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        let game = "https://game-server.geoguessr.com";
        assert!(validate_config("", game, 30, &None).is_err());
        assert!(validate_config("www.geoguessr.com", game, 30, &None).is_err());
        assert!(validate_config("ftp://www.geoguessr.com", game, 30, &None).is_err());
        assert!(validate_config("https://www.geoguessr.com?x=1", game, 30, &None).is_err());
        assert!(validate_config("https://www.geoguessr.com", game, 0, &None).is_err());
        assert!(
            validate_config("https://www.geoguessr.com", game, 30, &Some(String::new())).is_err()
        );
    }

    #[test]
    fn test_log_directory_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("client.log");
        let log_path = log_path.to_string_lossy().to_string();

        validate_config(
            "https://www.geoguessr.com",
            "https://game-server.geoguessr.com",
            30,
            &Some(log_path),
        )
        .unwrap();

        assert!(temp_dir.path().join("logs").exists());
    }
}
