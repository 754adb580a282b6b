use crate::cli::Command;
use geoguessr_api::api::{ApiClient, Credentials, RequestParams, Transport, catalog, extract_token};
use geoguessr_api::constants::env_vars;
use geoguessr_api::models::{SignInRequest, StreakGameSettings};
use geoguessr_api::{ApiError, AppError, Config};
use serde::Serialize;
use serde_json::{Value, json};
use std::path::Path;
use tracing::info;

fn to_json<T: Serialize>(value: &T) -> Result<Value, AppError> {
    Ok(serde_json::to_value(value)?)
}

/// Runs one API command and returns what should be printed.
pub async fn run_api_command<T: Transport>(
    command: &Command,
    client: &ApiClient<T>,
    credentials: Option<&Credentials>,
) -> Result<Value, AppError> {
    let none = RequestParams::new();

    match command {
        Command::Profile => {
            to_json(&client.invoke(&catalog::PROFILE, &none, credentials).await?)
        }
        Command::AuthStatus => auth_status(client, credentials).await,
        Command::SearchUsers { query } => {
            let params = search_params(catalog::SEARCH_USERS.name, query)?;
            to_json(&client.invoke(&catalog::SEARCH_USERS, &params, credentials).await?)
        }
        Command::SearchMaps { query } => {
            let params = search_params(catalog::SEARCH_MAPS.name, query)?;
            to_json(&client.invoke(&catalog::SEARCH_MAPS, &params, credentials).await?)
        }
        Command::BrowseMaps { category } => {
            let endpoint = catalog::browse_maps(*category);
            to_json(&client.invoke(endpoint, &none, credentials).await?)
        }
        Command::Challenge { token } => {
            let params = token_params(token);
            to_json(&client.invoke(&catalog::CHALLENGE, &params, credentials).await?)
        }
        Command::Highscores { token } => {
            let params = token_params(token);
            let scores = client
                .invoke(&catalog::CHALLENGE_HIGHSCORES, &params, credentials)
                .await?;
            info!("Leaderboard has {} entries", scores.items.len());
            to_json(&scores)
        }
        Command::Game { token } => {
            let params = token_params(token);
            to_json(&client.invoke(&catalog::GAME, &params, credentials).await?)
        }
        Command::CreateStreak { preset, time_limit } => {
            let settings = StreakGameSettings {
                time_limit: time_limit.unwrap_or(preset.settings().time_limit),
                ..preset.settings()
            };
            let params = RequestParams::new().json_body(&settings)?;
            let game = client
                .invoke(&catalog::CREATE_STREAK_GAME, &params, credentials)
                .await?;
            info!("Created streak game {}", game.game_url(client.api_base_url()));
            to_json(&game)
        }
        Command::Duel { game_id } => {
            let params = RequestParams::new().path("gameId", game_id.trim());
            to_json(&client.invoke(&catalog::DUEL, &params, credentials).await?)
        }
        Command::Replay {
            player_id,
            duel_id,
            round_number,
        } => {
            let params = RequestParams::new()
                .path("playerId", player_id.trim())
                .path("duelId", duel_id.trim())
                .path("roundNumber", round_number.to_string());
            to_json(&client.invoke(&catalog::DUEL_REPLAY, &params, credentials).await?)
        }
        Command::Friends => {
            to_json(&client.invoke(&catalog::FRIENDS, &none, credentials).await?)
        }
        Command::Feed { pages } => {
            let pages = client
                .collect_pages(&catalog::FRIENDS_FEED, &none, credentials, *pages)
                .await?;
            let entries: Vec<_> = pages.into_iter().flat_map(|page| page.entries).collect();
            info!("Fetched {} feed entries", entries.len());
            to_json(&entries)
        }
        Command::Subscription => {
            match client.invoke(&catalog::SUBSCRIPTION, &none, credentials).await {
                Ok(subscription) => to_json(&subscription),
                Err(e) if e.is_not_found() => {
                    info!("Account has no subscription");
                    Ok(json!({ "subscription": null }))
                }
                Err(e) => Err(e.into()),
            }
        }
        Command::Plans => {
            to_json(&client.invoke(&catalog::SUBSCRIPTION_PLANS, &none, credentials).await?)
        }
        Command::SignIn => {
            let request = sign_in_request_from_env()?;
            let params = RequestParams::new().json_body(&request)?;
            to_json(&client.invoke(&catalog::SIGN_IN, &params, None).await?)
        }
        Command::Endpoints | Command::ListConfig | Command::Config { .. } => Err(
            AppError::config_error("local command passed to the API command runner"),
        ),
    }
}

/// Reports whether the credentials are accepted. Only authentication
/// failures count as "not authenticated"; anything else is an error.
async fn auth_status<T: Transport>(
    client: &ApiClient<T>,
    credentials: Option<&Credentials>,
) -> Result<Value, AppError> {
    match client
        .invoke(&catalog::PROFILE, &RequestParams::new(), credentials)
        .await
    {
        Ok(profile) => Ok(json!({
            "authenticated": true,
            "nick": profile.user.nick,
            "userId": profile.user.id,
            "email": profile.email,
            "isProUser": profile.user.is_pro_user,
            "level": profile.user.progress.level,
        })),
        Err(ApiError::Unauthenticated { status, .. }) => Ok(json!({
            "authenticated": false,
            "status": status,
        })),
        Err(e) => Err(e.into()),
    }
}

fn search_params(endpoint_name: &str, query: &str) -> Result<RequestParams, ApiError> {
    let query = query.trim();
    if query.is_empty() {
        return Err(ApiError::malformed_request(
            endpoint_name,
            "search query cannot be empty",
        ));
    }
    Ok(RequestParams::new().query("q", query))
}

fn token_params(token_or_url: &str) -> RequestParams {
    RequestParams::new().path("token", extract_token(token_or_url))
}

fn sign_in_request_from_env() -> Result<SignInRequest, AppError> {
    let email = std::env::var(env_vars::EMAIL).map_err(|_| {
        AppError::config_error(format!("{} environment variable not set", env_vars::EMAIL))
    })?;
    let password = std::env::var(env_vars::PASSWORD).map_err(|_| {
        AppError::config_error(format!(
            "{} environment variable not set",
            env_vars::PASSWORD
        ))
    })?;
    Ok(SignInRequest::new(email, password))
}

/// Lists the endpoint catalog.
pub fn handle_endpoints_command() -> Result<Value, AppError> {
    to_json(&catalog::all())
}

/// Renders the current configuration.
pub async fn handle_list_config_command() -> Result<String, AppError> {
    let config = Config::load().await?;
    let config_path = Config::get_config_path();
    let exists = Path::new(&config_path).exists();
    Ok(config.describe(&config_path, exists))
}

/// Applies `config` subcommand changes and saves them.
pub async fn handle_config_update_command(command: &Command) -> Result<String, AppError> {
    let Command::Config {
        api_base_url,
        game_server_url,
        http_timeout,
        log_file_path,
        clear_log_file,
    } = command
    else {
        return Err(AppError::config_error("not a config command"));
    };

    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    apply_config_changes(
        &mut config,
        api_base_url.as_deref(),
        game_server_url.as_deref(),
        *http_timeout,
        log_file_path.as_deref(),
        *clear_log_file,
    );
    config.validate()?;
    config.save_to_path(&config_path).await?;

    Ok(format!("Config updated successfully! ({config_path})"))
}

fn apply_config_changes(
    config: &mut Config,
    api_base_url: Option<&str>,
    game_server_url: Option<&str>,
    http_timeout: Option<u64>,
    log_file_path: Option<&str>,
    clear_log_file: bool,
) {
    if let Some(url) = api_base_url {
        config.api_base_url = url.to_string();
    }
    if let Some(url) = game_server_url {
        config.game_server_url = url.to_string();
    }
    if let Some(timeout) = http_timeout {
        config.http_timeout_seconds = timeout;
    }
    if let Some(path) = log_file_path {
        config.log_file_path = Some(path.to_string());
    } else if clear_log_file {
        config.log_file_path = None;
    }
}
