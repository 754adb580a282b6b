use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use geoguessr_api::constants::{DEFAULT_FEED_PAGES, env_vars};
use geoguessr_api::models::{MapCategory, StreakPreset};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// GeoGuessr API client
///
/// Calls the GeoGuessr web API and prints the typed response as JSON.
///
/// Most commands need your session cookie: copy the value of the `_ncfa`
/// cookie from a logged-in browser and pass it with --cookie or the
/// GEOGUESSR_COOKIE environment variable.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Session cookie value (`_ncfa`).
    #[arg(long, global = true, env = env_vars::COOKIE, hide_env_values = true, help_heading = "Authentication")]
    pub cookie: Option<String>,

    /// Echo logs to stderr in addition to the log file.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show your own profile
    Profile,

    /// Check whether the session cookie is still valid
    AuthStatus,

    /// Search users by nick
    SearchUsers { query: String },

    /// Search maps by name or keyword (no cookie needed)
    SearchMaps { query: String },

    /// List curated maps (no cookie needed)
    BrowseMaps {
        #[arg(value_enum, default_value_t = MapCategory::Popular)]
        category: MapCategory,
    },

    /// Show challenge settings. Accepts a token or a challenge URL.
    Challenge { token: String },

    /// Show a challenge leaderboard. Accepts a token or a challenge URL.
    Highscores { token: String },

    /// Show game state. Accepts a token or a game URL.
    Game { token: String },

    /// Start a new country streak game
    CreateStreak {
        #[arg(long, value_enum, default_value_t = StreakPreset::Easy)]
        preset: StreakPreset,

        /// Override the preset's time limit, in seconds (0 for none)
        #[arg(long)]
        time_limit: Option<u32>,
    },

    /// Show duel state from the game server
    Duel { game_id: String },

    /// Show the recorded events of one player's duel round
    Replay {
        player_id: String,
        duel_id: String,
        round_number: u32,
    },

    /// List your friends
    Friends,

    /// Show your friends' activity feed
    Feed {
        /// Maximum number of pages to fetch
        #[arg(long, default_value_t = DEFAULT_FEED_PAGES)]
        pages: usize,
    },

    /// Show your current subscription
    Subscription,

    /// List subscription plans (no cookie needed)
    Plans,

    /// Sign in with GEOGUESSR_EMAIL and GEOGUESSR_PASSWORD
    SignIn,

    /// List every endpoint the client knows
    Endpoints,

    /// List current configuration settings
    ListConfig,

    /// Update persistent configuration settings
    Config {
        /// Base URL of the web API
        #[arg(long)]
        api_base_url: Option<String>,

        /// Base URL of the game server
        #[arg(long)]
        game_server_url: Option<String>,

        /// HTTP timeout in seconds
        #[arg(long)]
        http_timeout: Option<u64>,

        /// Persistent custom log file location
        #[arg(long = "set-log-file", conflicts_with = "clear_log_file")]
        log_file_path: Option<String>,

        /// Revert to the default log location
        #[arg(long)]
        clear_log_file: bool,
    },
}

impl Command {
    /// Commands that only touch local configuration and make no API call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Command::Endpoints | Command::ListConfig | Command::Config { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_replay() {
        let args = Args::try_parse_from(["geoguessr-api", "replay", "p1", "d1", "3"]).unwrap();
        assert_eq!(
            args.command,
            Command::Replay {
                player_id: "p1".to_string(),
                duel_id: "d1".to_string(),
                round_number: 3
            }
        );
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["geoguessr-api", "profile", "--cookie", "abc", "--debug"])
                .unwrap();
        assert_eq!(args.cookie.as_deref(), Some("abc"));
        assert!(args.debug);
    }

    #[test]
    fn test_parse_streak_preset() {
        let args =
            Args::try_parse_from(["geoguessr-api", "create-streak", "--preset", "nmpz"]).unwrap();
        assert_eq!(
            args.command,
            Command::CreateStreak {
                preset: StreakPreset::Nmpz,
                time_limit: None
            }
        );
    }

    #[test]
    fn test_browse_maps_default_category() {
        let args = Args::try_parse_from(["geoguessr-api", "browse-maps"]).unwrap();
        assert_eq!(
            args.command,
            Command::BrowseMaps {
                category: MapCategory::Popular
            }
        );
    }

    #[test]
    fn test_config_log_file_flags_conflict() {
        let result = Args::try_parse_from([
            "geoguessr-api",
            "config",
            "--set-log-file",
            "/tmp/x.log",
            "--clear-log-file",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_local_commands() {
        assert!(Command::ListConfig.is_local());
        assert!(!Command::Profile.is_local());
    }
}
