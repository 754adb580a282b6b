use std::path::{Path, PathBuf};

const APP_DIR: &str = "geoguessr_api";
const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_DIR_NAME: &str = "logs";

/// Per-user application directory, or the current directory when the
/// platform has no config directory.
fn app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join(APP_DIR)
}

/// Location of `config.toml` (e.g. `~/.config/geoguessr_api/config.toml` on Linux).
pub fn get_config_path() -> String {
    app_dir().join(CONFIG_FILE_NAME).to_string_lossy().into_owned()
}

pub fn get_log_dir_path() -> String {
    app_dir().join(LOG_DIR_NAME).to_string_lossy().into_owned()
}
