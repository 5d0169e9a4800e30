use std::ffi::OsString;
use std::path::PathBuf;

use crate::kernel::constants::{CONFIG_DIR_NAME, CONFIG_ENV_VAR, CONFIG_FILE_NAME, DEFAULT_PLUGINS_DIR};

/// Location of the user configuration file.
///
/// `KILN_CONFIG` wins when set to a non-empty value, otherwise
/// `~/.kilnconfig`. The file is not required to exist.
pub fn config_file() -> Option<PathBuf> {
    resolve_config_file(std::env::var_os(CONFIG_ENV_VAR), dirs::home_dir())
}

/// Per-user plugin directory (`~/.kiln.d/plugins`)
pub fn user_plugin_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(DEFAULT_PLUGINS_DIR))
}

pub(crate) fn resolve_config_file(env_value: Option<OsString>, home: Option<PathBuf>) -> Option<PathBuf> {
    match env_value {
        Some(value) if !value.is_empty() => Some(PathBuf::from(value)),
        _ => home.map(|home| home.join(CONFIG_FILE_NAME)),
    }
}
