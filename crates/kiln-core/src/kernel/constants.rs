/// Prefix shared by every external plugin binary (`kiln-builder-foo`)
pub const TOOL_PREFIX: &str = "kiln";

/// Environment variable that overrides the user configuration file location
pub const CONFIG_ENV_VAR: &str = "KILN_CONFIG";

/// User configuration file name, resolved against the home directory
pub const CONFIG_FILE_NAME: &str = ".kilnconfig";

/// Per-user data directory name, resolved against the home directory
pub const CONFIG_DIR_NAME: &str = ".kiln.d";

/// Plugin directory inside [`CONFIG_DIR_NAME`]
pub const DEFAULT_PLUGINS_DIR: &str = "plugins";

/// Lowest port handed to plugin subprocesses unless configured otherwise
pub const DEFAULT_PLUGIN_MIN_PORT: u16 = 10000;

/// Highest port handed to plugin subprocesses unless configured otherwise
pub const DEFAULT_PLUGIN_MAX_PORT: u16 = 25000;
