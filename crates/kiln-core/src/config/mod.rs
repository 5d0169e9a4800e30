//! # Kiln Core Configuration
//!
//! Everything needed to turn the user's configuration document into a
//! [`Configuration`] value.
//!
//! - **[`model`]**: the [`Configuration`] value itself. It carries the global
//!   scalars, the three raw name→path declarations and the three optional
//!   component registries whose presence is the caller's opt-in signal.
//! - **[`decoder`]**: [`decode_config`] and friends. Decoding only records
//!   strings; it never touches a registry or a declared plugin path.
//! - **[`format`]**: supported document formats ([`ConfigFormat`]).
//! - **[`locate`]**: where the user configuration file lives.
//! - **[`error`]**: [`ConfigError`].
pub mod decoder;
pub mod error;
pub mod format;
pub mod locate;
pub mod model;

pub use decoder::{decode_config, decode_config_with_format, load_config_file};
pub use error::ConfigError;
pub use format::ConfigFormat;
pub use locate::{config_file, user_plugin_dir};
pub use model::{Configuration, RawComponents};
