//! # Kiln Core Kernel Errors
//!
//! Defines the crate-wide [`Error`] type.
//!
//! Each subsystem owns a typed error ([`ConfigError`] for document decoding
//! and config file handling, [`PluginSystemError`] for declarations and
//! discovery). `Error` wraps them so callers that drive the whole startup
//! sequence can propagate any of them with `?`.
use std::result::Result as StdResult;

use thiserror::Error as ThisError;

use crate::config::error::ConfigError;
use crate::plugin_system::error::PluginSystemError;

/// Top-level error for Kiln startup
#[derive(Debug, ThisError)]
pub enum Error {
    /// Configuration document or file error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Plugin declaration or discovery error
    #[error("Plugin system error: {0}")]
    PluginSystem(#[from] PluginSystemError),
}

/// Shorthand for Result with our Error type
pub type Result<T> = StdResult<T, Error>;
