//! # Kiln Configuration Errors
//!
//! [`ConfigError`] covers every way loading the configuration can fail before
//! any component is registered. A decode failure is fatal to startup.
use std::path::PathBuf;
use thiserror::Error;

use crate::config::format::ConfigFormat;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to decode {format} configuration: {source}")]
    Decode {
        format: ConfigFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },

    #[error("I/O error during operation '{operation}' on path '{path}': {source}")]
    Io {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid plugin port range: minimum {min} is greater than maximum {max}")]
    InvalidPortRange { min: u16, max: u16 },
}

impl ConfigError {
    pub fn decode<E>(format: ConfigFormat, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ConfigError::Decode {
            format,
            source: Box::new(source),
        }
    }

    pub fn io(source: std::io::Error, operation: impl Into<String>, path: PathBuf) -> Self {
        ConfigError::Io {
            source,
            operation: operation.into(),
            path,
        }
    }
}
