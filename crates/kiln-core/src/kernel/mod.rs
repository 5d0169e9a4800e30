//! # Kiln Core Kernel
//!
//! Shared foundations for the rest of `kiln-core`.
//!
//! - **Core Constants**: tool prefix, config file names, default port bounds,
//!   via the `constants` submodule.
//! - **Error Handling**: the crate-wide [`Error`](error::Error) type that
//!   aggregates the subsystem errors, plus a `Result` alias, in the `error`
//!   submodule.
pub mod constants;
pub mod error;

pub use error::{Error, Result};
