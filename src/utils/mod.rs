//! Utility functions shared by the binaries
//!
//! Provides environment/configuration handling, Ctrl-C handling and logging setup.

pub mod env;
pub mod interrupt;
pub mod logging;

pub use env::{credential_hint, load_env, ClientConfig, ConfigError};
pub use logging::init_tracing;
