//! Configuration management module.
//!
//! Loads, parses and validates the service configuration from a TOML file.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains sections for:
//! - **log_level** / **log_prefix**: Logging verbosity and the display prefix
//! - **http_server**: The actix-web listener
//! - **sentry_config**: Error reporting configuration
//! - **cache**: Zero or more named Redis backends
//!
//! # Example
//!
//! ```rust,ignore
//! use service_common::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating a default one if asked to
//! let config = Configuration::load_from_file("config.toml", true)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (loading errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
