//! Configuration module for vidsum
//!
//! Loads settings and provider credentials from a TOML file.

mod settings;

pub use settings::{ProviderProfile, Settings};
