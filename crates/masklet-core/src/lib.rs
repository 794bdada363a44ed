//! # masklet-core
//!
//! Configuration, shared types and the pure helpers that need no node:
//! revealed-index mapping, wei formatting and address validation.

pub mod address;
pub mod config;
pub mod reveal;
pub mod types;
pub mod units;

pub use config::{Config, ConfigError, DevnetConfig};
pub use types::Redirect;
