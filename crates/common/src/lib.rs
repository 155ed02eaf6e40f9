//! Shared configuration and error handling for the portfolio API
//!
//! This crate provides common functionality used across the workspace:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};
