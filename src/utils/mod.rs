//! Utility modules for the Wardpass API.
//!
//! This module contains shared utilities used throughout the application:
//!
//! - [`email`]: The notifier capability delivering codes over SMTP
//! - [`errors`]: Application error types and handling
//! - [`jwt`]: JWT token creation and verification
//! - [`rate_limit`]: Keyed attempt throttling

pub mod email;
pub mod errors;
pub mod jwt;
pub mod rate_limit;
