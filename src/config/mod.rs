//! Configuration modules for the Wardpass API.
//!
//! This module contains all configuration-related types and utilities
//! for the application. Each submodule handles a specific aspect of
//! configuration, typically loaded from environment variables.
//!
//! # Modules
//!
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//! - [`email`]: Email/SMTP configuration for code delivery
//! - [`jwt`]: JWT authentication configuration
//! - [`rate_limit`]: Per-operation attempt throttling configuration
//! - [`verification`]: Verification code time-to-live
//!
//! # Environment Variables
//!
//! Most configuration is loaded from environment variables. See each
//! submodule for specific variable names and their defaults.

pub mod cors;
pub mod email;
pub mod jwt;
pub mod rate_limit;
pub mod verification;
