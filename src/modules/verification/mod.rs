//! Email verification codes.
//!
//! Guardians prove control of their email address with a short-lived
//! 6-digit code: the service issues one, hands it to the notifier for
//! out-of-band delivery, and later checks the submitted value for both
//! equality and freshness.

pub mod controller;
pub mod model;
pub mod router;
pub mod service;
pub mod store;
