//! # Wardpass API
//!
//! A REST API built with Rust and Axum that gates access to per-child
//! school records through two independent verification channels: a
//! time-boxed numeric code delivered by email, and a compact scannable
//! pass token encoding a (child, school, status) triple. A role-based
//! gate restricts which authenticated identities may view the verified
//! result.
//!
//! ## Overview
//!
//! - **Verification codes**: uniformly random 6-digit codes with a
//!   configurable time-to-live, delivered out-of-band through a
//!   selectable notifier (SMTP or no-op)
//! - **Pass tokens**: a strict `child-<id>-<id>-<status>` grammar with a
//!   single encode/decode pair and a round-trip guarantee
//! - **Role gate**: a closed role set (`admin`, `teacher`, `guardian`)
//!   checked by exact membership per call site, with no hierarchy
//! - **Attempt throttling**: keyed limiters injected per operation so
//!   retry storms fail fast with `429`
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture:
//!
//! ```text
//! src/
//! ├── config/           # Configuration modules (JWT, SMTP, throttling, TTL)
//! ├── middleware/       # Auth extractor and the role gate
//! ├── modules/          # Feature modules
//! │   ├── verification/ # Code issue and confirmation
//! │   └── passes/       # Pass token minting and scanning
//! └── utils/            # Shared utilities (errors, JWT, notifier, limiter)
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `service.rs`: Business logic
//! - `model.rs`: Data models, DTOs
//! - `router.rs`: Axum router configuration
//!
//! ## Roles
//!
//! | Role | Access |
//! |------|--------|
//! | Admin | Mints pass tokens, scans passes |
//! | Teacher | Scans passes |
//! | Guardian | Requests and confirms verification codes |
//!
//! Role checks are exact-match against the set each route supplies;
//! `admin` never implicitly satisfies a `teacher` check.
//!
//! ## Authentication
//!
//! Identity arrives as a bearer JWT minted by an external auth service;
//! this API verifies the signature and reads the claims. There are no
//! login or refresh endpoints here.
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! JWT_SECRET=your-secure-secret-key
//! SMTP_ENABLED=false
//! CODE_TTL_SECONDS=600
//! CODE_REQUEST_INTERVAL_SECONDS=60
//! SCAN_INTERVAL_SECONDS=2
//! ```
//!
//! ### API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`
//!
//! ## Modules
//!
//! - [`config`]: Application configuration
//! - [`docs`]: OpenAPI documentation setup
//! - [`logging`]: Request logging and tracing setup
//! - [`metrics`]: Prometheus metrics endpoint
//! - [`middleware`]: Authentication and authorization middleware
//! - [`modules`]: Feature modules (verification, passes)
//! - [`router`]: Main application router
//! - [`state`]: Shared application state
//! - [`utils`]: Shared utilities (errors, JWT, notifier, limiter)
//! - [`validator`]: Request validation utilities

pub mod config;
pub mod docs;
pub mod logging;
pub mod metrics;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod utils;
pub mod validator;
