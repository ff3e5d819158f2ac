//! service-core: Shared infrastructure for the Q&A portal services.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
