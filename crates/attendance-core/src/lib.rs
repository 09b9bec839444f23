//! Shared runtime plumbing for attendance services: configuration loading,
//! tracing setup, request ids, health checks, the response envelope, the
//! clock and shutdown handling.

pub mod clock;
pub mod config;
pub mod envelope;
pub mod health;
pub mod request_id;
pub mod shutdown;
pub mod timestamp;
pub mod tracing;
