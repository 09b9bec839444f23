//! Test utilities for attendance services.
//!
//! Provides a controllable clock and helpers that mint bearer tokens for
//! guarded routes. Import in tests only, never in production code.

pub mod auth;
pub mod clock;
