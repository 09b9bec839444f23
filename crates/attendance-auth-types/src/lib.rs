//! Session token types shared by the token issuer and every guarded route.
//!
//! Provides JWT issuance/validation and the bearer-token middleware that turns
//! a valid `Authorization` header into a request-scoped [`session::Session`].

pub mod session;
pub mod token;
