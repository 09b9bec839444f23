//! Framework-free types shared across attendance services: mobile numbers,
//! attendance status, paging and request validation.

pub mod attendance;
pub mod mobile;
pub mod pagination;
pub mod validation;
