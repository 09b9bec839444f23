pub mod login;
pub mod otp;
pub mod profile;
pub mod resource;
