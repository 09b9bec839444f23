mod helpers;
mod login_test;
mod otp_test;
mod profile_test;
