use std::sync::Arc;
use std::time::Duration;

use attendance_auth_types::session::SessionVerifier;
use attendance_core::clock::Clock;
use sea_orm::DatabaseConnection;

use crate::config::IssuePolicy;
use crate::infra::db::{DbOtpRepository, DbProfileRepository, DbUserRepository};
use crate::infra::notifier::LogOtpNotifier;
use crate::infra::resources::DbResourceRepository;

/// OTP issuance settings.
#[derive(Debug, Clone, Copy)]
pub struct OtpSettings {
    pub ttl: chrono::Duration,
    pub policy: IssuePolicy,
    /// Echo the code in the request-otp response.
    pub expose_in_response: bool,
}

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_secret: String,
    pub clock: Arc<dyn Clock>,
    pub otp: OtpSettings,
    pub session_ttl_secs: u64,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_repo(&self) -> DbOtpRepository {
        DbOtpRepository {
            db: self.db.clone(),
        }
    }

    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn resource_repo<R>(&self) -> DbResourceRepository<R> {
        DbResourceRepository::new(self.db.clone())
    }

    pub fn notifier(&self) -> LogOtpNotifier {
        LogOtpNotifier
    }

    pub fn session_verifier(&self) -> SessionVerifier {
        SessionVerifier::new(self.jwt_secret.as_str(), Arc::clone(&self.clock))
    }
}
