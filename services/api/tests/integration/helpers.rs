use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use uuid::Uuid;

use attendance_api::domain::repository::{
    OtpNotifier, OtpRepository, ProfileRepository, ResourceRepository, UserRepository,
};
use attendance_api::domain::resources::{NewSchool, SchoolRecord, Schools, StudentRecord};
use attendance_api::domain::types::{OtpRecord, ProfileUpdate, User};
use attendance_api::error::ApiError;
use attendance_domain::pagination::PageRequest;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";
pub const MOBILE: &str = "9876543210";

fn storage_down() -> ApiError {
    ApiError::Storage(anyhow::anyhow!("database unavailable"))
}

// ── MockOtpRepo ──────────────────────────────────────────────────────────────

/// In-memory OTP store. Clones share the same rows.
#[derive(Clone, Default)]
pub struct MockOtpRepo {
    pub otps: Arc<Mutex<Vec<OtpRecord>>>,
    pub failing: bool,
    /// Make the next `mark_used` lose the race, as if another request
    /// consumed the code between read and update.
    pub steal_next_mark: Arc<AtomicBool>,
}

impl MockOtpRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<OtpRecord> {
        self.otps.lock().unwrap().clone()
    }
}

impl OtpRepository for MockOtpRepo {
    async fn create(&self, otp: &OtpRecord) -> Result<(), ApiError> {
        if self.failing {
            return Err(storage_down());
        }
        self.otps.lock().unwrap().push(otp.clone());
        Ok(())
    }

    async fn find_latest_by_mobile(&self, mobile: &str) -> Result<Option<OtpRecord>, ApiError> {
        if self.failing {
            return Err(storage_down());
        }
        Ok(self
            .otps
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.mobile == mobile)
            .max_by_key(|o| (o.created_at, o.id))
            .cloned())
    }

    async fn mark_used(&self, id: Uuid) -> Result<bool, ApiError> {
        let mut otps = self.otps.lock().unwrap();
        let Some(otp) = otps.iter_mut().find(|o| o.id == id) else {
            return Ok(false);
        };
        if self.steal_next_mark.swap(false, Ordering::SeqCst) {
            otp.is_used = true;
        }
        if otp.is_used {
            return Ok(false);
        }
        otp.is_used = true;
        Ok(true)
    }

    async fn invalidate_outstanding(&self, mobile: &str) -> Result<u64, ApiError> {
        if self.failing {
            return Err(storage_down());
        }
        let mut changed = 0;
        for otp in self.otps.lock().unwrap().iter_mut() {
            if otp.mobile == mobile && !otp.is_used {
                otp.is_used = true;
                changed += 1;
            }
        }
        Ok(changed)
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
    /// Rows written by a concurrent request: invisible to the first lookup,
    /// present once `create` has failed on the unique mobile.
    pub racing: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_racing_insert(user: User) -> Self {
        Self {
            racing: Arc::new(Mutex::new(vec![user])),
            ..Self::default()
        }
    }

    pub fn rows(&self) -> Vec<User> {
        self.users.lock().unwrap().clone()
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_mobile(&self, mobile: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.mobile == mobile)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), ApiError> {
        let mut users = self.users.lock().unwrap();
        users.append(&mut self.racing.lock().unwrap());
        if users.iter().any(|u| u.mobile == user.mobile) {
            return Err(ApiError::Conflict);
        }
        users.push(user.clone());
        Ok(())
    }
}

// ── RecordingNotifier ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub mobile: String,
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    pub sent: Arc<Mutex<Vec<Delivery>>>,
    pub failing: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn deliveries(&self) -> Vec<Delivery> {
        self.sent.lock().unwrap().clone()
    }
}

impl OtpNotifier for RecordingNotifier {
    async fn deliver(
        &self,
        mobile: &str,
        code: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), ApiError> {
        if self.failing {
            return Err(ApiError::Internal(anyhow::anyhow!("sms gateway rejected")));
        }
        self.sent.lock().unwrap().push(Delivery {
            mobile: mobile.to_owned(),
            code: code.to_owned(),
            expires_at,
        });
        Ok(())
    }
}

// ── MockSchoolRepo ───────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSchoolRepo {
    pub schools: Arc<Mutex<Vec<SchoolRecord>>>,
    pub last_page: Arc<Mutex<Option<PageRequest>>>,
}

impl MockSchoolRepo {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResourceRepository<Schools> for MockSchoolRepo {
    async fn create(&self, new: NewSchool, now: DateTime<Utc>) -> Result<Uuid, ApiError> {
        let id = Uuid::now_v7();
        self.schools.lock().unwrap().push(SchoolRecord {
            id,
            name: new.name,
            address: new.address,
            district: new.district,
            phone: new.phone,
            email: new.email,
            created_at: now,
        });
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<SchoolRecord>, ApiError> {
        Ok(self
            .schools
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<SchoolRecord>, ApiError> {
        *self.last_page.lock().unwrap() = Some(page);
        let mut schools = self.schools.lock().unwrap().clone();
        schools.sort_by_key(|s| std::cmp::Reverse((s.created_at, s.id)));
        Ok(schools
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect())
    }
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockProfileRepo {
    pub students: Arc<Mutex<Vec<StudentRecord>>>,
}

impl MockProfileRepo {
    pub fn with_student(student: StudentRecord) -> Self {
        Self {
            students: Arc::new(Mutex::new(vec![student])),
        }
    }

    pub fn rows(&self) -> Vec<StudentRecord> {
        self.students.lock().unwrap().clone()
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<StudentRecord>, ApiError> {
        Ok(self
            .students
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.user_id == user_id)
            .cloned())
    }

    async fn update(&self, user_id: Uuid, update: &ProfileUpdate) -> Result<bool, ApiError> {
        let mut changed = false;
        for s in self.students.lock().unwrap().iter_mut() {
            if s.user_id == user_id {
                s.name = update.name.clone();
                s.photo = update.photo.clone();
                s.state = update.state.clone();
                s.district = update.district.clone();
                changed = true;
            }
        }
        Ok(changed)
    }
}
