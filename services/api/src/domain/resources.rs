//! CRUD resources served under `/api/{name}`.
//!
//! Each resource is a marker type tying together its request body (`Draft`),
//! the checked input the repository stores (`New`) and the response shape
//! (`Record`). Request bodies take every field as optional so that missing
//! fields are reported per field instead of as a decode error.

use attendance_domain::attendance::AttendanceStatus;
use attendance_domain::mobile::MOBILE_LEN;
use attendance_domain::validation::{Validate, ValidationErrors};
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub trait Resource: Send + Sync + 'static {
    /// Path segment and error label, e.g. `schools`.
    const NAME: &'static str;

    type Draft: DeserializeOwned + Validate<Valid = Self::New> + Send;
    type New: Send;
    type Record: Serialize + Send;
}

// ── users ────────────────────────────────────────────────────────────────────

pub struct Users;

#[derive(Debug, Default, Deserialize)]
pub struct UserDraft {
    pub mobile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub mobile: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: Uuid,
    pub mobile: String,
    pub is_active: bool,
    #[serde(serialize_with = "attendance_core::timestamp::millis")]
    pub created_at: DateTime<Utc>,
}

impl Validate for UserDraft {
    type Valid = NewUser;

    fn validate(self) -> Result<NewUser, ValidationErrors> {
        let mut errs = ValidationErrors::new();
        let Some(mobile) = errs.required("mobile", self.mobile) else {
            return Err(errs);
        };
        errs.exact_len("mobile", &mobile, MOBILE_LEN);
        errs.into_result()?;
        Ok(NewUser { mobile })
    }
}

impl Resource for Users {
    const NAME: &'static str = "users";
    type Draft = UserDraft;
    type New = NewUser;
    type Record = UserRecord;
}

// ── schools ──────────────────────────────────────────────────────────────────

pub struct Schools;

#[derive(Debug, Default, Deserialize)]
pub struct SchoolDraft {
    pub name: Option<String>,
    pub address: Option<String>,
    pub district: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSchool {
    pub name: String,
    pub address: Option<String>,
    pub district: String,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolRecord {
    pub id: Uuid,
    pub name: String,
    pub address: Option<String>,
    pub district: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(serialize_with = "attendance_core::timestamp::millis")]
    pub created_at: DateTime<Utc>,
}

impl Validate for SchoolDraft {
    type Valid = NewSchool;

    fn validate(self) -> Result<NewSchool, ValidationErrors> {
        let mut errs = ValidationErrors::new();
        let name = errs.required("name", self.name);
        let address = errs.optional("address", self.address);
        let district = errs.required("district", self.district);
        let phone = errs.optional("phone", self.phone);
        let email = errs.optional("email", self.email);
        let (Some(name), Some(district)) = (name, district) else {
            return Err(errs);
        };
        errs.into_result()?;
        Ok(NewSchool {
            name,
            address,
            district,
            phone,
            email,
        })
    }
}

impl Resource for Schools {
    const NAME: &'static str = "schools";
    type Draft = SchoolDraft;
    type New = NewSchool;
    type Record = SchoolRecord;
}

// ── grades ───────────────────────────────────────────────────────────────────

pub struct Grades;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeDraft {
    pub school_id: Option<String>,
    pub name: Option<String>,
    pub slug: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewGrade {
    pub school_id: Uuid,
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRecord {
    pub id: Uuid,
    pub school_id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(serialize_with = "attendance_core::timestamp::millis")]
    pub created_at: DateTime<Utc>,
}

impl Validate for GradeDraft {
    type Valid = NewGrade;

    fn validate(self) -> Result<NewGrade, ValidationErrors> {
        let mut errs = ValidationErrors::new();
        let school_id = errs.required_parsed("schoolId", self.school_id);
        let name = errs.required("name", self.name);
        let slug = errs.required("slug", self.slug);
        let (Some(school_id), Some(name), Some(slug)) = (school_id, name, slug) else {
            return Err(errs);
        };
        errs.into_result()?;
        Ok(NewGrade {
            school_id,
            name,
            slug,
        })
    }
}

impl Resource for Grades {
    const NAME: &'static str = "grades";
    type Draft = GradeDraft;
    type New = NewGrade;
    type Record = GradeRecord;
}

// ── sections ─────────────────────────────────────────────────────────────────

pub struct Sections;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionDraft {
    pub grade_id: Option<String>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub slug: Option<String>,
    pub class_teacher_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSection {
    pub grade_id: Uuid,
    pub name: String,
    pub full_name: String,
    pub slug: String,
    pub class_teacher_id: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionRecord {
    pub id: Uuid,
    pub grade_id: Uuid,
    pub name: String,
    pub full_name: String,
    pub slug: String,
    pub class_teacher_id: Option<Uuid>,
    #[serde(serialize_with = "attendance_core::timestamp::millis")]
    pub created_at: DateTime<Utc>,
}

impl Validate for SectionDraft {
    type Valid = NewSection;

    fn validate(self) -> Result<NewSection, ValidationErrors> {
        let mut errs = ValidationErrors::new();
        let grade_id = errs.required_parsed("gradeId", self.grade_id);
        let name = errs.required("name", self.name);
        let full_name = errs.required("fullName", self.full_name);
        let slug = errs.required("slug", self.slug);
        let class_teacher_id = errs.optional_parsed("classTeacherId", self.class_teacher_id);
        let (Some(grade_id), Some(name), Some(full_name), Some(slug)) =
            (grade_id, name, full_name, slug)
        else {
            return Err(errs);
        };
        errs.into_result()?;
        Ok(NewSection {
            grade_id,
            name,
            full_name,
            slug,
            class_teacher_id,
        })
    }
}

impl Resource for Sections {
    const NAME: &'static str = "sections";
    type Draft = SectionDraft;
    type New = NewSection;
    type Record = SectionRecord;
}

// ── students ─────────────────────────────────────────────────────────────────

pub struct Students;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDraft {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub photo: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub user_id: Uuid,
    pub name: String,
    pub photo: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub photo: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
    pub is_active: bool,
    #[serde(serialize_with = "attendance_core::timestamp::millis")]
    pub created_at: DateTime<Utc>,
}

impl Validate for StudentDraft {
    type Valid = NewStudent;

    fn validate(self) -> Result<NewStudent, ValidationErrors> {
        let mut errs = ValidationErrors::new();
        let user_id = errs.required_parsed("userId", self.user_id);
        let name = errs.required("name", self.name);
        let photo = errs.optional("photo", self.photo);
        let state = errs.optional("state", self.state);
        let district = errs.optional("district", self.district);
        let (Some(user_id), Some(name)) = (user_id, name) else {
            return Err(errs);
        };
        errs.into_result()?;
        Ok(NewStudent {
            user_id,
            name,
            photo,
            state,
            district,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

impl Resource for Students {
    const NAME: &'static str = "students";
    type Draft = StudentDraft;
    type New = NewStudent;
    type Record = StudentRecord;
}

// ── teachers ─────────────────────────────────────────────────────────────────

pub struct Teachers;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDraft {
    pub user_id: Option<String>,
    pub name: Option<String>,
    pub school_id: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeacher {
    pub user_id: Uuid,
    pub name: String,
    pub school_id: Uuid,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub school_id: Uuid,
    pub is_active: bool,
    #[serde(serialize_with = "attendance_core::timestamp::millis")]
    pub created_at: DateTime<Utc>,
}

impl Validate for TeacherDraft {
    type Valid = NewTeacher;

    fn validate(self) -> Result<NewTeacher, ValidationErrors> {
        let mut errs = ValidationErrors::new();
        let user_id = errs.required_parsed("userId", self.user_id);
        let name = errs.required("name", self.name);
        let school_id = errs.required_parsed("schoolId", self.school_id);
        let (Some(user_id), Some(name), Some(school_id)) = (user_id, name, school_id) else {
            return Err(errs);
        };
        errs.into_result()?;
        Ok(NewTeacher {
            user_id,
            name,
            school_id,
            is_active: self.is_active.unwrap_or(true),
        })
    }
}

impl Resource for Teachers {
    const NAME: &'static str = "teachers";
    type Draft = TeacherDraft;
    type New = NewTeacher;
    type Record = TeacherRecord;
}

// ── attendance ───────────────────────────────────────────────────────────────

pub struct Attendance;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDraft {
    pub student_id: Option<String>,
    /// `YYYY-MM-DD`
    pub date: Option<String>,
    pub status: Option<String>,
    pub taken_by: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub student_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub taken_by: Option<Uuid>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: Uuid,
    pub student_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub taken_by: Option<Uuid>,
    #[serde(serialize_with = "attendance_core::timestamp::millis")]
    pub created_at: DateTime<Utc>,
}

impl Validate for AttendanceDraft {
    type Valid = NewAttendance;

    fn validate(self) -> Result<NewAttendance, ValidationErrors> {
        let mut errs = ValidationErrors::new();
        let student_id = errs.required_parsed("studentId", self.student_id);
        let date = errs.required_parsed("date", self.date);
        let status = errs.required_parsed("status", self.status);
        let taken_by = errs.optional_parsed("takenBy", self.taken_by);
        let (Some(student_id), Some(date), Some(status)) = (student_id, date, status) else {
            return Err(errs);
        };
        errs.into_result()?;
        Ok(NewAttendance {
            student_id,
            date,
            status,
            taken_by,
        })
    }
}

impl Resource for Attendance {
    const NAME: &'static str = "attendance";
    type Draft = AttendanceDraft;
    type New = NewAttendance;
    type Record = AttendanceRecord;
}
