//! SeaORM entities for the attendance API.

pub mod attendances;
pub mod grade_sections;
pub mod school_grades;
pub mod schools;
pub mod user_otps;
pub mod user_students;
pub mod user_teachers;
pub mod users;
