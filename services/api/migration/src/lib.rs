pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users;
mod m20260301_000002_create_user_otps;
mod m20260301_000003_create_schools;
mod m20260301_000004_create_school_grades;
mod m20260301_000005_create_user_teachers;
mod m20260301_000006_create_grade_sections;
mod m20260301_000007_create_user_students;
mod m20260301_000008_create_attendances;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users::Migration),
            Box::new(m20260301_000002_create_user_otps::Migration),
            Box::new(m20260301_000003_create_schools::Migration),
            Box::new(m20260301_000004_create_school_grades::Migration),
            Box::new(m20260301_000005_create_user_teachers::Migration),
            Box::new(m20260301_000006_create_grade_sections::Migration),
            Box::new(m20260301_000007_create_user_students::Migration),
            Box::new(m20260301_000008_create_attendances::Migration),
        ]
    }
}
