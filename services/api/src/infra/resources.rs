//! SeaORM mapping for the CRUD resources.
//!
//! [`SeaResource`] ties a domain [`Resource`] to its entity; one generic
//! [`DbResourceRepository`] then serves all of them.

use std::marker::PhantomData;

use anyhow::Context as _;
use attendance_domain::pagination::PageRequest;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    EntityTrait, FromQueryResult, IntoActiveModel, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use attendance_api_schema::{
    attendances, grade_sections, school_grades, schools, user_students, user_teachers, users,
};

use crate::domain::repository::ResourceRepository;
use crate::domain::resources::{
    Attendance, AttendanceRecord, GradeRecord, Grades, NewAttendance, NewGrade, NewSchool,
    NewSection, NewStudent, NewTeacher, NewUser, Resource, SchoolRecord, Schools, SectionRecord,
    Sections, StudentRecord, Students, TeacherRecord, Teachers, UserRecord, Users,
};
use crate::error::ApiError;
use crate::infra::db::insert_error;

type ColumnOf<R> = <<R as SeaResource>::Entity as EntityTrait>::Column;

pub trait SeaResource: Resource {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: FromQueryResult + IntoActiveModel<Self::ActiveModel> + Send + Sync;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send;

    fn active_model(new: Self::New, id: Uuid, now: DateTime<Utc>) -> Self::ActiveModel;
    fn record(model: Self::Model) -> Self::Record;
    fn id_column() -> ColumnOf<Self>;
    fn created_at_column() -> ColumnOf<Self>;
}

pub struct DbResourceRepository<R> {
    pub db: DatabaseConnection,
    resource: PhantomData<fn() -> R>,
}

impl<R> DbResourceRepository<R> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }
}

impl<R: SeaResource> ResourceRepository<R> for DbResourceRepository<R> {
    async fn create(&self, new: R::New, now: DateTime<Utc>) -> Result<Uuid, ApiError> {
        let id = Uuid::now_v7();
        R::active_model(new, id, now)
            .insert(&self.db)
            .await
            .map_err(|e| insert_error(e, R::NAME))?;
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<R::Record>, ApiError> {
        let model = R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(&self.db)
            .await
            .with_context(|| format!("find {} by id", R::NAME))?;
        Ok(model.map(R::record))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<R::Record>, ApiError> {
        let models = R::Entity::find()
            .order_by_desc(R::created_at_column())
            .order_by_desc(R::id_column())
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .with_context(|| format!("list {}", R::NAME))?;
        Ok(models.into_iter().map(R::record).collect())
    }
}

// ── entity bindings ──────────────────────────────────────────────────────────

impl SeaResource for Users {
    type Entity = users::Entity;
    type Model = users::Model;
    type ActiveModel = users::ActiveModel;

    fn active_model(new: NewUser, id: Uuid, now: DateTime<Utc>) -> users::ActiveModel {
        users::ActiveModel {
            id: Set(id),
            mobile: Set(new.mobile),
            login_hash: Set(None),
            password: Set(None),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        }
    }

    fn record(m: users::Model) -> UserRecord {
        UserRecord {
            id: m.id,
            mobile: m.mobile,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }

    fn id_column() -> users::Column {
        users::Column::Id
    }

    fn created_at_column() -> users::Column {
        users::Column::CreatedAt
    }
}

impl SeaResource for Schools {
    type Entity = schools::Entity;
    type Model = schools::Model;
    type ActiveModel = schools::ActiveModel;

    fn active_model(new: NewSchool, id: Uuid, now: DateTime<Utc>) -> schools::ActiveModel {
        schools::ActiveModel {
            id: Set(id),
            name: Set(new.name),
            address: Set(new.address),
            district: Set(new.district),
            phone: Set(new.phone),
            email: Set(new.email),
            created_at: Set(now),
        }
    }

    fn record(m: schools::Model) -> SchoolRecord {
        SchoolRecord {
            id: m.id,
            name: m.name,
            address: m.address,
            district: m.district,
            phone: m.phone,
            email: m.email,
            created_at: m.created_at,
        }
    }

    fn id_column() -> schools::Column {
        schools::Column::Id
    }

    fn created_at_column() -> schools::Column {
        schools::Column::CreatedAt
    }
}

impl SeaResource for Grades {
    type Entity = school_grades::Entity;
    type Model = school_grades::Model;
    type ActiveModel = school_grades::ActiveModel;

    fn active_model(new: NewGrade, id: Uuid, now: DateTime<Utc>) -> school_grades::ActiveModel {
        school_grades::ActiveModel {
            id: Set(id),
            school_id: Set(new.school_id),
            name: Set(new.name),
            slug: Set(new.slug),
            created_at: Set(now),
        }
    }

    fn record(m: school_grades::Model) -> GradeRecord {
        GradeRecord {
            id: m.id,
            school_id: m.school_id,
            name: m.name,
            slug: m.slug,
            created_at: m.created_at,
        }
    }

    fn id_column() -> school_grades::Column {
        school_grades::Column::Id
    }

    fn created_at_column() -> school_grades::Column {
        school_grades::Column::CreatedAt
    }
}

impl SeaResource for Sections {
    type Entity = grade_sections::Entity;
    type Model = grade_sections::Model;
    type ActiveModel = grade_sections::ActiveModel;

    fn active_model(new: NewSection, id: Uuid, now: DateTime<Utc>) -> grade_sections::ActiveModel {
        grade_sections::ActiveModel {
            id: Set(id),
            grade_id: Set(new.grade_id),
            name: Set(new.name),
            full_name: Set(new.full_name),
            slug: Set(new.slug),
            class_teacher_id: Set(new.class_teacher_id),
            created_at: Set(now),
        }
    }

    fn record(m: grade_sections::Model) -> SectionRecord {
        SectionRecord {
            id: m.id,
            grade_id: m.grade_id,
            name: m.name,
            full_name: m.full_name,
            slug: m.slug,
            class_teacher_id: m.class_teacher_id,
            created_at: m.created_at,
        }
    }

    fn id_column() -> grade_sections::Column {
        grade_sections::Column::Id
    }

    fn created_at_column() -> grade_sections::Column {
        grade_sections::Column::CreatedAt
    }
}

impl SeaResource for Students {
    type Entity = user_students::Entity;
    type Model = user_students::Model;
    type ActiveModel = user_students::ActiveModel;

    fn active_model(new: NewStudent, id: Uuid, now: DateTime<Utc>) -> user_students::ActiveModel {
        user_students::ActiveModel {
            id: Set(id),
            user_id: Set(new.user_id),
            name: Set(new.name),
            photo: Set(new.photo),
            state: Set(new.state),
            district: Set(new.district),
            is_active: Set(new.is_active),
            created_at: Set(now),
        }
    }

    fn record(m: user_students::Model) -> StudentRecord {
        StudentRecord {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            photo: m.photo,
            state: m.state,
            district: m.district,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }

    fn id_column() -> user_students::Column {
        user_students::Column::Id
    }

    fn created_at_column() -> user_students::Column {
        user_students::Column::CreatedAt
    }
}

impl SeaResource for Teachers {
    type Entity = user_teachers::Entity;
    type Model = user_teachers::Model;
    type ActiveModel = user_teachers::ActiveModel;

    fn active_model(new: NewTeacher, id: Uuid, now: DateTime<Utc>) -> user_teachers::ActiveModel {
        user_teachers::ActiveModel {
            id: Set(id),
            user_id: Set(new.user_id),
            name: Set(new.name),
            school_id: Set(new.school_id),
            is_active: Set(new.is_active),
            created_at: Set(now),
        }
    }

    fn record(m: user_teachers::Model) -> TeacherRecord {
        TeacherRecord {
            id: m.id,
            user_id: m.user_id,
            name: m.name,
            school_id: m.school_id,
            is_active: m.is_active,
            created_at: m.created_at,
        }
    }

    fn id_column() -> user_teachers::Column {
        user_teachers::Column::Id
    }

    fn created_at_column() -> user_teachers::Column {
        user_teachers::Column::CreatedAt
    }
}

impl SeaResource for Attendance {
    type Entity = attendances::Entity;
    type Model = attendances::Model;
    type ActiveModel = attendances::ActiveModel;

    fn active_model(new: NewAttendance, id: Uuid, now: DateTime<Utc>) -> attendances::ActiveModel {
        attendances::ActiveModel {
            id: Set(id),
            student_id: Set(new.student_id),
            date: Set(new.date),
            status: Set(new.status.as_str().to_owned()),
            taken_by: Set(new.taken_by),
            created_at: Set(now),
        }
    }

    fn record(m: attendances::Model) -> AttendanceRecord {
        // Rows are only written through `active_model`; anything else in the
        // column is reported as absent rather than failing the whole page.
        let status = m.status.parse().unwrap_or_else(|_| {
            tracing::warn!(id = %m.id, status = %m.status, "unknown attendance status in storage");
            attendance_domain::attendance::AttendanceStatus::Absent
        });
        AttendanceRecord {
            id: m.id,
            student_id: m.student_id,
            date: m.date,
            status,
            taken_by: m.taken_by,
            created_at: m.created_at,
        }
    }

    fn id_column() -> attendances::Column {
        attendances::Column::Id
    }

    fn created_at_column() -> attendances::Column {
        attendances::Column::CreatedAt
    }
}
