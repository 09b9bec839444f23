use sea_orm::entity::prelude::*;

/// A section ("A", "B", ...) of a grade, optionally led by a class teacher.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "grade_sections")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub grade_id: Uuid,
    pub name: String,
    pub full_name: String,
    pub slug: String,
    pub class_teacher_id: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::school_grades::Entity",
        from = "Column::GradeId",
        to = "super::school_grades::Column::Id"
    )]
    Grade,
    #[sea_orm(
        belongs_to = "super::user_teachers::Entity",
        from = "Column::ClassTeacherId",
        to = "super::user_teachers::Column::Id"
    )]
    ClassTeacher,
}

impl Related<super::school_grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grade.def()
    }
}

impl Related<super::user_teachers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ClassTeacher.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
