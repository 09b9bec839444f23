use sea_orm::entity::prelude::*;

/// One attendance mark for a student on a calendar day.
/// `status` holds `present` or `absent`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "attendances")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub student_id: Uuid,
    pub date: chrono::NaiveDate,
    pub status: String,
    pub taken_by: Option<Uuid>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user_students::Entity",
        from = "Column::StudentId",
        to = "super::user_students::Column::Id"
    )]
    Student,
}

impl Related<super::user_students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
