use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GradeSections::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GradeSections::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GradeSections::GradeId).uuid().not_null())
                    .col(ColumnDef::new(GradeSections::Name).string().not_null())
                    .col(ColumnDef::new(GradeSections::FullName).string().not_null())
                    .col(ColumnDef::new(GradeSections::Slug).string().not_null())
                    .col(ColumnDef::new(GradeSections::ClassTeacherId).uuid())
                    .col(
                        ColumnDef::new(GradeSections::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GradeSections::Table, GradeSections::GradeId)
                            .to(SchoolGrades::Table, SchoolGrades::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(GradeSections::Table, GradeSections::ClassTeacherId)
                            .to(UserTeachers::Table, UserTeachers::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GradeSections::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum GradeSections {
    Table,
    Id,
    GradeId,
    Name,
    FullName,
    Slug,
    ClassTeacherId,
    CreatedAt,
}

#[derive(Iden)]
enum SchoolGrades {
    Table,
    Id,
}

#[derive(Iden)]
enum UserTeachers {
    Table,
    Id,
}
