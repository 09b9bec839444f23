use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SchoolGrades::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchoolGrades::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SchoolGrades::SchoolId).uuid().not_null())
                    .col(ColumnDef::new(SchoolGrades::Name).string().not_null())
                    .col(ColumnDef::new(SchoolGrades::Slug).string().not_null())
                    .col(
                        ColumnDef::new(SchoolGrades::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(SchoolGrades::Table, SchoolGrades::SchoolId)
                            .to(Schools::Table, Schools::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(SchoolGrades::Table)
                    .col(SchoolGrades::SchoolId)
                    .col(SchoolGrades::Slug)
                    .unique()
                    .name("uq_school_grades_school_id_slug")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SchoolGrades::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum SchoolGrades {
    Table,
    Id,
    SchoolId,
    Name,
    Slug,
    CreatedAt,
}

#[derive(Iden)]
enum Schools {
    Table,
    Id,
}
