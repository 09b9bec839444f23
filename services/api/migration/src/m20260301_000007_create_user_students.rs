use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserStudents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserStudents::UserId).uuid().not_null())
                    .col(ColumnDef::new(UserStudents::Name).string().not_null())
                    .col(ColumnDef::new(UserStudents::Photo).string())
                    .col(ColumnDef::new(UserStudents::State).string())
                    .col(ColumnDef::new(UserStudents::District).string())
                    .col(
                        ColumnDef::new(UserStudents::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(UserStudents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(UserStudents::Table, UserStudents::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserStudents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserStudents {
    Table,
    Id,
    UserId,
    Name,
    Photo,
    State,
    District,
    IsActive,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
