use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserOtps::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(UserOtps::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(UserOtps::Mobile).string().not_null())
                    .col(ColumnDef::new(UserOtps::Code).string_len(6).not_null())
                    .col(
                        ColumnDef::new(UserOtps::IsUsed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(UserOtps::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserOtps::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Latest-code lookup: WHERE mobile = ? ORDER BY created_at DESC, id DESC
        manager
            .create_index(
                Index::create()
                    .table(UserOtps::Table)
                    .col(UserOtps::Mobile)
                    .col((UserOtps::CreatedAt, IndexOrder::Desc))
                    .col((UserOtps::Id, IndexOrder::Desc))
                    .name("idx_user_otps_mobile_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserOtps::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserOtps {
    Table,
    Id,
    Mobile,
    Code,
    IsUsed,
    ExpiresAt,
    CreatedAt,
}
