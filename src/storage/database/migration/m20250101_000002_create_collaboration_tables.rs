use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CollaborationInstances::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CollaborationInstances::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CollaborationInstances::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollaborationInstances::ProjectKey)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollaborationInstances::Workflows)
                            .json()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollaborationInstances::Products)
                            .json()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollaborationInstances::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_collaboration_instances_user_project")
                    .table(CollaborationInstances::Table)
                    .col(CollaborationInstances::UserId)
                    .col(CollaborationInstances::ProjectKey)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CollaborationModes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CollaborationModes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CollaborationModes::Name).string().not_null())
                    .col(
                        ColumnDef::new(CollaborationModes::ProjectName)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollaborationModes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(CollaborationModes::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_collaboration_modes_project_name")
                    .table(CollaborationModes::Table)
                    .col(CollaborationModes::ProjectName)
                    .col(CollaborationModes::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CollaborationModeMembers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CollaborationModeMembers::ModeId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CollaborationModeMembers::UserId)
                            .string()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CollaborationModeMembers::ModeId)
                            .col(CollaborationModeMembers::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_collaboration_mode_members_mode_id")
                            .from(
                                CollaborationModeMembers::Table,
                                CollaborationModeMembers::ModeId,
                            )
                            .to(CollaborationModes::Table, CollaborationModes::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_collaboration_mode_members_user_id")
                    .table(CollaborationModeMembers::Table)
                    .col(CollaborationModeMembers::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CollaborationModeMembers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CollaborationModes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CollaborationInstances::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum CollaborationInstances {
    Table,
    Id,
    UserId,
    ProjectKey,
    Workflows,
    Products,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CollaborationModes {
    Table,
    Id,
    Name,
    ProjectName,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CollaborationModeMembers {
    Table,
    ModeId,
    UserId,
}
