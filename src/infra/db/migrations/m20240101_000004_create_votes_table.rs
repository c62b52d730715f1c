//! Migration: Create the votes table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Votes::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Votes::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Votes::EmployeeId).uuid().not_null())
                    .col(ColumnDef::new(Votes::MenuId).uuid().not_null())
                    .col(ColumnDef::new(Votes::VoteDate).date().not_null())
                    .col(
                        ColumnDef::new(Votes::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_employee")
                            .from(Votes::Table, Votes::EmployeeId)
                            .to(Users::Table, Users::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_votes_menu")
                            .from(Votes::Table, Votes::MenuId)
                            .to(Menus::Table, Menus::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // One vote per employee per day: the constraint closes the
        // check-then-insert race between concurrent requests
        manager
            .create_index(
                Index::create()
                    .name("idx_votes_employee_vote_date")
                    .table(Votes::Table)
                    .col(Votes::EmployeeId)
                    .col(Votes::VoteDate)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Votes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Votes {
    Table,
    Id,
    EmployeeId,
    MenuId,
    VoteDate,
    CreatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Menus {
    Table,
    Id,
}
