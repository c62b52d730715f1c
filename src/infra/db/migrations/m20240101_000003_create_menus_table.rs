//! Migration: Create the menus table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menus::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Menus::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Menus::RestaurantId).uuid().not_null())
                    .col(ColumnDef::new(Menus::MenuDate).date().not_null())
                    .col(ColumnDef::new(Menus::Items).text().not_null())
                    .col(
                        ColumnDef::new(Menus::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menus_restaurant")
                            .from(Menus::Table, Menus::RestaurantId)
                            .to(Restaurants::Table, Restaurants::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // The daily listing filters on menu_date
        manager
            .create_index(
                Index::create()
                    .name("idx_menus_menu_date")
                    .table(Menus::Table)
                    .col(Menus::MenuDate)
                    .to_owned(),
            )
            .await

        // No unique constraint on (restaurant_id, menu_date): a restaurant
        // may publish several same-day menus.
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Menus::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Menus {
    Table,
    Id,
    RestaurantId,
    MenuDate,
    Items,
    CreatedAt,
}

#[derive(Iden)]
enum Restaurants {
    Table,
    Id,
}
