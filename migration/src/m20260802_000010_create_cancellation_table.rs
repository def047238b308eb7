use sea_orm_migration::{prelude::*, schema::*};

use super::m20260802_000008_create_booking_table::Booking;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cancellation::Table)
                    .if_not_exists()
                    .col(pk_auto(Cancellation::Id))
                    .col(integer_uniq(Cancellation::BookingId))
                    .col(date(Cancellation::CancellationDate))
                    .col(double(Cancellation::RefundAmount))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cancellation_booking_id")
                            .from(Cancellation::Table, Cancellation::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cancellation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Cancellation {
    Table,
    Id,
    BookingId,
    CancellationDate,
    RefundAmount,
}
