pub use sea_orm_migration::prelude::*;

mod m20260801_000001_create_user_table;
mod m20260801_000002_create_country_table;
mod m20260801_000003_create_city_table;
mod m20260801_000004_create_hotel_table;
mod m20260801_000005_create_hotel_photo_table;
mod m20260801_000006_create_room_table;
mod m20260802_000007_create_room_availability_table;
mod m20260802_000008_create_booking_table;
mod m20260802_000009_create_payment_table;
mod m20260802_000010_create_cancellation_table;
mod m20260803_000011_create_review_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260801_000001_create_user_table::Migration),
            Box::new(m20260801_000002_create_country_table::Migration),
            Box::new(m20260801_000003_create_city_table::Migration),
            Box::new(m20260801_000004_create_hotel_table::Migration),
            Box::new(m20260801_000005_create_hotel_photo_table::Migration),
            Box::new(m20260801_000006_create_room_table::Migration),
            Box::new(m20260802_000007_create_room_availability_table::Migration),
            Box::new(m20260802_000008_create_booking_table::Migration),
            Box::new(m20260802_000009_create_payment_table::Migration),
            Box::new(m20260802_000010_create_cancellation_table::Migration),
            Box::new(m20260803_000011_create_review_table::Migration),
        ]
    }
}
