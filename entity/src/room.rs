use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub capacity: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub cancellation_policy: Option<String>,
    pub has_wifi: bool,
    pub allows_pets: bool,
    pub has_air_conditioning: bool,
    pub has_tv: bool,
    pub has_minibar: bool,
    pub has_balcony: bool,
    pub has_kitchen: bool,
    pub has_safe: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Hotel,
    #[sea_orm(has_many = "super::room_availability::Entity")]
    RoomAvailability,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl Related<super::room_availability::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomAvailability.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
