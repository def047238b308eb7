use sea_orm::entity::prelude::*;

/// Per-room, per-date availability ledger row.
///
/// Absence of a row for a date means the room is open on that date; rows are
/// only written when a date is blocked (or explicitly overridden). The
/// `(room_id, date)` pair is unique — enforced by an index in the migration
/// so a concurrent double-block fails at insert time.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "room_availability")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub room_id: i32,
    pub date: Date,
    pub is_available: bool,
    pub price_override: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Room,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
