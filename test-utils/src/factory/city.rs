//! City factory for creating test city entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test cities with customizable fields.
pub struct CityFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    country_id: i32,
}

impl<'a> CityFactory<'a> {
    /// Creates a new CityFactory with a unique default name.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `country_id` - Country this city belongs to
    pub fn new(db: &'a DatabaseConnection, country_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("City {}", id),
            country_id,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            country_id: ActiveValue::Set(self.country_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a city with default values in the given country.
pub async fn create_city(
    db: &DatabaseConnection,
    country_id: i32,
) -> Result<entity::city::Model, DbErr> {
    CityFactory::new(db, country_id).build().await
}
