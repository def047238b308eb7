//! Country factory for creating test country entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test countries with customizable fields.
pub struct CountryFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> CountryFactory<'a> {
    /// Creates a new CountryFactory with a unique default name.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Country {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::country::Model, DbErr> {
        entity::country::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a country with default values.
pub async fn create_country(db: &DatabaseConnection) -> Result<entity::country::Model, DbErr> {
    CountryFactory::new(db).build().await
}
