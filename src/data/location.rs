//! Country and city repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

/// Maximum suggestions returned per kind by the autocomplete search.
const SUGGESTION_LIMIT: u64 = 5;

pub struct LocationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LocationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a country. Duplicate names surface as a unique constraint
    /// violation for the service to map.
    pub async fn create_country(&self, name: String) -> Result<entity::country::Model, DbErr> {
        entity::country::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
        }
        .insert(self.db)
        .await
    }

    pub async fn list_countries(&self) -> Result<Vec<entity::country::Model>, DbErr> {
        entity::prelude::Country::find()
            .order_by_asc(entity::country::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_country_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::country::Model>, DbErr> {
        entity::prelude::Country::find_by_id(id).one(self.db).await
    }

    pub async fn find_country_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::country::Model>, DbErr> {
        entity::prelude::Country::find()
            .filter(entity::country::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn create_city(
        &self,
        name: String,
        country_id: i32,
    ) -> Result<entity::city::Model, DbErr> {
        entity::city::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(name),
            country_id: ActiveValue::Set(country_id),
        }
        .insert(self.db)
        .await
    }

    pub async fn list_cities(
        &self,
        country_id: Option<i32>,
    ) -> Result<Vec<entity::city::Model>, DbErr> {
        let mut query =
            entity::prelude::City::find().order_by_asc(entity::city::Column::Name);

        if let Some(country_id) = country_id {
            query = query.filter(entity::city::Column::CountryId.eq(country_id));
        }

        query.all(self.db).await
    }

    pub async fn find_city_by_id(&self, id: i32) -> Result<Option<entity::city::Model>, DbErr> {
        entity::prelude::City::find_by_id(id).one(self.db).await
    }

    /// City lookup by name within a country, for destination parsing.
    pub async fn find_city_in_country(
        &self,
        name: &str,
        country_id: i32,
    ) -> Result<Option<entity::city::Model>, DbErr> {
        entity::prelude::City::find()
            .filter(entity::city::Column::Name.eq(name))
            .filter(entity::city::Column::CountryId.eq(country_id))
            .one(self.db)
            .await
    }

    /// Prefix autocomplete over cities (with their country) and countries.
    ///
    /// Returns at most five of each, alphabetically.
    pub async fn search(
        &self,
        prefix: &str,
    ) -> Result<
        (
            Vec<(entity::city::Model, Option<entity::country::Model>)>,
            Vec<entity::country::Model>,
        ),
        DbErr,
    > {
        let cities = entity::prelude::City::find()
            .find_also_related(entity::prelude::Country)
            .filter(entity::city::Column::Name.starts_with(prefix))
            .order_by_asc(entity::city::Column::Name)
            .limit(SUGGESTION_LIMIT)
            .all(self.db)
            .await?;

        let countries = entity::prelude::Country::find()
            .filter(entity::country::Column::Name.starts_with(prefix))
            .order_by_asc(entity::country::Column::Name)
            .limit(SUGGESTION_LIMIT)
            .all(self.db)
            .await?;

        Ok((cities, countries))
    }
}
