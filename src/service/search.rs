//! Hotel availability search.

use sea_orm::DatabaseConnection;

use crate::{
    data::{
        availability::AvailabilityRepository, hotel::HotelRepository,
        location::LocationRepository, photo::PhotoRepository, review::ReviewRepository,
        room::RoomRepository,
    },
    error::{booking::BookingError, AppError},
    model::search::{HotelSearchResultDto, SearchRequestDto, SortBy},
};

/// Resolved destination of a search request.
pub(crate) struct Destination {
    pub country: entity::country::Model,
    pub city: Option<entity::city::Model>,
}

pub struct SearchService;

impl SearchService {
    /// Finds hotels with enough simultaneously free rooms for the request.
    ///
    /// A hotel qualifies when the number of its rooms that hold at least
    /// `ceil(adults / rooms)` guests and are free for the whole range
    /// reaches the requested room count. An unknown destination country
    /// yields an empty list rather than an error.
    pub async fn search(
        db: &DatabaseConnection,
        request: SearchRequestDto,
    ) -> Result<Vec<HotelSearchResultDto>, AppError> {
        if request.check_out_date <= request.check_in_date {
            return Err(BookingError::InvalidRange.into());
        }
        if request.rooms == 0 {
            return Err(AppError::BadRequest(
                "At least one room is required".to_string(),
            ));
        }

        let Some(destination) = Self::resolve_destination(db, &request.destination).await? else {
            return Ok(Vec::new());
        };

        let guests_per_room = i32::try_from(request.adults.div_ceil(request.rooms))
            .map_err(|_| AppError::BadRequest("Too many adults for the request".to_string()))?;

        let hotels = HotelRepository::new(db)
            .candidates(
                destination.country.id,
                destination.city.as_ref().map(|city| city.id),
                request.min_stars,
            )
            .await?;

        let rooms = RoomRepository::new(db);
        let availability = AvailabilityRepository::new(db);
        let photos = PhotoRepository::new(db);
        let reviews = ReviewRepository::new(db);

        let mut results = Vec::new();
        for hotel in hotels {
            let mut available = Vec::new();
            for room in rooms
                .candidates_for_hotel(hotel.id, guests_per_room)
                .await?
            {
                if availability
                    .is_range_available(room.id, request.check_in_date, request.check_out_date)
                    .await?
                {
                    available.push(room);
                }
            }

            if (available.len() as u32) < request.rooms {
                continue;
            }

            let min_price = available
                .iter()
                .map(|room| room.price_per_night)
                .fold(None, |acc: Option<f64>, price| {
                    Some(acc.map_or(price, |lowest: f64| lowest.min(price)))
                });

            let cover_photo = photos
                .cover_for_hotel(hotel.id)
                .await?
                .map(|photo| photo.image_url);

            let ratings = reviews.ratings_for_hotel(hotel.id).await?;
            let review_count = ratings.len() as u64;
            let average_rating = if ratings.is_empty() {
                None
            } else {
                Some(ratings.iter().sum::<i32>() as f64 / ratings.len() as f64)
            };

            results.push(HotelSearchResultDto {
                hotel_id: hotel.id,
                name: hotel.name,
                address: hotel.address,
                stars: hotel.stars,
                description: hotel.description,
                latitude: hotel.latitude,
                longitude: hotel.longitude,
                min_price,
                cover_photo,
                review_count,
                average_rating,
                available_room_ids: available.iter().map(|room| room.id).collect(),
            });
        }

        if let Some(sort_by) = request.sort_by {
            Self::sort_results(&mut results, sort_by);
        }

        Ok(results)
    }

    /// Parses a free-text destination.
    ///
    /// "City, Country" resolves the country and narrows to the city when it
    /// exists there; an unknown city degrades to a country-wide search. A
    /// bare name is treated as a country. An unknown country yields `None`.
    pub(crate) async fn resolve_destination(
        db: &DatabaseConnection,
        destination: &str,
    ) -> Result<Option<Destination>, AppError> {
        let locations = LocationRepository::new(db);
        let parts: Vec<&str> = destination.split(',').map(str::trim).collect();

        if parts.len() >= 2 {
            let Some(country) = locations.find_country_by_name(parts[1]).await? else {
                return Ok(None);
            };
            let city = locations.find_city_in_country(parts[0], country.id).await?;
            return Ok(Some(Destination { country, city }));
        }

        Ok(locations
            .find_country_by_name(parts[0])
            .await?
            .map(|country| Destination {
                country,
                city: None,
            }))
    }

    /// Orders results in place. Hotels missing the sort key rank worst:
    /// no price is treated as +infinity ascending and 0 descending, no
    /// rating as 0.
    pub(crate) fn sort_results(results: &mut [HotelSearchResultDto], sort_by: SortBy) {
        match sort_by {
            SortBy::PriceAsc => results.sort_by(|a, b| {
                a.min_price
                    .unwrap_or(f64::INFINITY)
                    .total_cmp(&b.min_price.unwrap_or(f64::INFINITY))
            }),
            SortBy::PriceDesc => results.sort_by(|a, b| {
                b.min_price
                    .unwrap_or(0.0)
                    .total_cmp(&a.min_price.unwrap_or(0.0))
            }),
            SortBy::Reviews => results.sort_by(|a, b| b.review_count.cmp(&a.review_count)),
            SortBy::Rating => results.sort_by(|a, b| {
                b.average_rating
                    .unwrap_or(0.0)
                    .total_cmp(&a.average_rating.unwrap_or(0.0))
            }),
        }
    }
}
