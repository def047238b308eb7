use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    controller::{auth, availability, booking, hotel, location, payment, review, room},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", get(auth::logout))
        .route("/api/auth/user", get(auth::get_user))
        .route(
            "/api/auth/request-password-reset",
            post(auth::request_password_reset),
        )
        .route("/api/auth/verify-reset-code", post(auth::verify_reset_code))
        .route("/api/auth/reset-password", post(auth::reset_password))
        .route("/api/locations/search", get(location::search_locations))
        .route(
            "/api/countries",
            post(location::create_country).get(location::list_countries),
        )
        .route(
            "/api/cities",
            post(location::create_city).get(location::list_cities),
        )
        .route("/api/cities/{id}/hotels", get(hotel::list_hotels_by_city))
        .route("/api/hotels", post(hotel::create_hotel))
        .route("/api/hotels/search-available", post(hotel::search_available))
        .route("/api/hotels/{id}", get(hotel::get_hotel))
        .route("/api/hotels/{id}/rooms", get(room::list_rooms_by_hotel))
        .route("/api/hotels/{id}/reviews", get(review::list_hotel_reviews))
        .route(
            "/api/hotels/{id}/photos",
            post(hotel::add_hotel_photo).get(hotel::list_hotel_photos),
        )
        .route("/api/rooms", post(room::create_room))
        .route("/api/rooms/filter", get(room::filter_rooms))
        .route("/api/rooms/{id}", get(room::get_room))
        .route(
            "/api/availability",
            post(availability::create_availability),
        )
        .route("/api/availability/check", get(availability::check_availability))
        .route(
            "/api/availability/unavailable",
            get(availability::list_unavailable),
        )
        .route("/api/bookings", post(booking::create_booking))
        .route("/api/bookings/my-bookings", get(booking::my_bookings))
        .route(
            "/api/bookings/my-bookings/{id}/cancel",
            post(booking::cancel_my_booking),
        )
        .route("/api/bookings/cleanup", post(booking::cleanup_bookings))
        .route("/api/bookings/{id}", get(booking::get_booking))
        .route("/api/bookings/{id}/confirm", post(booking::confirm_booking))
        .route("/api/bookings/{id}/cancel", post(booking::cancel_booking))
        .route("/api/payments", post(payment::create_payment))
        .route(
            "/api/payments/booking/{id}",
            get(payment::get_payment_by_booking),
        )
        .route("/api/reviews", post(review::create_review))
}
