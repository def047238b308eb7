use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        hotel::HotelReviewsQuery,
        review::{CreateReviewDto, ReviewDto},
    },
    service::review::ReviewService,
    state::AppState,
};

pub static REVIEW_TAG: &str = "review";

#[utoipa::path(
    post,
    path = "/api/reviews",
    tag = REVIEW_TAG,
    request_body = CreateReviewDto,
    responses(
        (status = 201, description = "Review created", body = ReviewDto),
        (status = 400, description = "Invalid rating, booking not completed, or already reviewed", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Booking belongs to another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_review(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReviewDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let review = ReviewService::create(&state.db, user.id, payload).await?;

    Ok((StatusCode::CREATED, Json(ReviewDto::from(review))))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{id}/reviews",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Hotel ID"),
        ("min_rating" = Option<i32>, Query, description = "Keep reviews at or above this rating"),
        ("only_with_text" = Option<bool>, Query, description = "Drop rating-only reviews")
    ),
    responses(
        (status = 200, description = "Reviews for the hotel, newest first", body = Vec<ReviewDto>),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_hotel_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<HotelReviewsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::list_for_hotel(&state.db, id, query).await?;

    Ok((
        StatusCode::OK,
        Json(reviews.into_iter().map(ReviewDto::from).collect::<Vec<_>>()),
    ))
}
