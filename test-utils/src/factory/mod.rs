//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, country, city, hotel, room) =
//!         factory::helpers::create_room_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let room = factory::room::RoomFactory::new(&db, hotel.id)
//!     .price_per_night(250.0)
//!     .capacity(4)
//!     .build()
//!     .await?;
//! ```

pub mod booking;
pub mod city;
pub mod country;
pub mod helpers;
pub mod hotel;
pub mod hotel_photo;
pub mod payment;
pub mod review;
pub mod room;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use booking::create_booking;
pub use city::create_city;
pub use country::create_country;
pub use hotel::create_hotel;
pub use hotel_photo::create_photo;
pub use payment::create_payment;
pub use review::create_review;
pub use room::create_room;
pub use user::create_user;
