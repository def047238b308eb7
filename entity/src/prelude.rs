pub use super::booking::Entity as Booking;
pub use super::cancellation::Entity as Cancellation;
pub use super::city::Entity as City;
pub use super::country::Entity as Country;
pub use super::hotel::Entity as Hotel;
pub use super::hotel_photo::Entity as HotelPhoto;
pub use super::payment::Entity as Payment;
pub use super::review::Entity as Review;
pub use super::room::Entity as Room;
pub use super::room_availability::Entity as RoomAvailability;
pub use super::user::Entity as User;
