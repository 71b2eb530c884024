pub mod booking;
pub mod movie;
pub mod seat;
pub mod showtime;

pub use booking::Booking;
pub use movie::{Movie, Screen};
pub use seat::{OccupancySnapshot, ParseSeatIdError, SeatId, SeatOccupancy};
pub use showtime::Showtime;
