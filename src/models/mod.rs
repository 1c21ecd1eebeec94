pub mod booking;
pub mod schedule;
pub mod service;

pub use booking::{Booking, BookingRequest, FieldError, NewBooking};
pub use service::Service;
