pub mod bookings;
pub mod services;
