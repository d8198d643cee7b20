pub mod booking;
pub mod login;
pub mod registration;
