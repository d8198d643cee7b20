//! Home-services booking client
//!
//! This library holds the client-side logic of a home-services booking
//! marketplace: form state, field validation and submission to the backend.
//! Rendering is left to whatever shell drives the forms.
//!
//! # Modules
//!
//! - `forms`: booking, registration and login forms
//! - `services`: field validators, password strength policy and the submission workflow
//! - `client`: `BookingApiClient`, the HTTP transport the workflow submits through
//! - `models`: error maps, notices and the service catalogue
//!
//! # Submission
//!
//! A submit validates every field first and only then makes a single request.
//! A form refuses a second submit while its request is in flight, and a
//! failed request leaves every field as typed so the user can retry.

pub mod client;
pub mod config;
pub mod error;
pub mod forms;
pub mod inputs;
pub mod models;
pub mod services;

#[cfg(test)]
mod client_mock;
#[cfg(test)]
mod test_utils;

// Re-export the main API types for ease of use
pub use client::{BookingApiClient, Endpoint, SubmissionTransport};
pub use config::ClientConfig;
pub use error::{ConfigError, FormError, InputError, SubmissionError};
pub use forms::booking::BookingForm;
pub use forms::login::LoginForm;
pub use forms::registration::{RegistrationForm, Role};
pub use services::workflow::{submit, FormController};
