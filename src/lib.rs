//! Client core for the Giraffe Cabs vehicle booking platform.
//!
//! The backend owns all business authority — final prices, verified
//! distances, contracts, persistence. This crate is the client side of that
//! split: the advisory distance estimator and price calculator that react to
//! form edits, the booking and rental validators that gate submission, and
//! the orchestrators that drive the REST API with an explicit [`Session`].
//!
//! [`Session`]: models::user::Session

pub mod models;
pub mod services;

pub use models::booking::{Booking, BookingDraft, ServiceDetails};
pub use models::rental::RentalRequest;
pub use models::service::ServiceType;
pub use models::user::Session;
pub use services::api_client::ApiClient;
pub use services::booking_service::{BookingError, BookingService, PaymentStep};
pub use services::distance_service::DistanceService;
pub use services::pricing_service::PricingService;
pub use services::rental_service::{RentalError, RentalService};
pub use services::validation_service::{BookingValidator, RentalValidator, ValidationErrorSet};
