//! Booking submission orchestration: validate, create the booking on the
//! backend, fetch the invoice best-effort, hand the caller its payment step.

use log::{info, warn};
use std::time::Duration;

use crate::models::booking::{Booking, BookingDraft, BookingUpdate};
use crate::models::user::Session;
use crate::services::api_client::{ApiClient, ApiError};
use crate::services::validation_service::{BookingValidator, ValidationErrorSet};

/// The invoice is a courtesy document; don't hold the payment step hostage
/// to a slow document generator.
const INVOICE_TIMEOUT_SECS: u64 = 5;

#[derive(Debug)]
pub enum BookingError {
    /// Field errors to render inline. Nothing was sent to the backend.
    Validation(ValidationErrorSet),
    /// The caller's session has no bearer token.
    NotAuthenticated,
    /// The backend rejected or failed the submission.
    Api(ApiError),
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::Validation(errors) => write!(f, "Validation failed: {}", errors),
            BookingError::NotAuthenticated => write!(f, "Please sign in to make a booking"),
            BookingError::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for BookingError {}

impl From<ApiError> for BookingError {
    fn from(err: ApiError) -> Self {
        BookingError::Api(err)
    }
}

/// Everything the payment UI needs after a successful submission: the
/// created booking and, when the backend produced one in time, its invoice.
#[derive(Debug)]
pub struct PaymentStep {
    pub booking: Booking,
    pub invoice: Option<Vec<u8>>,
}

pub struct BookingService {
    api: ApiClient,
}

impl BookingService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit a booking draft.
    ///
    /// 1. Validate; field errors come back without any network traffic.
    /// 2. Create the booking with status `pending` under the session token.
    /// 3. Fetch the invoice; failure here is logged and never blocks.
    /// 4. Return the payment step carrying the created record.
    pub async fn submit(
        &self,
        draft: &BookingDraft,
        session: &Session,
    ) -> Result<PaymentStep, BookingError> {
        let errors = BookingValidator::validate(draft);
        if !errors.is_empty() {
            return Err(BookingError::Validation(errors));
        }

        let token = session
            .bearer_token()
            .ok_or(BookingError::NotAuthenticated)?;

        let booking = self.api.create_booking(draft, token).await?;
        info!(
            "booking {} created (ref {}), fetching invoice",
            booking.id, draft.client_reference
        );

        let invoice = match tokio::time::timeout(
            Duration::from_secs(INVOICE_TIMEOUT_SECS),
            self.api.fetch_invoice(&booking.id, token),
        )
        .await
        {
            Ok(Ok(bytes)) => Some(bytes),
            Ok(Err(err)) => {
                warn!("invoice fetch failed for booking {}: {}", booking.id, err);
                None
            }
            Err(_) => {
                warn!("invoice fetch timed out for booking {}", booking.id);
                None
            }
        };

        Ok(PaymentStep { booking, invoice })
    }

    /// Attach payment details to an existing booking (the `PUT` leg of the
    /// payment step).
    pub async fn update_payment(
        &self,
        booking_id: &str,
        update: &BookingUpdate,
        session: &Session,
    ) -> Result<Booking, BookingError> {
        let token = session
            .bearer_token()
            .ok_or(BookingError::NotAuthenticated)?;
        Ok(self.api.update_booking(booking_id, update, token).await?)
    }
}
