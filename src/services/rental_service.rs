//! Rental request submission: the same validate-then-submit shape as
//! booking submission, without an invoice step.

use log::info;

use crate::models::rental::{RentalRecord, RentalRequest};
use crate::models::user::Session;
use crate::services::api_client::{ApiClient, ApiError};
use crate::services::validation_service::{RentalValidator, ValidationErrorSet};

#[derive(Debug)]
pub enum RentalError {
    Validation(ValidationErrorSet),
    NotAuthenticated,
    Api(ApiError),
}

impl std::fmt::Display for RentalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RentalError::Validation(errors) => write!(f, "Validation failed: {}", errors),
            RentalError::NotAuthenticated => write!(f, "Please sign in to request a rental"),
            RentalError::Api(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for RentalError {}

impl From<ApiError> for RentalError {
    fn from(err: ApiError) -> Self {
        RentalError::Api(err)
    }
}

pub struct RentalService {
    api: ApiClient,
}

impl RentalService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Validate the rental request and submit it with status `pending`.
    /// Field errors return without touching the network.
    pub async fn submit(
        &self,
        request: &RentalRequest,
        session: &Session,
    ) -> Result<RentalRecord, RentalError> {
        let errors = RentalValidator::validate(request);
        if !errors.is_empty() {
            return Err(RentalError::Validation(errors));
        }

        let token = session
            .bearer_token()
            .ok_or(RentalError::NotAuthenticated)?;

        let record = self.api.create_rental(request, token).await?;
        info!("rental request {} created for vehicle {}", record.id, request.vehicle_id);
        Ok(record)
    }
}
