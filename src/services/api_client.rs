//! REST client for the Giraffe Cabs backend.
//!
//! Every network operation in the crate goes through here: one reqwest
//! client, bearer-token auth on protected endpoints, and a single policy for
//! turning failure responses into user-visible messages (the server's
//! `message` field when it sends one, a generic fallback when it does not).
//! No operation is retried; each is attempted once per user action.

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::env;
use std::time::Duration;
use url::Url;

use crate::models::booking::{Booking, BookingDraft, BookingSubmission, BookingUpdate};
use crate::models::rental::{RentalRecord, RentalRequest, RentalSubmission};
use crate::models::tour::{TourBooking, TourBookingRequest, TourPackage};
use crate::models::user::{AuthResponse, LoginRequest, RegisterRequest, Session};
use crate::models::vehicle::VehicleListing;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Shown when the backend fails without a usable message of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug)]
pub enum ApiError {
    /// Bad client-side configuration (unparseable base URL and the like).
    Config(String),
    /// The request never produced a response: connection refused, timeout,
    /// DNS failure, or an unreadable body.
    Request(String),
    /// The backend answered with a non-success status.
    Server { status: u16, message: String },
}

impl ApiError {
    /// The one line a UI should show for this failure.
    pub fn user_message(&self) -> &str {
        match self {
            ApiError::Server { message, .. } => message,
            _ => GENERIC_ERROR_MESSAGE,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Config(err) => write!(f, "Configuration error: {}", err),
            ApiError::Request(err) => write!(f, "Request error: {}", err),
            ApiError::Server { status, message } => {
                write!(f, "Backend error ({}): {}", status, message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Config(format!("invalid base URL {}: {}", base_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    /// Base URL from `GIRAFFE_API_URL`, falling back to the local backend.
    pub fn from_env() -> Result<Self, ApiError> {
        dotenv::dotenv().ok();
        let base_url = env::var("GIRAFFE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base_url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // -- auth ---------------------------------------------------------------

    pub async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let auth: AuthResponse = self.post_json("api/auth/login", &request, None).await?;
        Ok(Session::Authenticated {
            token: auth.token,
            user: auth.user,
        })
    }

    pub async fn register(&self, request: &RegisterRequest) -> Result<Session, ApiError> {
        let auth: AuthResponse = self.post_json("api/auth/register", request, None).await?;
        Ok(Session::Authenticated {
            token: auth.token,
            user: auth.user,
        })
    }

    // -- bookings -----------------------------------------------------------

    /// Create a booking from the draft. The payload always goes out with
    /// `status: "pending"`; the backend owns every later transition.
    pub async fn create_booking(
        &self,
        draft: &BookingDraft,
        token: &str,
    ) -> Result<Booking, ApiError> {
        let submission = BookingSubmission::from_draft(draft);
        self.post_json("api/bookings", &submission, Some(token)).await
    }

    /// The generated invoice document for a booking, as opaque bytes.
    pub async fn fetch_invoice(&self, booking_id: &str, token: &str) -> Result<Vec<u8>, ApiError> {
        let url = self.endpoint(&format!("api/bookings/{}/invoice", booking_id))?;
        debug!("GET {}", url);

        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {}", token))
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if response.status().is_success() {
            response
                .bytes()
                .await
                .map(|bytes| bytes.to_vec())
                .map_err(|e| ApiError::Request(e.to_string()))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Partial update, used by the payment step to attach the method and
    /// transaction outcome.
    pub async fn update_booking(
        &self,
        booking_id: &str,
        update: &BookingUpdate,
        token: &str,
    ) -> Result<Booking, ApiError> {
        let url = self.endpoint(&format!("api/bookings/{}", booking_id))?;
        debug!("PUT {}", url);

        let response = self
            .http
            .put(url)
            .header("Authorization", format!("Bearer {}", token))
            .json(update)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        Self::parse_json(response).await
    }

    pub async fn my_bookings(&self, token: &str) -> Result<Vec<Booking>, ApiError> {
        self.get_json("api/bookings/my", Some(token)).await
    }

    // -- rentals ------------------------------------------------------------

    pub async fn create_rental(
        &self,
        request: &RentalRequest,
        token: &str,
    ) -> Result<RentalRecord, ApiError> {
        let submission = RentalSubmission::from_request(request);
        self.post_json("api/vehicle-rentals", &submission, Some(token)).await
    }

    // -- tours --------------------------------------------------------------

    pub async fn list_tours(&self) -> Result<Vec<TourPackage>, ApiError> {
        self.get_json("api/tours", None).await
    }

    pub async fn book_tour(
        &self,
        tour_id: &str,
        request: &TourBookingRequest,
        token: &str,
    ) -> Result<TourBooking, ApiError> {
        self.post_json(&format!("api/tours/{}/bookings", tour_id), request, Some(token))
            .await
    }

    // -- provider onboarding ------------------------------------------------

    pub async fn register_vehicle(
        &self,
        listing: &VehicleListing,
        token: &str,
    ) -> Result<VehicleListing, ApiError> {
        self.post_json("api/vehicles", listing, Some(token)).await
    }

    // -- plumbing -----------------------------------------------------------

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Config(format!("invalid endpoint {}: {}", path, e)))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        debug!("GET {}", url);

        let mut request = self.http.get(url);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::parse_json(response).await
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let url = self.endpoint(path)?;
        debug!("POST {}", url);

        let mut request = self.http.post(url).json(body);
        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        Self::parse_json(response).await
    }

    async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        if response.status().is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::Request(format!("unexpected response shape: {}", e)))
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    /// Prefer the server's own `message` field; fall back to the generic
    /// user-facing text when the body has none.
    async fn error_from_response(response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(String::from)
            })
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());

        ApiError::Server { status, message }
    }
}
