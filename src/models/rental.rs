use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Vehicle-rental request form state. Structurally a sibling of
/// [`crate::models::booking::BookingDraft`] with its own field set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub vehicle_id: String,
    pub rental_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Unit count for the chosen rental type (days, weeks or months).
    pub duration: Option<u32>,
    pub purpose: String,
}

impl RentalRequest {
    pub fn new(vehicle_id: impl Into<String>) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            ..Self::default()
        }
    }
}

/// Wire payload for `POST /api/vehicle-rentals`; status forced to "pending".
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalSubmission {
    pub vehicle_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    pub purpose: String,
    pub status: String,
}

impl RentalSubmission {
    pub fn from_request(request: &RentalRequest) -> Self {
        Self {
            vehicle_id: request.vehicle_id.clone(),
            rental_type: request.rental_type.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
            duration: request.duration,
            purpose: request.purpose.clone(),
            status: "pending".to_string(),
        }
    }
}

/// Rental record as created by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub vehicle_id: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
