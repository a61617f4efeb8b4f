use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A pre-packaged tour offered alongside the per-trip services.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourPackage {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub destinations: Vec<String>,
    pub days: u32,
    pub price_per_person: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourBookingRequest {
    pub start_date: NaiveDate,
    pub travelers: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourBooking {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub tour_id: Option<String>,
    #[serde(default)]
    pub total_price: Option<f64>,
}
