use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::service::ServiceType;
use crate::services::distance_service::DistanceService;
use crate::services::pricing_service::PricingService;

/// Service-specific detail fields, one variant per bookable service.
///
/// The backend accepts these as a free-form `serviceDetails` object, so the
/// variants serialize untagged into exactly the field set each service uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceDetails {
    None,
    Wedding {
        #[serde(rename = "vehicleType", skip_serializing_if = "Option::is_none")]
        vehicle_type: Option<String>,
    },
    Airport {
        #[serde(rename = "vehicleType", skip_serializing_if = "Option::is_none")]
        vehicle_type: Option<String>,
        #[serde(rename = "flightTime", skip_serializing_if = "Option::is_none")]
        flight_time: Option<String>,
    },
    Cargo {
        #[serde(rename = "vehicleType", skip_serializing_if = "Option::is_none")]
        vehicle_type: Option<String>,
        #[serde(rename = "cargoWeightKg", skip_serializing_if = "Option::is_none")]
        cargo_weight_kg: Option<f64>,
    },
    Daily {
        #[serde(rename = "vehicleType", skip_serializing_if = "Option::is_none")]
        vehicle_type: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        days: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        hours: Option<u32>,
    },
}

impl ServiceDetails {
    pub fn is_none(&self) -> bool {
        matches!(self, ServiceDetails::None)
    }

    /// The selected vehicle type key, whichever variant is active.
    pub fn vehicle_type(&self) -> Option<&str> {
        match self {
            ServiceDetails::None => None,
            ServiceDetails::Wedding { vehicle_type } => vehicle_type.as_deref(),
            ServiceDetails::Airport { vehicle_type, .. } => vehicle_type.as_deref(),
            ServiceDetails::Cargo { vehicle_type, .. } => vehicle_type.as_deref(),
            ServiceDetails::Daily { vehicle_type, .. } => vehicle_type.as_deref(),
        }
    }
}

impl Default for ServiceDetails {
    fn default() -> Self {
        ServiceDetails::None
    }
}

/// The in-progress, user-editable booking form state before submission.
///
/// `total_price` is derived from (`service_type`, `distance_km`, the vehicle
/// type inside `details`) and nothing else; callers invoke
/// [`BookingDraft::recompute_price`] after changing any of those fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraft {
    /// Client-generated reference, stable for the lifetime of the form.
    /// Lets the backend deduplicate a double submission and correlates logs.
    pub client_reference: Uuid,
    pub service_type: Option<ServiceType>,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub pickup_date: Option<NaiveDate>,
    pub pickup_time: Option<NaiveTime>,
    pub return_date: Option<NaiveDate>,
    pub return_time: Option<NaiveTime>,
    pub passengers: Option<u32>,
    pub distance_km: f64,
    pub total_price: f64,
    pub additional_notes: String,
    #[serde(rename = "serviceDetails", skip_serializing_if = "ServiceDetails::is_none", default)]
    pub details: ServiceDetails,
}

impl BookingDraft {
    pub fn new() -> Self {
        Self {
            client_reference: Uuid::new_v4(),
            service_type: None,
            pickup_location: String::new(),
            dropoff_location: String::new(),
            pickup_date: None,
            pickup_time: None,
            return_date: None,
            return_time: None,
            passengers: None,
            distance_km: 0.0,
            total_price: 0.0,
            additional_notes: String::new(),
            details: ServiceDetails::None,
        }
    }

    /// Re-derive `total_price` from the current service, distance and vehicle
    /// selection. Passenger count never affects the price.
    pub fn recompute_price(&mut self) {
        self.total_price = PricingService::calculate_price(
            self.service_type,
            self.distance_km,
            self.details.vehicle_type(),
        );
    }

    /// Fill `distance_km` from the route table when the pickup/dropoff pair is
    /// known, then recompute the price. Leaves a user-entered distance alone
    /// when the pair is not in the table. Advisory only.
    pub fn apply_distance_estimate(&mut self) {
        let estimate = DistanceService::estimate(&self.pickup_location, &self.dropoff_location);
        if estimate > 0 {
            self.distance_km = estimate as f64;
        }
        self.recompute_price();
    }
}

impl Default for BookingDraft {
    fn default() -> Self {
        Self::new()
    }
}

/// Wire payload for `POST /api/bookings`. Always carries `status: "pending"`;
/// the backend owns every later status transition.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingSubmission {
    pub client_reference: Uuid,
    pub service_type: Option<ServiceType>,
    pub pickup_location: String,
    pub dropoff_location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pickup_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passengers: Option<u32>,
    pub distance_km: f64,
    pub total_price: f64,
    pub additional_notes: String,
    #[serde(rename = "serviceDetails", skip_serializing_if = "ServiceDetails::is_none")]
    pub service_details: ServiceDetails,
    pub status: String,
}

impl BookingSubmission {
    pub fn from_draft(draft: &BookingDraft) -> Self {
        Self {
            client_reference: draft.client_reference,
            service_type: draft.service_type,
            pickup_location: draft.pickup_location.clone(),
            dropoff_location: draft.dropoff_location.clone(),
            pickup_date: draft.pickup_date,
            pickup_time: draft.pickup_time,
            return_date: draft.return_date,
            return_time: draft.return_time,
            passengers: draft.passengers,
            distance_km: draft.distance_km,
            total_price: draft.total_price,
            additional_notes: draft.additional_notes.clone(),
            service_details: draft.details.clone(),
            status: "pending".to_string(),
        }
    }
}

/// Booking record as returned by the backend. Server-computed fields beyond
/// id and status are carried along but treated as informational.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub status: String,
    #[serde(default)]
    pub service_type: Option<ServiceType>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub dropoff_location: Option<String>,
    #[serde(default)]
    pub total_price: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update for `PUT /api/bookings/:id`, used by the payment step.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
