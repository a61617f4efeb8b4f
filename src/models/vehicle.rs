use serde::{Deserialize, Serialize};

/// A vehicle offered to the platform through the provider onboarding portal.
/// Serialized both ways: sent on registration, echoed back with the id the
/// backend assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleListing {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub vehicle_number: String,
    pub vehicle_type: String,
    pub model: String,
    pub seats: u32,
    pub daily_rate: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
}
