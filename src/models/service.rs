use serde::{Deserialize, Serialize};

/// The four bookable transport categories offered by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Wedding,
    Airport,
    Cargo,
    Daily,
}

impl ServiceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Wedding => "wedding",
            ServiceType::Airport => "airport",
            ServiceType::Cargo => "cargo",
            ServiceType::Daily => "daily",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "wedding" => Some(ServiceType::Wedding),
            "airport" => Some(ServiceType::Airport),
            "cargo" => Some(ServiceType::Cargo),
            "daily" => Some(ServiceType::Daily),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One vehicle choice inside a service's rate display table. The delta is
/// added to the service base price for display purposes only; the price
/// calculator never reads it.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VehicleTypeOption {
    pub value: &'static str,
    pub label: &'static str,
    pub price_delta: f64,
}

/// A fixed catalog entry describing one bookable transport category.
/// Defined at compile time, never mutated.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ServiceDefinition {
    pub id: ServiceType,
    pub name: &'static str,
    pub base_price: f64,
    pub vehicle_options: &'static [VehicleTypeOption],
}
