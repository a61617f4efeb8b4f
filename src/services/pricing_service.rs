use crate::models::service::{ServiceDefinition, ServiceType, VehicleTypeOption};

// Per-km rates in LKR. Fixed business rules, not runtime configuration.
const CARGO_RATE_PER_KM: f64 = 120.0;
const DAILY_DEFAULT_RATE_PER_KM: f64 = 90.0;

/// The full service catalog. Prices here are advisory; the backend confirms
/// the final figure before a contract is issued.
const CATALOG: &[ServiceDefinition] = &[
    ServiceDefinition {
        id: ServiceType::Wedding,
        name: "Wedding Hire",
        base_price: 30000.0,
        vehicle_options: &[
            VehicleTypeOption { value: "wedding-car", label: "Wedding Car", price_delta: 0.0 },
            VehicleTypeOption { value: "luxury-car", label: "Luxury Car", price_delta: 10000.0 },
            VehicleTypeOption { value: "premium-package", label: "Premium Package", price_delta: -5000.0 },
        ],
    },
    ServiceDefinition {
        id: ServiceType::Airport,
        name: "Airport Transfer",
        base_price: 2000.0,
        vehicle_options: &[
            VehicleTypeOption { value: "car", label: "Car", price_delta: 0.0 },
            VehicleTypeOption { value: "van", label: "Van", price_delta: 1500.0 },
            VehicleTypeOption { value: "luxury", label: "Luxury", price_delta: 3000.0 },
        ],
    },
    ServiceDefinition {
        id: ServiceType::Cargo,
        name: "Cargo Transport",
        base_price: 5000.0,
        vehicle_options: &[
            VehicleTypeOption { value: "lorry", label: "Lorry", price_delta: 0.0 },
            VehicleTypeOption { value: "truck", label: "Truck", price_delta: 2500.0 },
            VehicleTypeOption { value: "mini-van", label: "Mini Van", price_delta: -1000.0 },
        ],
    },
    ServiceDefinition {
        id: ServiceType::Daily,
        name: "Daily Hire",
        base_price: 4500.0,
        vehicle_options: &[
            VehicleTypeOption { value: "bike", label: "Bike", price_delta: 0.0 },
            VehicleTypeOption { value: "economy", label: "Economy", price_delta: 0.0 },
            VehicleTypeOption { value: "comfort", label: "Comfort", price_delta: 0.0 },
            VehicleTypeOption { value: "luxury", label: "Luxury", price_delta: 0.0 },
            VehicleTypeOption { value: "van", label: "Van", price_delta: 0.0 },
        ],
    },
];

pub struct PricingService;

impl PricingService {
    pub fn catalog() -> &'static [ServiceDefinition] {
        CATALOG
    }

    pub fn definition(service: ServiceType) -> &'static ServiceDefinition {
        match service {
            ServiceType::Wedding => &CATALOG[0],
            ServiceType::Airport => &CATALOG[1],
            ServiceType::Cargo => &CATALOG[2],
            ServiceType::Daily => &CATALOG[3],
        }
    }

    /// Advisory total for the current selection.
    ///
    /// Wedding and airport hires are flat-priced at the service base price
    /// for every distance and vehicle choice; the wedding rate display table
    /// suggests vehicle choice should matter, but the platform charges the
    /// flat package price and this keeps that behavior. Cargo and daily
    /// hires scale with distance and clamp to 0 when no distance is known.
    pub fn calculate_price(
        service: Option<ServiceType>,
        distance_km: f64,
        vehicle_type: Option<&str>,
    ) -> f64 {
        let service = match service {
            Some(service) => service,
            None => return 0.0,
        };

        match service {
            ServiceType::Wedding => Self::definition(ServiceType::Wedding).base_price,
            ServiceType::Airport => Self::definition(ServiceType::Airport).base_price,
            ServiceType::Cargo => {
                if distance_km <= 0.0 {
                    0.0
                } else {
                    distance_km * CARGO_RATE_PER_KM
                }
            }
            ServiceType::Daily => {
                if distance_km <= 0.0 {
                    0.0
                } else {
                    distance_km * Self::daily_rate_per_km(vehicle_type)
                }
            }
        }
    }

    /// Per-km rate for daily hires, selected by vehicle type. Unrecognized
    /// or unset vehicle types fall back to the economy rate.
    pub fn daily_rate_per_km(vehicle_type: Option<&str>) -> f64 {
        match vehicle_type.map(|v| v.trim().to_lowercase()).as_deref() {
            Some("bike") => 50.0,
            Some("economy") => 90.0,
            Some("comfort") => 120.0,
            Some("luxury") => 150.0,
            Some("van") => 120.0,
            _ => DAILY_DEFAULT_RATE_PER_KM,
        }
    }

    /// The user-facing rate table for a service: each vehicle option with its
    /// display price (base plus delta). Display only; `calculate_price`
    /// never consults these figures.
    pub fn display_rates(service: ServiceType) -> Vec<(&'static str, f64)> {
        let definition = Self::definition(service);
        definition
            .vehicle_options
            .iter()
            .map(|option| (option.label, definition.base_price + option.price_delta))
            .collect()
    }
}
