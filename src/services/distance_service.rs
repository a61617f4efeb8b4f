//! Advisory distance estimation over a static route table.
//!
//! The table covers the city pairs the fleet actually serves; anything else
//! is estimated by composing two legs through a hub city. Estimates are
//! shown to the user as non-authoritative — the final distance and price are
//! confirmed by backend staff — so an unknown pair simply yields 0 and never
//! blocks a submission.

use regex::Regex;
use std::sync::OnceLock;

/// Known routes in kilometers. Keys are normalized place names joined with a
/// hyphen; lookups are direction-tolerant even though storage is directional.
const ROUTE_TABLE: &[(&str, u32)] = &[
    ("colombo-kandy", 115),
    ("colombo-negombo", 37),
    ("colombo-galle", 119),
    ("colombo-jaffna", 398),
    ("colombo-trincomalee", 257),
    ("colombo-anuradhapura", 200),
    ("colombo-batticaloa", 314),
    ("colombo-matara", 160),
    ("colombo-badulla", 230),
    ("colombo-nuwara-eliya", 180),
    ("colombo-malabe", 13),
    ("colombo-katunayake", 32),
    ("colombo-kurunegala", 94),
    ("colombo-ratnapura", 101),
    ("kandy-nuwara-eliya", 77),
    ("kandy-jaffna", 320),
    ("kandy-trincomalee", 182),
    ("kandy-anuradhapura", 136),
    ("kandy-badulla", 115),
    ("galle-matara", 45),
    ("galle-hambantota", 123),
    ("negombo-katunayake", 8),
];

/// Hubs tried for two-leg composition, in order. First hub with both legs
/// wins; there is no minimization across hubs.
const HUB_CITIES: &[&str] = &["colombo", "kandy", "galle"];

pub struct DistanceService;

impl DistanceService {
    /// Estimated kilometers between two free-text locations. 0 means
    /// unknown; the result is never negative.
    pub fn estimate(pickup: &str, dropoff: &str) -> u32 {
        if pickup.trim().is_empty() || dropoff.trim().is_empty() {
            return 0;
        }

        let from = Self::normalize(pickup);
        let to = Self::normalize(dropoff);

        if let Some(km) = Self::leg(&from, &to) {
            return km;
        }

        for hub in HUB_CITIES {
            if let (Some(first), Some(second)) = (Self::leg(&from, hub), Self::leg(hub, &to)) {
                return first + second;
            }
        }

        0
    }

    /// Lowercase, collapse whitespace runs to a single hyphen, strip
    /// everything that is not a lowercase letter or hyphen.
    pub fn normalize(place: &str) -> String {
        static WHITESPACE: OnceLock<Regex> = OnceLock::new();
        static INVALID: OnceLock<Regex> = OnceLock::new();
        let whitespace = WHITESPACE.get_or_init(|| Regex::new(r"\s+").unwrap());
        let invalid = INVALID.get_or_init(|| Regex::new(r"[^a-z-]").unwrap());

        let lowered = place.trim().to_lowercase();
        let hyphenated = whitespace.replace_all(&lowered, "-");
        invalid.replace_all(&hyphenated, "").into_owned()
    }

    fn leg(from: &str, to: &str) -> Option<u32> {
        Self::lookup(from, to).or_else(|| Self::lookup(to, from))
    }

    fn lookup(from: &str, to: &str) -> Option<u32> {
        let key = format!("{}-{}", from, to);
        ROUTE_TABLE
            .iter()
            .find(|(route, _)| *route == key)
            .map(|(_, km)| *km)
    }
}
