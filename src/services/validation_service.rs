//! Form validation for booking drafts and vehicle-rental requests.
//!
//! Both validators follow the same contract: pure, total, never
//! short-circuiting. Every applicable rule runs and the full error set comes
//! back in one pass, keyed by the wire/form field name. Wall-clock "now" is
//! read once per call so every temporal rule in the pass agrees on it.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::models::booking::BookingDraft;
use crate::models::rental::RentalRequest;

const MAX_PASSENGERS: u32 = 50;
const MAX_NOTES_CHARS: usize = 500;
const MIN_LOCATION_CHARS: usize = 3;
const MIN_PURPOSE_CHARS: usize = 10;
const MAX_RENTAL_SPAN_DAYS: i64 = 730;

/// Field-keyed map of human-readable validation failure messages. Empty
/// means the form is submittable. Rebuilt from scratch on every validation
/// call; never merged across attempts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationErrorSet {
    errors: BTreeMap<String, String>,
}

impl ValidationErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert(&mut self, field: &str, message: &str) {
        self.errors.insert(field.to_string(), message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn message(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for ValidationErrorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.errors {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

pub struct BookingValidator;

impl BookingValidator {
    pub fn validate(draft: &BookingDraft) -> ValidationErrorSet {
        Self::validate_at(draft, Local::now().naive_local())
    }

    /// Validation against an explicit "now", read exactly once per pass.
    pub fn validate_at(draft: &BookingDraft, now: NaiveDateTime) -> ValidationErrorSet {
        let mut errors = ValidationErrorSet::new();
        let today = now.date();

        if draft.service_type.is_none() {
            errors.insert("serviceType", "Please select a service type");
        }

        let pickup = draft.pickup_location.trim();
        if pickup.is_empty() {
            errors.insert("pickupLocation", "Pickup location is required");
        } else if pickup.chars().count() < MIN_LOCATION_CHARS {
            errors.insert("pickupLocation", "Pickup location must be at least 3 characters");
        }

        let dropoff = draft.dropoff_location.trim();
        if dropoff.is_empty() {
            errors.insert("dropoffLocation", "Dropoff location is required");
        } else if dropoff.chars().count() < MIN_LOCATION_CHARS {
            errors.insert("dropoffLocation", "Dropoff location must be at least 3 characters");
        }

        match draft.pickup_date {
            None => errors.insert("pickupDate", "Pickup date is required"),
            Some(date) if date < today => {
                errors.insert("pickupDate", "Pickup date cannot be in the past")
            }
            Some(_) => {}
        }

        match draft.pickup_time {
            None => errors.insert("pickupTime", "Pickup time is required"),
            Some(time) => {
                // Only meaningful in combination with a pickup date; the
                // missing-date case is already reported above.
                if let Some(date) = draft.pickup_date {
                    if date.and_time(time) <= now {
                        errors.insert("pickupTime", "Pickup time must be later than the current time");
                    }
                }
            }
        }

        if let (Some(pickup_date), Some(return_date)) = (draft.pickup_date, draft.return_date) {
            if return_date <= pickup_date {
                errors.insert("returnDate", "Return date must be after the pickup date");
            }
        }

        if let (Some(pickup_date), Some(pickup_time), Some(return_date), Some(return_time)) = (
            draft.pickup_date,
            draft.pickup_time,
            draft.return_date,
            draft.return_time,
        ) {
            if return_date.and_time(return_time) <= pickup_date.and_time(pickup_time) {
                errors.insert("returnTime", "Return time must be after the pickup time");
            }
        }

        match draft.passengers {
            None => errors.insert("passengers", "Passenger count is required"),
            Some(count) if count < 1 || count > MAX_PASSENGERS => {
                errors.insert("passengers", "Passengers must be between 1 and 50")
            }
            Some(_) => {}
        }

        if draft.additional_notes.chars().count() > MAX_NOTES_CHARS {
            errors.insert("additionalNotes", "Notes cannot exceed 500 characters");
        }

        errors
    }
}

pub struct RentalValidator;

impl RentalValidator {
    pub fn validate(request: &RentalRequest) -> ValidationErrorSet {
        Self::validate_at(request, Local::now().naive_local())
    }

    pub fn validate_at(request: &RentalRequest, now: NaiveDateTime) -> ValidationErrorSet {
        let mut errors = ValidationErrorSet::new();
        let today = now.date();

        if request.vehicle_id.trim().is_empty() {
            errors.insert("vehicleId", "Please select a vehicle");
        }

        match request.rental_type.as_deref().map(str::trim) {
            None | Some("") => errors.insert("rentalType", "Please select a rental type"),
            Some(_) => {}
        }

        match request.start_date {
            None => errors.insert("startDate", "Start date is required"),
            Some(date) if date < today => {
                errors.insert("startDate", "Start date cannot be in the past")
            }
            Some(_) => {}
        }

        match request.end_date {
            None => errors.insert("endDate", "End date is required"),
            Some(end) => {
                if let Some(start) = request.start_date {
                    if end <= start {
                        errors.insert("endDate", "End date must be after the start date");
                    } else if (end - start).num_days() > MAX_RENTAL_SPAN_DAYS {
                        errors.insert("endDate", "Rental period cannot exceed 730 days");
                    }
                }
            }
        }

        match request.duration {
            None => errors.insert("duration", "Duration is required"),
            Some(duration) if duration < 1 => {
                errors.insert("duration", "Duration must be at least 1")
            }
            Some(_) => {}
        }

        if request.purpose.trim().chars().count() < MIN_PURPOSE_CHARS {
            errors.insert("purpose", "Purpose must be at least 10 characters");
        }

        errors
    }
}
