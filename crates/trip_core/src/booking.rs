//! Customer booking form: raw field capture, validation, and conversion into
//! a pending [`TripRequest`].

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{
    domain::{RequestId, TripRequest, TripState},
    error::{BookingError, BookingResult, FieldErrors},
};
use uuid::Uuid;

/// Id the scripted walkthrough books under so the admin step can name it.
pub const DEMO_REQUEST_ID: &str = "DEMO-R001";

pub const SUPPORTED_CITIES: [&str; 8] = [
    "Abuja",
    "Lagos",
    "Ibadan",
    "Port Harcourt",
    "Enugu",
    "Kano",
    "Kaduna",
    "Benin City",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingForm {
    pub name: String,
    pub phone: String,
    pub pickup: String,
    pub destination: String,
    pub date: String,
    pub time: String,
    pub passengers: String,
    pub notes: String,
}

impl BookingForm {
    pub fn demo_prefill() -> Self {
        Self {
            name: "Adaoke Chukwu".into(),
            phone: "07000000000".into(),
            pickup: "Abuja".into(),
            destination: "Lagos".into(),
            date: "2025-12-15".into(),
            time: "07:00".into(),
            passengers: "2".into(),
            notes: "Traveling with elderly mother, need careful driving.".into(),
        }
    }

    pub fn validate(&self) -> BookingResult<ValidBooking> {
        let mut errors = FieldErrors::new();

        let name = required(&mut errors, "name", &self.name, "Name is required");
        let phone = required(&mut errors, "phone", &self.phone, "Contact number is required");
        let pickup = required(&mut errors, "pickup", &self.pickup, "Pickup city is required");
        let destination = required(
            &mut errors,
            "destination",
            &self.destination,
            "Destination is required",
        );

        let date = match self.date.trim() {
            "" => {
                errors.insert("date", "Date is required".into());
                None
            }
            raw => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| errors.insert("date", format!("Invalid date '{raw}'")))
                .ok(),
        };

        let time = match self.time.trim() {
            "" => {
                errors.insert("time", "Time is required".into());
                None
            }
            raw => NaiveTime::parse_from_str(raw, "%H:%M")
                .map_err(|_| errors.insert("time", format!("Invalid time '{raw}'")))
                .ok(),
        };

        let passengers = match self.passengers.trim() {
            "" => Some(1),
            raw => match raw.parse::<u32>() {
                Ok(count) if count > 0 => Some(count),
                _ => {
                    errors.insert("passengers", "Passengers must be a positive number".into());
                    None
                }
            },
        };

        let notes = Some(self.notes.trim())
            .filter(|notes| !notes.is_empty())
            .map(str::to_string);

        match (name, phone, pickup, destination, date, time, passengers) {
            (
                Some(name),
                Some(phone),
                Some(pickup),
                Some(destination),
                Some(date),
                Some(time),
                Some(passengers),
            ) if errors.is_empty() => Ok(ValidBooking {
                customer_name: name,
                customer_phone: phone,
                pickup_city: pickup,
                destination_city: destination,
                date,
                time,
                passengers,
                notes,
            }),
            _ => Err(BookingError::Validation(errors)),
        }
    }
}

fn required(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    message: &str,
) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, message.to_string());
        None
    } else {
        Some(value.to_string())
    }
}

/// Booking fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidBooking {
    pub customer_name: String,
    pub customer_phone: String,
    pub pickup_city: String,
    pub destination_city: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub passengers: u32,
    pub notes: Option<String>,
}

impl ValidBooking {
    pub fn into_request(self, id: RequestId, created_at: DateTime<Utc>) -> TripRequest {
        TripRequest {
            id,
            customer_name: self.customer_name,
            customer_phone: self.customer_phone,
            pickup_city: self.pickup_city,
            destination_city: self.destination_city,
            date: self.date,
            time: self.time,
            passengers: self.passengers,
            notes: self.notes,
            state: TripState::Pending,
            created_at,
        }
    }
}

pub fn next_request_id() -> RequestId {
    let raw = Uuid::new_v4().simple().to_string();
    RequestId(format!("REQ-{}", raw[..8].to_ascii_uppercase()))
}

#[cfg(test)]
#[path = "tests/booking_tests.rs"]
mod tests;
