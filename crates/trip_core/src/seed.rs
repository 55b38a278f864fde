//! Fixed records every session starts with.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use shared::domain::{
    CompletionMetrics, Driver, DriverId, RequestId, TripRequest, TripState,
};

pub fn mock_drivers() -> Vec<Driver> {
    vec![
        driver("D001", "Chike Obi", "MX-1234", 4.8, 8, 142, 1),
        driver("D002", "Maria Udo", "MX-5678", 4.6, 6, 98, 64),
        driver("D003", "Emmanuel Eze", "MX-9012", 4.9, 12, 310, 91),
    ]
}

/// One historical completed trip so reports are never empty.
pub fn initial_requests() -> Vec<TripRequest> {
    vec![TripRequest {
        id: RequestId::from("PAST-001"),
        customer_name: "Tunde Bakare".into(),
        customer_phone: "08012345678".into(),
        pickup_city: "Lagos".into(),
        destination_city: "Ibadan".into(),
        date: NaiveDate::from_ymd_opt(2023, 10, 1).unwrap_or_default(),
        time: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
        passengers: 2,
        notes: None,
        state: TripState::Completed {
            driver_id: DriverId::from("D003"),
            metrics: CompletionMetrics {
                distance_km: 130.0,
                duration_hours: 2.5,
            },
        },
        created_at: Utc
            .with_ymd_and_hms(2023, 9, 28, 0, 0, 0)
            .single()
            .unwrap_or_default(),
    }]
}

fn driver(
    id: &str,
    name: &str,
    license_id: &str,
    rating: f32,
    years_experience: u32,
    trips_completed: u32,
    image: u32,
) -> Driver {
    Driver {
        id: DriverId::from(id),
        name: name.to_string(),
        license_id: license_id.to_string(),
        is_verified: true,
        rating,
        years_experience,
        trips_completed,
        image_url: format!("https://picsum.photos/id/{image}/200/200"),
    }
}
