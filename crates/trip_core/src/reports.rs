use serde::Serialize;
use shared::domain::TripStatus;

use crate::registry::TripRegistry;

/// Admin dashboard figures derived from the current session state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub total_trips: usize,
    pub pending_trips: usize,
    pub assigned_trips: usize,
    pub completed_trips: usize,
    pub total_distance_km: f64,
    pub total_duration_hours: f64,
    pub active_drivers: usize,
    pub average_rating: Option<f32>,
}

impl ReportSummary {
    pub fn from_registry(registry: &TripRegistry) -> Self {
        let requests = registry.requests();
        let count = |status: TripStatus| {
            requests
                .iter()
                .filter(|request| request.status() == status)
                .count()
        };
        let (total_distance_km, total_duration_hours) = requests
            .iter()
            .filter_map(|request| request.completed_metrics())
            .fold((0.0, 0.0), |(distance, duration), metrics| {
                (
                    distance + metrics.distance_km,
                    duration + metrics.duration_hours,
                )
            });

        let verified: Vec<_> = registry
            .drivers()
            .iter()
            .filter(|driver| driver.is_verified)
            .collect();
        let average_rating = (!verified.is_empty()).then(|| {
            verified.iter().map(|driver| driver.rating).sum::<f32>() / verified.len() as f32
        });

        Self {
            total_trips: requests.len(),
            pending_trips: count(TripStatus::Pending),
            assigned_trips: count(TripStatus::Assigned),
            completed_trips: count(TripStatus::Completed),
            total_distance_km,
            total_duration_hours,
            active_drivers: verified.len(),
            average_rating,
        }
    }
}
