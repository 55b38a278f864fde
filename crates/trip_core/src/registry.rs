use shared::{
    domain::{CompletionMetrics, Driver, DriverId, RequestId, TripRequest, TripState, TripStatus},
    error::{BookingError, BookingResult},
};
use tracing::{info, warn};

use crate::seed;

/// Session-scoped store of trip requests (most recent first) and the fixed
/// driver roster. All status changes go through [`TripRegistry::assign`] and
/// [`TripRegistry::complete_with_metrics`].
#[derive(Debug, Clone)]
pub struct TripRegistry {
    requests: Vec<TripRequest>,
    drivers: Vec<Driver>,
    default_metrics: CompletionMetrics,
}

impl TripRegistry {
    pub fn new(drivers: Vec<Driver>, requests: Vec<TripRequest>) -> Self {
        Self {
            requests,
            drivers,
            default_metrics: CompletionMetrics::placeholder(),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::mock_drivers(), seed::initial_requests())
    }

    pub fn empty_with_drivers(drivers: Vec<Driver>) -> Self {
        Self::new(drivers, Vec::new())
    }

    pub fn with_default_metrics(mut self, metrics: CompletionMetrics) -> Self {
        self.default_metrics = metrics;
        self
    }

    pub fn default_metrics(&self) -> CompletionMetrics {
        self.default_metrics
    }

    /// Inserts a new request at the front of the list. Whatever state the
    /// caller supplied is discarded: new requests always start pending.
    ///
    /// Ids are not checked for uniqueness; lookups return the most recently
    /// created match.
    pub fn create(&mut self, mut request: TripRequest) -> RequestId {
        request.state = TripState::Pending;
        let request_id = request.id.clone();
        if self.get(&request_id).is_some() {
            warn!(%request_id, "trip request id already in use; newest entry shadows older one");
        }
        info!(
            %request_id,
            pickup = %request.pickup_city,
            destination = %request.destination_city,
            passengers = request.passengers,
            "trip request created"
        );
        self.requests.insert(0, request);
        request_id
    }

    pub fn assign(
        &mut self,
        request_id: &RequestId,
        driver_id: &DriverId,
    ) -> BookingResult<&TripRequest> {
        if self.driver(driver_id).is_none() {
            warn!(%request_id, %driver_id, "assign rejected: unknown driver");
            return Err(BookingError::DriverNotFound(driver_id.clone()));
        }
        let request = self.find_mut(request_id)?;
        match request.state {
            TripState::Pending => {
                request.state = TripState::Assigned {
                    driver_id: driver_id.clone(),
                };
                info!(%request_id, %driver_id, "driver assigned");
                Ok(&*request)
            }
            ref other => {
                let from = other.status();
                warn!(%request_id, %driver_id, %from, "assign rejected: request not pending");
                Err(BookingError::InvalidTransition {
                    request_id: request_id.clone(),
                    from,
                    action: "assign",
                })
            }
        }
    }

    pub fn complete(&mut self, request_id: &RequestId) -> BookingResult<&TripRequest> {
        let metrics = self.default_metrics;
        self.complete_with_metrics(request_id, metrics)
    }

    pub fn complete_with_metrics(
        &mut self,
        request_id: &RequestId,
        metrics: CompletionMetrics,
    ) -> BookingResult<&TripRequest> {
        let request = self.find_mut(request_id)?;
        let driver_id = match &request.state {
            TripState::Assigned { driver_id } => driver_id.clone(),
            other => {
                let from = other.status();
                warn!(%request_id, %from, "complete rejected: request not assigned");
                return Err(BookingError::InvalidTransition {
                    request_id: request_id.clone(),
                    from,
                    action: "complete",
                });
            }
        };
        info!(
            %request_id,
            %driver_id,
            distance_km = metrics.distance_km,
            duration_hours = metrics.duration_hours,
            "trip completed"
        );
        request.state = TripState::Completed { driver_id, metrics };
        Ok(&*request)
    }

    pub fn get(&self, request_id: &RequestId) -> Option<&TripRequest> {
        self.requests.iter().find(|request| &request.id == request_id)
    }

    pub fn requests(&self) -> &[TripRequest] {
        &self.requests
    }

    pub fn requests_with_status(
        &self,
        status: TripStatus,
    ) -> impl Iterator<Item = &TripRequest> + '_ {
        self.requests
            .iter()
            .filter(move |request| request.status() == status)
    }

    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    pub fn driver(&self, driver_id: &DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|driver| &driver.id == driver_id)
    }

    fn find_mut(&mut self, request_id: &RequestId) -> BookingResult<&mut TripRequest> {
        match self
            .requests
            .iter_mut()
            .find(|request| &request.id == request_id)
        {
            Some(request) => Ok(request),
            None => {
                warn!(%request_id, "trip request not found");
                Err(BookingError::RequestNotFound(request_id.clone()))
            }
        }
    }
}

impl Default for TripRegistry {
    fn default() -> Self {
        Self::seeded()
    }
}

#[cfg(test)]
#[path = "tests/registry_tests.rs"]
mod tests;
