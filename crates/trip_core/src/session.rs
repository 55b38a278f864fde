use shared::{
    domain::{CompletionMetrics, DemoState, Driver, DriverId, RequestId, TripRequest},
    error::BookingResult,
};
use tracing::info;

use crate::{
    demo::{DemoAction, DemoSequencer},
    registry::TripRegistry,
    reports::ReportSummary,
};

/// Everything one front end needs for the lifetime of a session: the trip
/// registry, the guided-demo progress, and which perspective is on screen.
#[derive(Debug, Clone, Default)]
pub struct Session {
    registry: TripRegistry,
    demo: DemoSequencer,
    admin_view: bool,
}

impl Session {
    pub fn new(registry: TripRegistry) -> Self {
        Self {
            registry,
            demo: DemoSequencer::new(),
            admin_view: false,
        }
    }

    pub fn with_completion_metrics(metrics: CompletionMetrics) -> Self {
        Self::new(TripRegistry::seeded().with_default_metrics(metrics))
    }

    pub fn registry(&self) -> &TripRegistry {
        &self.registry
    }

    pub fn create_trip_request(&mut self, request: TripRequest) -> RequestId {
        self.registry.create(request)
    }

    pub fn assign_driver(
        &mut self,
        request_id: &RequestId,
        driver_id: &DriverId,
    ) -> BookingResult<()> {
        self.registry.assign(request_id, driver_id).map(|_| ())
    }

    pub fn complete_trip(&mut self, request_id: &RequestId) -> BookingResult<()> {
        self.registry.complete(request_id).map(|_| ())
    }

    pub fn list_requests(&self) -> &[TripRequest] {
        self.registry.requests()
    }

    pub fn list_drivers(&self) -> &[Driver] {
        self.registry.drivers()
    }

    pub fn find_request(&self, request_id: &RequestId) -> Option<&TripRequest> {
        self.registry.get(request_id)
    }

    /// Driver currently bound to a request, for the confirmation view.
    pub fn assigned_driver(&self, request_id: &RequestId) -> Option<&Driver> {
        let driver_id = self.registry.get(request_id)?.assigned_driver_id()?;
        self.registry.driver(driver_id)
    }

    /// Starts the tour from step 1. The tour always opens on the customer
    /// perspective.
    pub fn start_demo(&mut self) {
        self.admin_view = false;
        self.demo.start();
    }

    /// Manual skip. Only a running tour can be skipped forward; an inactive
    /// tour stays inactive until [`Session::start_demo`].
    pub fn advance_demo(&mut self) -> bool {
        if !self.demo.is_active() {
            return false;
        }
        self.demo.advance();
        true
    }

    pub fn stop_demo(&mut self) {
        self.demo.stop();
    }

    pub fn try_advance_demo(&mut self, action: DemoAction) -> bool {
        self.demo.try_advance(action)
    }

    pub fn demo_state(&self) -> DemoState {
        self.demo.state()
    }

    pub fn demo(&self) -> &DemoSequencer {
        &self.demo
    }

    pub fn is_admin_view(&self) -> bool {
        self.admin_view
    }

    pub fn set_admin_view(&mut self, admin_view: bool) {
        self.admin_view = admin_view;
    }

    pub fn toggle_admin_view(&mut self) -> bool {
        self.admin_view = !self.admin_view;
        info!(admin_view = self.admin_view, "view toggled");
        self.admin_view
    }

    pub fn report(&self) -> ReportSummary {
        ReportSummary::from_registry(&self.registry)
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
