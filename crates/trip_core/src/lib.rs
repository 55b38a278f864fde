//! In-memory booking core: trip registry, guided-demo sequencer, and the
//! session object that composes them for a single front end.

pub mod booking;
pub mod demo;
pub mod registry;
pub mod reports;
pub mod seed;
pub mod session;

pub use booking::{BookingForm, ValidBooking, DEMO_REQUEST_ID};
pub use demo::{DemoAction, DemoSequencer, DemoStep, DEMO_STEPS};
pub use registry::TripRegistry;
pub use reports::ReportSummary;
pub use session::Session;
