//! User actions issued by the front end and the screens they navigate to.

use serde::Serialize;
use shared::domain::{DriverId, RequestId};
use trip_core::{BookingForm, DemoAction};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", content = "request_id", rename_all = "snake_case")]
pub enum Page {
    Landing,
    Booking,
    Confirmation(RequestId),
    Admin,
}

#[derive(Debug, Clone)]
pub enum UiAction {
    StartDemo,
    StopDemo,
    SkipDemoStep,
    OpenBooking,
    PrefillDemoData,
    EditForm(BookingForm),
    SubmitBooking,
    ToggleAdminView,
    OpenAssignDialog { request_id: RequestId },
    SelectDriver { request_id: RequestId, driver_id: DriverId },
    ViewConfirmation { request_id: RequestId },
    CompleteTrip { request_id: RequestId },
}

impl UiAction {
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::StartDemo => "start_demo",
            UiAction::StopDemo => "stop_demo",
            UiAction::SkipDemoStep => "skip_demo_step",
            UiAction::OpenBooking => "open_booking",
            UiAction::PrefillDemoData => "prefill_demo_data",
            UiAction::EditForm(_) => "edit_form",
            UiAction::SubmitBooking => "submit_booking",
            UiAction::ToggleAdminView => "toggle_admin_view",
            UiAction::OpenAssignDialog { .. } => "open_assign_dialog",
            UiAction::SelectDriver { .. } => "select_driver",
            UiAction::ViewConfirmation { .. } => "view_confirmation",
            UiAction::CompleteTrip { .. } => "complete_trip",
        }
    }

    /// Tour action this UI action can complete, if any.
    pub fn demo_action(&self) -> Option<DemoAction> {
        match self {
            UiAction::OpenBooking => Some(DemoAction::OpenBooking),
            UiAction::PrefillDemoData => Some(DemoAction::PrefillDemoData),
            UiAction::SubmitBooking => Some(DemoAction::SubmitBooking),
            UiAction::OpenAssignDialog { .. } => Some(DemoAction::OpenAssignDialog),
            UiAction::SelectDriver { .. } => Some(DemoAction::SelectDriver),
            UiAction::ViewConfirmation { .. } => Some(DemoAction::ViewAssignedConfirmation),
            _ => None,
        }
    }
}
