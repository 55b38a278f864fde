//! Applies UI actions to the session, then lets the guided tour react.

use std::time::Duration;

use chrono::Utc;
use shared::{
    domain::{RequestId, TripStatus},
    error::{BookingError, BookingResult},
};
use tracing::{debug, warn};
use trip_core::{booking::next_request_id, BookingForm, Session, DEMO_REQUEST_ID};

use super::actions::{Page, UiAction};

pub struct UiController {
    session: Session,
    submit_delay: Duration,
    page: Page,
    form: BookingForm,
    assign_dialog: Option<RequestId>,
    status: String,
}

impl UiController {
    pub fn new(session: Session, submit_delay: Duration) -> Self {
        Self {
            session,
            submit_delay,
            page: Page::Landing,
            form: BookingForm::default(),
            assign_dialog: None,
            status: String::new(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    pub fn assign_dialog(&self) -> Option<&RequestId> {
        self.assign_dialog.as_ref()
    }

    /// Last toast or error line shown to the user.
    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn clear_status(&mut self) {
        self.status.clear();
    }

    pub async fn dispatch(&mut self, action: UiAction) -> BookingResult<()> {
        let action_name = action.name();
        let demo_action = action.demo_action();
        debug!(action = action_name, "applying ui action");

        match self.apply(action).await {
            Ok(advance_tour) => {
                if advance_tour {
                    if let Some(demo_action) = demo_action {
                        self.session.try_advance_demo(demo_action);
                    }
                }
                Ok(())
            }
            Err(err) => {
                warn!(action = action_name, code = ?err.code(), "ui action failed: {err}");
                self.status = err.to_string();
                Err(err)
            }
        }
    }

    /// Returns whether the action actually happened in a way that can
    /// complete the current tour step.
    async fn apply(&mut self, action: UiAction) -> BookingResult<bool> {
        match action {
            UiAction::StartDemo => {
                self.session.start_demo();
                self.page = Page::Landing;
                Ok(false)
            }
            UiAction::StopDemo => {
                self.session.stop_demo();
                Ok(false)
            }
            UiAction::SkipDemoStep => {
                self.session.advance_demo();
                Ok(false)
            }
            UiAction::OpenBooking => {
                self.page = Page::Booking;
                Ok(true)
            }
            UiAction::PrefillDemoData => {
                self.form = BookingForm::demo_prefill();
                Ok(true)
            }
            UiAction::EditForm(form) => {
                self.form = form;
                Ok(false)
            }
            UiAction::SubmitBooking => {
                let booking = self.form.validate()?;
                tokio::time::sleep(self.submit_delay).await;

                let request_id = if self.session.demo_state().is_active {
                    RequestId::from(DEMO_REQUEST_ID)
                } else {
                    next_request_id()
                };
                let request_id = self
                    .session
                    .create_trip_request(booking.into_request(request_id, Utc::now()));
                self.status = format!("Booking {request_id} received. We'll match you with a verified driver.");
                self.page = Page::Confirmation(request_id);
                self.form = BookingForm::default();
                Ok(true)
            }
            UiAction::ToggleAdminView => {
                let admin = self.session.toggle_admin_view();
                self.page = if admin { Page::Admin } else { Page::Landing };
                Ok(false)
            }
            UiAction::OpenAssignDialog { request_id } => {
                let status = self
                    .session
                    .find_request(&request_id)
                    .map(|request| request.status())
                    .ok_or_else(|| BookingError::RequestNotFound(request_id.clone()))?;
                if status != TripStatus::Pending {
                    return Err(BookingError::InvalidTransition {
                        request_id,
                        from: status,
                        action: "assign",
                    });
                }
                self.assign_dialog = Some(request_id);
                Ok(true)
            }
            UiAction::SelectDriver {
                request_id,
                driver_id,
            } => {
                self.session.assign_driver(&request_id, &driver_id)?;
                let driver_name = self
                    .session
                    .assigned_driver(&request_id)
                    .map(|driver| driver.name.clone())
                    .unwrap_or_else(|| driver_id.to_string());
                self.assign_dialog = None;
                self.status = format!(
                    "Driver {driver_name} assigned to {request_id}. Customer notified (demo)."
                );
                Ok(true)
            }
            UiAction::ViewConfirmation { request_id } => {
                let status = self
                    .session
                    .find_request(&request_id)
                    .map(|request| request.status())
                    .ok_or_else(|| BookingError::RequestNotFound(request_id.clone()))?;
                self.session.set_admin_view(false);
                self.page = Page::Confirmation(request_id);
                Ok(status == TripStatus::Assigned)
            }
            UiAction::CompleteTrip { request_id } => {
                self.session.complete_trip(&request_id)?;
                self.status = format!("Trip {request_id} marked as completed.");
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
