//! Scripted presenter run of the guided demo.

use serde::Serialize;
use shared::domain::{DemoState, DriverId, RequestId, TripStatus};
use trip_core::DEMO_REQUEST_ID;

use crate::controller::{actions::UiAction, orchestration::UiController};

/// Driver the script picks at the assignment step.
pub const SCRIPTED_DRIVER: &str = "D001";

#[derive(Debug, Clone, Serialize)]
pub struct WalkthroughEntry {
    pub step: u8,
    pub instruction: &'static str,
    pub action: &'static str,
    pub demo_after: DemoState,
    /// The step only moved on through a manual skip.
    pub skipped: bool,
    pub request_status: Option<TripStatus>,
    pub status_line: String,
}

/// The action a presenter performs for each tour step, in order.
pub fn scripted_actions() -> Vec<UiAction> {
    let request_id = RequestId::from(DEMO_REQUEST_ID);
    vec![
        UiAction::OpenBooking,
        UiAction::PrefillDemoData,
        UiAction::SubmitBooking,
        UiAction::ToggleAdminView,
        UiAction::OpenAssignDialog {
            request_id: request_id.clone(),
        },
        UiAction::SelectDriver {
            request_id: request_id.clone(),
            driver_id: DriverId::from(SCRIPTED_DRIVER),
        },
        UiAction::ViewConfirmation { request_id },
        UiAction::SkipDemoStep,
    ]
}

/// Starts the tour and performs every scripted action. Steps whose action
/// does not advance the tour on its own (switching to the admin view) are
/// followed by a manual skip, as a presenter would do, and are marked
/// `skipped`. Each entry's status line is only what that step produced.
pub async fn run(ui: &mut UiController) -> anyhow::Result<Vec<WalkthroughEntry>> {
    ui.dispatch(UiAction::StartDemo).await?;
    let request_id = RequestId::from(DEMO_REQUEST_ID);
    let mut entries = Vec::new();

    for action in scripted_actions() {
        let Some(step) = ui.session().demo().current_step() else {
            break;
        };
        let action_name = action.name();
        let mut skipped = matches!(action, UiAction::SkipDemoStep);
        ui.clear_status();
        ui.dispatch(action).await?;
        if ui.session().demo_state().current_step == step.step {
            ui.dispatch(UiAction::SkipDemoStep).await?;
            skipped = true;
        }

        entries.push(WalkthroughEntry {
            step: step.step,
            instruction: step.text,
            action: action_name,
            demo_after: ui.session().demo_state(),
            skipped,
            request_status: ui
                .session()
                .find_request(&request_id)
                .map(|request| request.status()),
            status_line: ui.status().to_string(),
        });
    }

    Ok(entries)
}

#[cfg(test)]
#[path = "tests/walkthrough_tests.rs"]
mod tests;
