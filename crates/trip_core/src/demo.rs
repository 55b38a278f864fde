//! Guided-demo step sequencer.
//!
//! The tour is a fixed, ordered table of steps. Views never compare step
//! numbers themselves: they report the [`DemoAction`] the user just performed
//! and [`DemoSequencer::try_advance`] decides whether that action completes
//! the current step.

use serde::Serialize;
use shared::domain::DemoState;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DemoAction {
    OpenBooking,
    PrefillDemoData,
    SubmitBooking,
    OpenAssignDialog,
    SelectDriver,
    ViewAssignedConfirmation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DemoStep {
    pub step: u8,
    /// Action that completes this step; `None` means only a manual skip
    /// moves past it.
    pub action: Option<DemoAction>,
    pub text: &'static str,
}

pub static DEMO_STEPS: [DemoStep; 8] = [
    DemoStep {
        step: 1,
        action: Some(DemoAction::OpenBooking),
        text: "Start as a customer: Click 'Book a Trip' on the landing page.",
    },
    DemoStep {
        step: 2,
        action: Some(DemoAction::PrefillDemoData),
        text: "Fill out the booking form. Use 'Prefill Demo Data' for speed.",
    },
    DemoStep {
        step: 3,
        action: Some(DemoAction::SubmitBooking),
        text: "Submit the booking request.",
    },
    DemoStep {
        step: 4,
        action: None,
        text: "Review the confirmation page. Notice the 'Pending' status. Now, switch to the Admin view (top right).",
    },
    DemoStep {
        step: 5,
        action: Some(DemoAction::OpenAssignDialog),
        text: "As Admin, find the new request DEMO-R001 and click 'Assign Driver'.",
    },
    DemoStep {
        step: 6,
        action: Some(DemoAction::SelectDriver),
        text: "Select 'Chike Obi' from the list of verified drivers.",
    },
    DemoStep {
        step: 7,
        action: Some(DemoAction::ViewAssignedConfirmation),
        text: "The request is now Assigned. Switch back to the Customer view to see the live update.",
    },
    DemoStep {
        step: 8,
        action: None,
        text: "End of core flow. You can now explore reports or complete the trip.",
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSequencer {
    state: DemoState,
}

impl DemoSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step_count(&self) -> u8 {
        DEMO_STEPS.len() as u8
    }

    pub fn state(&self) -> DemoState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active
    }

    pub fn start(&mut self) {
        self.state = DemoState::at_step(1);
        info!(step = 1, "guided demo started");
    }

    /// Moves to the next step, ending the demo when advancing past the last
    /// one. Calling this while inactive behaves like a step-0 advance and
    /// activates step 1.
    pub fn advance(&mut self) {
        let current = self.state.current_step;
        if current >= self.step_count() {
            self.state = DemoState::INACTIVE;
            info!(from = current, "guided demo finished");
        } else {
            self.state = DemoState::at_step(current + 1);
            info!(from = current, to = current + 1, "guided demo advanced");
        }
    }

    pub fn stop(&mut self) {
        if self.state.is_active {
            info!(step = self.state.current_step, "guided demo stopped");
        }
        self.state = DemoState::INACTIVE;
    }

    /// Advances only if the demo is running and `action` is the one bound to
    /// the current step. Returns whether the step advanced.
    pub fn try_advance(&mut self, action: DemoAction) -> bool {
        if !self.is_highlighted(action) {
            if self.state.is_active {
                debug!(
                    ?action,
                    step = self.state.current_step,
                    "action does not match current demo step"
                );
            }
            return false;
        }
        self.advance();
        true
    }

    pub fn current_step(&self) -> Option<&'static DemoStep> {
        if !self.state.is_active {
            return None;
        }
        DEMO_STEPS
            .iter()
            .find(|step| step.step == self.state.current_step)
    }

    pub fn instruction(&self) -> Option<&'static str> {
        self.current_step().map(|step| step.text)
    }

    /// Whether the view element that triggers `action` should be emphasised
    /// right now.
    pub fn is_highlighted(&self, action: DemoAction) -> bool {
        self.current_step()
            .is_some_and(|step| step.action == Some(action))
    }
}

#[cfg(test)]
#[path = "tests/demo_tests.rs"]
mod tests;
