//! Controller layer: UI actions, the screen they lead to, and how each one
//! drives the session and the guided tour.

pub mod actions;
pub mod orchestration;
