use super::*;

#[test]
fn start_activates_first_step() {
    let mut demo = DemoSequencer::new();
    assert_eq!(demo.state(), DemoState::INACTIVE);
    demo.start();
    assert_eq!(
        demo.state(),
        DemoState {
            is_active: true,
            current_step: 1
        }
    );
    assert_eq!(demo.instruction(), Some(DEMO_STEPS[0].text));
}

#[test]
fn advance_walks_all_steps_then_ends() {
    let mut demo = DemoSequencer::new();
    demo.start();
    for expected in 2..=8 {
        demo.advance();
        assert_eq!(demo.state(), DemoState::at_step(expected));
    }
    demo.advance();
    assert_eq!(demo.state(), DemoState::INACTIVE);
    assert!(demo.current_step().is_none());
}

#[test]
fn stop_resets_from_any_step() {
    let mut demo = DemoSequencer::new();
    demo.stop();
    assert_eq!(demo.state(), DemoState::INACTIVE);

    for steps in 0..8 {
        demo.start();
        for _ in 0..steps {
            demo.advance();
        }
        demo.stop();
        assert_eq!(demo.state(), DemoState::INACTIVE);
    }
}

#[test]
fn try_advance_requires_matching_step() {
    let mut demo = DemoSequencer::new();
    assert!(!demo.try_advance(DemoAction::OpenBooking));
    assert_eq!(demo.state(), DemoState::INACTIVE);

    demo.start();
    assert!(!demo.try_advance(DemoAction::SubmitBooking));
    assert_eq!(demo.state().current_step, 1);

    assert!(demo.try_advance(DemoAction::OpenBooking));
    assert!(demo.try_advance(DemoAction::PrefillDemoData));
    assert!(demo.try_advance(DemoAction::SubmitBooking));
    assert_eq!(demo.state().current_step, 4);
}

#[test]
fn manual_only_steps_ignore_actions() {
    let mut demo = DemoSequencer::new();
    demo.start();
    for _ in 0..3 {
        demo.advance();
    }
    assert_eq!(demo.state().current_step, 4);
    for action in [
        DemoAction::OpenBooking,
        DemoAction::PrefillDemoData,
        DemoAction::SubmitBooking,
        DemoAction::OpenAssignDialog,
        DemoAction::SelectDriver,
        DemoAction::ViewAssignedConfirmation,
    ] {
        assert!(!demo.try_advance(action));
    }
    assert_eq!(demo.state().current_step, 4);
}

#[test]
fn highlight_follows_current_step() {
    let mut demo = DemoSequencer::new();
    demo.start();
    assert!(demo.is_highlighted(DemoAction::OpenBooking));
    assert!(!demo.is_highlighted(DemoAction::PrefillDemoData));
    demo.advance();
    assert!(demo.is_highlighted(DemoAction::PrefillDemoData));
    demo.stop();
    assert!(!demo.is_highlighted(DemoAction::PrefillDemoData));
}

#[test]
fn step_table_is_contiguous() {
    assert_eq!(DemoSequencer::new().step_count(), 8);
    for (index, step) in DEMO_STEPS.iter().enumerate() {
        assert_eq!(usize::from(step.step), index + 1);
    }
    let actions: Vec<_> = DEMO_STEPS.iter().filter_map(|step| step.action).collect();
    let unique: std::collections::HashSet<_> = actions.iter().collect();
    assert_eq!(actions.len(), unique.len());
}
