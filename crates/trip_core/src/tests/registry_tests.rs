use super::*;
use chrono::{NaiveDate, NaiveTime, Utc};

fn request(id: &str) -> TripRequest {
    TripRequest {
        id: RequestId::from(id),
        customer_name: "Adaoke Chukwu".into(),
        customer_phone: "07000000000".into(),
        pickup_city: "Abuja".into(),
        destination_city: "Lagos".into(),
        date: NaiveDate::from_ymd_opt(2025, 12, 15).expect("date"),
        time: NaiveTime::from_hms_opt(7, 0, 0).expect("time"),
        passengers: 2,
        notes: None,
        state: TripState::Pending,
        created_at: Utc::now(),
    }
}

fn empty_registry() -> TripRegistry {
    TripRegistry::empty_with_drivers(seed::mock_drivers())
}

#[test]
fn create_lists_newest_first_and_pending() {
    let mut registry = empty_registry();
    for id in ["R1", "R2", "R3"] {
        registry.create(request(id));
    }

    let ids: Vec<_> = registry.requests().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["R3", "R2", "R1"]);
    for request in registry.requests() {
        assert_eq!(request.status(), TripStatus::Pending);
        assert!(request.assigned_driver_id().is_none());
        assert!(request.completed_metrics().is_none());
    }
}

#[test]
fn create_forces_pending_state() {
    let mut registry = empty_registry();
    let mut incoming = request("R1");
    incoming.state = TripState::Completed {
        driver_id: DriverId::from("D001"),
        metrics: CompletionMetrics::placeholder(),
    };

    let id = registry.create(incoming);
    let stored = registry.get(&id).expect("stored");
    assert_eq!(stored.state, TripState::Pending);
}

#[test]
fn duplicate_id_lookup_returns_newest() {
    let mut registry = empty_registry();
    registry.create(request("R1"));
    let mut newer = request("R1");
    newer.customer_name = "Second Booking".into();
    registry.create(newer);

    assert_eq!(registry.requests().len(), 2);
    let found = registry.get(&RequestId::from("R1")).expect("found");
    assert_eq!(found.customer_name, "Second Booking");
}

#[test]
fn assign_pending_request_binds_driver() {
    let mut registry = empty_registry();
    registry.create(request("R1"));

    let assigned = registry
        .assign(&RequestId::from("R1"), &DriverId::from("D002"))
        .expect("assign");
    assert_eq!(assigned.status(), TripStatus::Assigned);
    assert_eq!(assigned.assigned_driver_id(), Some(&DriverId::from("D002")));
}

#[test]
fn second_assign_is_rejected_and_keeps_driver() {
    let mut registry = empty_registry();
    registry.create(request("R1"));
    let id = RequestId::from("R1");
    registry.assign(&id, &DriverId::from("D002")).expect("assign");

    let err = registry
        .assign(&id, &DriverId::from("D001"))
        .expect_err("already assigned");
    assert_eq!(
        err,
        BookingError::InvalidTransition {
            request_id: id.clone(),
            from: TripStatus::Assigned,
            action: "assign",
        }
    );
    assert_eq!(
        registry.get(&id).and_then(|r| r.assigned_driver_id()),
        Some(&DriverId::from("D002"))
    );
}

#[test]
fn assign_unknown_request_is_not_found() {
    let mut registry = empty_registry();
    let err = registry
        .assign(&RequestId::from("missing"), &DriverId::from("D001"))
        .expect_err("missing request");
    assert_eq!(err, BookingError::RequestNotFound(RequestId::from("missing")));
}

#[test]
fn assign_unknown_driver_is_not_found_and_leaves_request_pending() {
    let mut registry = empty_registry();
    registry.create(request("R1"));
    let err = registry
        .assign(&RequestId::from("R1"), &DriverId::from("D999"))
        .expect_err("unknown driver");
    assert_eq!(err, BookingError::DriverNotFound(DriverId::from("D999")));
    assert_eq!(
        registry.get(&RequestId::from("R1")).map(|r| r.status()),
        Some(TripStatus::Pending)
    );
}

#[test]
fn complete_assigned_request_attaches_metrics() {
    let mut registry = empty_registry();
    registry.create(request("R1"));
    let id = RequestId::from("R1");
    registry.assign(&id, &DriverId::from("D001")).expect("assign");

    let completed = registry.complete(&id).expect("complete");
    assert_eq!(completed.status(), TripStatus::Completed);
    assert_eq!(
        completed.completed_metrics(),
        Some(&CompletionMetrics::placeholder())
    );
    assert_eq!(completed.assigned_driver_id(), Some(&DriverId::from("D001")));
}

#[test]
fn complete_pending_request_is_rejected() {
    let mut registry = empty_registry();
    registry.create(request("R1"));
    let err = registry
        .complete(&RequestId::from("R1"))
        .expect_err("pending");
    assert!(matches!(
        err,
        BookingError::InvalidTransition {
            from: TripStatus::Pending,
            action: "complete",
            ..
        }
    ));
    assert!(registry
        .get(&RequestId::from("R1"))
        .and_then(|r| r.completed_metrics())
        .is_none());
}

#[test]
fn completed_request_cannot_be_completed_again() {
    let mut registry = TripRegistry::seeded();
    let err = registry
        .complete(&RequestId::from("PAST-001"))
        .expect_err("terminal");
    assert_eq!(err.code(), shared::error::ErrorCode::InvalidTransition);
}

#[test]
fn custom_metrics_override_placeholder() {
    let metrics = CompletionMetrics {
        distance_km: 130.0,
        duration_hours: 2.5,
    };
    let mut registry = empty_registry().with_default_metrics(metrics);
    registry.create(request("R1"));
    let id = RequestId::from("R1");
    registry.assign(&id, &DriverId::from("D003")).expect("assign");
    let completed = registry.complete(&id).expect("complete");
    assert_eq!(completed.completed_metrics(), Some(&metrics));
}

#[test]
fn drivers_are_unchanged_by_mutations() {
    let mut registry = empty_registry();
    let before = registry.drivers().to_vec();
    registry.create(request("R1"));
    let id = RequestId::from("R1");
    registry.assign(&id, &DriverId::from("D002")).expect("assign");
    registry.complete(&id).expect("complete");

    assert_eq!(registry.drivers(), before.as_slice());
    let ids: Vec<_> = registry.drivers().iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["D001", "D002", "D003"]);
}

#[test]
fn filters_by_status() {
    let mut registry = TripRegistry::seeded();
    registry.create(request("R1"));
    registry.create(request("R2"));
    registry
        .assign(&RequestId::from("R2"), &DriverId::from("D001"))
        .expect("assign");

    let pending: Vec<_> = registry
        .requests_with_status(TripStatus::Pending)
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(pending, ["R1"]);
    assert_eq!(registry.requests_with_status(TripStatus::Completed).count(), 1);
    assert_eq!(registry.requests_with_status(TripStatus::Cancelled).count(), 0);
}
