use frameruler::{DisplayMode, Flow, Point, RulerAction, RulerSession};

fn calibrate(session: &mut RulerSession, px: i32) {
    assert_eq!(session.apply(RulerAction::EnterCalibration), Flow::Continue);
    session.handle_click(Point::new(0, 0));
    session.handle_click(Point::new(px, 0));
    assert_eq!(session.apply(RulerAction::ConfirmCalibration), Flow::Continue);
}

#[test]
fn clicks_route_to_measurement_by_default() {
    let mut session = RulerSession::default();
    session.handle_click(Point::new(10, 10));
    session.handle_click(Point::new(10, 110));
    assert_eq!(session.pending().len(), 2);
    assert_eq!(session.store().count(), 0);

    session.handle_click(Point::new(50, 50));
    assert_eq!(session.store().count(), 1);
    assert_eq!(session.store().all()[0].pixel_distance(), 100.0);
    assert_eq!(session.pending().points(), &[Point::new(50, 50)]);
}

#[test]
fn clicks_route_to_calibration_while_active() {
    let mut session = RulerSession::default();
    let _ = session.apply(RulerAction::EnterCalibration);
    session.handle_click(Point::new(0, 0));
    session.handle_click(Point::new(100, 0));

    // Measurement state never saw the clicks.
    assert!(session.pending().is_empty());
    assert_eq!(session.calibration().points().len(), 2);

    let _ = session.apply(RulerAction::ConfirmCalibration);
    assert!(session.calibration().is_calibrated());

    // Calibration is idle again, so clicks go back to measuring.
    session.handle_click(Point::new(5, 5));
    assert_eq!(session.pending().len(), 1);
}

#[test]
fn clear_pending_leaves_store_intact() {
    let mut session = RulerSession::default();
    for p in [(0, 0), (30, 40), (1, 1), (2, 2)] {
        session.handle_click(p.into());
    }
    assert_eq!(session.store().count(), 1);

    let _ = session.apply(RulerAction::ClearPending);
    assert!(session.pending().is_empty());
    assert_eq!(session.store().count(), 1);
}

#[test]
fn clear_all_drops_store_and_pending() {
    let mut session = RulerSession::default();
    for p in [(0, 0), (30, 40), (1, 1)] {
        session.handle_click(p.into());
    }
    assert_eq!(session.store().count(), 1);
    assert_eq!(session.pending().len(), 1);

    let _ = session.apply(RulerAction::ClearAll);
    assert_eq!(session.store().count(), 0);
    assert!(session.pending().is_empty());
}

#[test]
fn toggling_units_twice_is_identity_and_touches_no_data() {
    let mut session = RulerSession::default();
    for p in [(0, 0), (30, 40), (1, 1)] {
        session.handle_click(p.into());
    }
    let before_mode = session.display_mode();
    let before_distance = session.store().all()[0].pixel_distance();

    let _ = session.apply(RulerAction::ToggleUnits);
    assert_ne!(session.display_mode(), before_mode);
    let _ = session.apply(RulerAction::ToggleUnits);
    assert_eq!(session.display_mode(), before_mode);
    assert_eq!(session.store().all()[0].pixel_distance(), before_distance);
    assert_eq!(session.store().count(), 1);
}

#[test]
fn format_distance_follows_mode_and_calibration() {
    let mut session = RulerSession::default();
    // Default mode is physical units, but nothing is calibrated yet.
    assert_eq!(session.display_mode(), DisplayMode::PhysicalUnits);
    assert_eq!(session.format_distance(100.0), "100.0 px");

    calibrate(&mut session, 100); // ratio = 10 px per cm
    assert_eq!(session.format_distance(100.0), "10.0 cm");
    assert_eq!(session.format_distance(50.0), "5.0 cm");

    let _ = session.apply(RulerAction::ToggleUnits);
    assert_eq!(session.format_distance(100.0), "100.0 px");
}

#[test]
fn reference_length_actions_step_and_floor() {
    let mut session = RulerSession::default();
    let start = session.calibration().reference_length();
    let _ = session.apply(RulerAction::IncreaseReference);
    assert_eq!(session.calibration().reference_length(), start + 0.5);

    for _ in 0..100 {
        let _ = session.apply(RulerAction::DecreaseReference);
    }
    assert_eq!(session.calibration().reference_length(), 0.5);
}

#[test]
fn quit_ends_the_session_flow() {
    let mut session = RulerSession::default();
    assert_eq!(session.apply(RulerAction::ToggleUnits), Flow::Continue);
    assert_eq!(session.apply(RulerAction::Quit), Flow::Quit);
}

// The end-to-end scenario: measure, close the pair, read the converted label.
#[test]
fn measure_then_calibrate_scenario() {
    let mut session = RulerSession::default();
    calibrate(&mut session, 100); // 1 cm = 10 px

    session.handle_click(Point::new(10, 10));
    session.handle_click(Point::new(10, 110));
    let (a, b) = session.pending().pair().expect("two pending points");
    assert_eq!(a.distance_to(b), 100.0);

    session.handle_click(Point::new(50, 50));
    assert_eq!(session.store().count(), 1);
    assert_eq!(session.pending().points(), &[Point::new(50, 50)]);

    let stored = session.store().all()[0];
    assert_eq!(
        session.format_distance(stored.pixel_distance()),
        "10.0 cm"
    );
}
