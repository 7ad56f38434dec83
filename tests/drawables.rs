use frameruler::{
    overlay, Drawable, Flow, OverlayTheme, Point, RulerAction, RulerSession,
};

const FRAME: [u32; 2] = [640, 480];

fn drawables(session: &RulerSession) -> Vec<Drawable> {
    overlay(session, FRAME, &OverlayTheme::Classic.colors())
}

fn labels(list: &[Drawable]) -> Vec<&str> {
    list.iter()
        .filter_map(|d| match d {
            Drawable::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect()
}

fn count_lines(list: &[Drawable]) -> usize {
    list.iter()
        .filter(|d| matches!(d, Drawable::Line { .. }))
        .count()
}

fn count_markers(list: &[Drawable]) -> usize {
    list.iter()
        .filter(|d| matches!(d, Drawable::Marker { .. }))
        .count()
}

fn apply(session: &mut RulerSession, action: RulerAction) {
    assert_eq!(session.apply(action), Flow::Continue);
}

#[test]
fn empty_session_renders_only_the_status_panel() {
    let session = RulerSession::default();
    let list = drawables(&session);
    assert_eq!(count_lines(&list), 0);
    assert_eq!(count_markers(&list), 0);

    let labels = labels(&list);
    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0], "Measurements: 0");
    // Default mode is physical units while nothing is calibrated yet.
    assert!(labels[1].contains("Not calibrated!"));
}

#[test]
fn single_pending_point_renders_marker_without_line() {
    let mut session = RulerSession::default();
    session.handle_click(Point::new(100, 100));
    let list = drawables(&session);
    assert_eq!(count_markers(&list), 1);
    assert_eq!(count_lines(&list), 0);
}

#[test]
fn pending_pair_renders_line_markers_and_distance_label() {
    let mut session = RulerSession::default();
    session.handle_click(Point::new(10, 10));
    session.handle_click(Point::new(10, 110));
    let list = drawables(&session);
    assert_eq!(count_lines(&list), 1);
    assert_eq!(count_markers(&list), 2);
    assert!(labels(&list).iter().any(|t| t.starts_with("100.0 px")));
}

#[test]
fn stored_measurement_renders_full_triple() {
    let mut session = RulerSession::default();
    for p in [(0, 0), (30, 40), (200, 200)] {
        session.handle_click(p.into());
    }
    // One stored pair plus one pending point.
    let list = drawables(&session);
    assert_eq!(count_lines(&list), 1);
    assert_eq!(count_markers(&list), 3);
    let labels = labels(&list);
    assert!(labels.contains(&"50.0 px"));
    assert!(labels.contains(&"Measurements: 1"));
}

#[test]
fn calibration_prompts_follow_the_collection_phase() {
    let mut session = RulerSession::default();
    apply(&mut session, RulerAction::EnterCalibration);
    assert!(labels(&drawables(&session))
        .iter()
        .any(|t| t.contains("click first point")));

    session.handle_click(Point::new(0, 0));
    assert!(labels(&drawables(&session))
        .iter()
        .any(|t| t.contains("click second point")));

    session.handle_click(Point::new(100, 0));
    let list = drawables(&session);
    // Two calibration markers plus the connecting line.
    assert_eq!(count_markers(&list), 2);
    assert_eq!(count_lines(&list), 1);
    assert!(labels(&list)
        .iter()
        .any(|t| t.contains("100.0 px = 10.0 cm")));
}

#[test]
fn status_shows_ratio_once_calibrated() {
    let mut session = RulerSession::default();
    apply(&mut session, RulerAction::EnterCalibration);
    session.handle_click(Point::new(0, 0));
    session.handle_click(Point::new(100, 0));
    apply(&mut session, RulerAction::ConfirmCalibration);

    let list = drawables(&session);
    assert!(labels(&list).iter().any(|t| t.contains("1 px = 0.100 cm")));

    apply(&mut session, RulerAction::ToggleUnits);
    assert!(labels(&drawables(&session)).contains(&"Display: Pixels"));
}

#[test]
fn overlay_query_is_pure_and_idempotent() {
    let mut session = RulerSession::default();
    for p in [(0, 0), (30, 40), (5, 5)] {
        session.handle_click(p.into());
    }
    let first = drawables(&session);
    let second = drawables(&session);
    assert_eq!(first, second);
}
