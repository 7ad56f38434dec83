use frameruler::{euclidean, MeasurementStore, PendingPoints, Point};

#[test]
fn first_two_clicks_stay_pending() {
    let mut pending = PendingPoints::default();
    assert!(pending.push(Point::new(10, 10)).is_none());
    assert!(pending.push(Point::new(10, 110)).is_none());
    assert_eq!(pending.len(), 2);
    assert_eq!(
        pending.pair(),
        Some((Point::new(10, 10), Point::new(10, 110)))
    );
}

#[test]
fn third_click_closes_pair_and_starts_fresh_buffer() {
    let mut pending = PendingPoints::default();
    let p1 = Point::new(10, 10);
    let p2 = Point::new(10, 110);
    assert!(pending.push(p1).is_none());
    assert!(pending.push(p2).is_none());

    // The third click finalizes the first pair and is kept as the start of
    // the next one.
    let closed = pending.push(Point::new(50, 50)).expect("pair should close");
    assert_eq!(closed.endpoints(), (p1, p2));
    assert_eq!(closed.pixel_distance(), 100.0);
    assert_eq!(pending.points(), &[Point::new(50, 50)]);
}

#[test]
fn measurement_distance_matches_euclidean() {
    let a = Point::new(3, 4);
    let b = Point::new(0, 0);
    let m = frameruler::Measurement::new(a, b);
    assert_eq!(m.pixel_distance(), 5.0);
    assert_eq!(m.pixel_distance(), euclidean(a, b));
}

#[test]
fn clear_drops_buffer_without_creating_measurement() {
    let mut pending = PendingPoints::default();
    let mut store = MeasurementStore::default();
    pending.push(Point::new(1, 2));
    pending.push(Point::new(3, 4));
    pending.clear();
    assert!(pending.is_empty());
    assert_eq!(store.count(), 0);

    // A click after the clear starts a brand-new pair.
    assert!(pending.push(Point::new(5, 6)).is_none());
    assert_eq!(pending.len(), 1);
    store.clear_all();
    assert!(store.is_empty());
}

#[test]
fn store_keeps_insertion_order() {
    let mut store = MeasurementStore::default();
    let m1 = frameruler::Measurement::new(Point::new(0, 0), Point::new(10, 0));
    let m2 = frameruler::Measurement::new(Point::new(0, 0), Point::new(0, 20));
    store.append(m1);
    store.append(m2);
    assert_eq!(store.count(), 2);
    assert_eq!(store.all()[0], m1);
    assert_eq!(store.all()[1], m2);

    store.clear_all();
    assert_eq!(store.count(), 0);
}

#[test]
fn long_click_sequence_closes_a_pair_every_other_click() {
    let mut pending = PendingPoints::default();
    let mut store = MeasurementStore::default();
    for i in 0..7 {
        if let Some(m) = pending.push(Point::new(i * 10, 0)) {
            store.append(m);
        }
    }
    // Clicks 3, 5, 7 each close the preceding pair.
    assert_eq!(store.count(), 3);
    assert_eq!(pending.len(), 1);
}
