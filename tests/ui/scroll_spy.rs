use coursebuilder::ui::core::ScrollSpy;
use uuid::Uuid;

#[test]
fn test_no_anchor_reached() {
    let a = Uuid::new_v4();
    let spy = ScrollSpy::new(0);
    assert_eq!(spy.active(&[(a, 4)], 0), None);
    assert_eq!(spy.active(&[], 10), None);
}

#[test]
fn test_last_reached_anchor_wins() {
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());
    let anchors = [(a, 0), (b, 5), (c, 12)];
    let spy = ScrollSpy::new(0);

    assert_eq!(spy.active(&anchors, 0), Some(a));
    assert_eq!(spy.active(&anchors, 4), Some(a));
    assert_eq!(spy.active(&anchors, 5), Some(b));
    assert_eq!(spy.active(&anchors, 100), Some(c));
}

#[test]
fn test_default_lookahead() {
    let spy = ScrollSpy::default();
    assert_eq!(spy.lookahead(), 3);

    let a = Uuid::new_v4();
    assert_eq!(spy.active(&[(a, 3)], 0), Some(a), "a header within the lookahead counts as reached");
}
