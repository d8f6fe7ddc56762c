use super::*;

const BOTTOM: f64 = 240.0;

// --- StickyHeader ---

#[test]
fn starts_hidden() {
    assert!(!StickyHeader::default().visible());
}

#[test]
fn shows_when_scrolled_past_bottom() {
    let mut header = StickyHeader::default();
    assert_eq!(header.on_scroll(241.0, BOTTOM), Some(HeaderChange::Show));
    assert!(header.visible());
}

#[test]
fn stays_hidden_exactly_at_bottom() {
    let mut header = StickyHeader::default();
    assert_eq!(header.on_scroll(BOTTOM, BOTTOM), None);
    assert!(!header.visible());
}

#[test]
fn hides_when_scrolled_back_to_bottom() {
    let mut header = StickyHeader::default();
    header.on_scroll(500.0, BOTTOM);
    assert_eq!(header.on_scroll(BOTTOM, BOTTOM), Some(HeaderChange::Hide));
    assert!(!header.visible());
}

#[test]
fn repeated_scrolls_on_same_side_do_not_toggle() {
    let mut header = StickyHeader::default();
    assert_eq!(header.on_scroll(300.0, BOTTOM), Some(HeaderChange::Show));
    for offset in [301.0, 400.0, 900.0, 250.0] {
        assert_eq!(header.on_scroll(offset, BOTTOM), None);
    }
    assert_eq!(header.on_scroll(0.0, BOTTOM), Some(HeaderChange::Hide));
    for offset in [10.0, 100.0, BOTTOM] {
        assert_eq!(header.on_scroll(offset, BOTTOM), None);
    }
}

#[test]
fn one_change_per_crossing() {
    let mut header = StickyHeader::default();
    let offsets = [0.0, 100.0, 300.0, 320.0, 200.0, 100.0, 260.0, 900.0];
    let changes: Vec<_> = offsets
        .iter()
        .filter_map(|&offset| header.on_scroll(offset, BOTTOM))
        .collect();
    assert_eq!(changes, vec![HeaderChange::Show, HeaderChange::Hide, HeaderChange::Show]);
}

#[test]
fn visibility_tracks_offset_relation() {
    let mut header = StickyHeader::default();
    for offset in [0.0, 239.9, 240.0, 240.1, 1000.0, 12.0] {
        header.on_scroll(offset, BOTTOM);
        assert_eq!(header.visible(), offset > BOTTOM, "offset {offset}");
    }
}

// --- FrameGate ---

#[test]
fn gate_admits_first_request() {
    let mut gate = FrameGate::default();
    assert!(gate.try_schedule());
    assert!(gate.is_ticking());
}

#[test]
fn gate_rejects_while_ticking() {
    let mut gate = FrameGate::default();
    assert!(gate.try_schedule());
    assert!(!gate.try_schedule());
    assert!(!gate.try_schedule());
}

#[test]
fn gate_reopens_after_release() {
    let mut gate = FrameGate::default();
    gate.try_schedule();
    gate.release();
    assert!(!gate.is_ticking());
    assert!(gate.try_schedule());
}
