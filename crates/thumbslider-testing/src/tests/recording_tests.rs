use super::*;

#[test]
fn latest_writes_win() {
    let mut surface = RecordingSurface::new(10.0, 110.0);

    surface.set_label_text("1");
    surface.set_knob_pixel_offset(3.0);
    surface.set_label_text("2");
    surface.set_tooltip_visible(true);
    surface.set_tooltip_position(4.0, 44.0);
    surface.set_tooltip_position(9.0, 164.0);

    assert_eq!(surface.label(), Some("2"));
    assert_eq!(surface.last_knob_offset(), Some(3.0));
    assert!(surface.tooltip_visible());
    assert_eq!(surface.tooltip_position(), Some((9.0, 164.0)));
    assert_eq!(surface.calls().len(), 6);
}

#[test]
fn layout_is_reported_as_configured() {
    let mut surface = RecordingSurface::new(12.0, 300.0).with_container_left(25.0);

    assert_eq!(surface.geometry().travel(), 288.0);
    assert_eq!(surface.container_page_left(), 25.0);

    surface.set_track_width(100.0);
    surface.set_knob_width(20.0);
    assert_eq!(surface.geometry().travel(), 80.0);
}

#[test]
fn clearing_forgets_history() {
    let mut surface = RecordingSurface::new(10.0, 110.0);
    surface.set_tooltip_content(&TooltipContent::Missing {
        message: "no photo".into(),
    });

    surface.clear_calls();

    assert!(surface.calls().is_empty());
    assert!(surface.tooltip_content().is_none());
    assert!(!surface.tooltip_visible());
}
