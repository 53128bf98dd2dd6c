use super::*;
use crate::config::Photo;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct FakeSurface {
    knob_width: f64,
    track_width: f64,
    container_left: f64,
    knob_offsets: Vec<f64>,
    label: Option<String>,
    content: Option<TooltipContent>,
    visible: bool,
    tooltip_positions: Vec<(f64, f64)>,
}

impl FakeSurface {
    fn new(knob_width: f64, track_width: f64) -> Self {
        Self {
            knob_width,
            track_width,
            ..Self::default()
        }
    }

    fn last_offset(&self) -> Option<f64> {
        self.knob_offsets.last().copied()
    }
}

impl SliderSurface for FakeSurface {
    fn knob_width(&self) -> f64 {
        self.knob_width
    }

    fn track_width(&self) -> f64 {
        self.track_width
    }

    fn container_page_left(&self) -> f64 {
        self.container_left
    }

    fn set_knob_pixel_offset(&mut self, offset: f64) {
        self.knob_offsets.push(offset);
    }

    fn set_label_text(&mut self, text: &str) {
        self.label = Some(text.to_owned());
    }

    fn set_tooltip_content(&mut self, content: &TooltipContent) {
        self.content = Some(content.clone());
    }

    fn set_tooltip_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_tooltip_position(&mut self, left: f64, top: f64) {
        self.tooltip_positions.push((left, top));
    }
}

fn recorder() -> (Rc<RefCell<Vec<i64>>>, impl FnMut(i64) + 'static) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |value| sink.borrow_mut().push(value))
}

/// Track 110px, knob 10px: travel of 100px over a 0..=100 range.
fn slider(config: SliderConfig) -> ThumbnailSlider<FakeSurface> {
    ThumbnailSlider::new(FakeSurface::new(10.0, 110.0), config).expect("valid config")
}

#[test]
fn initial_value_is_committed_on_creation() {
    let slider = slider(SliderConfig::default().with_value(30));

    assert_eq!(slider.value(), 30);
    assert_eq!(slider.surface().last_offset(), Some(30.0));
    assert_eq!(slider.surface().label.as_deref(), Some("30"));
    assert_eq!(slider.drag_state(), DragState::Idle);
}

#[test]
fn out_of_range_initial_value_is_clamped() {
    let slider = slider(SliderConfig::default().with_value(-20));
    assert_eq!(slider.value(), 0);
}

#[test]
fn inverted_range_fails_construction() {
    let result = ThumbnailSlider::new(
        FakeSurface::new(10.0, 110.0),
        SliderConfig::default().with_range(5, 1),
    );
    assert_eq!(
        result.err(),
        Some(SliderError::InvalidRange { min: 5, max: 1 })
    );
}

#[test]
fn set_value_clamps_into_range() {
    let mut slider = slider(SliderConfig::default().with_range(-10, 10));

    for (requested, expected) in [(Some(250), 10), (Some(-4), -4), (Some(-11), -10), (None, -10)] {
        slider.set_value(requested);
        assert_eq!(slider.value(), expected, "requested {requested:?}");
    }
}

#[test]
fn update_keeps_the_value_and_rewrites_geometry() {
    let mut slider = slider(SliderConfig::default().with_value(37));

    slider.surface_mut().track_width = 210.0;
    slider.update();
    slider.update();

    assert_eq!(slider.value(), 37);
    assert_eq!(slider.surface().last_offset(), Some(74.0));
}

#[test]
fn pointer_maps_onto_value() {
    let mut slider = slider(SliderConfig::default());

    // Knob centred under the pointer at 55 puts its left edge at 50.
    slider.press(55.0);

    assert_eq!(slider.value(), 50);
    assert_eq!(slider.surface().knob_offsets[1], 50.0);
}

#[test]
fn pointer_is_made_container_relative() {
    let mut slider = slider(SliderConfig::default());
    slider.surface_mut().container_left = 200.0;

    slider.press(275.0);

    assert_eq!(slider.value(), 70);
}

#[test]
fn knob_offset_stays_within_travel() {
    let mut slider = slider(SliderConfig::default());
    slider.surface_mut().container_left = 40.0;

    slider.press(40.0);
    for page_x in [-1000.0, 0.0, 39.0, 45.0, 96.5, 150.0, 151.0, 2000.0] {
        slider.drag_to(page_x);
    }

    for offset in &slider.surface().knob_offsets {
        assert!((0.0..=100.0).contains(offset), "offset {offset} escaped the track");
    }
    assert_eq!(slider.value(), 100);
}

#[test]
fn press_without_value_change_does_not_fire_end() {
    let (ends, on_end) = recorder();
    let mut slider = slider(SliderConfig::default().with_value(50).on_end(on_end));

    slider.press(55.0);
    slider.release();

    assert!(ends.borrow().is_empty());
    assert!(!slider.value_changed_since_drag_start());
}

#[test]
fn value_changing_drag_fires_end_once_with_final_value() {
    let (ends, on_end) = recorder();
    let mut slider = slider(SliderConfig::default().with_value(50).on_end(on_end));

    slider.press(55.0);
    slider.drag_to(70.0);
    slider.drag_to(85.0);
    slider.release();
    slider.release();

    assert_eq!(*ends.borrow(), vec![80]);
}

#[test]
fn trailing_move_within_the_same_value_clears_the_changed_flag() {
    let (ends, on_end) = recorder();
    let mut slider = slider(SliderConfig::default().with_value(50).on_end(on_end));

    slider.press(55.0);
    slider.drag_to(85.0);
    assert!(slider.value_changed_since_drag_start());

    slider.drag_to(85.2);
    assert!(!slider.value_changed_since_drag_start());
    slider.release();

    assert_eq!(slider.value(), 80);
    assert!(ends.borrow().is_empty());
}

#[test]
fn full_i64_range_maps_pointer_to_its_ends() {
    let (changes, on_change) = recorder();
    let mut slider = slider(
        SliderConfig::default()
            .with_range(i64::MIN, i64::MAX)
            .on_change(on_change),
    );
    assert_eq!(slider.value(), 0);
    assert_eq!(slider.surface().last_offset(), Some(50.0));

    slider.press(500.0);
    assert_eq!(slider.value(), i64::MAX);
    assert_eq!(slider.surface().last_offset(), Some(100.0));

    slider.drag_to(-500.0);
    slider.release();
    assert_eq!(slider.value(), i64::MIN);
    assert_eq!(*changes.borrow(), vec![0, i64::MAX, i64::MIN]);
}

#[test]
fn returning_to_the_start_value_still_counts_as_changed() {
    let (ends, on_end) = recorder();
    let mut slider = slider(SliderConfig::default().with_value(50).on_end(on_end));

    slider.press(55.0);
    slider.drag_to(85.0);
    slider.drag_to(55.0);
    slider.release();

    assert_eq!(*ends.borrow(), vec![50]);
}

#[test]
fn start_reports_value_after_the_press_update() {
    let (starts, on_start) = recorder();
    let mut slider = slider(SliderConfig::default().on_start(on_start));

    slider.press(25.0);

    assert_eq!(*starts.borrow(), vec![20]);
    assert!(slider.is_dragging());
}

#[test]
fn moves_while_idle_are_ignored() {
    let mut slider = slider(SliderConfig::default().with_value(10));
    let writes = slider.surface().knob_offsets.len();

    slider.drag_to(90.0);

    assert_eq!(slider.value(), 10);
    assert_eq!(slider.surface().knob_offsets.len(), writes);
}

#[test]
fn change_fires_once_per_committed_value() {
    let (changes, on_change) = recorder();
    let mut slider = slider(SliderConfig::default().on_change(on_change));
    changes.borrow_mut().clear();

    slider.set_value(Some(500));
    assert_eq!(*changes.borrow(), vec![100]);

    slider.press(45.0);
    assert_eq!(*changes.borrow(), vec![100, 40]);

    // Same integer value: knob moves, nothing is committed.
    slider.drag_to(45.3);
    assert_eq!(*changes.borrow(), vec![100, 40]);
}

#[test]
fn narrow_track_skips_label_tooltip_and_change() {
    let (changes, on_change) = recorder();
    let mut slider = ThumbnailSlider::new(
        FakeSurface::new(10.0, 20.0),
        SliderConfig::default().with_value(3).on_change(on_change),
    )
    .expect("valid config");

    slider.set_value(Some(70));

    assert_eq!(slider.value(), 70);
    assert_eq!(slider.surface().last_offset(), Some(7.0));
    assert!(slider.surface().label.is_none());
    assert!(slider.surface().content.is_none());
    assert!(changes.borrow().is_empty());
}

#[test]
fn missing_photo_renders_error_message() {
    let mut slider = slider(
        SliderConfig::default()
            .with_photos([Photo::new("0.jpg"), Photo::new("1.jpg")])
            .with_error_message("nothing to see")
            .on_change(|_| {}),
    );

    slider.set_value(Some(1));
    assert_eq!(
        slider.surface().content,
        Some(TooltipContent::Photo {
            url: "1.jpg".into()
        })
    );
    assert_eq!(slider.tooltip_kind(), TooltipKind::Photo);

    slider.set_value(Some(5));
    assert_eq!(
        slider.surface().content,
        Some(TooltipContent::Missing {
            message: "nothing to see".into()
        })
    );
    assert_eq!(slider.tooltip_kind(), TooltipKind::Missing);
    assert!(slider.surface().visible);
}

#[test]
fn tooltip_is_placed_by_content_kind() {
    let mut slider = slider(
        SliderConfig::default()
            .with_photos([Photo::new("0.jpg")])
            .on_change(|_| {}),
    );

    slider.press(5.0);
    assert_eq!(slider.surface().tooltip_positions.last(), Some(&(-70.0, 44.0)));

    slider.drag_to(65.0);
    assert_eq!(slider.tooltip_kind(), TooltipKind::Missing);
    assert_eq!(slider.surface().tooltip_positions.last(), Some(&(31.0, 164.0)));
}

#[test]
fn without_change_callback_tooltip_stays_untouched() {
    let mut slider = slider(SliderConfig::default().with_photos([Photo::new("0.jpg")]));

    slider.set_value(Some(0));

    assert!(slider.surface().content.is_none());
    assert!(!slider.surface().visible);
    assert_eq!(slider.surface().label.as_deref(), Some("0"));
}

#[test]
fn end_refreshes_tooltip_for_final_value() {
    let (ends, on_end) = recorder();
    let mut slider = slider(
        SliderConfig::default()
            .with_photos((0..=100).map(|i| Photo::new(format!("{i}.jpg"))))
            .on_end(on_end),
    );

    slider.press(5.0);
    slider.drag_to(38.0);
    slider.release();

    assert_eq!(*ends.borrow(), vec![33]);
    assert_eq!(
        slider.surface().content,
        Some(TooltipContent::Photo {
            url: "33.jpg".into()
        })
    );
}

#[test]
fn empty_range_ignores_pointer() {
    let (changes, on_change) = recorder();
    let mut slider = slider(SliderConfig::default().with_range(7, 7).on_change(on_change));
    let writes = slider.surface().knob_offsets.len();
    let positions = slider.surface().tooltip_positions.len();

    slider.press(80.0);
    slider.drag_to(20.0);
    slider.release();

    assert_eq!(slider.value(), 7);
    assert_eq!(slider.surface().knob_offsets.len(), writes);
    assert_eq!(slider.surface().tooltip_positions.len(), positions);
    assert_eq!(*changes.borrow(), vec![7]);
}

#[test]
fn knob_wider_than_track_writes_nothing() {
    let mut slider = ThumbnailSlider::new(FakeSurface::new(60.0, 40.0), SliderConfig::default())
        .expect("valid config");

    slider.press(30.0);
    slider.set_value(Some(40));

    assert!(slider.surface().knob_offsets.is_empty());
    assert!(slider.surface().tooltip_positions.is_empty());
    assert_eq!(slider.value(), 40);
    for offset in &slider.surface().knob_offsets {
        assert!(offset.is_finite());
    }
}
