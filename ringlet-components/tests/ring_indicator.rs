use std::{
    f64::consts::PI,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use ringlet_components::ring_indicator::{
    ANIMATION_CLASS, RingIndicator, RingIndicatorConfig, RingIndicatorError, UpdateRoutine,
};
use ringlet_ui::{AccessibilityNode, Document, Surface, accesskit::Role};

fn host() -> Surface {
    Document::new().create_element("div")
}

fn spy(ring: &mut RingIndicator) -> Arc<AtomicUsize> {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    ring.set_routine_observer(move |_: UpdateRoutine| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    calls
}

fn value_offset(ring: &RingIndicator, value: f64) -> f64 {
    let c = ring.geometry().circumference;
    c - (value / 100.0) * c
}

#[test]
fn fresh_instance_is_empty_and_visible() {
    let host = host();
    let ring = RingIndicator::new(Some(&host), None).expect("default ring");

    assert_eq!(ring.value(), 0.0);
    assert!(!ring.is_animated());
    assert!(!ring.is_hidden());
    assert_eq!(ring.dash_offset(), Some(ring.geometry().circumference));
    assert_eq!(host.attribute("role").as_deref(), Some("progressbar"));
    assert_eq!(host.attribute("aria-valuenow").as_deref(), Some("0"));
    assert!(host.is_visible());
}

#[test]
fn fresh_instance_markup() {
    let host = host();
    let _ring = RingIndicator::new(Some(&host), None).expect("default ring");
    let c = 80.0 * PI;

    let expected = format!(
        "<div role=\"progressbar\" aria-valuenow=\"0\">\
         <svg width=\"120\" height=\"120\">\
         <circle stroke=\"#f0f0f0\" stroke-width=\"10\" fill=\"transparent\" r=\"40\" cx=\"60\" cy=\"60\"></circle>\
         <circle stroke=\"blue\" stroke-width=\"10\" fill=\"transparent\" r=\"40\" cx=\"60\" cy=\"60\" \
         stroke-dasharray=\"{c}\" class=\"ring-indicator__primary-circle\" style=\"stroke-dashoffset: {c};\"></circle>\
         </svg></div>"
    );
    assert_eq!(host.to_markup(), expected);
}

#[test]
fn rings_are_built_from_configuration() {
    let host = host();
    let config = RingIndicatorConfig::default()
        .size(200.0)
        .thickness(20.0)
        .primary_color("tomato")
        .secondary_color("#111");
    let ring = RingIndicator::new(Some(&host), Some(config)).expect("ring");

    assert_eq!(ring.geometry().radius, 100.0);
    assert_eq!(ring.geometry().normalized_radius, 60.0);
    assert_eq!(ring.geometry().circumference, 60.0 * 2.0 * PI);

    let svg = ring.container();
    assert_eq!(svg.parent().as_ref(), Some(&host));
    assert_eq!(svg.attribute("width").as_deref(), Some("200"));
    assert_eq!(
        svg.children(),
        vec![ring.track().clone(), ring.indicator().clone()]
    );

    assert_eq!(ring.track().attribute("stroke").as_deref(), Some("#111"));
    assert_eq!(ring.track().attribute("r").as_deref(), Some("60"));
    assert_eq!(ring.track().attribute("stroke-width").as_deref(), Some("20"));
    assert!(!ring.track().has_attribute("stroke-dasharray"));
    assert_eq!(ring.indicator().attribute("stroke").as_deref(), Some("tomato"));
    assert_eq!(ring.indicator().attribute("cx").as_deref(), Some("100"));
    assert_eq!(
        ring.indicator().attribute("stroke-dasharray"),
        Some(ring.geometry().circumference.to_string())
    );
}

#[test]
fn stored_value_is_clamped() {
    let host = host();
    let mut ring = RingIndicator::new(Some(&host), None).expect("ring");

    for (input, expected) in [
        (-10.0, 0.0),
        (0.0, 0.0),
        (37.5, 37.5),
        (100.0, 100.0),
        (140.0, 100.0),
        (f64::INFINITY, 100.0),
    ] {
        ring.set_value(input);
        assert_eq!(ring.value(), expected, "input {input}");
    }
}

#[test]
fn setting_current_value_runs_no_routine() {
    let host = host();
    let mut ring = RingIndicator::new(Some(&host), None).expect("ring");
    ring.set_value(50);
    ring.set_animated(true);
    ring.set_hidden(true);
    let calls = spy(&mut ring);
    let markup = host.to_markup();

    ring.set_value(50);
    ring.set_animated(true);
    ring.set_hidden(true);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    assert_eq!(host.to_markup(), markup);

    // 150 clamps to 100; a second 150 is then a duplicate.
    ring.set_value(150);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    ring.set_value(150);
    ring.set_value(100);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn determinate_offset_tracks_value() {
    let host = host();
    let mut ring = RingIndicator::new(Some(&host), None).expect("ring");

    for value in [1.0, 25.0, 33.3, 99.0, 100.0] {
        ring.set_value(value);
        assert_eq!(ring.dash_offset(), Some(value_offset(&ring, value)));
        assert_eq!(host.attribute("aria-valuenow"), Some(value.to_string()));
    }
    assert_eq!(ring.dash_offset(), Some(0.0));
}

#[test]
fn animated_offset_ignores_value() {
    let host = host();
    let mut ring = RingIndicator::new(Some(&host), None).expect("ring");
    ring.set_animated(true);
    let c = ring.geometry().circumference;

    for value in [0.0, 10.0, 90.0] {
        ring.set_value(value);
        assert_eq!(ring.dash_offset(), Some(c - 0.75 * c));
        assert!(!host.has_attribute("aria-valuenow"));
    }
    assert_eq!(ring.value(), 90.0);
}

#[test]
fn animation_round_trip_restores_offset_and_toggles_class_twice() {
    let host = host();
    let mut ring = RingIndicator::new(Some(&host), None).expect("ring");
    ring.set_value(40);

    let toggles = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&toggles);
    ring.set_routine_observer(move |routine: UpdateRoutine| {
        if routine == UpdateRoutine::ToggleAnimationClass {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    ring.set_animated(true);
    assert!(ring.indicator().class_list().contains(ANIMATION_CLASS));
    ring.set_animated(false);
    assert!(!ring.indicator().class_list().contains(ANIMATION_CLASS));

    assert_eq!(toggles.load(Ordering::SeqCst), 2);
    assert_eq!(ring.dash_offset(), Some(value_offset(&ring, 40.0)));
    assert_eq!(host.attribute("aria-valuenow").as_deref(), Some("40"));
}

#[test]
fn hidden_maps_to_host_visibility_only() {
    let host = host();
    let mut ring = RingIndicator::new(Some(&host), None).expect("ring");
    ring.set_value(60);
    let indicator_before = ring.indicator().to_markup();
    let aria_before = host.attribute("aria-valuenow");

    ring.set_hidden(true);
    assert_eq!(host.style().get("visibility").as_deref(), Some("hidden"));
    assert!(!ring.indicator().is_visible());
    assert_eq!(ring.indicator().to_markup(), indicator_before);
    assert_eq!(host.attribute("aria-valuenow"), aria_before);
    assert_eq!(ring.container().parent().as_ref(), Some(&host));

    ring.set_hidden(false);
    assert_eq!(host.style().get("visibility").as_deref(), Some("visible"));
    assert!(ring.indicator().is_visible());
    assert_eq!(host.style().len(), 1);
    assert_eq!(ring.value(), 60.0);
}

#[test]
fn missing_host_fails_before_creating_anything() {
    let document = Document::new();
    let before = document.node_count();

    let result = RingIndicator::new(None, None);
    assert!(matches!(result, Err(RingIndicatorError::InvalidArgument(_))));
    assert_eq!(document.node_count(), before);
}

#[test]
fn degenerate_configuration_leaves_host_untouched() {
    let document = Document::new();
    let host = document.create_element("div");
    let config = RingIndicatorConfig::default().size(40.0).thickness(10.0);

    let result = RingIndicator::new(Some(&host), Some(config));
    assert!(matches!(
        result,
        Err(RingIndicatorError::DegenerateGeometry { .. })
    ));
    assert_eq!(document.node_count(), 1);
    assert!(!host.has_attribute("role"));
}

#[test]
fn json_options_drive_construction() {
    let host = host();
    let config = RingIndicatorConfig::from_json(r#"{"size": 60, "thickness": 5, "extra": true}"#)
        .expect("options");
    let ring = RingIndicator::new(Some(&host), Some(config)).expect("ring");

    assert_eq!(ring.geometry().normalized_radius, 20.0);
    assert_eq!(ring.indicator().attribute("stroke").as_deref(), Some("blue"));
}

#[test]
fn host_projects_into_accessibility_tree() {
    let host = host();
    let mut ring = RingIndicator::new(Some(&host), None).expect("ring");
    ring.set_value(64);

    let node = AccessibilityNode::from_surface(&host).to_accesskit();
    assert_eq!(node.role(), Role::ProgressIndicator);
    assert_eq!(node.numeric_value(), Some(64.0));

    ring.set_animated(true);
    ring.set_hidden(true);
    let node = AccessibilityNode::from_surface(&host).to_accesskit();
    assert_eq!(node.numeric_value(), None);
    assert!(node.is_hidden());
}
