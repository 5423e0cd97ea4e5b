//! Tests for the station color scale.

use renderer::gradient::{
    interpolate_color, validate_stops, value_domain, ColorScale, ColorStop, DEGENERATE_COLOR,
    JET_STOPS,
};
use station_common::Color;

const NAVY: Color = Color::new(0, 0, 128);
const BLUE: Color = Color::new(0, 0, 255);
const CYAN: Color = Color::new(0, 255, 255);
const YELLOW: Color = Color::new(255, 255, 0);
const RED: Color = Color::new(255, 0, 0);

fn jet() -> ColorScale {
    ColorScale::jet().unwrap()
}

// ============================================================================
// Endpoint and stop tests
// ============================================================================

#[test]
fn test_min_is_navy_and_max_is_red() {
    let scale = jet();
    for (min, max) in [(0.0, 1.0), (5.0, 10.0), (-40.0, -3.5), (0.001, 9999.0)] {
        assert_eq!(scale.color_for(min, min, max), NAVY, "min of [{}, {}]", min, max);
        assert_eq!(scale.color_for(max, min, max), RED, "max of [{}, {}]", min, max);
    }
}

#[test]
fn test_internal_stops_hit_exact_colors() {
    let scale = jet();
    assert_eq!(scale.color_for(25.0, 0.0, 100.0), BLUE);
    assert_eq!(scale.color_for(50.0, 0.0, 100.0), CYAN);
    assert_eq!(scale.color_for(75.0, 0.0, 100.0), YELLOW);
}

#[test]
fn test_segment_midpoints() {
    let scale = jet();
    assert_eq!(scale.color_for(1.0, 0.0, 8.0), Color::new(0, 0, 192));
    assert_eq!(scale.color_for(3.0, 0.0, 8.0), Color::new(0, 128, 255));
    assert_eq!(scale.color_for(5.0, 0.0, 8.0), Color::new(128, 255, 128));
    assert_eq!(scale.color_for(7.0, 0.0, 8.0), Color::new(255, 128, 0));
}

#[test]
fn test_no_discontinuity_at_internal_stops() {
    let scale = jet();
    let eps = 1e-9;
    for stop in &JET_STOPS[1..JET_STOPS.len() - 1] {
        let left = scale.color_for(stop.position - eps, 0.0, 1.0);
        let right = scale.color_for(stop.position + eps, 0.0, 1.0);
        assert_eq!(left, stop.color, "left limit at {}", stop.position);
        assert_eq!(right, stop.color, "right limit at {}", stop.position);
    }
}

#[test]
fn test_channels_move_monotonically_within_segments() {
    let scale = jet();
    let mut previous = scale.color_for(0.0, 0.0, 1.0);
    for i in 1..=250 {
        let t = i as f64 / 1000.0;
        let color = scale.color_for(t, 0.0, 1.0);
        // First segment only raises blue.
        assert_eq!(color.r, 0);
        assert_eq!(color.g, 0);
        assert!(color.b >= previous.b);
        previous = color;
    }
}

// ============================================================================
// Degenerate range and clamping tests
// ============================================================================

#[test]
fn test_degenerate_range_is_gray() {
    let scale = jet();
    for v in [-1.0, 0.0, 42.0, 1e12] {
        assert_eq!(scale.color_for(v, 7.0, 7.0), Color::new(127, 127, 127));
    }
    assert_eq!(DEGENERATE_COLOR, Color::new(127, 127, 127));
}

#[test]
fn test_values_below_range_clamp_to_min_color() {
    let scale = jet();
    let (min, max) = (5.0, 10.0);
    assert_eq!(scale.color_for(min - 100.0, min, max), scale.color_for(min, min, max));
}

#[test]
fn test_values_above_range_clamp_to_max_color() {
    let scale = jet();
    let (min, max) = (5.0, 10.0);
    assert_eq!(scale.color_for(max + 100.0, min, max), scale.color_for(max, min, max));
}

#[test]
fn test_nan_value_does_not_panic() {
    let scale = jet();
    assert_eq!(scale.color_for(f64::NAN, 0.0, 1.0), RED);
}

#[test]
fn test_round_trip_example() {
    let scale = jet();
    assert_eq!(scale.color_for(5.0, 5.0, 10.0), NAVY);
    assert_eq!(scale.color_for(10.0, 5.0, 10.0), RED);
}

// ============================================================================
// Stop validation tests
// ============================================================================

#[test]
fn test_custom_two_stop_scale() {
    let scale = ColorScale::new(vec![
        ColorStop::new(0.0, 0, 0, 0),
        ColorStop::new(1.0, 200, 100, 50),
    ])
    .unwrap();
    assert_eq!(scale.color_for(0.5, 0.0, 1.0), Color::new(100, 50, 25));
}

#[test]
fn test_validate_rejects_unordered_stops() {
    let stops = vec![
        ColorStop::new(0.0, 0, 0, 0),
        ColorStop::new(0.6, 0, 0, 0),
        ColorStop::new(0.4, 0, 0, 0),
        ColorStop::new(1.0, 0, 0, 0),
    ];
    assert!(validate_stops(&stops).is_err());
}

#[test]
fn test_validate_rejects_duplicate_positions() {
    let stops = vec![
        ColorStop::new(0.0, 0, 0, 0),
        ColorStop::new(0.5, 0, 0, 0),
        ColorStop::new(0.5, 0, 0, 0),
        ColorStop::new(1.0, 0, 0, 0),
    ];
    assert!(validate_stops(&stops).is_err());
}

#[test]
fn test_validate_rejects_bad_endpoints() {
    let starts_late = vec![ColorStop::new(0.1, 0, 0, 0), ColorStop::new(1.0, 0, 0, 0)];
    let ends_early = vec![ColorStop::new(0.0, 0, 0, 0), ColorStop::new(0.9, 0, 0, 0)];
    assert!(ColorScale::new(starts_late).is_err());
    assert!(ColorScale::new(ends_early).is_err());
    assert!(ColorScale::new(vec![ColorStop::new(0.0, 0, 0, 0)]).is_err());
}

// ============================================================================
// Helper tests
// ============================================================================

#[test]
fn test_interpolate_color_endpoints() {
    assert_eq!(interpolate_color(NAVY, BLUE, 0.0), NAVY);
    assert_eq!(interpolate_color(NAVY, BLUE, 1.0), BLUE);
}

#[test]
fn test_value_domain() {
    assert_eq!(value_domain([10.0, 5.0, 7.0]), Some((5.0, 10.0)));
    assert_eq!(value_domain([4.0]), Some((4.0, 4.0)));
}
