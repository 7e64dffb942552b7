// Host-side tests for the knob drag/value logic.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod knob {
    include!("../src/knob.rs");
}

use knob::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn default_knob(value: i32) -> Knob {
    Knob::new(KnobConfig::default(), value).unwrap()
}

#[test]
fn defaults_match_mixer_knobs() {
    let c = KnobConfig::default();
    assert_eq!((c.min, c.max, c.step), (0, 10, 1));
    assert!((c.sensitivity - 0.5).abs() < 1e-12);
    assert_eq!(c.size, KnobSize::Medium);
    assert!(c.show_value);
}

#[test]
fn rotation_spans_270_degrees() {
    let c = KnobConfig::default();
    assert!((c.rotation_deg(0) + 135.0).abs() < 1e-9);
    assert!((c.rotation_deg(5) - 0.0).abs() < 1e-9);
    assert!((c.rotation_deg(10) - 135.0).abs() < 1e-9);

    let offset = KnobConfig {
        min: -20,
        max: 20,
        ..KnobConfig::default()
    };
    assert!((offset.rotation_deg(-20) + 135.0).abs() < 1e-9);
    assert!((offset.rotation_deg(0) - 0.0).abs() < 1e-9);
}

#[test]
fn invalid_configs_are_rejected() {
    let empty = KnobConfig {
        min: 5,
        max: 5,
        ..KnobConfig::default()
    };
    assert_eq!(
        Knob::new(empty, 5).unwrap_err(),
        KnobError::EmptyRange { min: 5, max: 5 }
    );
    let bad_step = KnobConfig {
        step: 0,
        ..KnobConfig::default()
    };
    assert_eq!(bad_step.validate(), Err(KnobError::InvalidStep(0)));
    let bad_sens = KnobConfig {
        sensitivity: f64::NAN,
        ..KnobConfig::default()
    };
    assert!(matches!(
        bad_sens.validate(),
        Err(KnobError::InvalidSensitivity(_))
    ));
}

#[test]
fn full_i32_bounds_do_not_overflow() {
    let wide = KnobConfig {
        min: i32::MIN,
        max: i32::MAX,
        ..KnobConfig::default()
    };
    assert_eq!(wide.validate(), Ok(()));
    assert!((wide.range() - (u32::MAX as f64)).abs() < 1.0);
    assert!((wide.rotation_deg(i32::MIN) + 135.0).abs() < 1e-9);
    assert!((wide.rotation_deg(i32::MAX) - 135.0).abs() < 1e-9);

    let mut k = Knob::new(wide, 0).unwrap();
    assert!(k.rotation_deg().abs() < 1e-6);
    k.begin_drag(0.0);
    assert_eq!(k.drag_to(-1_000.0), Some(i32::MAX));
    assert_eq!(k.drag_to(1_000.0), Some(i32::MIN));
    assert!(k.reconcile(i32::MIN, i32::MAX, 0).is_ok());
}

#[test]
fn initial_value_is_clamped() {
    assert_eq!(default_knob(99).value(), 10);
    assert_eq!(default_knob(-1).value(), 0);
}

#[test]
fn dragging_up_increases_value() {
    let mut k = default_knob(5);
    k.begin_drag(300.0);
    // 20px * 0.5 = 10 -> +1 over a 0..10 range
    assert_eq!(k.drag_to(280.0), Some(6));
    assert_eq!(k.value(), 6);
    assert!((k.rotation_deg() - 27.0).abs() < 1e-9);
    // down past the anchor
    assert_eq!(k.drag_to(340.0), Some(3));
}

#[test]
fn sub_step_drag_does_not_emit() {
    let mut k = default_knob(5);
    k.begin_drag(100.0);
    // 4px * 0.5 / 100 * 10 = 0.2 -> rounds back to 5
    assert_eq!(k.drag_to(96.0), None);
    assert_eq!(k.drag_to(100.0), None);
    assert_eq!(k.value(), 5);
}

#[test]
fn rounding_is_half_up() {
    let mut k = default_knob(5);
    k.begin_drag(100.0);
    // exactly +0.5
    assert_eq!(k.drag_to(90.0), Some(6));
    // exactly -0.5 rounds up to 5
    assert_eq!(k.drag_to(110.0), Some(5));
}

#[test]
fn repeated_moves_emit_once() {
    let mut k = default_knob(5);
    k.begin_drag(0.0);
    assert_eq!(k.drag_to(-40.0), Some(7));
    assert_eq!(k.drag_to(-41.0), None);
    assert_eq!(k.drag_to(-42.0), None);
    assert_eq!(k.drag_to(-40.0), None);
}

#[test]
fn drag_saturates_at_bounds() {
    let mut k = default_knob(5);
    k.begin_drag(500.0);
    assert_eq!(k.drag_to(-10_000.0), Some(10));
    assert_eq!(k.drag_to(-20_000.0), None);
    assert_eq!(k.drag_to(10_000.0), Some(0));
    assert_eq!(k.drag_to(20_000.0), None);
    assert_eq!(k.value(), 0);
}

#[test]
fn moves_without_drag_are_ignored() {
    let mut k = default_knob(5);
    assert_eq!(k.drag_to(-1000.0), None);
    k.begin_drag(0.0);
    assert!(k.end_drag());
    assert_eq!(k.drag_to(-1000.0), None);
    assert_eq!(k.value(), 5);
    assert!(!k.end_drag());
}

#[test]
fn release_does_not_change_value() {
    let mut k = default_knob(2);
    k.begin_drag(50.0);
    k.drag_to(30.0);
    let v = k.value();
    k.end_drag();
    assert_eq!(k.value(), v);
    assert!(!k.is_dragging());
}

#[test]
fn new_drag_anchors_at_current_value() {
    let mut k = default_knob(5);
    k.begin_drag(0.0);
    k.drag_to(-40.0);
    k.end_drag();
    assert_eq!(k.value(), 7);
    k.begin_drag(1000.0);
    assert_eq!(k.drag_to(980.0), Some(8));
}

#[test]
fn sync_mirrors_external_value_except_mid_drag() {
    let mut k = default_knob(5);
    assert!(k.sync(8));
    assert_eq!(k.value(), 8);
    assert!((k.rotation_deg() - 81.0).abs() < 1e-9);
    assert!(!k.sync(8));
    assert!(k.sync(42));
    assert_eq!(k.value(), 10);

    k.begin_drag(0.0);
    assert!(!k.sync(1));
    assert_eq!(k.value(), 10);
    k.end_drag();
    assert!(k.sync(1));
    assert_eq!(k.value(), 1);
}

#[test]
fn new_bounds_recompute_rotation() {
    let mut k = default_knob(5);
    assert_eq!(k.reconcile(0, 20, 5), Ok(true));
    assert_eq!(k.value(), 5);
    assert!((k.rotation_deg() + 67.5).abs() < 1e-9);
    // same bounds and value: nothing to repaint
    assert_eq!(k.reconcile(0, 20, 5), Ok(false));
    assert_eq!(
        k.reconcile(3, 1, 2),
        Err(KnobError::EmptyRange { min: 3, max: 1 })
    );
    // rejected bounds leave the old ones in place
    assert!((k.rotation_deg() + 67.5).abs() < 1e-9);
    assert_eq!(k.reconcile(0, 20, 40), Ok(true));
    assert_eq!(k.value(), 20);
}

#[test]
fn reconcile_is_ignored_mid_drag() {
    let mut k = default_knob(5);
    k.begin_drag(0.0);
    assert_eq!(k.reconcile(0, 100, 50), Ok(false));
    assert_eq!(k.value(), 5);
    k.end_drag();
    assert_eq!(k.reconcile(0, 100, 50), Ok(true));
    assert!((k.rotation_deg() - 0.0).abs() < 1e-9);
}

#[test]
fn step_snaps_to_grid_from_min() {
    let config = KnobConfig {
        min: 0,
        max: 10,
        step: 2,
        ..KnobConfig::default()
    };
    assert_eq!(config.quantize(4.9), 4);
    assert_eq!(config.quantize(5.0), 6);
    assert_eq!(config.quantize(9.9), 10);

    let uneven = KnobConfig {
        min: 0,
        max: 10,
        step: 4,
        ..KnobConfig::default()
    };
    // 10 is off-grid; snapping up to 12 saturates at max
    assert_eq!(uneven.quantize(10.0), 10);
    assert_eq!(uneven.quantize(9.0), 8);
}

#[test]
fn random_drags_stay_in_bounds_without_repeats() {
    let mut rng = StdRng::seed_from_u64(0xC5E);
    for _ in 0..200 {
        let min = rng.gen_range(-50..50);
        let max = min + rng.gen_range(1..100);
        let config = KnobConfig {
            min,
            max,
            sensitivity: rng.gen_range(0.1..2.0),
            ..KnobConfig::default()
        };
        let mut k = Knob::new(config, rng.gen_range(min..=max)).unwrap();
        let mut last = k.value();
        let mut y = 0.0;
        k.begin_drag(y);
        for _ in 0..100 {
            y += rng.gen_range(-80.0..80.0);
            if let Some(v) = k.drag_to(y) {
                assert!(v >= min && v <= max, "{v} outside {min}..={max}");
                assert_ne!(v, last);
                last = v;
            }
            if rng.gen_bool(0.05) {
                k.end_drag();
                k.begin_drag(y);
            }
        }
    }
}

#[test]
fn size_classes_are_distinct() {
    assert!(KnobSize::Small.diameter_px() < KnobSize::Medium.diameter_px());
    assert!(KnobSize::Medium.diameter_px() < KnobSize::Large.diameter_px());
    assert_eq!(KnobSize::Large.class_name(), "knob-large");
}
