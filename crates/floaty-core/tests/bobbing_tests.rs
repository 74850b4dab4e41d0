// Host-side tests for bobbing mode and the tilt offset.

use floaty_core::*;
use glam::Vec2;

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0)
}

fn bobbing_image(x: f32, base_y: f32, speed: f32, amplitude: f32, phase: f32) -> TrackedImage {
    TrackedImage::new(0, Vec2::new(x, base_y), 0.0).with_bob(Bob {
        base_y,
        speed,
        amplitude,
        phase,
    })
}

#[test]
fn bob_advances_phase_and_offsets_from_base() {
    let mut img = bobbing_image(100.0, 300.0, 0.1, 10.0, 0.0);
    step_bobbing(&mut img, viewport(), None);
    assert!((img.bob.phase - 0.1).abs() < 1e-6);
    let expected = 300.0 + 0.1_f32.sin() * 10.0;
    assert!((img.position.y - expected).abs() < 1e-4);
    assert_eq!(img.position.x, 100.0);
    assert_eq!(img.bob.base_y, 300.0);
}

#[test]
fn bob_phase_stays_bounded() {
    let mut img = bobbing_image(100.0, 300.0, 0.5, 10.0, 0.0);
    for _ in 0..10_000 {
        step_bobbing(&mut img, viewport(), None);
        assert!(img.bob.phase < std::f32::consts::TAU);
    }
}

#[test]
fn bob_result_is_clamped_to_viewport() {
    // sin(4.1) < 0, so the raw y would be negative
    let mut img = bobbing_image(100.0, 0.0, 0.1, 20.0, 4.0);
    step_bobbing(&mut img, viewport(), None);
    assert_eq!(img.position.y, 0.0);

    let mut low = bobbing_image(100.0, 500.0, 0.0, 20.0, std::f32::consts::FRAC_PI_2);
    step_bobbing(&mut low, viewport(), None);
    assert_eq!(low.position.y, 500.0);
}

#[test]
fn tilt_offset_moves_both_axes_from_anchor() {
    let mut img = bobbing_image(100.0, 200.0, 0.0, 0.0, 0.0);
    img.snapshot_anchor();
    step_bobbing(&mut img, viewport(), Some(Vec2::new(10.0, -5.0)));
    assert_eq!(img.position, Vec2::new(110.0, 195.0));
}

#[test]
fn tilt_offset_without_anchor_only_bobs() {
    let mut img = bobbing_image(100.0, 200.0, 0.0, 0.0, 0.0);
    step_bobbing(&mut img, viewport(), Some(Vec2::new(50.0, 50.0)));
    assert_eq!(img.position, Vec2::new(100.0, 200.0));
}

#[test]
fn large_tilt_is_clamped() {
    let mut img = bobbing_image(650.0, 200.0, 0.0, 0.0, 0.0);
    img.snapshot_anchor();
    step_bobbing(&mut img, viewport(), Some(Vec2::new(400.0, -400.0)));
    assert_eq!(img.position, Vec2::new(700.0, 0.0));
}

#[test]
fn dragged_image_does_not_bob() {
    let mut img = bobbing_image(100.0, 300.0, 0.3, 10.0, 1.0);
    img.is_dragged = true;
    step_bobbing(&mut img, viewport(), None);
    assert_eq!(img.bob.phase, 1.0);
    assert_eq!(img.position, Vec2::new(100.0, 300.0));
}

#[test]
fn anchor_round_trip_is_exact() {
    let mut img = bobbing_image(123.25, 321.5, 0.03, 7.0, 0.4);
    img.position.y = 318.75;
    img.snapshot_anchor();
    img.position = Vec2::new(1.0, 2.0);
    img.bob.base_y = 3.0;
    img.restore_anchor();
    assert_eq!(img.position, Vec2::new(123.25, 318.75));
    assert_eq!(img.bob.base_y, 321.5);
    assert!(img.tilt_anchor.is_none());
}
