// Host-side tests for initial placement.

use floaty_core::layout::*;
use floaty_core::*;
use glam::Vec2;
use rand::prelude::*;

#[test]
fn cluster_radius_is_responsive_and_capped() {
    assert_eq!(cluster_radius(Viewport::new(800.0, 600.0)), 150.0);
    assert_eq!(cluster_radius(Viewport::new(400.0, 300.0)), 75.0);
    assert_eq!(cluster_radius(Viewport::new(2000.0, 2000.0)), 150.0);
}

#[test]
fn anchors_match_mode() {
    let vp = Viewport::new(800.0, 600.0);
    let momentum = anchor_point(MotionMode::Momentum, vp);
    assert_eq!(momentum.x, 400.0);
    assert!((momentum.y - (150.0 + 450.0 * 0.3)).abs() < 1e-4);
    assert_eq!(anchor_point(MotionMode::Bobbing, vp), Vec2::new(400.0, 300.0));
}

#[test]
fn placement_stays_in_cluster_disc() {
    let vp = Viewport::new(800.0, 600.0);
    let size = Vec2::splat(IMAGE_SIZE);
    let mut rng = StdRng::seed_from_u64(3);
    for mode in [MotionMode::Momentum, MotionMode::Bobbing] {
        let anchor = anchor_point(mode, vp);
        for _ in 0..500 {
            let pos = place(&mut rng, mode, vp, size);
            let center = pos + size * 0.5;
            assert!(center.distance(anchor) <= 150.0 + 1e-3, "{mode}: {pos:?}");
            assert!(vp.contains_rect(pos, size));
        }
    }
}

#[test]
fn placement_is_clamped_on_tiny_viewports() {
    let vp = Viewport::new(50.0, 50.0);
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..50 {
        assert_eq!(
            place(&mut rng, MotionMode::Momentum, vp, Vec2::splat(IMAGE_SIZE)),
            Vec2::ZERO
        );
    }
}

#[test]
fn tilt_is_slight() {
    let mut rng = StdRng::seed_from_u64(5);
    for _ in 0..1000 {
        let t = random_tilt(&mut rng);
        assert!((-TILT_MAX_RADIANS..=TILT_MAX_RADIANS).contains(&t));
    }
}

#[test]
fn spawn_fills_bob_from_config_ranges() {
    let config = MotionConfig::with_mode(MotionMode::Bobbing);
    let vp = Viewport::new(1024.0, 768.0);
    let mut rng = StdRng::seed_from_u64(9);
    for asset in 0..100 {
        let img = spawn(&mut rng, asset, &config, vp);
        assert_eq!(img.asset, asset);
        assert_eq!(img.bob.base_y, img.position.y);
        assert!(img.bob.speed >= BOB_SPEED_MIN && img.bob.speed <= BOB_SPEED_MAX);
        assert!(img.bob.amplitude >= BOB_AMPLITUDE_MIN && img.bob.amplitude <= BOB_AMPLITUDE_MAX);
        assert!(img.bob.phase >= 0.0 && img.bob.phase <= std::f32::consts::TAU);
        assert_eq!(img.velocity, Vec2::ZERO);
        assert_eq!(img.bounce_damping, BOUNCE_DAMPING);
        assert!(img.tilt_anchor.is_none());
    }
}
