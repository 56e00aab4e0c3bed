//! Integration tests for the pointer effect
//!
//! These tests drive the effect the way the application does:
//! 1. Pointer events go through the lifecycle's listeners
//! 2. Frame ticks simulate and draw into a canvas
//! 3. Unmounting stops frames and ignores further events

use std::time::{Duration, Instant};

use pointerfx_core::{
    Canvas, DrawCommand, EffectConfig, EffectLifecycle, FrameStatus, PointerEffect, PointerEvent,
    PointerKind, RecordingCanvas, Rgb, Vec2,
};
use pointerfx_sim::ParticleWorld;

fn mount() -> EffectLifecycle<RecordingCanvas> {
    EffectLifecycle::mount(
        Some(RecordingCanvas::new(1280, 720)),
        PointerEffect::with_seed(EffectConfig::default(), 42),
    )
}

fn rendered(status: FrameStatus) -> pointerfx_core::FrameStats {
    match status {
        FrameStatus::Rendered(stats) => stats,
        other => panic!("Expected a rendered frame, got {:?}", other),
    }
}

// ==================== Kinematics ====================

/// A particle spawned at (100, 100) with velocity (2, -3), stepped 10 frames
#[test]
fn test_ten_frame_trajectory() {
    let mut world = ParticleWorld::new();
    world.spawn(Vec2::new(100.0, 100.0), Vec2::new(2.0, -3.0), Rgb::new(79, 70, 229));

    for _ in 0..10 {
        world.step();
    }

    let p = &world.particles()[0];
    assert!((p.position.x - 120.0).abs() < 1e-3, "x = {}", p.position.x);
    assert!((p.position.y - 79.0).abs() < 1e-3, "y = {}", p.position.y);
    assert!((p.velocity.y - (-1.0)).abs() < 1e-4);
    assert!((p.life - 0.8).abs() < 1e-5);
}

#[test]
fn test_gravity_pulls_burst_down() {
    let mut lifecycle = mount();
    lifecycle.dispatch(PointerEvent::Click(Vec2::new(400.0, 300.0)), Instant::now());

    for _ in 0..20 {
        rendered(lifecycle.tick());
    }

    let effect = lifecycle.effect().unwrap();
    let sum_y: f32 = effect.particles().iter().map(|p| p.position.y).sum();
    let mean_y = sum_y / effect.particle_count() as f32;
    // Symmetric burst, so the centroid only moves under gravity
    assert!(mean_y > 300.0);
}

// ==================== Spawning ====================

#[test]
fn test_fast_moves_are_rate_limited() {
    let mut lifecycle = mount();
    let start = Instant::now();

    for ms in 0..100u64 {
        let pos = Vec2::new(ms as f32 * 3.0, 200.0);
        lifecycle.dispatch(PointerEvent::Move(pos), start + Duration::from_millis(ms));
    }

    let effect = lifecycle.effect().unwrap();
    assert_eq!(effect.particle_count(), 4);
    assert_eq!(effect.cursor(), Vec2::new(297.0, 200.0));
}

#[test]
fn test_slow_moves_spawn_every_time() {
    let mut lifecycle = mount();
    let start = Instant::now();

    for i in 0..5u64 {
        lifecycle.dispatch(
            PointerEvent::Move(Vec2::new(i as f32, 0.0)),
            start + Duration::from_millis(i * 31),
        );
    }
    assert_eq!(lifecycle.effect().unwrap().particle_count(), 5);
}

#[test]
fn test_click_burst_is_twelve_radial_particles() {
    let mut lifecycle = mount();
    lifecycle.dispatch(PointerEvent::Click(Vec2::new(10.0, 20.0)), Instant::now());

    let effect = lifecycle.effect().unwrap();
    assert_eq!(effect.particle_count(), 12);
    let sum = effect
        .particles()
        .iter()
        .fold(Vec2::ZERO, |acc, p| acc + p.velocity);
    assert!(sum.length() < 1e-4, "burst velocities should cancel out");
}

// ==================== Decay and culling ====================

#[test]
fn test_particles_gone_after_lifetime() {
    let mut lifecycle = mount();
    lifecycle.dispatch(PointerEvent::Click(Vec2::new(640.0, 360.0)), Instant::now());

    let mut last = None;
    for _ in 0..51 {
        last = Some(rendered(lifecycle.tick()));
    }

    let stats = last.unwrap();
    assert_eq!(stats.culled, 12);
    assert_eq!(stats.active, 0);
    assert_eq!(lifecycle.effect().unwrap().particle_count(), 0);

    // Only the rings remain on screen
    let canvas = lifecycle.canvas().unwrap();
    assert_eq!(canvas.fills().count(), 0);
    assert_eq!(canvas.strokes().count(), 2);
}

#[test]
fn test_opacity_tracks_life() {
    let mut lifecycle = mount();
    lifecycle.dispatch(PointerEvent::Click(Vec2::ZERO), Instant::now());

    for _ in 0..25 {
        rendered(lifecycle.tick());
    }

    for command in lifecycle.canvas().unwrap().fills() {
        if let DrawCommand::Fill { radius, color, .. } = command {
            assert!((color.a - 0.5).abs() < 1e-6);
            assert!((radius - 4.0).abs() < 1e-4);
        }
    }
}

// ==================== Resize ====================

#[test]
fn test_resize_tracks_viewport() {
    let mut lifecycle = mount();
    lifecycle.dispatch(PointerEvent::Move(Vec2::new(5.0, 5.0)), Instant::now());
    let before = lifecycle.effect().unwrap().particles()[0].position;

    assert!(lifecycle.dispatch(
        PointerEvent::Resize {
            width: 1920,
            height: 1080
        },
        Instant::now()
    ));

    assert_eq!(lifecycle.canvas().unwrap().size(), (1920, 1080));
    assert_eq!(lifecycle.effect().unwrap().particles()[0].position, before);
}

// ==================== Lifecycle ====================

#[test]
fn test_no_canvas_means_no_effect() {
    let mut lifecycle: EffectLifecycle<RecordingCanvas> =
        EffectLifecycle::mount(None, PointerEffect::with_seed(EffectConfig::default(), 1));

    assert!(!lifecycle.dispatch(PointerEvent::Move(Vec2::ZERO), Instant::now()));
    assert!(!lifecycle.dispatch(PointerEvent::Click(Vec2::ZERO), Instant::now()));
    for _ in 0..3 {
        assert_eq!(lifecycle.tick(), FrameStatus::Idle);
    }
    assert_eq!(lifecycle.frames_rendered(), 0);
}

#[test]
fn test_unmount_stops_frames_and_spawns() {
    let mut lifecycle = mount();
    let now = Instant::now();
    lifecycle.dispatch(PointerEvent::Click(Vec2::new(1.0, 1.0)), now);
    rendered(lifecycle.tick());

    lifecycle.unmount();

    for kind in [PointerKind::Move, PointerKind::Click, PointerKind::Resize] {
        assert!(!lifecycle.is_listening(kind));
    }
    assert!(!lifecycle.has_pending_frame());

    // Events arriving after teardown are dropped
    assert!(!lifecycle.dispatch(PointerEvent::Click(Vec2::new(2.0, 2.0)), now));
    assert!(!lifecycle.dispatch(
        PointerEvent::Move(Vec2::new(3.0, 3.0)),
        now + Duration::from_secs(1)
    ));
    assert_eq!(lifecycle.tick(), FrameStatus::Idle);
    assert!(lifecycle.effect().is_none());
    assert_eq!(lifecycle.frames_rendered(), 1);
}

#[test]
fn test_frames_keep_running_without_input() {
    let mut lifecycle = mount();
    for _ in 0..10 {
        let stats = rendered(lifecycle.tick());
        assert_eq!(stats.active, 0);
    }
    assert_eq!(lifecycle.canvas().unwrap().present_count(), 10);
}
