// Host-side tests for the frame clock and the per-tick pipeline.

mod common;

use common::RecordingSurface;
use kaleido_core::{
    advance_frame, constants::MAX_FRAME_DT, FrameClock, InputSampler, RenderConfig, Renderer,
    SeededSource, ViewportGeometry,
};

fn test_renderer() -> Renderer {
    Renderer::new(
        RenderConfig::default(),
        ViewportGeometry::new(800.0, 600.0, 1.0),
        Box::new(SeededSource::from_seed(7)),
    )
}

#[test]
fn first_tick_yields_zero_dt() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.tick(10.0), 0.0);
    assert!((clock.tick(10.016) - 0.016).abs() < 1e-6);
}

#[test]
fn clock_clamps_large_gaps() {
    let mut clock = FrameClock::new();
    clock.tick(0.0);
    // Five seconds of tab suspension still reads as one bounded step
    assert_eq!(clock.tick(5.0), MAX_FRAME_DT);
    assert!((clock.tick(5.02) - 0.02).abs() < 1e-6);
}

#[test]
fn clock_never_goes_backwards() {
    let mut clock = FrameClock::new();
    clock.tick(10.0);
    assert_eq!(clock.tick(9.0), 0.0);
}

#[test]
fn motion_stays_bounded_across_wall_clock_gaps() {
    let mut clock = FrameClock::new();
    let mut renderer = test_renderer();
    let mut sampler = InputSampler::new(800.0, 600.0);
    let mut surface = RecordingSurface::new();

    // Ticks ten seconds apart; each must advance as if <= MAX_FRAME_DT
    for now in [0.0, 10.0, 20.0, 30.0] {
        let dt = clock.tick(now);
        advance_frame(&mut renderer, &mut sampler, &mut surface, dt);
    }

    // With no pointer input rotation advances at exactly the base speed
    let expected = 3.0 * MAX_FRAME_DT * 0.5;
    assert!((renderer.motion().rotation - expected).abs() < 1e-5);
}

#[test]
fn paused_tick_skips_update_draw_and_sampling() {
    let mut renderer = test_renderer();
    let mut sampler = InputSampler::new(800.0, 600.0);
    let mut surface = RecordingSurface::new();

    sampler.record_move(100.0, 0.0);
    renderer.set_paused(true);
    let before = renderer.motion();
    advance_frame(&mut renderer, &mut sampler, &mut surface, 0.016);

    assert!(surface.ops.is_empty());
    assert_eq!(renderer.motion(), before);
    // The sampler was not touched: its deltas are still undecayed
    assert!((sampler.sample_influence().rotational - 100.0 / 800.0).abs() < 1e-6);
}

#[test]
fn running_tick_samples_influence_exactly_once() {
    let mut renderer = test_renderer();
    let mut sampler = InputSampler::new(800.0, 600.0);
    let mut surface = RecordingSurface::new();

    sampler.record_move(100.0, 0.0);
    advance_frame(&mut renderer, &mut sampler, &mut surface, 0.016);

    // One decay step applied during the tick
    let next = sampler.sample_influence();
    assert!((next.rotational - 100.0 * 0.92 / 800.0).abs() < 1e-6);
}

#[test]
fn running_tick_draws_a_frame() {
    let mut renderer = test_renderer();
    let mut sampler = InputSampler::new(800.0, 600.0);
    let mut surface = RecordingSurface::new();

    advance_frame(&mut renderer, &mut sampler, &mut surface, 0.016);
    assert_eq!(surface.count("clear"), 1);
    assert!(surface.count("clip") > 0);
}
