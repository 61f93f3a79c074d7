// Host-side tests for pointer influence sampling and decay.

use kaleido_core::InputSampler;

#[test]
fn influence_decays_monotonically_without_sign_change() {
    let mut sampler = InputSampler::new(800.0, 600.0);
    sampler.record_move(100.0, 80.0);

    let mut previous = sampler.sample_influence();
    assert!(previous.rotational > 0.0);
    assert!(previous.offset > 0.0);

    for _ in 0..50 {
        let current = sampler.sample_influence();
        assert!(current.rotational > 0.0, "sign must not flip");
        assert!(current.offset > 0.0, "sign must not flip");
        assert!(current.rotational < previous.rotational);
        assert!(current.offset < previous.offset);
        previous = current;
    }
    // Geometric decay at 0.92 per sample settles well under 2 seconds of
    // frames
    assert!(previous.rotational < 0.002);
    assert!(previous.offset < 0.002);
}

#[test]
fn influence_is_clamped_to_unit_range() {
    let mut sampler = InputSampler::new(200.0, 200.0);
    sampler.record_move(10_000.0, -10_000.0);
    let influence = sampler.sample_influence();
    assert_eq!(influence.rotational, 1.0);
    assert_eq!(influence.offset, -1.0);
}

#[test]
fn normalization_floors_at_120_for_tiny_viewports() {
    let mut sampler = InputSampler::new(10.0, 10.0);
    sampler.record_move(60.0, 0.0);
    let influence = sampler.sample_influence();
    assert!((influence.rotational - 0.5).abs() < 1e-6);
}

#[test]
fn no_movement_means_no_influence() {
    let mut sampler = InputSampler::new(800.0, 600.0);
    let influence = sampler.sample_influence();
    assert_eq!(influence.rotational, 0.0);
    assert_eq!(influence.offset, 0.0);
}

#[test]
fn bounds_update_changes_normalization() {
    let mut sampler = InputSampler::new(800.0, 600.0);
    sampler.record_move(80.0, 0.0);
    assert!((sampler.sample_influence().rotational - 0.1).abs() < 1e-6);

    sampler.set_bounds(400.0, 300.0);
    sampler.record_move(160.0, 0.0);
    assert!((sampler.sample_influence().rotational - 0.2).abs() < 1e-6);
}

#[test]
fn pressed_flag_follows_events() {
    let mut sampler = InputSampler::new(800.0, 600.0);
    assert!(!sampler.pressed());
    sampler.set_pressed(true);
    assert!(sampler.pressed());
    sampler.set_pressed(false);
    assert!(!sampler.pressed());
}

#[test]
fn record_move_tracks_absolute_position() {
    let mut sampler = InputSampler::new(800.0, 600.0);
    sampler.record_move(10.0, 20.0);
    sampler.record_move(15.0, 18.0);
    assert_eq!(sampler.position(), (15.0, 18.0));
}
