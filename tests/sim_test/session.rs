use super::*;
use driftsim::{
    Action, CameraMode, CollectibleKind, CollectibleSeed, ConfigError, RingLayout, Session,
    SessionConfig, SimEvent, glam::Vec3A,
};

/// Two collectibles within pickup range of the spawn point
fn close_pickups_config() -> SessionConfig {
    SessionConfig {
        seeds: vec![
            CollectibleSeed::new(CollectibleKind::Skill, "Rust", "95%", 95, 0xdea584),
            CollectibleSeed::new(CollectibleKind::Project, "Drift", "Sim", 120, 0xffffff),
        ],
        layout: RingLayout {
            skill_radius: 1.0,
            project_radius: 2.0,
            ..RingLayout::DEFAULT
        },
        rng_seed: Some(7),
        ..SessionConfig::default()
    }
}

fn empty_track_config() -> SessionConfig {
    SessionConfig {
        seeds: Vec::new(),
        rng_seed: Some(1),
        ..SessionConfig::default()
    }
}

fn drift_controls() -> ControlState {
    ControlsBuilder::new()
        .with_throttle(1.0)
        .with_steering(1.0)
        .with_handbrake(true)
        .build()
}

#[test]
fn test_pickups_are_scored_in_order() {
    init_for_test();
    let mut session = Session::new_with_config(close_pickups_config()).unwrap();

    let first = session.step_with_controls(ControlState::FULL_THROTTLE);
    assert!(matches!(&first[..], [SimEvent::Pickup(r)] if r.label == "Rust"));
    assert_eq!(session.stats().score, 95);
    assert_eq!(session.stats().collected(CollectibleKind::Skill), 1);
    assert!(!session.stats().is_complete());

    let second = session.step_with_controls(ControlState::FULL_THROTTLE);
    assert!(matches!(&second[0], SimEvent::Pickup(r) if r.label == "Drift"));
    assert!(second.contains(&SimEvent::AllCollected));
    assert_eq!(session.stats().score, 215);
    assert!(session.stats().is_complete());
    assert!(session.collectibles().is_complete());

    // Nothing left to pick up
    let third = session.step_with_controls(ControlState::FULL_THROTTLE);
    assert!(!third.iter().any(|e| matches!(e, SimEvent::Pickup(_))));
    assert!(!session.particles().is_empty());
}

#[test]
fn test_reset_restores_everything() {
    init_for_test();
    let mut session = Session::new_with_config(close_pickups_config()).unwrap();
    session.set_key(Action::Accelerate, true);

    for _ in 0..40 {
        session.step();
    }
    for _ in 0..30 {
        session.step_with_controls(drift_controls());
    }
    assert!(session.vehicle().drift_score() > 0.0);
    assert_eq!(session.collectibles().collected_count(), 2);

    session.reset();

    let state = session.vehicle().get_state();
    assert_eq!(state.position, Vec3A::ZERO);
    assert_eq!(state.heading, 0.0);
    assert_eq!(state.velocity, Vec3A::ZERO);
    assert_eq!(state.drift_score, 0.0);
    assert!(!state.is_drifting);
    assert!(session.collectibles().iter().all(|r| !r.is_collected()));
    assert_eq!(session.stats().score, 0);
    assert_eq!(session.stats().total_collectibles, 2);
    assert_eq!(session.tick_count(), 0);
    assert!(session.particles().is_empty());
    assert_eq!(session.input().current().throttle, 0.0);

    // Keys mirror the keyboard, so a held key stays held
    assert!(session.input().raw_keys().accelerate);

    // And the collectibles can be picked up again
    let events = session.step();
    assert!(events.iter().any(|e| matches!(e, SimEvent::Pickup(_))));
}

#[test]
fn test_boundary_holds_under_full_throttle() {
    init_for_test();
    let mut session = Session::new_with_config(empty_track_config()).unwrap();
    let radius = session.config().collision.boundary_radius;

    let mut hits = 0;
    for _ in 0..400 {
        let events = session.step_with_controls(ControlState::FULL_THROTTLE);
        hits += events
            .iter()
            .filter(|e| matches!(e, SimEvent::BoundaryHit { .. }))
            .count();

        let state = session.vehicle().get_state();
        assert!(state.distance_from_origin() <= radius);
        assert_eq!(state.speed(), state.velocity.length());
    }
    assert!(hits > 0);
}

#[test]
fn test_drift_events() {
    init_for_test();
    let mut session = Session::new_with_config(empty_track_config()).unwrap();

    for _ in 0..40 {
        session.step_with_controls(ControlState::FULL_THROTTLE);
    }

    let started = session.step_with_controls(drift_controls());
    assert!(started.contains(&SimEvent::DriftStarted));

    for _ in 0..20 {
        session.step_with_controls(drift_controls());
    }
    assert!(session.stats().drift_score > 0);

    let ended = session.step_with_controls(ControlState::FULL_THROTTLE);
    let score = session.vehicle().drift_score_display();
    assert!(ended.contains(&SimEvent::DriftEnded { score }));
    assert_eq!(session.stats().drift_score, score);
}

#[test]
fn test_reset_mid_drift_ends_the_drift() {
    init_for_test();
    let mut session = Session::new_with_config(empty_track_config()).unwrap();

    for _ in 0..40 {
        session.step_with_controls(ControlState::FULL_THROTTLE);
    }
    assert!(session.reset().is_empty());

    for _ in 0..40 {
        session.step_with_controls(ControlState::FULL_THROTTLE);
    }
    let started = session.step_with_controls(drift_controls());
    assert!(started.contains(&SimEvent::DriftStarted));
    for _ in 0..10 {
        session.step_with_controls(drift_controls());
    }
    assert!(session.vehicle().is_drifting());
    let score = session.vehicle().drift_score_display();

    assert_eq!(session.reset(), vec![SimEvent::DriftEnded { score }]);
    assert!(!session.vehicle().is_drifting());
    assert!(session.reset().is_empty());
}

#[test]
fn test_advance_runs_fixed_ticks() {
    init_for_test();
    let mut session = Session::new_with_config(empty_track_config()).unwrap();
    session.set_key(Action::Accelerate, true);

    session.advance(0.04);
    assert_eq!(session.tick_count(), 2);

    session.advance(0.0);
    assert_eq!(session.tick_count(), 2);

    // A long stall is capped instead of spiralling
    session.advance(2.0);
    assert_eq!(session.tick_count(), 7);
}

#[test]
fn test_interpolation_blends_last_tick() {
    init_for_test();
    let mut session = Session::new_with_config(empty_track_config()).unwrap();
    session.set_key(Action::Accelerate, true);

    for _ in 0..30 {
        session.step();
    }
    let before = session.vehicle().snapshot();

    // One tick plus a fifth of the next
    session.advance(1.2 / 60.0);
    let after = session.vehicle().snapshot();
    let (blended, camera) = session.interpolated();

    let expected = before.position.lerp(after.position, 0.2);
    assert!((blended.position - expected).length() < 1e-3);
    assert!(blended.position.z < before.position.z);
    assert!(blended.position.z > after.position.z);
    assert!(camera.position.is_finite());
}

#[test]
fn test_same_seed_same_run() {
    let run = || {
        let mut session = Session::new_with_config(SessionConfig {
            rng_seed: Some(42),
            ..SessionConfig::default()
        })
        .unwrap();

        for _ in 0..90 {
            session.step_with_controls(ControlState::FULL_THROTTLE);
        }
        for _ in 0..90 {
            session.step_with_controls(drift_controls());
        }
        (
            session.vehicle().snapshot(),
            *session.camera().state(),
            session.particles().to_vec(),
        )
    };

    let (vehicle_a, camera_a, particles_a) = run();
    let (vehicle_b, camera_b, particles_b) = run();
    assert_eq!(vehicle_a, vehicle_b);
    assert_eq!(camera_a, camera_b);
    assert_eq!(particles_a, particles_b);
}

#[test]
fn test_key_handle_from_another_thread() {
    let mut session = Session::new_with_config(empty_track_config()).unwrap();
    let handle = session.key_handle();

    std::thread::spawn(move || handle.set_key(Action::Accelerate, true))
        .join()
        .unwrap();

    for _ in 0..10 {
        session.step();
    }
    assert!(session.vehicle().speed() > 0.0);
    assert!(session.vehicle().get_state().position.z < 0.0);
}

#[test]
fn test_camera_mode_switch() {
    let mut session = Session::new_with_config(empty_track_config()).unwrap();
    session.set_camera_mode(CameraMode::Far);
    assert_eq!(session.camera().mode(), CameraMode::Far);

    session.reset();
    let position = session.camera().state().position;
    assert!((position - Vec3A::new(0.0, 8.0, 16.0)).length() < EPS);
}

#[test]
fn test_bad_config_is_rejected() {
    let mut config = SessionConfig::default();
    config.vehicle.friction = 1.5;
    assert!(matches!(
        Session::new_with_config(config),
        Err(ConfigError::NotAFactor { field: "vehicle.friction", .. })
    ));

    let mut config = SessionConfig::default();
    config.stepper.tick_rate = 1000;
    assert!(matches!(
        Session::new_with_config(config),
        Err(ConfigError::TickRate { value: 1000, .. })
    ));

    assert!(SessionConfig::default().validate().is_ok());
    assert!(empty_track_config().validate().is_ok());
}

#[test]
fn test_empty_track_is_never_complete() {
    let mut session = Session::new_with_config(empty_track_config()).unwrap();
    for _ in 0..10 {
        let events = session.step_with_controls(ControlState::FULL_THROTTLE);
        assert!(!events.contains(&SimEvent::AllCollected));
    }
    assert!(!session.stats().is_complete());
    assert_eq!(session.collectibles().total(), 0);
}
