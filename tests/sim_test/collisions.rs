use super::*;
use driftsim::{
    CollectibleId, CollectibleKind, CollectibleRecord, CollectibleSet, CollisionConfig,
    CollisionResolver, RingLayout, glam::Vec3A, portfolio,
};

fn record_at(id: u32, x: f32, z: f32) -> CollectibleRecord {
    CollectibleRecord::new(
        CollectibleId(id),
        Vec3A::new(x, 0.0, z),
        CollectibleKind::Project,
        format!("Item {id}"),
        "Test",
        10 + id,
    )
}

fn car_at(position: Vec3A, velocity: Vec3A) -> VehicleState {
    VehicleState {
        position,
        velocity,
        ..VehicleState::DEFAULT
    }
}

#[test]
fn test_boundary_pushes_back_inside() {
    let resolver = CollisionResolver::new(CollisionConfig::DEFAULT);
    let radius = CollisionConfig::DEFAULT.boundary_radius;

    for i in 0..16 {
        let angle = i as f32 * std::f32::consts::TAU / 16.0;
        let normal = Vec3A::new(angle.cos(), 0.0, angle.sin());
        let tangent = Vec3A::new(-normal.z, 0.0, normal.x);

        let mut car = car_at(normal * (radius + 0.5), normal * 0.8 + tangent * 0.3);
        let result = resolver.check(&mut car, &mut []);

        assert!(result.hit_boundary);
        assert!(result.picked_up.is_none());
        assert!(car.distance_from_origin() <= radius);
        assert!(car.velocity.dot(normal) <= 0.0);
        assert_eq!(car.speed(), car.velocity.length());
    }
}

#[test]
fn test_boundary_response_values() {
    let resolver = CollisionResolver::new(CollisionConfig::DEFAULT);

    let mut car = car_at(Vec3A::new(85.5, 0.0, 0.0), Vec3A::new(0.8, 0.0, 0.2));
    let result = resolver.check(&mut car, &mut []);

    assert!(result.hit_boundary);
    // (0.8 - 0.8 * 1.5, 0.2) * 0.3
    assert!((car.velocity - Vec3A::new(-0.12, 0.0, 0.06)).length() < EPS);
    assert!((car.position - Vec3A::new(85.0 * 0.98, 0.0, 0.0)).length() < 1e-4);
}

#[test]
fn test_boundary_only_scales_inward_motion() {
    let resolver = CollisionResolver::new(CollisionConfig::DEFAULT);

    let mut car = car_at(Vec3A::new(0.0, 0.0, -86.0), Vec3A::new(0.5, 0.0, 0.5));
    assert!(resolver.check(&mut car, &mut []).hit_boundary);

    assert!((car.velocity - Vec3A::new(0.15, 0.0, 0.15)).length() < EPS);
    assert!(car.distance_from_origin() < 85.0);
}

#[test]
fn test_out_of_range_safe_radius_stays_on_track() {
    let config = CollisionConfig {
        safe_radius_factor: 1.5,
        ..CollisionConfig::DEFAULT
    };
    assert!(config.validate().is_err());

    let resolver = CollisionResolver::new(config);
    let mut car = car_at(Vec3A::new(0.0, 0.0, 90.0), Vec3A::new(0.0, 0.0, 0.5));
    assert!(resolver.check(&mut car, &mut []).hit_boundary);
    assert!(car.distance_from_origin() <= config.boundary_radius);
}

#[test]
fn test_boundary_leaves_everything_else_alone() {
    let resolver = CollisionResolver::new(CollisionConfig::DEFAULT);

    let mut car = VehicleState {
        position: Vec3A::new(70.0, 0.0, 60.0),
        velocity: Vec3A::new(0.6, 0.0, 0.4),
        heading: 1.0,
        yaw_rate: 0.02,
        lateral_speed: 0.3,
        drift_angle: 0.4,
        is_drifting: true,
        drift_score: 12.5,
    };
    let before = car;
    assert!(resolver.check(&mut car, &mut []).hit_boundary);

    assert_eq!(car.heading, before.heading);
    assert_eq!(car.yaw_rate, before.yaw_rate);
    assert_eq!(car.lateral_speed, before.lateral_speed);
    assert_eq!(car.drift_angle, before.drift_angle);
    assert_eq!(car.is_drifting, before.is_drifting);
    assert_eq!(car.drift_score, before.drift_score);
}

#[test]
fn test_inside_track_is_untouched() {
    let resolver = CollisionResolver::new(CollisionConfig::DEFAULT);

    let mut car = car_at(Vec3A::new(60.0, 0.0, -40.0), Vec3A::new(1.0, 0.0, 0.0));
    let before = car;
    let result = resolver.check(&mut car, &mut []);

    assert!(!result.hit_boundary);
    assert_eq!(car, before);
}

#[test]
fn test_pickup_happens_once() {
    let resolver = CollisionResolver::new(CollisionConfig::DEFAULT);
    let mut records = vec![record_at(0, 5.0, 5.0)];
    let mut car = car_at(Vec3A::new(5.0, 0.0, 5.0), Vec3A::ZERO);

    let first = resolver.check(&mut car, &mut records);
    let picked = first.picked_up.expect("collectible under the car");
    assert_eq!(picked.id, CollectibleId(0));
    assert!(picked.is_collected());
    assert!(records[0].is_collected());

    let second = resolver.check(&mut car, &mut records);
    assert!(second.picked_up.is_none());
    assert!(records[0].is_collected());
}

#[test]
fn test_one_pickup_per_check() {
    let resolver = CollisionResolver::new(CollisionConfig::DEFAULT);
    let mut records = vec![record_at(0, 1.0, 0.0), record_at(1, -1.0, 0.0)];
    let mut car = car_at(Vec3A::ZERO, Vec3A::ZERO);

    let first = resolver.check(&mut car, &mut records);
    assert_eq!(first.picked_up.map(|r| r.id), Some(CollectibleId(0)));
    assert!(!records[1].is_collected());

    let second = resolver.check(&mut car, &mut records);
    assert_eq!(second.picked_up.map(|r| r.id), Some(CollectibleId(1)));

    assert!(resolver.check(&mut car, &mut records).picked_up.is_none());
}

#[test]
fn test_pickup_radius_is_exclusive() {
    let resolver = CollisionResolver::new(CollisionConfig::DEFAULT);
    let mut car = car_at(Vec3A::ZERO, Vec3A::ZERO);

    let mut edge = vec![record_at(0, 3.0, 0.0)];
    assert!(resolver.check(&mut car, &mut edge).picked_up.is_none());

    let mut inside = vec![record_at(0, 0.0, 2.99)];
    assert!(resolver.check(&mut car, &mut inside).picked_up.is_some());
}

#[test]
fn test_pickup_and_boundary_in_one_check() {
    let resolver = CollisionResolver::new(CollisionConfig::DEFAULT);
    let mut records = vec![record_at(0, 86.0, 0.0)];
    let mut car = car_at(Vec3A::new(86.0, 0.0, 0.0), Vec3A::new(1.0, 0.0, 0.0));

    let result = resolver.check(&mut car, &mut records);
    assert!(result.picked_up.is_some());
    assert!(result.hit_boundary);
}

#[test]
fn test_runtime_config_change() {
    let mut resolver = CollisionResolver::new(CollisionConfig::DEFAULT);
    resolver.set_config(CollisionConfig {
        boundary_radius: 40.0,
        ..CollisionConfig::DEFAULT
    });

    let mut car = car_at(Vec3A::new(0.0, 0.0, 45.0), Vec3A::ZERO);
    assert!(resolver.check(&mut car, &mut []).hit_boundary);
    assert!(car.distance_from_origin() <= 40.0);
}

#[test]
fn test_collectible_set_bookkeeping() {
    let mut set = CollectibleSet::from_seeds(&portfolio::demo_seeds(), &RingLayout::DEFAULT);
    assert_eq!(set.total(), 13);
    assert_eq!(set.remaining(), 13);
    assert!(!set.is_complete());

    let (closest, dist) = set.closest_uncollected(Vec3A::new(15.0, 0.0, 0.0)).unwrap();
    assert_eq!(closest.kind, CollectibleKind::Skill);
    assert!(dist < EPS);
    assert_eq!(set.get(closest.id).map(|r| r.label.as_str()), Some("JavaScript"));

    for record in set.records() {
        assert_eq!(record.position.y, 0.0);
    }

    assert!(set.get(CollectibleId(99)).is_none());
    set.reset();
    assert_eq!(set.collected_count(), 0);
}
