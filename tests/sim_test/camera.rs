use super::*;
use driftsim::{CameraConfig, CameraMode, CameraState, ChaseCamera, glam::Vec3A};

fn settle(camera: &mut ChaseCamera, vehicle: &VehicleState) -> CameraState {
    for _ in 0..600 {
        camera.update(vehicle);
    }
    *camera.state()
}

#[test]
fn test_camera_settles_behind_the_car() {
    let mut camera = ChaseCamera::new(CameraConfig::DEFAULT, 1);
    let car = VehicleState {
        position: Vec3A::new(10.0, 0.0, -5.0),
        heading: std::f32::consts::FRAC_PI_2,
        ..VehicleState::DEFAULT
    };

    // Facing -X, so behind is +X
    let state = settle(&mut camera, &car);
    let expected = car.position + Vec3A::new(12.0, 6.0, 0.0);
    assert!((state.position - expected).length() < 1e-3);
    assert!((state.look_target - (car.position + Vec3A::Y * 2.0)).length() < EPS);
}

#[test]
fn test_camera_pulls_back_with_speed() {
    let mut camera = ChaseCamera::new(CameraConfig::DEFAULT, 1);
    let car = VehicleState {
        velocity: Vec3A::new(0.0, 0.0, -0.8),
        ..VehicleState::DEFAULT
    };

    let state = settle(&mut camera, &car);
    assert!((state.position - Vec3A::new(0.0, 10.0, 20.0)).length() < 1e-3);

    // Leads the car along its velocity
    let expected_target = Vec3A::new(0.0, 2.0, -0.8 * 3.0);
    assert!((state.look_target - expected_target).length() < EPS);
}

#[test]
fn test_camera_smooths_instead_of_snapping() {
    let mut camera = ChaseCamera::new(CameraConfig::DEFAULT, 1);
    camera.snap_to(&VehicleState::DEFAULT);
    let start = camera.state().position;

    let moved = VehicleState {
        position: Vec3A::new(0.0, 0.0, -10.0),
        ..VehicleState::DEFAULT
    };
    let ideal = moved.position + Vec3A::new(0.0, 6.0, 12.0);
    let state = camera.update(&moved);

    let expected = start + (ideal - start) * 0.08;
    assert!((state.position - expected).length() < 1e-4);
}

#[test]
fn test_drift_shake_is_bounded_and_seeded() {
    let drifting = VehicleState {
        velocity: Vec3A::new(0.3, 0.0, -0.6),
        drift_angle: 1.2,
        is_drifting: true,
        ..VehicleState::DEFAULT
    };
    let gripping = VehicleState {
        is_drifting: false,
        ..drifting
    };

    let mut calm = ChaseCamera::new(CameraConfig::DEFAULT, 5);
    let mut shaky = ChaseCamera::new(CameraConfig::DEFAULT, 5);
    let mut twin = ChaseCamera::new(CameraConfig::DEFAULT, 5);

    let lerp = CameraConfig::DEFAULT.lerp_factor(1.0);
    let mut shook = false;
    for _ in 0..50 {
        let calm_pos = calm.state().position;
        let shaky_pos = shaky.state().position;

        let a = calm.update(&gripping).position - calm_pos;
        let b = shaky.update(&drifting).position - shaky_pos;
        let twin_state = twin.update(&drifting);

        assert_eq!(twin_state, *shaky.state());

        // Each tick moves a fraction `lerp` of the way, shake is at most half the amplitude
        let diff = (b - a) + (shaky_pos - calm_pos) * lerp;
        assert!(diff.x.abs() <= lerp * 0.25 + 1e-4);
        assert!(diff.y.abs() <= lerp * 0.125 + 1e-4);
        assert!(diff.z.abs() <= lerp * 0.075 + 1e-4);
        shook |= diff.length() > 0.0;
    }
    assert!(shook);
}

#[test]
fn test_camera_presets() {
    let car = VehicleState::DEFAULT;

    for (mode, distance, height) in [
        (CameraMode::Normal, 12.0, 6.0),
        (CameraMode::Close, 8.0, 4.0),
        (CameraMode::Far, 16.0, 8.0),
        (CameraMode::Cinematic, 20.0, 10.0),
    ] {
        let mut camera = ChaseCamera::new(CameraConfig::DEFAULT, 1);
        camera.set_mode(mode);
        assert_eq!(camera.mode(), mode);

        let state = camera.snap_to(&car);
        assert!((state.position - Vec3A::new(0.0, height, distance)).length() < EPS);
    }
}
