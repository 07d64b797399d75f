use flagrig::integrator::{free_flight_force, step};
use flagrig::{recompute_bounds, ContainerRect, Key, NoOpRigObserver, RigConfig, SimulationState, Vec2};

fn measured(config: &RigConfig<f64>, width: f64, height: f64) -> SimulationState<f64> {
    let mut state = SimulationState::new(config.rest_length);
    recompute_bounds(&mut state, ContainerRect::sized(width, height), config, &mut NoOpRigObserver);
    state
}

#[test]
fn hangs_below_anchor_at_rest_length() {
    let config = RigConfig::new();
    let state = measured(&config, 500.0 / 3.0, 200.0);
    assert!((state.anchor.x - 100.0).abs() < 1e-9);
    assert_eq!(state.anchor.y, 10.0);
    assert!((state.pos.x - 100.0).abs() < 1e-9);
    assert_eq!(state.pos.y, 62.0);
}

#[test]
fn free_flight_stays_inside_bounds() {
    let config = RigConfig::new();
    let mut state = measured(&config, 320.0, 180.0);
    let keys = [Key::ArrowLeft, Key::Launch, Key::ArrowRight, Key::ArrowDown, Key::ArrowUp];

    for i in 0..600 {
        if i % 20 == 0 {
            let impulse = keys[(i / 20) % keys.len()].impulse(&config);
            state.vel = state.vel + impulse.scale(8.0);
        }
        step(&mut state, 0.016, i as f64 * 16.0, &config, &mut NoOpRigObserver);

        assert!(state.pos.x >= 28.0 && state.pos.x <= 320.0 - 28.0, "x escaped: {}", state.pos.x);
        assert!(
            state.pos.y >= state.anchor.y + 16.0 && state.pos.y <= 180.0 - 18.0,
            "y escaped: {}",
            state.pos.y
        );
    }
}

#[test]
fn huge_dt_behaves_like_max_dt() {
    let config = RigConfig::new();
    let mut state = measured(&config, 400.0, 300.0);
    state.vel = Vec2::new(300.0, -200.0);
    let mut clamped = state.clone();

    step(&mut state, 10.0, 1000.0, &config, &mut NoOpRigObserver);
    step(&mut clamped, 0.033, 1000.0, &config, &mut NoOpRigObserver);
    assert_eq!(state, clamped);

    let moved = (state.pos - Vec2::new(240.0, 62.0)).length();
    assert!(moved < 20.0, "moved {} in one frame", moved);
}

#[test]
fn zero_dt_behaves_like_min_dt() {
    let config = RigConfig::new();
    let mut state = measured(&config, 400.0, 300.0);
    state.vel = Vec2::new(300.0, -200.0);
    let mut clamped = state.clone();

    step(&mut state, 0.0, 1000.0, &config, &mut NoOpRigObserver);
    step(&mut clamped, 0.001, 1000.0, &config, &mut NoOpRigObserver);
    assert_eq!(state, clamped);
    assert!(state.pos != Vec2::new(240.0, 62.0));
}

#[test]
fn reduced_motion_removes_only_wind() {
    let base: RigConfig<f64> = RigConfig::new()
        .with_spring_constant(0.0)
        .with_damping(0.0)
        .with_gravity(0.0);
    let windy = base.clone();
    let calm = base.with_reduced_motion(true);

    let mut windy_state = measured(&windy, 800.0, 600.0);
    let mut calm_state = measured(&calm, 800.0, 600.0);
    let start = windy_state.pos;
    assert_eq!(start, calm_state.pos);

    for i in 0..30 {
        let t = 1000.0 + i as f64 * 16.0;
        step(&mut windy_state, 0.016, t, &windy, &mut NoOpRigObserver);
        step(&mut calm_state, 0.016, t, &calm, &mut NoOpRigObserver);
    }

    assert!(windy_state.pos.x - start.x > 1.0, "wind should push the flag right");
    assert_eq!(windy_state.pos.y, start.y);
    assert_eq!(calm_state.pos, start);
    assert_eq!(calm_state.vel, Vec2::zero());
}

#[test]
fn right_wall_bounce_without_forces() {
    let config: RigConfig<f64> = RigConfig::new().without_forces();
    let mut state = measured(&config, 400.0, 300.0);
    state.pos.x = 400.0 - 28.0;
    state.vel = Vec2::new(200.0, 0.0);

    step(&mut state, 0.016, 0.0, &config, &mut NoOpRigObserver);

    assert_eq!(state.pos.x, 372.0);
    assert!(state.vel.x < 0.0);
    assert!((state.vel.x + 0.34 * 200.0).abs() < 1e-9);
}

#[test]
fn right_wall_bounce_with_forces() {
    let config: RigConfig<f64> = RigConfig::new().with_reduced_motion(true);
    let mut state = measured(&config, 400.0, 300.0);
    state.pos.x = 400.0 - 28.0;
    state.vel = Vec2::new(2000.0, 0.0);

    let force = free_flight_force(&state, 0.0, &config);
    let pre_bounce = state.vel.x + force.x * 0.016;
    assert!(pre_bounce > 0.0);

    step(&mut state, 0.016, 0.0, &config, &mut NoOpRigObserver);

    assert_eq!(state.pos.x, 372.0);
    assert!((state.vel.x + 0.34 * pre_bounce).abs() < 1e-9);
}

#[test]
fn arrow_right_impulse_moves_by_v_dt() {
    let config: RigConfig<f64> = RigConfig::new().without_forces();
    let mut state = measured(&config, 800.0, 600.0);
    let x0 = state.pos.x;

    state.vel = state.vel + Key::ArrowRight.impulse(&config);
    step(&mut state, 0.016, 0.0, &config, &mut NoOpRigObserver);

    assert!((state.pos.x - x0 - 1.76).abs() < 1e-9);
    assert_eq!(state.pos.y, 62.0);
}

#[test]
fn drag_follows_clamped_pointer() {
    let config: RigConfig<f64> = RigConfig::new();
    let mut state = measured(&config, 400.0, 300.0);
    state.dragging = true;
    state.pointer = Vec2::new(-50.0, 0.0);
    state.vel = Vec2::new(90.0, 30.0);

    step(&mut state, 0.016, 0.0, &config, &mut NoOpRigObserver);

    // Drag clearance is 18 below the anchor, not the free-flight 16.
    assert_eq!(state.pos, Vec2::new(28.0, 28.0));
    assert_eq!(state.vel, Vec2::new(90.0, 30.0));
}

#[test]
fn settles_under_gravity_and_spring() {
    let config: RigConfig<f64> = RigConfig::new().with_reduced_motion(true);
    let mut state = measured(&config, 400.0, 400.0);

    for i in 0..2000 {
        step(&mut state, 0.016, i as f64 * 16.0, &config, &mut NoOpRigObserver);
    }

    // Equilibrium stretch: k * e = g  ->  e = 680 / 20 = 34
    assert!((state.pos.x - state.anchor.x).abs() < 1e-3);
    assert!((state.pos.y - (10.0 + 52.0 + 34.0)).abs() < 1e-3);
    assert!(state.vel.length() < 1e-3);
}
