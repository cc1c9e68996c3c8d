use ragdoll::{Anchor, NoOpStepObserver, Part, Ragdoll, RagdollConfig, Stage, Vec2};

fn runner_crash(config: RagdollConfig<f32>, seed: u64) -> Ragdoll<f32> {
    Ragdoll::new(
        Anchor::new(100.0, 100.0, 40.0, 60.0),
        Stage::new(400.0, 800.0),
        config,
        seed,
    )
    .unwrap()
}

fn run_crash_sequence(mut d: Ragdoll<f32>) {
    d.apply_impulse(Vec2::new(-4.0, -10.0)).unwrap();
    for tick in 0..300 {
        d.step(&mut NoOpStepObserver);
        for part in Part::ALL {
            let bottom = d.particle(part).bottom();
            assert!(bottom <= 401.0, "tick {} {:?}: bottom {}", tick, part, bottom);
        }
    }
    assert!(d.is_settled(), "still moving after 300 ticks: {:?}", d.particles());
}

#[test]
fn runner_crash_settles_within_crash_window() {
    for seed in 0..6 {
        run_crash_sequence(runner_crash(RagdollConfig::new(), seed));
    }
}

#[test]
fn runner_crash_settles_with_head_off() {
    for seed in 0..4 {
        run_crash_sequence(runner_crash(RagdollConfig::new().with_detach_probability(1.0), seed));
    }
}

#[test]
fn runner_crash_settles_with_head_on() {
    for seed in 0..4 {
        run_crash_sequence(runner_crash(RagdollConfig::new().with_detach_probability(0.0), seed));
    }
}

#[test]
fn different_seeds_rest_differently() {
    let rest = |seed| {
        let mut d = runner_crash(RagdollConfig::new(), seed);
        d.apply_impulse(Vec2::new(-4.0, -10.0)).unwrap();
        for _ in 0..300 {
            d.step(&mut NoOpStepObserver);
        }
        d.particle(Part::Head).pos
    };
    let a = rest(1);
    let b = rest(2);
    assert_ne!(a, b, "jitter had no effect: both heads at {:?}", a);
}
