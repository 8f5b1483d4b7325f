// Host-side tests for follower smoothing.

use atelier_cursor::core::Follower;
use glam::Vec2;

#[test]
fn jump_scenario_with_k_point_one() {
    let mut f = Follower::new(Vec2::ZERO, 0.1);
    let target = Vec2::new(100.0, 100.0);

    let p1 = f.step(target);
    assert!((p1.x - 10.0).abs() < 1e-4 && (p1.y - 10.0).abs() < 1e-4);
    let p2 = f.step(target);
    assert!((p2.x - 19.0).abs() < 1e-4 && (p2.y - 19.0).abs() < 1e-4);

    for _ in 0..3 {
        f.step(target);
    }
    // 100 * (1 - 0.9^5)
    assert!((f.position.x - 40.951).abs() < 1e-3);
    assert!(f.position.x < 100.0 && f.position.y < 100.0);
}

// Property: a stationary target is approached monotonically and never passed.
#[test]
fn converges_monotonically_without_overshoot() {
    let easings = [0.01_f32, 0.05, 0.1, 0.15, 0.3, 0.5, 0.9, 0.999, 1.0];
    let starts = [
        Vec2::ZERO,
        Vec2::new(-500.0, 1200.0),
        Vec2::new(1919.5, 0.25),
    ];
    let targets = [
        Vec2::new(100.0, 100.0),
        Vec2::new(-3.3, 7.7),
        Vec2::new(1919.0, 1079.0),
    ];
    for &k in &easings {
        for &start in &starts {
            for &target in &targets {
                let mut f = Follower::new(start, k);
                let mut prev_gap = (target - start).abs();
                for tick in 0..300 {
                    let before = f.position;
                    let after = f.step(target);
                    let gap = (target - after).abs();
                    assert!(
                        gap.x <= prev_gap.x && gap.y <= prev_gap.y,
                        "gap grew at tick {tick} for k={k}: {prev_gap:?} -> {gap:?}"
                    );
                    // each axis stays on the start side of the target
                    for (b, a, t) in [(before.x, after.x, target.x), (before.y, after.y, target.y)] {
                        assert!(
                            (t - a) * (t - b) >= 0.0,
                            "overshoot at tick {tick} for k={k}: {b} -> {a} past {t}"
                        );
                    }
                    prev_gap = gap;
                }
            }
        }
    }
}

#[test]
fn lower_easing_lags_more() {
    let target = Vec2::new(100.0, 0.0);
    let mut slow = Follower::new(Vec2::ZERO, 0.1);
    let mut fast = Follower::new(Vec2::ZERO, 0.3);
    for _ in 0..4 {
        slow.step(target);
        fast.step(target);
    }
    assert!(slow.position.x < fast.position.x);
}
