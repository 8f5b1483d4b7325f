// Host-side tests for particle lifecycle and spawn policies.

use atelier_cursor::core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use std::f32::consts::TAU;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

fn trail_spawn(ttl: Duration) -> Spawn {
    Spawn {
        kind: ParticleKind::Trail { intensity: 1.0 },
        origin: Vec2::ZERO,
        size: 3.0,
        ttl,
        initial_opacity: 0.6,
        scale_decay: 0.5,
    }
}

// Property: every particle is reported removed exactly once, on the first
// tick where its age reaches the ttl, and its age grows every tick before that.
#[test]
fn every_particle_removed_exactly_once_at_expiry() {
    let mut field = ParticleField::new(1024);
    let mut spawned = Vec::new();
    let mut removed: HashSet<ParticleId> = HashSet::new();
    let ttls = [16_u64, 50, 100, 333, 800, 1000];

    for tick in 0..400u32 {
        if tick < 120 {
            let ttl = Duration::from_millis(ttls[tick as usize % ttls.len()]);
            let id = field.spawn(trail_spawn(ttl)).unwrap();
            spawned.push(id);
        }
        let ages_before: Vec<(ParticleId, Duration)> =
            field.iter().map(|p| (p.id, p.age)).collect();

        let expired = field.tick(FRAME);

        for id in &expired {
            assert!(removed.insert(*id), "particle {id} removed twice");
        }
        for (id, age) in ages_before {
            match field.get(id) {
                Some(p) => {
                    assert!(p.age > age, "age of {id} did not grow");
                    assert!(p.age < p.ttl, "{id} outlived its ttl");
                }
                None => assert!(expired.contains(&id), "{id} vanished unreported"),
            }
        }
    }
    assert!(field.is_empty());
    assert_eq!(removed.len(), spawned.len());
}

#[test]
fn removal_happens_on_first_tick_at_or_past_ttl() {
    let mut field = ParticleField::new(4);
    let id = field.spawn(trail_spawn(Duration::from_millis(40))).unwrap();
    assert!(field.tick(FRAME).is_empty()); // 16
    assert!(field.tick(FRAME).is_empty()); // 32
    assert_eq!(field.tick(FRAME).as_slice(), &[id]); // 48
}

#[test]
fn burst_angles_are_evenly_spaced_and_distinct() {
    for n in [1usize, 2, 3, 8, 12, 16, 24] {
        let angles: Vec<f32> = (0..n).map(|i| BurstEmitter::angle_for(i, n)).collect();
        let step = TAU / n as f32;
        for (i, a) in angles.iter().enumerate() {
            assert!((a - step * i as f32).abs() < 1e-5);
            assert!(*a >= 0.0 && *a < TAU);
        }
        // the gaps, including the wrap back to zero, add up to one turn
        let mut total = 0.0;
        for i in 0..n {
            let next = if i + 1 < n { angles[i + 1] } else { TAU };
            total += next - angles[i];
        }
        assert!((total - TAU).abs() < 1e-4);
    }
}

#[test]
fn burst_randomization_stays_in_bounds() {
    let cfg = BurstConfig::default();
    let em = BurstEmitter::new(cfg.clone());
    let mut field = ParticleField::new(4096);
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        em.burst(&mut field, &mut rng, Vec2::new(50.0, 50.0));
    }
    for p in field.iter() {
        match p.kind {
            ParticleKind::Burst {
                distance, speed, ..
            } => {
                assert!(distance >= cfg.distance_min && distance < cfg.distance_max);
                assert!(speed >= cfg.speed_min && speed < cfg.speed_max);
            }
            other => panic!("unexpected kind {other:?}"),
        }
        assert!(p.size >= cfg.size_min && p.size < cfg.size_max);
        assert_eq!(p.ttl, cfg.ttl);
    }
}

#[test]
fn burst_particles_fade_out_as_they_fly() {
    let cfg = BurstConfig::default();
    let em = BurstEmitter::new(cfg.clone());
    let mut field = ParticleField::new(64);
    let mut rng = StdRng::seed_from_u64(5);
    let origin = Vec2::new(50.0, 50.0);
    em.burst(&mut field, &mut rng, origin);
    field.tick(cfg.ttl / 2);
    for p in field.iter() {
        assert!((p.opacity() - 0.5).abs() < 1e-3);
        assert!(p.position().distance(origin) > 0.0);
        assert!((p.scale() - (1.0 - 0.5 * cfg.scale_decay)).abs() < 1e-3);
    }
}
