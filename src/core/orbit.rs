use super::config::OrbConfig;
use glam::Vec2;
use smallvec::SmallVec;
use std::f32::consts::TAU;
use std::time::Duration;

/// Positions of the small accents circling the pointer.
///
/// Orb `i` sits on ring `radii[i % 3]`, phase-shifted by `i / count` of a turn,
/// and completes one revolution every `period`.
pub fn orbit_positions(center: Vec2, elapsed: Duration, cfg: &OrbConfig) -> SmallVec<[Vec2; 8]> {
    let mut out = SmallVec::new();
    if cfg.count == 0 || cfg.period.is_zero() {
        return out;
    }
    let turns = (elapsed.as_secs_f64() / cfg.period.as_secs_f64()).fract() as f32;
    for i in 0..cfg.count {
        let phase = i as f32 / cfg.count as f32;
        let angle = (turns + phase) * TAU;
        let radius = cfg.radii[i % cfg.radii.len()];
        out.push(center + Vec2::from_angle(angle) * radius);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orbs_sit_on_their_rings() {
        let cfg = OrbConfig::default();
        let c = Vec2::new(100.0, 100.0);
        let pos = orbit_positions(c, Duration::from_millis(1234), &cfg);
        assert_eq!(pos.len(), cfg.count);
        for (i, p) in pos.iter().enumerate() {
            let r = cfg.radii[i % 3];
            assert!((p.distance(c) - r).abs() < 1e-3);
        }
    }

    #[test]
    fn one_period_returns_to_start() {
        let cfg = OrbConfig::default();
        let a = orbit_positions(Vec2::ZERO, Duration::ZERO, &cfg);
        let b = orbit_positions(Vec2::ZERO, cfg.period, &cfg);
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert!(pa.distance(*pb) < 1e-3);
        }
    }

    #[test]
    fn no_orbs_when_disabled() {
        let cfg = OrbConfig {
            count: 0,
            ..OrbConfig::default()
        };
        assert!(orbit_positions(Vec2::ZERO, Duration::ZERO, &cfg).is_empty());
    }
}
