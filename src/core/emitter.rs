//! Spawn policies for trail and burst particles.

use super::config::{BurstConfig, TrailConfig};
use super::particles::{ParticleField, ParticleId, ParticleKind, Spawn};
use super::pointer::PointerSample;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Decides when a moving pointer leaves a trail dot.
///
/// At most one dot per tick, and only every `every_n_ticks` ticks, so the
/// live trail count is bounded by `ttl / (frame time * every_n_ticks)` no
/// matter how many move events arrive.
#[derive(Clone, Debug)]
pub struct TrailEmitter {
    cfg: TrailConfig,
    tick_counter: u64,
    last_spawn: Option<Vec2>,
}

impl TrailEmitter {
    pub fn new(cfg: TrailConfig) -> Self {
        Self {
            cfg,
            tick_counter: 0,
            last_spawn: None,
        }
    }

    /// Called once per tick with the pointer motion for that tick.
    pub fn maybe_spawn<R: Rng>(
        &mut self,
        field: &mut ParticleField,
        rng: &mut R,
        sample: &PointerSample,
    ) -> Option<ParticleId> {
        self.tick_counter += 1;
        if self.tick_counter % u64::from(self.cfg.every_n_ticks) != 0 {
            return None;
        }
        if sample.speed <= self.cfg.min_speed {
            return None;
        }
        if let Some(last) = self.last_spawn {
            if last.distance(sample.position) <= self.cfg.min_distance {
                return None;
            }
        }
        if rng.gen::<f32>() < self.cfg.skip_probability {
            return None;
        }
        let intensity = (sample.speed / self.cfg.speed_full_intensity).min(1.0);
        let id = field.spawn(Spawn {
            kind: ParticleKind::Trail { intensity },
            origin: sample.position,
            size: rng.gen_range(self.cfg.size_min..self.cfg.size_max),
            ttl: self.cfg.ttl,
            initial_opacity: self.cfg.base_opacity * intensity,
            scale_decay: self.cfg.scale_decay,
        })?;
        self.last_spawn = Some(sample.position);
        Some(id)
    }

    pub fn reset(&mut self) {
        self.tick_counter = 0;
        self.last_spawn = None;
    }
}

/// Radial burst of particles on pointer down.
#[derive(Clone, Debug)]
pub struct BurstEmitter {
    cfg: BurstConfig,
}

impl BurstEmitter {
    pub fn new(cfg: BurstConfig) -> Self {
        Self { cfg }
    }

    /// Direction of particle `index` out of `count`, evenly spaced over a turn.
    #[inline]
    pub fn angle_for(index: usize, count: usize) -> f32 {
        index as f32 * (TAU / count as f32)
    }

    /// Spawn up to `count` particles at `at`. A full field truncates the burst.
    pub fn burst<R: Rng>(
        &self,
        field: &mut ParticleField,
        rng: &mut R,
        at: Vec2,
    ) -> SmallVec<[ParticleId; 16]> {
        let n = self.cfg.count;
        let mut ids = SmallVec::new();
        for i in 0..n {
            let spawn = Spawn {
                kind: ParticleKind::Burst {
                    angle: Self::angle_for(i, n),
                    distance: rng.gen_range(self.cfg.distance_min..self.cfg.distance_max),
                    speed: rng.gen_range(self.cfg.speed_min..self.cfg.speed_max),
                },
                origin: at,
                size: rng.gen_range(self.cfg.size_min..self.cfg.size_max),
                ttl: self.cfg.ttl,
                initial_opacity: 1.0,
                scale_decay: self.cfg.scale_decay,
            };
            match field.spawn(spawn) {
                Some(id) => ids.push(id),
                None => break,
            }
        }
        ids
    }
}
