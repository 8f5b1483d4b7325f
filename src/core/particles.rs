//! Particle records and their lifecycle.
//!
//! The field owns only data (origin, age, time-to-live and a few appearance
//! coefficients). Renderers read [`Particle::position`], [`Particle::opacity`]
//! and [`Particle::scale`] each frame; nothing here touches the DOM.

use glam::Vec2;
use smallvec::SmallVec;
use std::time::Duration;

pub type ParticleId = u64;

/// Ids removed during one tick. Sixteen inline slots cover a default burst.
pub type Expired = SmallVec<[ParticleId; 16]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ParticleKind {
    /// Stationary dot left behind by a moving pointer.
    Trail { intensity: f32 },
    /// Dot flying outward from a press point along `angle` (radians).
    Burst { angle: f32, distance: f32, speed: f32 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub kind: ParticleKind,
    pub origin: Vec2,
    pub size: f32,
    pub age: Duration,
    pub ttl: Duration,
    /// Opacity at age zero.
    pub initial_opacity: f32,
    /// Fraction of scale lost over the full lifetime.
    pub scale_decay: f32,
}

impl Particle {
    /// Normalized age in [0, 1].
    #[inline]
    pub fn progress(&self) -> f32 {
        (self.age.as_secs_f32() / self.ttl.as_secs_f32()).min(1.0)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age >= self.ttl
    }

    pub fn position(&self) -> Vec2 {
        match self.kind {
            ParticleKind::Trail { .. } => self.origin,
            ParticleKind::Burst {
                angle,
                distance,
                speed,
            } => {
                let travelled = distance * speed * self.progress();
                self.origin + Vec2::from_angle(angle) * travelled
            }
        }
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.initial_opacity * (1.0 - self.progress())
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        1.0 - self.progress() * self.scale_decay
    }
}

/// Spawn request; the field assigns id and age.
#[derive(Clone, Copy, Debug)]
pub struct Spawn {
    pub kind: ParticleKind,
    pub origin: Vec2,
    pub size: f32,
    pub ttl: Duration,
    pub initial_opacity: f32,
    pub scale_decay: f32,
}

/// Bounded set of live particles.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    next_id: ParticleId,
    max_live: usize,
}

impl ParticleField {
    pub fn new(max_live: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_live.min(64)),
            next_id: 0,
            max_live,
        }
    }

    /// Add a particle unless the field is full.
    pub fn spawn(&mut self, spawn: Spawn) -> Option<ParticleId> {
        if self.particles.len() >= self.max_live {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.particles.push(Particle {
            id,
            kind: spawn.kind,
            origin: spawn.origin,
            size: spawn.size,
            age: Duration::ZERO,
            ttl: spawn.ttl,
            initial_opacity: spawn.initial_opacity,
            scale_decay: spawn.scale_decay,
        });
        Some(id)
    }

    /// Age every particle by `dt` and drop the ones that reached their ttl.
    ///
    /// Returns exactly the ids removed by this call.
    pub fn tick(&mut self, dt: Duration) -> Expired {
        let mut expired = Expired::new();
        self.particles.retain_mut(|p| {
            p.age += dt;
            if p.is_expired() {
                expired.push(p.id);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Remove everything; returns how many particles were live.
    pub fn clear(&mut self) -> usize {
        let n = self.particles.len();
        self.particles.clear();
        n
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn max_live(&self) -> usize {
        self.max_live
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.iter().find(|p| p.id == id)
    }
}
