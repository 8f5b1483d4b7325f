use super::config::{ConfigError, CursorConfig};
use super::emitter::{BurstEmitter, TrailEmitter};
use super::follower::Follower;
use super::hover::HoverState;
use super::orbit::orbit_positions;
use super::particles::{Expired, Particle, ParticleField, ParticleId};
use super::pointer::PointerTracker;
use super::scene::{Dot, Marker, Ring, Scene};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use std::time::Duration;

/// Outcome of one [`CursorEngine::tick`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TickReport {
    pub expired: Expired,
    pub spawned_trail: Option<ParticleId>,
    pub live: usize,
}

/// All state of one mounted cursor layer.
///
/// The engine is driven from outside: input handlers call the `pointer_*`
/// methods, the frame loop calls [`CursorEngine::tick`] once per refresh and
/// hands [`CursorEngine::scene`] to a renderer. Typical usage:
/// - Construct with `CursorEngine::new(config)`
/// - Forward pointer events as they arrive
/// - `tick(dt)` then `scene()` every frame
/// - `teardown()` on unmount; the engine ignores everything afterwards
pub struct CursorEngine {
    cfg: CursorConfig,
    pointer: PointerTracker,
    follower: Follower,
    field: ParticleField,
    trail: TrailEmitter,
    burst: BurstEmitter,
    hover: HoverState,
    rng: StdRng,
    elapsed: Duration,
    torn_down: bool,
}

impl CursorEngine {
    pub fn new(cfg: CursorConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            pointer: PointerTracker::default(),
            follower: Follower::new(Vec2::ZERO, cfg.follower_easing),
            field: ParticleField::new(cfg.max_live_particles),
            trail: TrailEmitter::new(cfg.trail.clone()),
            burst: BurstEmitter::new(cfg.burst.clone()),
            hover: HoverState::new(cfg.hover_transition),
            rng,
            elapsed: Duration::ZERO,
            torn_down: false,
            cfg,
        })
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        if self.torn_down {
            return;
        }
        if !self.pointer.has_position() {
            self.follower.snap_to(pos);
        }
        self.pointer.on_move(pos);
    }

    /// Press: marks the pointer down and fires a burst at `pos`.
    pub fn pointer_down(&mut self, pos: Vec2) -> SmallVec<[ParticleId; 16]> {
        if self.torn_down {
            return SmallVec::new();
        }
        self.pointer_move(pos);
        self.pointer.on_down(pos);
        let ids = self.burst.burst(&mut self.field, &mut self.rng, pos);
        if ids.len() < self.cfg.burst.count {
            log::debug!(
                "[cursor] burst truncated to {} of {} (field full)",
                ids.len(),
                self.cfg.burst.count
            );
        }
        ids
    }

    pub fn pointer_up(&mut self) {
        if !self.torn_down {
            self.pointer.on_up();
        }
    }

    pub fn pointer_enter(&mut self) {
        if !self.torn_down {
            self.pointer.on_enter();
        }
    }

    pub fn pointer_leave(&mut self) {
        if !self.torn_down {
            self.pointer.on_leave();
        }
    }

    /// Returns true when the hover flag changed.
    pub fn set_hovering(&mut self, hovering: bool) -> bool {
        !self.torn_down && self.hover.set(hovering)
    }

    /// Advance every animation by `dt`.
    pub fn tick(&mut self, dt: Duration) -> TickReport {
        if self.torn_down {
            return TickReport::default();
        }
        self.elapsed += dt;
        let sample = self.pointer.sample();
        if self.pointer.has_position() {
            self.follower.step(sample.position);
        }
        self.hover.tick(dt);
        // age before spawning: a dot born this tick starts at zero
        let expired = self.field.tick(dt);
        let spawned_trail = self
            .trail
            .maybe_spawn(&mut self.field, &mut self.rng, &sample);
        TickReport {
            expired,
            spawned_trail,
            live: self.field.len(),
        }
    }

    pub fn scene(&self) -> Scene {
        let pos = self.pointer.position;
        let cfg = &self.cfg;
        let particles = self
            .field
            .iter()
            .map(|p| Dot {
                position: p.position(),
                size: p.size,
                opacity: p.opacity(),
                scale: p.scale(),
            })
            .collect();
        let orbs = if self.pointer.visible {
            orbit_positions(pos, self.elapsed, &cfg.orbs)
                .into_iter()
                .map(|position| Dot {
                    position,
                    size: cfg.orbs.size,
                    opacity: cfg.orbs.opacity,
                    scale: 1.0,
                })
                .collect()
        } else {
            Vec::new()
        };
        Scene {
            visible: self.pointer.visible,
            cursor: Marker {
                position: pos,
                size: cfg.dot_size,
                scale: if self.pointer.pressed {
                    cfg.dot_pressed_scale
                } else {
                    1.0
                },
            },
            follower: Ring {
                position: self.follower.position,
                diameter: self.hover.mix(cfg.ring_size, cfg.ring_hover_size),
                border: self.hover.mix(cfg.ring_border, cfg.ring_hover_border),
                opacity: cfg.ring_opacity,
            },
            particles,
            orbs,
        }
    }

    /// Drop all particles and make the engine inert. Returns particles cleared.
    pub fn teardown(&mut self) -> usize {
        if self.torn_down {
            return 0;
        }
        self.torn_down = true;
        self.trail.reset();
        self.field.clear()
    }

    #[inline]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    #[inline]
    pub fn config(&self) -> &CursorConfig {
        &self.cfg
    }

    #[inline]
    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    #[inline]
    pub fn follower_position(&self) -> Vec2 {
        self.follower.position
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hover.is_hovering()
    }

    #[inline]
    pub fn live_particles(&self) -> usize {
        self.field.len()
    }

    pub fn particles(&self) -> impl Iterator<Item = &Particle> {
        self.field.iter()
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CursorEngine {
        CursorEngine::new(CursorConfig {
            seed: Some(11),
            ..CursorConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn invalid_config_is_rejected() {
        let cfg = CursorConfig {
            follower_easing: 2.0,
            ..CursorConfig::default()
        };
        assert!(CursorEngine::new(cfg).is_err());
    }

    #[test]
    fn first_move_snaps_follower() {
        let mut e = engine();
        e.pointer_move(Vec2::new(400.0, 300.0));
        e.tick(Duration::from_millis(16));
        assert_eq!(e.follower_position(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn pressed_dot_scales_up() {
        let mut e = engine();
        e.pointer_down(Vec2::new(10.0, 10.0));
        assert_eq!(e.scene().cursor.scale, e.config().dot_pressed_scale);
        e.pointer_up();
        assert_eq!(e.scene().cursor.scale, 1.0);
    }

    #[test]
    fn hidden_pointer_has_no_orbs() {
        let mut e = engine();
        e.pointer_move(Vec2::new(10.0, 10.0));
        assert_eq!(e.scene().orbs.len(), e.config().orbs.count);
        e.pointer_leave();
        let scene = e.scene();
        assert!(!scene.visible);
        assert!(scene.orbs.is_empty());
    }

    #[test]
    fn hover_grows_ring() {
        let mut e = engine();
        e.pointer_move(Vec2::ZERO);
        assert!(e.set_hovering(true));
        e.tick(Duration::from_secs(1));
        let ring = e.scene().follower;
        assert_eq!(ring.diameter, e.config().ring_hover_size);
        assert_eq!(ring.border, e.config().ring_hover_border);
    }
}
