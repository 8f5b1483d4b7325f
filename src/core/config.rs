//! Runtime configuration for the cursor layer.
//!
//! Defaults come from `crate::constants`. A page can override a subset of the
//! knobs through `data-cursor-*` attributes on the host element; the browser
//! binding feeds those through [`CursorConfig::apply_overrides`].

use crate::constants::*;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("follower easing must be in (0, 1], got {0}")]
    Easing(f32),
    #[error("{name} must be a probability in [0, 1], got {value}")]
    Probability { name: &'static str, value: f32 },
    #[error("{name} range is empty or negative: [{min}, {max})")]
    Range {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{0} time-to-live must be non-zero")]
    ZeroTtl(&'static str),
    #[error("{0} must be non-zero")]
    Zero(&'static str),
    #[error("attribute {attr}: cannot parse {value:?}")]
    Parse { attr: &'static str, value: String },
}

/// Trail spawn policy and appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    pub ttl: Duration,
    pub every_n_ticks: u32,
    pub min_distance: f32,
    pub min_speed: f32,
    pub skip_probability: f32,
    pub speed_full_intensity: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub base_opacity: f32,
    pub scale_decay: f32,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_millis(TRAIL_TTL_MS),
            every_n_ticks: TRAIL_EVERY_N_TICKS,
            min_distance: TRAIL_MIN_DISTANCE,
            min_speed: TRAIL_MIN_SPEED,
            skip_probability: TRAIL_SKIP_PROBABILITY,
            speed_full_intensity: TRAIL_SPEED_FULL_INTENSITY,
            size_min: TRAIL_SIZE_MIN,
            size_max: TRAIL_SIZE_MAX,
            base_opacity: TRAIL_BASE_OPACITY,
            scale_decay: TRAIL_SCALE_DECAY,
        }
    }
}

/// Pointer-down burst policy and appearance.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstConfig {
    pub count: usize,
    pub ttl: Duration,
    pub distance_min: f32,
    pub distance_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub size_min: f32,
    pub size_max: f32,
    pub scale_decay: f32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            count: BURST_COUNT,
            ttl: Duration::from_millis(BURST_TTL_MS),
            distance_min: BURST_DISTANCE_MIN,
            distance_max: BURST_DISTANCE_MAX,
            speed_min: BURST_SPEED_MIN,
            speed_max: BURST_SPEED_MAX,
            size_min: BURST_SIZE_MIN,
            size_max: BURST_SIZE_MAX,
            scale_decay: BURST_SCALE_DECAY,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbConfig {
    pub count: usize,
    pub radii: [f32; 3],
    pub period: Duration,
    pub size: f32,
    pub opacity: f32,
}

impl Default for OrbConfig {
    fn default() -> Self {
        Self {
            count: ORB_COUNT,
            radii: ORB_RADII,
            period: Duration::from_secs_f32(ORB_PERIOD_SEC),
            size: ORB_SIZE,
            opacity: ORB_OPACITY,
        }
    }
}

/// Complete configuration consumed by `CursorEngine`.
#[derive(Clone, Debug, PartialEq)]
pub struct CursorConfig {
    pub follower_easing: f32,
    pub dot_size: f32,
    pub dot_pressed_scale: f32,
    pub ring_size: f32,
    pub ring_border: f32,
    pub ring_hover_size: f32,
    pub ring_hover_border: f32,
    pub ring_opacity: f32,
    pub hover_transition: Duration,
    pub trail: TrailConfig,
    pub burst: BurstConfig,
    pub orbs: OrbConfig,
    pub max_live_particles: usize,
    pub min_viewport_width: f64,
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for CursorConfig {
    fn default() -> Self {
        Self {
            follower_easing: FOLLOWER_EASING,
            dot_size: DOT_SIZE,
            dot_pressed_scale: DOT_PRESSED_SCALE,
            ring_size: RING_SIZE,
            ring_border: RING_BORDER,
            ring_hover_size: RING_HOVER_SIZE,
            ring_hover_border: RING_HOVER_BORDER,
            ring_opacity: RING_OPACITY,
            hover_transition: Duration::from_secs_f32(HOVER_TRANSITION_SEC),
            trail: TrailConfig::default(),
            burst: BurstConfig::default(),
            orbs: OrbConfig::default(),
            max_live_particles: MAX_LIVE_PARTICLES,
            min_viewport_width: MIN_VIEWPORT_WIDTH,
            seed: None,
        }
    }
}

impl CursorConfig {
    /// Check every invariant the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let k = self.follower_easing;
        if !(k > 0.0 && k <= 1.0) {
            return Err(ConfigError::Easing(k));
        }
        probability("trail skip probability", self.trail.skip_probability)?;
        probability("trail base opacity", self.trail.base_opacity)?;
        probability("ring opacity", self.ring_opacity)?;
        probability("orb opacity", self.orbs.opacity)?;
        range("trail size", self.trail.size_min, self.trail.size_max)?;
        range("burst size", self.burst.size_min, self.burst.size_max)?;
        range(
            "burst distance",
            self.burst.distance_min,
            self.burst.distance_max,
        )?;
        range("burst speed", self.burst.speed_min, self.burst.speed_max)?;
        if self.trail.ttl.is_zero() {
            return Err(ConfigError::ZeroTtl("trail"));
        }
        if self.burst.ttl.is_zero() {
            return Err(ConfigError::ZeroTtl("burst"));
        }
        if self.trail.every_n_ticks == 0 {
            return Err(ConfigError::Zero("trail tick stride"));
        }
        if self.trail.speed_full_intensity <= 0.0 {
            return Err(ConfigError::Zero("trail full-intensity speed"));
        }
        if self.max_live_particles == 0 {
            return Err(ConfigError::Zero("max live particles"));
        }
        if self.orbs.count > 0 && self.orbs.period.is_zero() {
            return Err(ConfigError::Zero("orb period"));
        }
        Ok(())
    }

    /// Apply `data-cursor-*` overrides, then validate the result.
    ///
    /// `lookup` returns the raw attribute value for a full attribute name.
    /// Missing attributes leave the default untouched.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = parse::<f32, _>(&lookup, "data-cursor-easing")? {
            self.follower_easing = v;
        }
        if let Some(v) = parse::<f32, _>(&lookup, "data-cursor-trail-skip")? {
            self.trail.skip_probability = v;
        }
        if let Some(v) = parse::<u64, _>(&lookup, "data-cursor-trail-ttl")? {
            self.trail.ttl = Duration::from_millis(v);
        }
        if let Some(v) = parse::<u32, _>(&lookup, "data-cursor-trail-stride")? {
            self.trail.every_n_ticks = v;
        }
        if let Some(v) = parse::<usize, _>(&lookup, "data-cursor-burst-count")? {
            self.burst.count = v;
        }
        if let Some(v) = parse::<u64, _>(&lookup, "data-cursor-burst-ttl")? {
            self.burst.ttl = Duration::from_millis(v);
        }
        if let Some(v) = parse::<usize, _>(&lookup, "data-cursor-max-particles")? {
            self.max_live_particles = v;
        }
        if let Some(v) = parse::<usize, _>(&lookup, "data-cursor-orbs")? {
            self.orbs.count = v;
        }
        if let Some(v) = parse::<u64, _>(&lookup, "data-cursor-seed")? {
            self.seed = Some(v);
        }
        self.validate()
    }
}

fn probability(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Probability { name, value })
    }
}

fn range(name: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min >= 0.0 && min < max {
        Ok(())
    } else {
        Err(ConfigError::Range { name, min, max })
    }
}

fn parse<T, F>(lookup: &F, attr: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(attr) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Parse { attr, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn attrs(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_are_valid() {
        assert_eq!(CursorConfig::default().validate(), Ok(()));
    }

    #[test]
    fn easing_bounds() {
        let mut cfg = CursorConfig::default();
        cfg.follower_easing = 0.0;
        assert_eq!(cfg.validate(), Err(ConfigError::Easing(0.0)));
        cfg.follower_easing = 1.0;
        assert!(cfg.validate().is_ok());
        cfg.follower_easing = 1.01;
        assert!(cfg.validate().is_err());
        cfg.follower_easing = f32::NAN;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn zero_ttl_rejected() {
        let mut cfg = CursorConfig::default();
        cfg.burst.ttl = Duration::ZERO;
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroTtl("burst")));
    }

    #[test]
    fn empty_range_rejected() {
        let mut cfg = CursorConfig::default();
        cfg.burst.distance_min = 90.0;
        cfg.burst.distance_max = 30.0;
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Range { name: "burst distance", .. })
        ));
    }

    #[test]
    fn overrides_apply() {
        let map = attrs(&[
            ("data-cursor-easing", "0.3"),
            ("data-cursor-burst-count", " 8 "),
            ("data-cursor-trail-ttl", "500"),
            ("data-cursor-seed", "7"),
        ]);
        let mut cfg = CursorConfig::default();
        cfg.apply_overrides(|k| map.get(k).cloned()).unwrap();
        assert_eq!(cfg.follower_easing, 0.3);
        assert_eq!(cfg.burst.count, 8);
        assert_eq!(cfg.trail.ttl, Duration::from_millis(500));
        assert_eq!(cfg.seed, Some(7));
        // untouched
        assert_eq!(cfg.burst.ttl, Duration::from_millis(BURST_TTL_MS));
    }

    #[test]
    fn unparsable_override_is_an_error() {
        let map = attrs(&[("data-cursor-burst-count", "lots")]);
        let mut cfg = CursorConfig::default();
        let err = cfg.apply_overrides(|k| map.get(k).cloned()).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Parse {
                attr: "data-cursor-burst-count",
                value: "lots".into()
            }
        );
    }

    #[test]
    fn override_that_breaks_an_invariant_is_rejected() {
        let map = attrs(&[("data-cursor-trail-skip", "1.5")]);
        let mut cfg = CursorConfig::default();
        assert!(cfg.apply_overrides(|k| map.get(k).cloned()).is_err());
    }
}
