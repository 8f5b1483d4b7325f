use glam::Vec2;

/// Lagged marker that chases a target with a one-pole low-pass filter.
///
/// Each [`Follower::step`] covers a fixed fraction `easing` of the remaining
/// distance. For `easing` in (0, 1] this converges monotonically and never
/// overshoots a stationary target.
#[derive(Clone, Copy, Debug)]
pub struct Follower {
    pub position: Vec2,
    easing: f32,
}

impl Follower {
    pub fn new(start: Vec2, easing: f32) -> Self {
        Self {
            position: start,
            easing,
        }
    }

    #[inline]
    pub fn easing(&self) -> f32 {
        self.easing
    }

    /// Advance one tick toward `target`.
    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.position = Vec2::new(
            ease_axis(self.position.x, target.x, self.easing),
            ease_axis(self.position.y, target.y, self.easing),
        );
        self.position
    }

    pub fn snap_to(&mut self, pos: Vec2) {
        self.position = pos;
    }
}

#[inline]
fn ease_axis(current: f32, target: f32, k: f32) -> f32 {
    if k >= 1.0 {
        return target;
    }
    let next = current + (target - current) * k;
    // rounding must never carry us past the target
    if (target - next) * (target - current) < 0.0 {
        target
    } else {
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_easing_lands_on_target() {
        let mut f = Follower::new(Vec2::new(0.1, 0.7), 1.0);
        assert_eq!(f.step(Vec2::new(123.456, -9.87)), Vec2::new(123.456, -9.87));
    }

    #[test]
    fn stationary_at_target() {
        let mut f = Follower::new(Vec2::splat(42.0), 0.2);
        assert_eq!(f.step(Vec2::splat(42.0)), Vec2::splat(42.0));
    }

    #[test]
    fn snap_resets_position() {
        let mut f = Follower::new(Vec2::ZERO, 0.1);
        f.snap_to(Vec2::new(8.0, 9.0));
        assert_eq!(f.position, Vec2::new(8.0, 9.0));
    }
}
