use std::time::Duration;

/// CSS selector for elements that put the follower ring into its hover style.
pub const INTERACTIVE_SELECTOR: &str =
    "a, button, [role=\"button\"], input, textarea, select, label, [data-cursor-hover]";

/// Binary hover flag plus the eased blend the ring size is drawn from.
#[derive(Clone, Copy, Debug)]
pub struct HoverState {
    hovering: bool,
    blend: f32,
    transition: Duration,
}

impl HoverState {
    pub fn new(transition: Duration) -> Self {
        Self {
            hovering: false,
            blend: 0.0,
            transition,
        }
    }

    /// Returns true when the flag changed.
    pub fn set(&mut self, hovering: bool) -> bool {
        let changed = self.hovering != hovering;
        self.hovering = hovering;
        changed
    }

    #[inline]
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// 0 = idle style, 1 = hover style.
    #[inline]
    pub fn blend(&self) -> f32 {
        self.blend
    }

    /// Move `blend` linearly toward the current flag; a zero transition snaps.
    pub fn tick(&mut self, dt: Duration) {
        let target = if self.hovering { 1.0 } else { 0.0 };
        if self.transition.is_zero() {
            self.blend = target;
            return;
        }
        let step = dt.as_secs_f32() / self.transition.as_secs_f32();
        self.blend = if target > self.blend {
            (self.blend + step).min(target)
        } else {
            (self.blend - step).max(target)
        };
    }

    /// Interpolate between the idle and hover value of a style property.
    #[inline]
    pub fn mix(&self, idle: f32, hover: f32) -> f32 {
        idle + (hover - idle) * self.blend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_reports_changes_only() {
        let mut h = HoverState::new(Duration::from_millis(200));
        assert!(h.set(true));
        // nested interactive element re-asserts
        assert!(!h.set(true));
        assert!(h.is_hovering());
        assert!(h.set(false));
    }

    #[test]
    fn blend_eases_and_clamps() {
        let mut h = HoverState::new(Duration::from_millis(200));
        h.set(true);
        h.tick(Duration::from_millis(100));
        assert!((h.blend() - 0.5).abs() < 1e-5);
        assert!((h.mix(32.0, 50.0) - 41.0).abs() < 1e-3);
        h.tick(Duration::from_millis(500));
        assert_eq!(h.blend(), 1.0);
        h.set(false);
        h.tick(Duration::from_millis(50));
        assert!((h.blend() - 0.75).abs() < 1e-5);
    }

    #[test]
    fn leaving_a_link_for_plain_content_shrinks_the_ring() {
        let mut h = HoverState::new(Duration::from_millis(200));
        // over <a>, out of <a> into its <span> child (still inside the link)
        h.set(true);
        assert!(!h.set(true));
        h.tick(Duration::from_millis(200));
        // out of the link with a non-interactive related target
        assert!(h.set(false));
        h.tick(Duration::from_millis(200));
        assert_eq!(h.blend(), 0.0);
        assert_eq!(h.mix(32.0, 50.0), 32.0);
    }

    #[test]
    fn zero_transition_snaps() {
        let mut h = HoverState::new(Duration::ZERO);
        h.set(true);
        h.tick(Duration::from_millis(1));
        assert_eq!(h.blend(), 1.0);
    }
}
