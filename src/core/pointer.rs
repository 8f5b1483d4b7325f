use glam::Vec2;

/// Per-tick motion derived from the pointer since the previous sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub position: Vec2,
    pub velocity: Vec2,
    pub speed: f32,
}

/// Latest pointer state in viewport CSS pixels.
///
/// Events only record values; motion is derived once per tick in
/// [`PointerTracker::sample`] so that bursts of move events between two
/// frames collapse into a single velocity.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    pub position: Vec2,
    pub pressed: bool,
    pub visible: bool,
    last_sampled: Vec2,
    has_position: bool,
}

impl PointerTracker {
    pub fn on_move(&mut self, pos: Vec2) {
        if !self.has_position {
            // first event: no phantom velocity from the origin
            self.last_sampled = pos;
            self.has_position = true;
        }
        self.position = pos;
        self.visible = true;
    }

    pub fn on_down(&mut self, pos: Vec2) {
        self.on_move(pos);
        self.pressed = true;
    }

    pub fn on_up(&mut self) {
        self.pressed = false;
    }

    pub fn on_enter(&mut self) {
        self.visible = true;
    }

    /// The next move after leaving starts fresh, like the very first one.
    pub fn on_leave(&mut self) {
        self.visible = false;
        self.pressed = false;
        self.has_position = false;
    }

    /// Whether a position has been recorded since mount or the last leave.
    #[inline]
    pub fn has_position(&self) -> bool {
        self.has_position
    }

    /// Consume the motion accumulated since the last call.
    pub fn sample(&mut self) -> PointerSample {
        let velocity = self.position - self.last_sampled;
        self.last_sampled = self.position;
        PointerSample {
            position: self.position,
            velocity,
            speed: velocity.length(),
        }
    }
}
