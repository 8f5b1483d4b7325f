//! Declarative render records produced once per frame.
//!
//! Sizes are diameters in CSS pixels; the renderer multiplies by
//! devicePixelRatio.

use glam::Vec2;

/// Cursor dot pinned to the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Marker {
    pub position: Vec2,
    pub size: f32,
    pub scale: f32,
}

/// Follower ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub position: Vec2,
    pub diameter: f32,
    pub border: f32,
    pub opacity: f32,
}

/// Filled circle used for particles and orbit accents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    pub position: Vec2,
    pub size: f32,
    pub opacity: f32,
    pub scale: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Dot, ring and orbs are hidden while the pointer is outside the page.
    pub visible: bool,
    pub cursor: Marker,
    pub follower: Ring,
    pub particles: Vec<Dot>,
    pub orbs: Vec<Dot>,
}
