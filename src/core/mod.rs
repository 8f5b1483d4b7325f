//! Platform-independent cursor simulation.
//!
//! Nothing in here touches the DOM, so the whole lifecycle runs under plain
//! `cargo test` on the host.

pub mod config;
pub mod emitter;
pub mod engine;
pub mod follower;
pub mod hover;
pub mod orbit;
pub mod particles;
pub mod pointer;
pub mod scene;
pub mod scheduler;

pub use config::*;
pub use emitter::*;
pub use engine::*;
pub use follower::*;
pub use hover::*;
pub use orbit::*;
pub use particles::*;
pub use pointer::*;
pub use scene::*;
pub use scheduler::*;
