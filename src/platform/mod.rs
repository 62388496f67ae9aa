//! Browser platform layer (wasm32 only)
//!
//! Wires `sim` state and `renderer` painters to the page:
//! - DOM queries and style writes
//! - requestAnimationFrame loops, timeouts and listeners that clean up on drop
//! - One component per effect, each with its own stop/disconnect

pub mod decor;
pub mod dom;
pub mod frame;
pub mod listener;
pub mod observer;
pub mod starfield;
pub mod techtree;
pub mod timer;

pub use decor::{HoverGlow, stagger_shapes};
pub use frame::FrameLoop;
pub use listener::Listener;
pub use observer::SectionObserver;
pub use starfield::StarfieldLayer;
pub use techtree::TechTree;
pub use timer::Timeout;
