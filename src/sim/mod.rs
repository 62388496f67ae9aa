//! Pure effect state
//!
//! Everything here is deterministic and free of browser types, so it runs
//! and tests natively:
//! - Seeded RNG only
//! - Time passed in explicitly (milliseconds)
//! - No rendering or platform dependencies

pub mod decor;
pub mod lifecycle;
pub mod starfield;
pub mod techtree;
pub mod visibility;

pub use decor::{Hover, css_seconds, stagger_delay_secs};
pub use lifecycle::LoopState;
pub use starfield::{Star, Starfield};
pub use techtree::{
    ConnectorLine, NodeBox, TreeLayout, bow_offset, find_center, jitter_offset, reveal_delay_ms,
};
pub use visibility::Visibility;
