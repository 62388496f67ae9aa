//! 2D canvas rendering
//!
//! Painters draw `sim` state onto anything implementing `Surface`.

pub mod starfield;
pub mod surface;
pub mod techtree;

pub use starfield::paint_starfield;
pub use surface::Surface;
pub use techtree::paint_tree;
