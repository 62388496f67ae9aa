//! Decorative shape stagger and node hover stacking

use crate::settings::Settings;

/// Animation start delay (seconds) for the shape at `index`
#[inline]
pub fn stagger_delay_secs(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}

/// CSS time value, e.g. `0s`, `0.5s`, `1s`
pub fn css_seconds(secs: f64) -> String {
    format!("{}s", secs)
}

/// Hover state of a tech-tree node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Hover {
    #[default]
    Resting,
    Raised,
}

impl Hover {
    /// Stacking order for this state
    pub fn z_index(&self, settings: &Settings) -> i32 {
        match self {
            Hover::Resting => settings.rest_z_index,
            Hover::Raised => settings.hover_z_index,
        }
    }
}
