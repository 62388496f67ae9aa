//! Effect settings
//!
//! Every tunable lives here. Defaults come from `crate::consts`; a page can
//! override any subset by storing JSON in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{FxError, Result};

/// Effect settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Page hooks ===
    /// Canvas behind the whole page
    pub starfield_canvas_id: String,
    /// Canvas overlaying the tech tree
    pub tree_canvas_id: String,
    /// Containers that fade in on scroll
    pub section_selector: String,
    /// Floating decorative shapes
    pub shape_selector: String,
    /// Tech-tree nodes
    pub node_selector: String,
    /// Attribute carrying a node's display name
    pub node_name_attribute: String,
    /// Class toggled on visible sections
    pub visible_class: String,

    // === Starfield ===
    pub star_count: usize,
    pub star_radius_min: f32,
    pub star_radius_max: f32,
    pub star_max_speed: f32,
    pub star_color: String,

    // === Scroll / stagger ===
    pub visibility_threshold: f64,
    pub shape_stagger_secs: f64,
    pub reveal_stagger_ms: f64,

    // === Tech tree ===
    pub center_node_name: String,
    pub progress_step: f32,
    pub bow_amplitude: f32,
    pub bow_period_ms: f64,
    pub jitter_amplitude: f32,
    pub jitter_period_ms: f64,
    pub glow_radius: f32,
    pub glow_color: String,
    pub line_back_color: String,
    pub line_back_width: f32,
    pub line_front_color: String,
    pub line_front_width: f32,

    // === Hover ===
    pub hover_z_index: i32,
    pub rest_z_index: i32,

    // === Accessibility ===
    /// Freeze the curve bow and glow wobble
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starfield_canvas_id: "starfield".to_string(),
            tree_canvas_id: "connections".to_string(),
            section_selector: "section".to_string(),
            shape_selector: ".shape".to_string(),
            node_selector: ".node".to_string(),
            node_name_attribute: "data-name".to_string(),
            visible_class: "visible".to_string(),

            star_count: STAR_COUNT,
            star_radius_min: STAR_RADIUS_MIN,
            star_radius_max: STAR_RADIUS_MAX,
            star_max_speed: STAR_MAX_SPEED,
            star_color: STAR_COLOR.to_string(),

            visibility_threshold: VISIBILITY_THRESHOLD,
            shape_stagger_secs: SHAPE_STAGGER_SECS,
            reveal_stagger_ms: REVEAL_STAGGER_MS,

            center_node_name: CENTER_NODE_NAME.to_string(),
            progress_step: PROGRESS_STEP,
            bow_amplitude: BOW_AMPLITUDE,
            bow_period_ms: BOW_PERIOD_MS,
            jitter_amplitude: JITTER_AMPLITUDE,
            jitter_period_ms: JITTER_PERIOD_MS,
            glow_radius: GLOW_RADIUS,
            glow_color: "#b84fff".to_string(),
            line_back_color: "rgba(184,79,255,0.15)".to_string(),
            line_back_width: 2.0,
            line_front_color: "rgba(224,100,255,0.8)".to_string(),
            line_front_width: 3.0,

            hover_z_index: HOVER_Z_INDEX,
            rest_z_index: REST_Z_INDEX,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Bow amplitude actually applied (respects reduced_motion)
    pub fn effective_bow_amplitude(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { self.bow_amplitude }
    }

    /// Glow wobble actually applied (respects reduced_motion)
    pub fn effective_jitter_amplitude(&self) -> f32 {
        if self.reduced_motion { 0.0 } else { self.jitter_amplitude }
    }

    /// Reject values the effects cannot run with
    pub fn validate(&self) -> Result<()> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> Result<()> {
            Err(FxError::InvalidSetting {
                field,
                reason: reason.into(),
            })
        }

        if !(self.star_radius_min >= 0.0) {
            return invalid("star_radius_min", "must be >= 0");
        }
        if !(self.star_radius_max >= self.star_radius_min) {
            return invalid("star_radius_max", "must be >= star_radius_min");
        }
        if !(self.star_max_speed >= 0.0) {
            return invalid("star_max_speed", "must be >= 0");
        }
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return invalid("visibility_threshold", "must be within [0, 1]");
        }
        if !(self.shape_stagger_secs >= 0.0) {
            return invalid("shape_stagger_secs", "must be >= 0");
        }
        if !(self.reveal_stagger_ms >= 0.0) {
            return invalid("reveal_stagger_ms", "must be >= 0");
        }
        if !(self.progress_step > 0.0 && self.progress_step <= 1.0) {
            return invalid("progress_step", "must be within (0, 1]");
        }
        if !(self.bow_period_ms > 0.0) {
            return invalid("bow_period_ms", "must be > 0");
        }
        if !(self.jitter_period_ms > 0.0) {
            return invalid("jitter_period_ms", "must be > 0");
        }
        if !(self.glow_radius >= 0.0) {
            return invalid("glow_radius", "must be >= 0");
        }
        if self.center_node_name.is_empty() {
            return invalid("center_node_name", "must not be empty");
        }
        Ok(())
    }

    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "nebula_fx_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(err) => log::warn!("Ignoring stored settings: {}", err),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
