//! Floating shape stagger and node hover stacking

use web_sys::{Document, HtmlElement};

use super::dom;
use super::listener::Listener;
use crate::error::Result;
use crate::settings::Settings;
use crate::sim::{Hover, css_seconds, stagger_delay_secs};

/// Offset each shape's CSS animation so they drift out of phase.
/// Returns the number of shapes touched.
pub fn stagger_shapes(document: &Document, settings: &Settings) -> Result<usize> {
    let shapes = dom::query_all(document, &settings.shape_selector)?;
    for (i, shape) in shapes.iter().enumerate() {
        let delay = stagger_delay_secs(i, settings.shape_stagger_secs);
        dom::set_style(shape, "animation-delay", &css_seconds(delay));
    }
    Ok(shapes.len())
}

/// Raises a tech-tree node above its siblings while hovered
pub struct HoverGlow {
    _listeners: Vec<Listener>,
}

impl HoverGlow {
    pub fn new(document: &Document, settings: &Settings) -> Result<Self> {
        let nodes = dom::query_all(document, &settings.node_selector)?;
        let raised = Hover::Raised.z_index(settings).to_string();
        let resting = Hover::Resting.z_index(settings).to_string();

        let mut listeners = Vec::with_capacity(nodes.len() * 2);
        for node in nodes {
            listeners.push(z_index_on(&node, "mouseenter", raised.clone())?);
            listeners.push(z_index_on(&node, "mouseleave", resting.clone())?);
        }
        Ok(Self {
            _listeners: listeners,
        })
    }
}

fn z_index_on(node: &HtmlElement, event: &'static str, z_index: String) -> Result<Listener> {
    let target = node.clone();
    Listener::new(node, event, move |_event| {
        dom::set_style(&target, "z-index", &z_index);
    })
}
