//! DOM queries and style writes

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement, Window};

use crate::error::{FxError, Result};
use crate::sim::NodeBox;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(FxError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(FxError::NoDocument)
}

/// All HTML elements matching `selector`, in document order
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// Look up a canvas by id together with its 2D context
pub fn canvas_2d(
    document: &Document,
    id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d)> {
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(id)
        .ok_or_else(|| FxError::MissingElement(id.to_string()))?
        .dyn_into()
        .map_err(|_| FxError::NotACanvas(id.to_string()))?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| FxError::NoContext(id.to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| FxError::NoContext(id.to_string()))?;
    Ok((canvas, ctx))
}

/// Current viewport size in CSS pixels
pub fn viewport_size(window: &Window) -> Result<Vec2> {
    let w = window.inner_width()?.as_f64().unwrap_or(0.0);
    let h = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok(Vec2::new(w as f32, h as f32))
}

/// Set the canvas backing store to `size` (also clears it)
pub fn resize_canvas(canvas: &HtmlCanvasElement, size: Vec2) {
    canvas.set_width(size.x.max(0.0) as u32);
    canvas.set_height(size.y.max(0.0) as u32);
}

/// Offset box of an element, relative to its offset parent
pub fn offset_size(el: &HtmlElement) -> Vec2 {
    Vec2::new(el.offset_width() as f32, el.offset_height() as f32)
}

/// Measure a tech-tree node. Only valid once layout has settled.
pub fn measure(el: &HtmlElement, name_attribute: &str) -> NodeBox {
    NodeBox {
        name: el.get_attribute(name_attribute),
        left: el.offset_left() as f32,
        top: el.offset_top() as f32,
        width: el.offset_width() as f32,
        height: el.offset_height() as f32,
    }
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = el.style().set_property(property, value) {
        log::warn!("Failed to set {}: {:?}", property, err);
    }
}
