//! Tech tree connector canvas
//!
//! Each `restart` measures the nodes, cancels whatever the previous layout
//! was doing and starts a fresh reveal + draw cycle.

use std::rc::Rc;

use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlElement};

use super::dom;
use super::frame::FrameLoop;
use super::timer::Timeout;
use crate::error::Result;
use crate::renderer::paint_tree;
use crate::settings::Settings;
use crate::sim::{NodeBox, TreeLayout, reveal_delay_ms};

pub struct TechTree {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    nodes: Vec<HtmlElement>,
    settings: Rc<Settings>,
    frames: Option<FrameLoop>,
    reveals: Vec<Timeout>,
}

impl TechTree {
    /// Bind to the connector canvas and node elements. Nothing is drawn
    /// until `restart`.
    pub fn new(document: &Document, settings: Rc<Settings>) -> Result<Self> {
        let (canvas, ctx) = dom::canvas_2d(document, &settings.tree_canvas_id)?;
        let nodes = dom::query_all(document, &settings.node_selector)?;
        log::info!("Tech tree: {} nodes", nodes.len());
        Ok(Self {
            canvas,
            ctx,
            nodes,
            settings,
            frames: None,
            reveals: Vec::new(),
        })
    }

    pub fn is_running(&self) -> bool {
        self.frames
            .as_ref()
            .is_some_and(|f| f.state().is_running())
    }

    /// Re-measure and start over. Call on load and on every resize.
    pub fn restart(&mut self) -> Result<()> {
        self.stop();

        let size = dom::offset_size(&self.canvas);
        dom::resize_canvas(&self.canvas, size);

        let boxes: Vec<NodeBox> = self
            .nodes
            .iter()
            .map(|n| dom::measure(n, &self.settings.node_name_attribute))
            .collect();

        let Some(mut layout) = TreeLayout::build(&boxes, &self.settings.center_node_name) else {
            log::warn!(
                "Tech tree hub `{}` not found among {} nodes, skipping",
                self.settings.center_node_name,
                boxes.len()
            );
            return Ok(());
        };

        self.schedule_reveals()?;

        let mut ctx = self.ctx.clone();
        let settings = self.settings.clone();
        self.frames = Some(FrameLoop::start("tech tree", move |time| {
            layout.advance(settings.progress_step);
            paint_tree(&mut ctx, size, &layout.lines, time, &settings);
        })?);
        log::info!("Tech tree started ({} connectors)", boxes.len() - 1);
        Ok(())
    }

    /// Fade/scale each node in, one after another
    fn schedule_reveals(&mut self) -> Result<()> {
        let stagger = self.settings.reveal_stagger_ms;
        for (i, node) in self.nodes.iter().enumerate() {
            let node = node.clone();
            let timeout = Timeout::schedule(reveal_delay_ms(i, stagger), move || {
                dom::set_style(&node, "opacity", "1");
                dom::set_style(&node, "transform", "scale(1)");
            })?;
            self.reveals.push(timeout);
        }
        Ok(())
    }

    /// Cancel the draw loop and any reveals still pending
    pub fn stop(&mut self) {
        if let Some(frames) = self.frames.take() {
            frames.cancel();
        }
        self.reveals.clear();
    }
}
