//! Full-window starfield background

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlCanvasElement};

use super::dom;
use super::frame::FrameLoop;
use crate::error::Result;
use crate::renderer::paint_starfield;
use crate::settings::Settings;
use crate::sim::Starfield;

pub struct StarfieldLayer {
    canvas: HtmlCanvasElement,
    field: Rc<RefCell<Starfield>>,
    frames: Option<FrameLoop>,
}

impl StarfieldLayer {
    /// Size the canvas to the viewport, scatter the stars once and start
    /// drawing every frame
    pub fn new(document: &Document, settings: &Settings, seed: u64) -> Result<Self> {
        let (canvas, mut ctx) = dom::canvas_2d(document, &settings.starfield_canvas_id)?;
        let size = dom::viewport_size(&dom::window()?)?;
        dom::resize_canvas(&canvas, size);

        let field = Rc::new(RefCell::new(Starfield::new(seed, size, settings)));
        log::info!(
            "Starfield: {} stars on {}x{}",
            settings.star_count,
            size.x,
            size.y
        );

        let frames = {
            let field = field.clone();
            let color = settings.star_color.clone();
            FrameLoop::start("starfield", move |_time| {
                let mut field = field.borrow_mut();
                paint_starfield(&mut ctx, &field, &color);
                field.step();
            })?
        };

        Ok(Self {
            canvas,
            field,
            frames: Some(frames),
        })
    }

    /// Match the canvas to the current viewport; stars are kept
    pub fn resize(&self) -> Result<()> {
        let size = dom::viewport_size(&dom::window()?)?;
        dom::resize_canvas(&self.canvas, size);
        self.field.borrow_mut().resize(size);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(frames) = self.frames.take() {
            frames.cancel();
            log::info!("Starfield stopped");
        }
    }
}
