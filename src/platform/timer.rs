//! One-shot setTimeout that is cleared when dropped

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::dom;
use crate::error::Result;

pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn schedule<F>(delay_ms: f64, f: F) -> Result<Self>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        let id = dom::window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms.round() as i32,
        )?;
        Ok(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        // Clearing an already-fired timeout is a no-op
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(self.id);
        }
    }
}
