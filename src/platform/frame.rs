//! Cancellable requestAnimationFrame loop
//!
//! The frame closure holds a handle to itself so it can request the next
//! frame. Cancelling drops that closure, which breaks the cycle; a frame
//! already queued sees the cancelled state and does not reschedule.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::dom;
use crate::error::Result;
use crate::sim::LoopState;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Handle to a running frame loop. Dropping it cancels the loop.
pub struct FrameLoop {
    label: &'static str,
    state: Rc<Cell<LoopState>>,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    /// Call `step` with the frame timestamp (ms) once per display refresh
    /// until cancelled. `step` must not cancel its own loop.
    pub fn start<F>(label: &'static str, mut step: F) -> Result<Self>
    where
        F: FnMut(f64) + 'static,
    {
        let window = dom::window()?;
        let state = Rc::new(Cell::new(LoopState::Idle));
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let closure = {
            let state = state.clone();
            let pending = pending.clone();
            let callback = callback.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |time: f64| {
                pending.set(None);
                if !state.get().is_running() {
                    return;
                }

                step(time);

                if let Some(next) = callback.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(err) => {
                            log::error!("{} frame request failed: {:?}", label, err);
                            let mut s = state.get();
                            s.cancel();
                            state.set(s);
                        }
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        *callback.borrow_mut() = Some(closure);
        pending.set(Some(id));

        let mut s = state.get();
        s.begin();
        state.set(s);
        log::debug!("{} frame loop started", label);

        Ok(Self {
            label,
            state,
            pending,
            callback,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state.get()
    }

    /// Stop the loop. Safe to call more than once.
    pub fn cancel(&self) {
        let mut s = self.state.get();
        if !s.cancel() {
            return;
        }
        self.state.set(s);

        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        self.callback.borrow_mut().take();
        log::debug!("{} frame loop cancelled", self.label);
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
