//! Self-rescheduling `requestAnimationFrame` loop.
//!
//! The scheduled closure holds a handle to the slot it lives in, which keeps it
//! alive between frames. [`FrameLoop::cancel`] empties that slot and breaks the
//! cycle.

use crate::input::LoopState;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

#[derive(Clone)]
pub struct FrameLoop {
    window: web::Window,
    raf_id: Rc<Cell<Option<i32>>>,
    state: Rc<Cell<LoopState>>,
    slot: FrameSlot,
}

impl FrameLoop {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            raf_id: Rc::new(Cell::new(None)),
            state: Rc::new(Cell::new(LoopState::Idle)),
            slot: Rc::new(RefCell::new(None)),
        }
    }

    /// Run `on_frame` once per animation frame until it returns `false` or the
    /// loop is cancelled.
    pub fn start(&self, mut on_frame: impl FnMut() -> bool + 'static) {
        let slot = self.slot.clone();
        let raf_id = self.raf_id.clone();
        let state = self.state.clone();
        let window = self.window.clone();
        *self.slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_id.set(None);
            if !state.get().is_running() {
                return;
            }
            let next = state.get().after_frame(on_frame());
            state.set(next);
            if !next.is_running() {
                // The closure is still executing, so the slot is emptied by cancel().
                log::info!("[orbit] frame loop stopped");
                return;
            }
            if let Some(cb) = slot.borrow().as_ref() {
                match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => raf_id.set(Some(id)),
                    Err(e) => {
                        state.set(LoopState::Stopped);
                        log::error!("requestAnimationFrame failed: {:?}", e);
                    }
                }
            }
        }) as Box<dyn FnMut()>));

        self.state.set(LoopState::Running);
        if let Some(cb) = self.slot.borrow().as_ref() {
            match self.window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => self.raf_id.set(Some(id)),
                Err(e) => {
                    self.state.set(LoopState::Stopped);
                    log::error!("requestAnimationFrame failed: {:?}", e);
                }
            }
        }
    }

    /// Cancel the pending frame and drop the callback. Must not be called from
    /// inside `on_frame`.
    pub fn cancel(&self) {
        self.state.set(LoopState::Cancelled);
        if let Some(id) = self.raf_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        self.slot.borrow_mut().take();
    }

    pub fn state(&self) -> LoopState {
        self.state.get()
    }

    pub fn is_running(&self) -> bool {
        self.state.get().is_running()
    }
}
