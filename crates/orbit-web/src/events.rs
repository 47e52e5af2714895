//! DOM listeners owned by a mounted background.
//!
//! A [`Listener`] removes itself from its target when dropped, so clearing a
//! [`Listeners`] set detaches everything it registered.

use crate::{dom, input};
use orbit_core::PointerState;
use smallvec::SmallVec;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> anyhow::Result<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!(format!("add {kind} listener: {:?}", e)))?;
        Ok(Self {
            target: target.clone(),
            kind,
            callback,
        })
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

#[derive(Default)]
pub struct Listeners {
    inner: SmallVec<[Listener; 4]>,
}

impl Listeners {
    pub fn push(&mut self, listener: Listener) {
        self.inner.push(listener);
    }

    /// Remove every listener from its target.
    pub fn clear(&mut self) {
        for listener in &self.inner {
            log::debug!("[orbit] detach {}", listener.kind());
        }
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// Overwrite `pointer` with the NDC position of every `mousemove`.
pub fn track_pointer(
    window: &web::Window,
    pointer: Rc<Cell<PointerState>>,
) -> anyhow::Result<Listener> {
    let win = window.clone();
    Listener::attach(window, "mousemove", move |ev: web::Event| {
        let Some(mouse) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let (width, height) = dom::inner_size(&win);
        pointer.set(input::pointer_ndc(
            mouse.client_x() as f64,
            mouse.client_y() as f64,
            width,
            height,
        ));
    })
}

/// Raise `flag` on window resize; the frame loop consumes it.
pub fn flag_resize(window: &web::Window, flag: Rc<Cell<bool>>) -> anyhow::Result<Listener> {
    Listener::attach(window, "resize", move |_ev: web::Event| flag.set(true))
}
