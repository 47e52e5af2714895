#![cfg(target_arch = "wasm32")]
//! WebAssembly entry points: mount the point-field background into a page and
//! tear it down again.

mod dom;
mod events;
mod frame;
mod input;
mod render;

use instant::Instant;
use orbit_core::{FieldParams, FrameInput, Orbit, PointerState};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

type Slot = Rc<RefCell<Option<Orbit<render::WebHost>>>>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    Ok(())
}

/// Handle returned to JavaScript by `mountBackground`.
#[wasm_bindgen]
pub struct OrbitBackground {
    slot: Slot,
    frames: frame::FrameLoop,
}

#[wasm_bindgen]
impl OrbitBackground {
    /// Stop the loop, remove listeners and free GPU resources. Idempotent.
    pub fn unmount(&self) {
        let orbit = self.slot.borrow_mut().take();
        if let Some(mut orbit) = orbit {
            orbit.unmount();
        }
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// False once the loop stopped on an error, even before `unmount()`.
    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.frames.is_running()
    }
}

impl Drop for OrbitBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Append the background canvas to `#container_id` (or `<body>`) and start
/// animating. Resolves to the handle, or `null` when no graphics context is
/// available.
#[wasm_bindgen(js_name = mountBackground)]
pub async fn mount_background(container_id: Option<String>) -> JsValue {
    match mount(container_id).await {
        Ok(handle) => JsValue::from(handle),
        Err(e) => {
            log::error!("[orbit] mount failed: {:#}", e);
            JsValue::NULL
        }
    }
}

async fn mount(container_id: Option<String>) -> anyhow::Result<OrbitBackground> {
    let (window, document) = dom::window_document()?;
    let container_id = input::container_id(container_id);
    let container = dom::container_element(&document, container_id.as_deref())?;
    let canvas = dom::create_canvas(&document, &container)?;
    let orphan = canvas.clone();
    let rollback = input::Rollback::new(move || orphan.remove());

    let viewport = dom::window_viewport(&window);
    dom::sync_canvas_backing_size(&canvas, &viewport);
    let gpu = render::init_gpu(&canvas).await?;

    let frames = frame::FrameLoop::new(window.clone());
    let mut host = render::WebHost::new(canvas, gpu, frames.clone());
    let pointer = Rc::new(Cell::new(PointerState::default()));
    let resized = Rc::new(Cell::new(false));
    host.listen(events::track_pointer(&window, pointer.clone())?);
    host.listen(events::flag_resize(&window, resized.clone())?);

    let orbit = Orbit::mount(FieldParams::default(), viewport, host)?;
    rollback.disarm();
    let slot: Slot = Rc::new(RefCell::new(Some(orbit)));

    let started = Instant::now();
    let frame_slot = slot.clone();
    frames.start(move || {
        let mut guard = frame_slot.borrow_mut();
        let Some(orbit) = guard.as_mut() else {
            return false;
        };
        if resized.replace(false) {
            orbit.resize(dom::window_viewport(&window));
        }
        let input = FrameInput::new(started.elapsed().as_secs_f32(), pointer.get());
        match orbit.tick(input) {
            Ok(()) => true,
            Err(e) => {
                log::error!("[orbit] {}", e);
                false
            }
        }
    });

    Ok(OrbitBackground { slot, frames })
}
