use crate::input;
use orbit_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> anyhow::Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    Ok((window, document))
}

/// The element the canvas is appended to: `#id` when given, else `<body>`.
pub fn container_element(
    document: &web::Document,
    id: Option<&str>,
) -> anyhow::Result<web::Element> {
    match id {
        Some(id) => document
            .get_element_by_id(id)
            .ok_or_else(|| anyhow::anyhow!("missing #{id}")),
        None => document
            .body()
            .map(web::Element::from)
            .ok_or_else(|| anyhow::anyhow!("no <body>")),
    }
}

pub fn create_canvas(
    document: &web::Document,
    container: &web::Element,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    canvas.set_attribute("aria-hidden", "true").ok();
    let style = canvas.style();
    for (name, value) in input::CANVAS_STYLE {
        style
            .set_property(name, value)
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    }
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(canvas)
}

/// Current window size and device pixel ratio.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let (width, height) = inner_size(window);
    input::viewport_for(width, height, window.device_pixel_ratio())
}

/// `innerWidth`/`innerHeight` in CSS pixels, zero when unavailable.
pub fn inner_size(window: &web::Window) -> (f64, f64) {
    let width = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w, h) = viewport.physical_size();
    canvas.set_width(w);
    canvas.set_height(h);
}
