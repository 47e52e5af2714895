// Pure input and sizing helpers. Kept free of `web_sys` so host-side tests can
// `include!` this file.

use orbit_core::{PointerState, Viewport};

/// Map a `mousemove` client position to NDC against the window's inner size.
#[inline]
pub fn pointer_ndc(
    client_x: f64,
    client_y: f64,
    inner_width: f64,
    inner_height: f64,
) -> PointerState {
    if !(inner_width.is_finite() && inner_height.is_finite()) {
        return PointerState::default();
    }
    PointerState::from_client(
        client_x as f32,
        client_y as f32,
        inner_width as f32,
        inner_height as f32,
    )
}

/// Viewport for a CSS-pixel area; non-finite or negative sizes collapse to zero.
#[inline]
pub fn viewport_for(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> Viewport {
    let clean = |v: f64| if v.is_finite() { v.max(0.0) } else { 0.0 };
    Viewport::new(clean(css_width), clean(css_height), device_pixel_ratio)
}

/// Normalize the optional container id passed from JavaScript.
///
/// Blank ids mean "use `<body>`".
pub fn container_id(raw: Option<String>) -> Option<String> {
    raw.map(|id| id.trim().trim_start_matches('#').to_string())
        .filter(|id| !id.is_empty())
}

/// Inline style for the background canvas: fixed behind the page and
/// transparent to pointer events.
pub const CANVAS_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("inset", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("pointer-events", "none"),
    ("z-index", "-1"),
    ("display", "block"),
];

/// Lifecycle of the animation-frame loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoopState {
    #[default]
    Idle,
    Running,
    /// The frame callback asked to stop.
    Stopped,
    Cancelled,
}

impl LoopState {
    /// State after a frame callback returned `keep_going`.
    pub fn after_frame(self, keep_going: bool) -> Self {
        match self {
            LoopState::Running if keep_going => LoopState::Running,
            LoopState::Running => LoopState::Stopped,
            other => other,
        }
    }

    pub fn is_running(self) -> bool {
        self == LoopState::Running
    }
}

/// Runs `cleanup` on drop unless [`Rollback::disarm`] was called first.
pub struct Rollback<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> Rollback<F> {
    pub fn new(cleanup: F) -> Self {
        Self {
            cleanup: Some(cleanup),
        }
    }

    pub fn disarm(mut self) {
        self.cleanup = None;
    }
}

impl<F: FnOnce()> Drop for Rollback<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}
