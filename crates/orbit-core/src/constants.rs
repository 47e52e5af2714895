// Shared visual tuning constants used by both web and native frontends.

// Field layout
pub const POINT_COUNT: usize = 800;
pub const SPHERE_RADIUS: f32 = 22.0;
pub const CONNECTION_DIST: f32 = 4.5; // base-position distance below which points are joined
pub const MAX_OUT_DEGREE: usize = 3; // edges a point may start while scanning higher indices

// Interaction
pub const CURSOR_SCALE: f32 = 25.0; // normalized pointer -> world units
pub const PROXIMITY_RADIUS: f32 = 8.0; // planar distance where extrusion reaches zero
pub const MAX_EXTRUSION: f32 = 8.0; // spike height right under the cursor
pub const HIGHLIGHT_THRESHOLD: f32 = 1.0; // extrusion above which a point lights up

// Per-frame easing (fixed factors, not frame-time corrected)
pub const POSITION_SMOOTHING: f32 = 0.1;
pub const COLOR_EASE: f32 = 0.05;
pub const HIGHLIGHT_EASE: f32 = 1.0; // 1.0 snaps to the highlight color

// Container rotation
pub const YAW_RATE: f32 = 0.12; // rad/s, 0.002 rad per frame at 60 Hz
pub const TILT_AMPLITUDE: f32 = 0.1; // rad
pub const TILT_FREQUENCY: f32 = 0.15; // rad/s fed into sin()

// Palette
pub const BASE_COLOR: [f32; 3] = [0.231_372_55, 0.509_803_95, 0.964_705_9]; // #3b82f6 royal blue
pub const HIGHLIGHT_COLOR: [f32; 3] = [0.980_392_16, 0.8, 0.082_352_94]; // #facc15 yellow
pub const LINE_COLOR: [f32; 4] = [BASE_COLOR[0], BASE_COLOR[1], BASE_COLOR[2], 0.2];

// Sprites
pub const POINT_SIZE: f32 = 1.0; // per-point size scalar
pub const POINT_WORLD_SIZE: f32 = 0.45; // billboard edge in world units at size 1.0
pub const FADE_NEAR: f32 = 10.0; // view depth with full alpha
pub const FADE_FAR: f32 = 50.0; // view depth with zero alpha

// Camera
pub const CAMERA_Z: f32 = 60.0;
pub const CAMERA_FOVY_DEG: f32 = 55.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 100.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Clear colors
pub const NATIVE_CLEAR: [f64; 4] = [0.02, 0.03, 0.06, 1.0];
