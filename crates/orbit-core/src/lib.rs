pub mod adjacency;
pub mod constants;
pub mod error;
pub mod field;
pub mod geometry;
pub mod gpu;
pub mod lifecycle;
pub mod params;
pub mod pointer;
pub mod state;

pub use adjacency::*;
pub use constants::*;
pub use error::*;
pub use field::*;
pub use geometry::*;
pub use lifecycle::*;
pub use params::*;
pub use pointer::*;
pub use state::*;

// Shaders bundled as string constants
pub static FIELD_WGSL: &str = include_str!("../shaders/field.wgsl");
