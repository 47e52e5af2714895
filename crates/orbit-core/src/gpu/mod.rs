mod pipeline;
mod surface;
mod types;

pub use pipeline::*;
pub use surface::*;
pub use types::*;
