pub use log;

pub mod logging;
pub use logging::*;

mod rect;
pub use rect::*;

mod vec2;
pub use vec2::*;

mod vec3;
pub use vec3::*;
