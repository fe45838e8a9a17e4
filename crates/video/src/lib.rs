//! Camera capture for the gesture pipeline.
//!
//! [`VideoIn`] opens the first camera out of a list of candidates and hands out frames
//! with blocking reads. Backends implement [`VideoInDevice`].

mod error;
pub use error::*;

mod videoframe;
pub use videoframe::*;

pub mod videoin;
pub use videoin::{VideoIn, VideoInConfig, VideoInDevice};
