pub mod format;
pub mod gemini;
pub mod generation;
pub mod image;
pub mod mode;
pub mod preset;

pub use format::*;
pub use gemini::*;
pub use generation::*;
pub use image::*;
pub use mode::*;
pub use preset::*;
