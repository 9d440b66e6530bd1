pub mod camera;
pub mod instance;
pub mod packed;
pub mod traits;

pub use traits::{Renderer, FrameData};
