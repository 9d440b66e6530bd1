pub mod rng;
pub mod scene;
pub mod transform;
