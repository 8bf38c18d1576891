pub mod anchor;
pub mod assets;
pub mod markers;
pub mod overlay;
pub mod scene;
pub mod session;
pub mod settings;
pub mod simulator;

/// Physical (width, height) of a reference marker, in metres
pub type PhysicalSize = (f32, f32);
