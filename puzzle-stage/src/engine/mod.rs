pub mod colour;

pub mod assets;
pub mod bricks;
pub mod camera;
pub mod core;
pub mod loading;
pub mod scene;
pub mod stage;

#[cfg(test)]
pub(crate) mod test_support;
