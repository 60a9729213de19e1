//! CPU-side meshes for the primitive shapes the scene is built from.

pub mod mesh;
pub mod primitives;
