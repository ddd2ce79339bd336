//! spincube
//!
//! A minimal, cross-platform textured-cube renderer for native and WASM
//! targets. The crate constructs a scene with two lights and one
//! texture-mapped cube, then drives a per-frame rotate-and-render loop on
//! top of wgpu and winit. The surface is deliberately small: scene data,
//! GPU resource wrappers and one pipeline.
//!
//! High-level modules
//! - `app`: the winit application, startup sequencing and the render loop
//! - `camera`: camera types and uniforms for view/projection
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: engine data models (meshes, instances, textures)
//! - `pipelines`: the cube render pipeline and light resources
//! - `resources`: helpers to load textures and create GPU resources
//! - `scene`: the scene graph and the program's scene assembly
//!

pub mod app;
pub mod camera;
pub mod context;
pub mod data_structures;
pub mod pipelines;
pub mod resources;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use wgpu::*;
