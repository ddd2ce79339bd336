//! Engine data structures: meshes, textures, and instances.
//!
//! This module contains the core data types for scene representation:
//!
//! - `mesh` contains mesh and material definitions plus box geometry generation
//! - `texture` contains the GPU texture wrapper and creation utilities
//! - `instance` holds per-instance transformation data

pub mod instance;
pub mod mesh;
pub mod texture;
