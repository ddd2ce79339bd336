/**
 * This module contains all logic for loading textures from external resources.
 */
pub mod texture;

pub use texture::load_texture;
