//! GPU textures and texture creation utilities.
//!
//! This module provides [`Texture`], a wrapper around WGPU GPU texture resources,
//! and helper methods for creating the depth texture and for decoding textures
//! from image data with configurable sampling behavior.

use anyhow::*;
use image::GenericImageView;

/// Sampling configuration applied when a texture is created.
///
/// `address_mode` controls how coordinates outside [0, 1] are resolved and
/// `repeat` is the tiling factor multiplied onto texture coordinates at
/// sampling time, so a factor of (2, 2) tiles the image twice along each axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureOptions {
    pub address_mode: wgpu::AddressMode,
    pub repeat: [f32; 2],
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            address_mode: wgpu::AddressMode::Repeat,
            repeat: [1.0, 1.0],
        }
    }
}

/// A GPU texture with a view and optional sampler.
///
/// Wraps WGPU texture objects along with associated views and samplers.
/// Typically created via [`from_bytes`](Self::from_bytes) or via
/// [`create_depth_texture`](Self::create_depth_texture). The `repeat`
/// factor travels with the texture so materials can pick it up when
/// building their uniforms.
#[derive(Debug)]
pub struct Texture {
    #[allow(unused)]
    pub texture: wgpu::Texture,
    pub view: wgpu::TextureView,
    pub sampler: Option<wgpu::Sampler>,
    pub repeat: [f32; 2],
}

impl Texture {
    /// Standard depth buffer texture format (32-bit float).
    pub const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

    /// Create a depth texture for depth-testing during rendering.
    ///
    /// The returned texture is suitable for use as a `RENDER_ATTACHMENT`
    /// in render passes. `size` is [width, height] in pixels, `label` is
    /// the debug label for the GPU resource.
    pub fn create_depth_texture(device: &wgpu::Device, size: [u32; 2], label: &str) -> Self {
        let size = wgpu::Extent3d {
            width: size[0].max(1),
            height: size[1].max(1),
            depth_or_array_layers: 1,
        };
        let desc = wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: Self::DEPTH_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[Self::DEPTH_FORMAT],
        };
        let texture = device.create_texture(&desc);
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        Self {
            texture,
            view,
            sampler: None,
            repeat: [1.0, 1.0],
        }
    }

    /// Load a texture from raw byte data (image file contents).
    ///
    /// `bytes` is the raw image file data (PNG etc.), `label` the debug name
    /// for the GPU resource and `options` the sampling configuration.
    pub fn from_bytes(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        bytes: &[u8],
        label: &str,
        options: TextureOptions,
    ) -> Result<Self> {
        let img = image::load_from_memory(bytes)?;
        Self::from_image(device, queue, &img, Some(label), options)
    }

    pub fn from_image(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        img: &image::DynamicImage,
        label: Option<&str>,
        options: TextureOptions,
    ) -> Result<Self> {
        let dimensions = img.dimensions();
        let rgba = img.to_rgba8();

        let size = wgpu::Extent3d {
            width: dimensions.0,
            height: dimensions.1,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label,
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                aspect: wgpu::TextureAspect::All,
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
            },
            &rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * dimensions.0),
                rows_per_image: Some(dimensions.1),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = Some(device.create_sampler(&wgpu::SamplerDescriptor {
            address_mode_u: options.address_mode,
            address_mode_v: options.address_mode,
            address_mode_w: options.address_mode,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        }));

        Ok(Self {
            texture,
            view,
            sampler,
            repeat: options.repeat,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_tile_once() {
        let options = TextureOptions::default();
        assert_eq!(options.address_mode, wgpu::AddressMode::Repeat);
        assert_eq!(options.repeat, [1.0, 1.0]);
    }

    #[test]
    fn options_keep_the_requested_repeat_factor() {
        let options = TextureOptions {
            repeat: [2.0, 2.0],
            ..Default::default()
        };
        assert_eq!(options.repeat, [2.0, 2.0]);
        assert_eq!(options.address_mode, wgpu::AddressMode::Repeat);
    }
}
