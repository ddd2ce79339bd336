//! Light configuration and the GPU resources that carry it.
//!
//! Two light kinds exist: a colour-only ambient light and a positioned spot
//! light. Both are static configuration; they are composed into one
//! [`LightsUniform`] that is written to the GPU once at startup.

use wgpu::util::DeviceExt;

/// Uniform, non-directional illumination applied to every surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
}

/// A positioned, directional light. `cast_shadow` mirrors the upstream
/// scene description; no shadow pass consumes it yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotLight {
    pub color: [f32; 3],
    pub position: [f32; 3],
    pub cast_shadow: bool,
}

/// A light a scene can hold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    Ambient(AmbientLight),
    Spot(SpotLight),
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform {
    ambient_color: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    _padding: u32,
    spot_position: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    _padding2: u32,
    spot_color: [f32; 3],
    // Due to uniforms requiring 16 byte (4 float) spacing, we need to use a padding field here
    _padding3: u32,
}

impl LightsUniform {
    /// Fold a light list into the uniform. Lights of a kind the shader has
    /// no slot for are ignored; a later light of the same kind replaces an
    /// earlier one.
    pub fn compose(lights: &[Light]) -> Self {
        let mut uniform: Self = bytemuck::Zeroable::zeroed();
        for light in lights {
            match light {
                Light::Ambient(ambient) => uniform.ambient_color = ambient.color,
                Light::Spot(spot) => {
                    uniform.spot_position = spot.position;
                    uniform.spot_color = spot.color;
                }
            }
        }
        uniform
    }
}

pub fn mk_buffer(device: &wgpu::Device, uniform: LightsUniform) -> wgpu::Buffer {
    device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("Light Buffer"),
        contents: bytemuck::cast_slice(&[uniform]),
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
    })
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: None,
    })
}

pub fn mk_bind_group(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    light_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        layout: bind_group_layout,
        entries: &[wgpu::BindGroupEntry {
            binding: 0,
            resource: light_buffer.as_entire_binding(),
        }],
        label: None,
    })
}

/// The light uniform together with its buffer and bind group.
#[derive(Debug)]
pub struct LightResources {
    pub uniform: LightsUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl LightResources {
    pub fn new(device: &wgpu::Device, uniform: LightsUniform) -> Self {
        let buffer = mk_buffer(device, uniform);
        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = mk_bind_group(device, &bind_group_layout, &buffer);
        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Replace the uniform and push it to the GPU.
    pub fn write(&mut self, queue: &wgpu::Queue, uniform: LightsUniform) {
        self.uniform = uniform;
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_three_padded_vec3s() {
        assert_eq!(std::mem::size_of::<LightsUniform>(), 48);
    }

    #[test]
    fn compose_maps_each_light_to_its_slot() {
        let lights = [
            Light::Ambient(AmbientLight {
                color: [1.0, 1.0, 1.0],
            }),
            Light::Spot(SpotLight {
                color: [1.0, 1.0, 1.0],
                position: [100.0, 1000.0, 1000.0],
                cast_shadow: true,
            }),
        ];
        let uniform = LightsUniform::compose(&lights);
        assert_eq!(uniform.ambient_color, [1.0, 1.0, 1.0]);
        assert_eq!(uniform.spot_position, [100.0, 1000.0, 1000.0]);
        assert_eq!(uniform.spot_color, [1.0, 1.0, 1.0]);
    }

    #[test]
    fn compose_without_lights_is_dark() {
        let uniform = LightsUniform::compose(&[]);
        assert_eq!(uniform, bytemuck::Zeroable::zeroed());
    }
}
