//! Render pipeline definitions.
//!
//! - `basic` builds the textured cube pipeline and the shared pipeline constructor
//! - `light` holds light configuration, the lights uniform and its GPU resources

pub mod basic;
pub mod light;

/// All pipelines the renderer switches between. There is exactly one today;
/// the struct keeps the plumbing in one place.
#[derive(Debug)]
pub struct Pipelines {
    pub cube: wgpu::RenderPipeline,
}

impl Pipelines {
    pub fn new(
        device: &wgpu::Device,
        config: &wgpu::SurfaceConfiguration,
        light_bind_group_layout: &wgpu::BindGroupLayout,
        camera_bind_group_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        Self {
            cube: basic::mk_cube_pipeline(
                device,
                config,
                light_bind_group_layout,
                camera_bind_group_layout,
            ),
        }
    }
}
