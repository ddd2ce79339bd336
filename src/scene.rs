//! The scene: an add-only collection of mesh nodes and lights.
//!
//! A [`Scene`] is what the renderer traverses each frame. It never removes
//! children; lights are folded into one uniform, mesh nodes carry their own
//! instance buffers. [`metal_cube_scene`] assembles the one scene this
//! program shows: two white lights and, when its texture resolved, a
//! spinning metal cube.

use wgpu::util::DeviceExt;

use crate::{
    data_structures::{
        instance::Instance,
        mesh::{Material, Mesh, box_geometry},
        texture::{Texture, TextureOptions},
    },
    pipelines::light::{AmbientLight, Light, LightsUniform, SpotLight},
    resources::texture::diffuse_layout,
};

/// Radians added to both spin axes once per frame.
pub const SPIN_STEP: f32 = 0.01;
/// Edge length of the cube.
pub const CUBE_EDGE: f32 = 2.4;
/// The image resource the cube is wrapped in.
pub const CUBE_TEXTURE: &str = "metal003.png";
/// Tiling factor of the cube texture, fixed regardless of the image's size.
pub const CUBE_TEXTURE_REPEAT: [f32; 2] = [2.0, 2.0];

const LIGHT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
const SPOT_POSITION: [f32; 3] = [100.0, 1000.0, 1000.0];

/// Sampling configuration for the cube's texture: repeat-wrap on both axes
/// with a 2x2 tiling.
pub fn cube_texture_options() -> TextureOptions {
    TextureOptions {
        address_mode: wgpu::AddressMode::Repeat,
        repeat: CUBE_TEXTURE_REPEAT,
    }
}

/// Accumulated rotation around the X and Y axes, in radians.
///
/// The accumulators grow without bound; there is deliberately no wraparound,
/// and f32 keeps frame-to-frame increments exact far beyond any realistic
/// session length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spin {
    pub x: f32,
    pub y: f32,
}

impl Spin {
    pub fn advance(&mut self, step: f32) {
        self.x += step;
        self.y += step;
    }

    pub fn rotation(&self) -> cgmath::Quaternion<f32> {
        cgmath::Quaternion::from(cgmath::Euler::new(
            cgmath::Rad(self.x),
            cgmath::Rad(self.y),
            cgmath::Rad(0.0),
        ))
    }
}

/// One renderable object: geometry, material, and a single instance whose
/// rotation is driven by [`Spin`].
#[derive(Debug)]
pub struct MeshNode {
    pub mesh: Mesh,
    pub material: Material,
    pub instance: Instance,
    pub instance_buffer: wgpu::Buffer,
    pub spin: Spin,
}

impl MeshNode {
    pub fn new(device: &wgpu::Device, mesh: Mesh, material: Material) -> Self {
        let instance = Instance::new();
        let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Instance Buffer"),
            contents: bytemuck::cast_slice(&[instance.to_raw()]),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });
        Self {
            mesh,
            material,
            instance,
            instance_buffer,
            spin: Spin::default(),
        }
    }

    /// Build the textured cube node.
    pub fn cube(device: &wgpu::Device, texture: Texture) -> Self {
        let (vertices, indices) = box_geometry(CUBE_EDGE);
        let mesh = Mesh::new(device, "cube", &vertices, &indices);
        let layout = diffuse_layout(device);
        let material = Material::new(device, "cube material", texture, &layout);
        Self::new(device, mesh, material)
    }

    /// Advance the spin and fold it into the instance transform. The caller
    /// writes the buffer afterwards so the drawn frame reflects the new
    /// rotation.
    pub fn advance(&mut self, step: f32) {
        self.spin.advance(step);
        self.instance.rotation = self.spin.rotation();
    }

    pub fn write_to_buffer(&self, queue: &wgpu::Queue) {
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&[self.instance.to_raw()]),
        );
    }
}

/// All renderable and lightable objects. Children may be added at any time;
/// nothing is ever removed.
#[derive(Debug, Default)]
pub struct Scene {
    nodes: Vec<MeshNode>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: MeshNode) {
        self.nodes.push(node);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn nodes(&self) -> &[MeshNode] {
        &self.nodes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn lights_uniform(&self) -> LightsUniform {
        LightsUniform::compose(&self.lights)
    }

    /// Per-frame update: spin every node, then push the changed instance
    /// data to the GPU before the render pass reads it.
    pub fn advance(&mut self, queue: &wgpu::Queue) {
        for node in &mut self.nodes {
            node.advance(SPIN_STEP);
            node.write_to_buffer(queue);
        }
    }
}

/// Assemble the program's scene.
///
/// The lights go in unconditionally. The cube exists only on the success arm
/// of the texture load; on failure the cause is logged and the scene stays
/// lights-only.
pub fn metal_cube_scene(device: &wgpu::Device, texture: anyhow::Result<Texture>) -> Scene {
    let mut scene = Scene::new();
    scene.add_light(Light::Ambient(AmbientLight { color: LIGHT_COLOR }));
    scene.add_light(Light::Spot(SpotLight {
        color: LIGHT_COLOR,
        position: SPOT_POSITION,
        cast_shadow: true,
    }));
    match texture {
        Ok(texture) => scene.add_node(MeshNode::cube(device, texture)),
        Err(e) => log::error!(
            "could not load {}: {:#}. Rendering the scene without the cube.",
            CUBE_TEXTURE,
            e
        ),
    }
    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spin_accumulates_linearly() {
        let mut spin = Spin::default();
        for _ in 0..100 {
            spin.advance(SPIN_STEP);
        }
        assert!((spin.x - 1.0).abs() < 1e-5);
        assert!((spin.y - 1.0).abs() < 1e-5);
    }

    #[test]
    fn spin_is_strictly_monotonic() {
        let mut spin = Spin::default();
        let mut previous = spin;
        for _ in 0..1000 {
            spin.advance(SPIN_STEP);
            assert!(spin.x > previous.x);
            assert!(spin.y > previous.y);
            previous = spin;
        }
    }

    #[test]
    fn equal_spins_give_equal_rotations() {
        let mut a = Spin::default();
        let mut b = Spin::default();
        for _ in 0..42 {
            a.advance(SPIN_STEP);
            b.advance(SPIN_STEP);
        }
        assert_eq!(a.rotation(), b.rotation());
    }

    #[test]
    fn lights_can_join_an_empty_scene() {
        let mut scene = Scene::new();
        scene.add_light(Light::Ambient(AmbientLight { color: LIGHT_COLOR }));
        scene.add_light(Light::Spot(SpotLight {
            color: LIGHT_COLOR,
            position: SPOT_POSITION,
            cast_shadow: true,
        }));
        assert_eq!(scene.lights().len(), 2);
        assert!(scene.nodes().is_empty());
    }

    #[test]
    fn cube_texture_tiles_twice_per_axis() {
        let options = cube_texture_options();
        assert_eq!(options.repeat, [2.0, 2.0]);
        assert_eq!(options.address_mode, wgpu::AddressMode::Repeat);
    }
}
