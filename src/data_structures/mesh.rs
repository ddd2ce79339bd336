//! Meshes, materials and generated box geometry.
//!
//! A [`Mesh`] owns the GPU vertex/index buffers of one piece of geometry and a
//! [`Material`] owns the texture bindings used to shade it. The only geometry
//! this crate produces is a box, generated by [`box_geometry`] with four
//! vertices per face so each face carries its own normals and full
//! texture-coordinate range.

use wgpu::util::DeviceExt;

use crate::data_structures::texture::Texture;

/// Anything that can describe its vertex buffer layout to a pipeline.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex for MeshVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

// One row per face: outward normal and the four corners in counter-clockwise
// order as seen from outside the box, matching the pipeline's Ccw front face.
const BOX_FACES: [([f32; 3], [[f32; 3]; 4]); 6] = [
    ([0.0, 0.0, 1.0], [
        [-1.0, -1.0, 1.0],
        [1.0, -1.0, 1.0],
        [1.0, 1.0, 1.0],
        [-1.0, 1.0, 1.0],
    ]),
    ([0.0, 0.0, -1.0], [
        [1.0, -1.0, -1.0],
        [-1.0, -1.0, -1.0],
        [-1.0, 1.0, -1.0],
        [1.0, 1.0, -1.0],
    ]),
    ([1.0, 0.0, 0.0], [
        [1.0, -1.0, 1.0],
        [1.0, -1.0, -1.0],
        [1.0, 1.0, -1.0],
        [1.0, 1.0, 1.0],
    ]),
    ([-1.0, 0.0, 0.0], [
        [-1.0, -1.0, -1.0],
        [-1.0, -1.0, 1.0],
        [-1.0, 1.0, 1.0],
        [-1.0, 1.0, -1.0],
    ]),
    ([0.0, 1.0, 0.0], [
        [-1.0, 1.0, 1.0],
        [1.0, 1.0, 1.0],
        [1.0, 1.0, -1.0],
        [-1.0, 1.0, -1.0],
    ]),
    ([0.0, -1.0, 0.0], [
        [-1.0, -1.0, -1.0],
        [1.0, -1.0, -1.0],
        [1.0, -1.0, 1.0],
        [-1.0, -1.0, 1.0],
    ]),
];

const FACE_TEX_COORDS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

/// Generate box geometry with the given edge length, centered on the origin.
///
/// Returns 24 vertices (four per face, so normals stay per-face) and 36
/// indices forming two triangles per face.
pub fn box_geometry(edge: f32) -> (Vec<MeshVertex>, Vec<u32>) {
    let half = edge / 2.0;
    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, corners) in BOX_FACES {
        let base = vertices.len() as u32;
        for (corner, tex_coords) in corners.iter().zip(FACE_TEX_COORDS) {
            vertices.push(MeshVertex {
                position: [corner[0] * half, corner[1] * half, corner[2] * half],
                tex_coords,
                normal,
            });
        }
        indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    (vertices, indices)
}

/// GPU-resident geometry: vertex and index buffers plus the element count.
#[derive(Debug)]
pub struct Mesh {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub num_elements: u32,
}

impl Mesh {
    pub fn new(device: &wgpu::Device, name: &str, vertices: &[MeshVertex], indices: &[u32]) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Vertex Buffer", name)),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{} Index Buffer", name)),
            contents: bytemuck::cast_slice(indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            name: name.to_string(),
            vertex_buffer,
            index_buffer,
            num_elements: indices.len() as u32,
        }
    }
}

/// Texture-coordinate scaling passed to the fragment shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    repeat: [f32; 2],
    // Uniforms require 16 byte spacing, pad the vec2 out to one full row
    _padding: [f32; 2],
}

/// A diffuse material: the texture, its sampler and the repeat uniform.
#[derive(Debug)]
pub struct Material {
    pub name: String,
    pub diffuse_texture: Texture,
    pub bind_group: wgpu::BindGroup,
}

impl Material {
    pub fn new(
        device: &wgpu::Device,
        name: &str,
        diffuse_texture: Texture,
        layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let uniform = MaterialUniform {
            repeat: diffuse_texture.repeat,
            _padding: [0.0, 0.0],
        };
        let uniform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Material Uniform Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM,
        });
        let sampler = diffuse_texture
            .sampler
            .as_ref()
            .expect("diffuse textures are created with a sampler");
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&diffuse_texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniform_buffer.as_entire_binding(),
                },
            ],
            label: Some(name),
        });
        Self {
            name: name.to_string(),
            diffuse_texture,
            bind_group,
        }
    }
}

/// Render-pass extension for drawing a mesh with its material and the shared
/// camera and light bindings.
pub trait DrawMesh<'a> {
    fn draw_mesh_instanced(
        &mut self,
        mesh: &'a Mesh,
        material: &'a Material,
        instances: std::ops::Range<u32>,
        camera_bind_group: &'a wgpu::BindGroup,
        light_bind_group: &'a wgpu::BindGroup,
    );
}

impl<'a, 'b> DrawMesh<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_mesh_instanced(
        &mut self,
        mesh: &'b Mesh,
        material: &'b Material,
        instances: std::ops::Range<u32>,
        camera_bind_group: &'b wgpu::BindGroup,
        light_bind_group: &'b wgpu::BindGroup,
    ) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.set_bind_group(0, &material.bind_group, &[]);
        self.set_bind_group(1, camera_bind_group, &[]);
        self.set_bind_group(2, light_bind_group, &[]);
        self.draw_indexed(0..mesh.num_elements, 0, instances);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_has_four_vertices_per_face() {
        let (vertices, indices) = box_geometry(2.4);
        assert_eq!(vertices.len(), 24);
        assert_eq!(indices.len(), 36);
    }

    #[test]
    fn box_extent_matches_the_edge_length() {
        let edge = 2.4;
        let (vertices, _) = box_geometry(edge);
        for axis in 0..3 {
            let min = vertices
                .iter()
                .map(|v| v.position[axis])
                .fold(f32::INFINITY, f32::min);
            let max = vertices
                .iter()
                .map(|v| v.position[axis])
                .fold(f32::NEG_INFINITY, f32::max);
            assert!((max - min - edge).abs() < f32::EPSILON);
        }
    }

    #[test]
    fn box_tex_coords_cover_the_unit_square() {
        let (vertices, _) = box_geometry(1.0);
        for vertex in &vertices {
            assert!(vertex.tex_coords[0] >= 0.0 && vertex.tex_coords[0] <= 1.0);
            assert!(vertex.tex_coords[1] >= 0.0 && vertex.tex_coords[1] <= 1.0);
        }
    }

    #[test]
    fn box_indices_stay_in_range() {
        let (vertices, indices) = box_geometry(1.0);
        assert!(indices.iter().all(|&i| (i as usize) < vertices.len()));
    }
}
