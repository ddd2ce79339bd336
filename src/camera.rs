//! Camera types and uniforms for view/projection.
//!
//! The viewer is split into a [`Camera`] holding the world-space position and
//! a [`Projection`] holding the perspective frustum. Both feed into
//! [`CameraUniform`], the packed matrix data the shaders read.

use wgpu::util::DeviceExt;

#[rustfmt::skip]
pub const OPENGL_TO_WGPU_MATRIX: cgmath::Matrix4<f32> = cgmath::Matrix4::new(
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 0.5, 0.0,
    0.0, 0.0, 0.5, 1.0,
);

/// The viewer's position. The camera looks down the negative Z axis,
/// toward the scene origin.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub position: cgmath::Point3<f32>,
}

impl Camera {
    pub fn new<P: Into<cgmath::Point3<f32>>>(position: P) -> Self {
        Self {
            position: position.into(),
        }
    }

    pub fn calc_matrix(&self) -> cgmath::Matrix4<f32> {
        cgmath::Matrix4::look_to_rh(
            self.position,
            -cgmath::Vector3::unit_z(),
            cgmath::Vector3::unit_y(),
        )
    }
}

/// The perspective frustum: vertical field of view, aspect ratio and the
/// near/far clip planes. `aspect` is surface width over height.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    aspect: f32,
    fovy: cgmath::Deg<f32>,
    znear: f32,
    zfar: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32, fovy: cgmath::Deg<f32>, znear: f32, zfar: f32) -> Self {
        Self {
            aspect: width as f32 / height as f32,
            fovy,
            znear,
            zfar,
        }
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height as f32;
    }

    pub fn calc_matrix(&self) -> cgmath::Matrix4<f32> {
        OPENGL_TO_WGPU_MATRIX * cgmath::perspective(self.fovy, self.aspect, self.znear, self.zfar)
    }
}

/// The camera data as the shaders see it.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    view_position: [f32; 4],
    view_proj: [[f32; 4]; 4],
}

impl CameraUniform {
    pub fn new() -> Self {
        use cgmath::SquareMatrix;
        Self {
            view_position: [0.0; 4],
            view_proj: cgmath::Matrix4::identity().into(),
        }
    }

    pub fn update_view_proj(&mut self, camera: &Camera, projection: &Projection) {
        self.view_position = camera.position.to_homogeneous().into();
        self.view_proj = (projection.calc_matrix() * camera.calc_matrix()).into();
    }
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

/// All camera GPU state in one place: the camera itself, its uniform and
/// the buffer/bind group the render pass consumes.
#[derive(Debug)]
pub struct CameraResources {
    pub camera: Camera,
    pub uniform: CameraUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

impl CameraResources {
    pub fn new(device: &wgpu::Device, camera: Camera, projection: &Projection) -> Self {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera, projection);

        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Camera Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout =
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
                label: Some("camera_bind_group_layout"),
            });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: Some("camera_bind_group"),
        });

        Self {
            camera,
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }

    /// Recompute the uniform and push it to the GPU. Called after the
    /// projection changes, e.g. on a window resize.
    pub fn write_uniform(&mut self, queue: &wgpu::Queue, projection: &Projection) {
        self.uniform.update_view_proj(&self.camera, projection);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[self.uniform]));
    }
}

#[cfg(test)]
mod tests {
    use cgmath::Deg;

    use super::*;

    #[test]
    fn identical_parameters_yield_identical_matrices() {
        let projection_a = Projection::new(800, 600, Deg(75.0), 0.1, 1000.0);
        let projection_b = Projection::new(800, 600, Deg(75.0), 0.1, 1000.0);
        let camera_a = Camera::new((0.0, 0.0, 5.0));
        let camera_b = Camera::new((0.0, 0.0, 5.0));

        let mut uniform_a = CameraUniform::new();
        let mut uniform_b = CameraUniform::new();
        uniform_a.update_view_proj(&camera_a, &projection_a);
        uniform_b.update_view_proj(&camera_b, &projection_b);

        assert_eq!(uniform_a.view_proj, uniform_b.view_proj);
        assert_eq!(uniform_a.view_position, uniform_b.view_position);
    }

    #[test]
    fn view_matrix_places_the_viewer_on_the_z_axis() {
        let camera = Camera::new((0.0, 0.0, 5.0));
        let view = camera.calc_matrix();
        let origin = view * cgmath::Vector4::new(0.0, 0.0, 0.0, 1.0);
        // The scene origin ends up 5 units in front of the camera.
        assert!((origin.z - -5.0).abs() < 1e-6);
    }

    #[test]
    fn resize_updates_the_aspect_ratio() {
        let mut projection = Projection::new(100, 100, Deg(75.0), 0.1, 1000.0);
        let square = projection.calc_matrix();
        projection.resize(200, 100);
        let wide = projection.calc_matrix();
        // Doubling the width halves the X scale of the projection.
        assert!((wide.x.x - square.x.x / 2.0).abs() < 1e-6);
    }
}
