/// Request a headless device: no window, no surface. Integration tests only
/// exercise resource creation and scene assembly, so any adapter will do.
pub async fn headless_device() -> (wgpu::Device, wgpu::Queue) {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::default(),
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .expect("No adapter is available for integration tests.");
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("Integration Test Device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            memory_hints: Default::default(),
            trace: wgpu::Trace::Off,
        })
        .await
        .expect("Failed to request a headless device.")
}

/// Encode a solid-colour PNG of the given size in memory, so tests do not
/// depend on files shipped next to the binary.
pub fn png_fixture(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([128, 128, 140, 255]));
    let mut bytes = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut bytes, image::ImageFormat::Png)
        .expect("in-memory png encode cannot fail");
    bytes.into_inner()
}
