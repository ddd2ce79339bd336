#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn resolved_texture_adds_exactly_one_cube() {
    use spincube::{data_structures::texture::Texture, pipelines::light::Light, scene};

    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(async {
        let (device, queue) = common::test_utils::headless_device().await;
        let bytes = common::test_utils::png_fixture(64, 64);
        let texture =
            Texture::from_bytes(&device, &queue, &bytes, "fixture", scene::cube_texture_options());

        let scene = scene::metal_cube_scene(&device, texture);

        assert_eq!(scene.nodes().len(), 1);
        let ambient = scene
            .lights()
            .iter()
            .filter(|l| matches!(l, Light::Ambient(_)))
            .count();
        let spots = scene
            .lights()
            .iter()
            .filter(|l| matches!(l, Light::Spot(_)))
            .count();
        assert_eq!(ambient, 1);
        assert_eq!(spots, 1);
    });
}

#[test]
#[cfg(feature = "integration-tests")]
fn unresolvable_texture_leaves_the_scene_lights_only() {
    use spincube::{resources::load_texture, scene};

    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(async {
        let (device, queue) = common::test_utils::headless_device().await;
        let texture = load_texture(
            "definitely-not-on-disk.png",
            scene::cube_texture_options(),
            &device,
            &queue,
        )
        .await;
        assert!(texture.is_err());

        let scene = scene::metal_cube_scene(&device, texture);

        assert!(scene.nodes().is_empty());
        assert_eq!(scene.lights().len(), 2);
    });
}

#[test]
#[cfg(feature = "integration-tests")]
fn repeat_factor_ignores_the_image_dimensions() {
    use spincube::{data_structures::texture::Texture, scene};

    let runtime = tokio::runtime::Runtime::new().unwrap();
    runtime.block_on(async {
        let (device, queue) = common::test_utils::headless_device().await;
        for (width, height) in [(16, 16), (64, 128)] {
            let bytes = common::test_utils::png_fixture(width, height);
            let texture = Texture::from_bytes(
                &device,
                &queue,
                &bytes,
                "fixture",
                scene::cube_texture_options(),
            )
            .expect("fixture png decodes");
            assert_eq!(texture.repeat, [2.0, 2.0]);
        }
    });
}
