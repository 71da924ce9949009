//! Integration tests for cdfscape.

use cdfscape::*;
use proptest::prelude::*;

fn desktop() -> Viewport {
    Viewport::new(1440, 900, 2.0).expect("valid viewport")
}

#[test]
fn test_continuous_minimal_grid_scenario() {
    let field = sample_continuous(&Grid::new(1, 1, 20.0, 20.0).unwrap()).unwrap();
    let corners: Vec<(f32, f32, f32)> = field.iter().map(|s| (s.x, s.z, s.height)).collect();

    assert_eq!(corners.len(), 4);
    for (x, z, h) in corners {
        if x == 10.0 && z == 10.0 {
            assert!((h - 2.0).abs() < 1e-6, "far corner should reach 2, got {h}");
        } else {
            assert_eq!(h, 0.0, "corner ({x}, {z}) should be 0");
        }
    }
}

#[test]
fn test_discrete_two_step_scenario() {
    let field = sample_discrete(2, 1.0).unwrap();
    let heights: Vec<f32> = field.heights().collect();
    assert_eq!(heights, vec![0.375, 0.75, 0.75, 1.5]);
}

#[test]
fn test_discrete_zero_steps_is_invalid() {
    let err = sample_discrete(0, 1.0).unwrap_err();
    assert!(matches!(err, CdfscapeError::InvalidArgument(_)));
}

#[test]
fn test_mode_switch_produces_independent_fields() {
    let options = SurfaceOptions::default();
    let first = sample(SampleMode::Continuous, &options).unwrap();
    let copy = first.clone();
    let second = sample(SampleMode::Discrete, &options).unwrap();
    let third = sample(SampleMode::Continuous, &options).unwrap();

    assert_eq!(first, copy);
    assert_eq!(first, third);
    assert_ne!(first.len(), second.len());
}

#[test]
fn test_scene_from_json_options() {
    let options = SceneOptions::from_json_str(
        r#"{
            "grid_size": 5,
            "initial_mode": "discrete",
            "surface": { "discrete": { "steps": 4, "step_size": 2.0 } }
        }"#,
    )
    .unwrap();
    let scene = SceneAssembler::new(options, desktop()).unwrap();

    assert_eq!(scene.mode(), SampleMode::Discrete);
    match scene.cdf() {
        CdfLayer::Discrete(steps) => {
            assert_eq!(steps.boxes().len(), 16);
            assert!((steps.boxes()[0].size.x - 1.8).abs() < 1e-6);
        }
        CdfLayer::Continuous(_) => panic!("expected discrete layer"),
    }
    assert_eq!(scene.ticks().len(), 30);
    assert_eq!(scene.axes().titles()[0].position, Vec3::new(7.0, 0.0, 0.0));
}

#[test]
fn test_invalid_viewport_and_options_rejected() {
    assert!(Viewport::new(0, 0, 1.0).is_err());

    let options = SceneOptions {
        tick_size: 0.0,
        ..SceneOptions::default()
    };
    let err = SceneAssembler::new(options, desktop()).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[test]
fn test_mobile_scene_profile() {
    let scene = SceneAssembler::with_defaults(Viewport::new(375, 667, 3.0).unwrap()).unwrap();
    assert_eq!(scene.viewport_class(), ViewportClass::Mobile);
    assert_eq!(scene.camera().position, Vec3::splat(15.0));
    assert_eq!(scene.camera().pixel_ratio, 2.0);
    assert!(!scene.controls().enable_pan);
    assert_eq!(scene.label_style().font(), "bold 12px monospace");
    assert!(scene.touch_policy().prevent_default_on_move);
}

#[test]
fn test_export_cdf_ply() {
    let mut scene = SceneAssembler::with_defaults(desktop()).unwrap();
    scene.set_mode(SampleMode::Discrete).unwrap();

    let path = std::env::temp_dir().join(format!("cdfscape_export_{}.ply", std::process::id()));
    scene.export_cdf_ply(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert!(text.contains("element vertex 9600"));
    assert!(text.contains("element face 4800"));
}

#[test]
fn test_gpu_vertices_match_mesh() {
    let scene = SceneAssembler::with_defaults(desktop()).unwrap();
    let mesh = scene.cdf().mesh();
    let verts = mesh.gpu_vertices();
    assert_eq!(verts.len(), mesh.num_vertices());
    assert_eq!(
        vertex_bytes(&verts).len(),
        verts.len() * std::mem::size_of::<MeshVertex>()
    );
    assert_eq!(mesh.gpu_indices().len(), mesh.num_faces() * 3);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_toggle_parity(toggles in 0usize..6) {
        let mut scene = SceneAssembler::with_defaults(desktop()).unwrap();
        for _ in 0..toggles {
            scene.toggle().unwrap();
        }
        let expected = if toggles % 2 == 0 {
            SampleMode::Continuous
        } else {
            SampleMode::Discrete
        };
        prop_assert_eq!(scene.mode(), expected);
        prop_assert_eq!(scene.cdf().mode(), expected);
        prop_assert_eq!(scene.cdf_generation(), toggles as u64);
    }

    #[test]
    fn prop_resize_tracks_class(width in 1u32..3000, height in 1u32..3000) {
        let mut scene = SceneAssembler::with_defaults(desktop()).unwrap();
        let viewport = Viewport::new(width, height, 1.0).unwrap();
        scene.resize(viewport);
        let class = ViewportClass::from_width(width);
        prop_assert_eq!(scene.viewport_class(), class);
        prop_assert_eq!(scene.controls(), class.control_profile());
        prop_assert_eq!(scene.label_style(), class.label_style());
    }
}
