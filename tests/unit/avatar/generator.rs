use super::*;
use crate::assets::store::{FeatureBitmap, PreparedFeatures};
use crate::color::pick::{ColorBounds, UnitRange};

fn spec(color: Rgba8, eyes: u32, nose: u32, mouth: u32) -> AvatarSpec {
    AvatarSpec {
        color,
        eyes,
        nose,
        mouth,
    }
}

#[test]
fn known_seeds_derive_known_avatars() {
    let g = Generator::default();
    let cases: [(&[u8], AvatarSpec); 6] = [
        (b"seed", spec(Rgba8::opaque(0, 189, 73), 1, 4, 1)),
        (b"", spec(Rgba8::opaque(255, 139, 195), 3, 1, 2)),
        (b"seed1", spec(Rgba8::opaque(251, 118, 110), 7, 4, 4)),
        (b"seed2", spec(Rgba8::opaque(255, 91, 153), 0, 7, 0)),
        (&[0], spec(Rgba8::opaque(156, 184, 21), 1, 5, 1)),
        (&[7], spec(Rgba8::opaque(255, 176, 71), 1, 4, 0)),
    ];
    for (seed, expected) in cases {
        assert_eq!(g.derive(seed).unwrap(), expected, "seed {seed:?}");
    }
}

#[test]
fn fixed_color_keeps_feature_choices() {
    let g = Generator::default();
    let fixed = Rgba8::opaque(64, 128, 192);
    for i in 0u8..32 {
        let auto = g.derive(&[i]).unwrap();
        let manual = g.derive_with_color(&[i], fixed).unwrap();
        assert_eq!(manual.color, fixed);
        assert_eq!(
            (auto.eyes, auto.nose, auto.mouth),
            (manual.eyes, manual.nose, manual.mouth)
        );
    }
}

#[test]
fn color_bounds_change_color_but_not_features() {
    let cfg = GeneratorConfig {
        colors: ColorBounds {
            saturation: UnitRange::new(0.0, 0.0).unwrap(),
            value: UnitRange::new(0.2, 0.3).unwrap(),
        },
    };
    let muted = Generator::new(cfg).unwrap().derive(b"seed").unwrap();
    let vivid = Generator::default().derive(b"seed").unwrap();
    assert_ne!(muted.color, vivid.color);
    assert_eq!(
        (muted.eyes, muted.nose, muted.mouth),
        (vivid.eyes, vivid.nose, vivid.mouth)
    );
}

#[test]
fn invalid_config_is_rejected() {
    let cfg = GeneratorConfig {
        colors: ColorBounds {
            saturation: UnitRange { min: 1.0, max: 0.0 },
            value: UnitRange { min: 0.5, max: 0.9 },
        },
    };
    assert!(matches!(
        Generator::new(cfg),
        Err(AdorableError::Validation(_))
    ));
}

#[test]
fn render_rejects_out_of_range_variants() {
    let g = Generator::default();
    let err = g
        .render(&spec(Rgba8::opaque(0, 0, 0), 0, 8, 0))
        .unwrap_err();
    assert!(matches!(err, AdorableError::Validation(_)));
    assert!(err.to_string().contains("nose"));
}

#[test]
fn render_uses_bitmap_size_and_is_opaque() {
    let g = Generator::default();
    let canvas = g.render(&g.derive(b"seed").unwrap()).unwrap();
    assert_eq!((canvas.width, canvas.height), (200, 200));
    assert!(canvas.data.chunks_exact(4).all(|px| px[3] == 255));
    assert_eq!(canvas.pixel(0, 0), Some([0, 189, 73, 255]));
}

#[test]
fn prepared_store_renders_identically() {
    let prepared = Arc::new(PreparedFeatures::bundled().unwrap());
    let a = Generator::with_store(GeneratorConfig::default(), prepared).unwrap();
    let b = Generator::default();
    assert_eq!(a.from_seed(b"seed").unwrap(), b.from_seed(b"seed").unwrap());
}

struct Recording(std::sync::Mutex<Vec<(FeatureCategory, u32)>>);

impl FeatureStore for Recording {
    fn feature(&self, category: FeatureCategory, index: u32) -> AdorableResult<FeatureBitmap> {
        self.0.lock().unwrap().push((category, index));
        BundledFeatures.feature(category, index)
    }
}

#[test]
fn png_path_resolves_features_in_draw_order() {
    let store = Arc::new(Recording(std::sync::Mutex::new(Vec::new())));
    let g = Generator::with_store(GeneratorConfig::default(), store.clone()).unwrap();
    g.from_seed(b"seed").unwrap();
    assert_eq!(
        *store.0.lock().unwrap(),
        [
            (FeatureCategory::Eyes, 1),
            (FeatureCategory::Nose, 4),
            (FeatureCategory::Mouth, 1)
        ]
    );
}

#[test]
fn png_path_matches_derive_then_render() {
    let g = Generator::default();
    let fixed = Rgba8::opaque(64, 128, 192);
    let seeds: [&[u8]; 4] = [b"seed", b"", b"seed1", &[7]];
    for seed in seeds {
        let spec = g.derive(seed).unwrap();
        assert_eq!(
            g.from_seed(seed).unwrap(),
            encode_png(&g.render(&spec).unwrap()).unwrap()
        );

        let spec = g.derive_with_color(seed, fixed).unwrap();
        assert_eq!(
            g.from_seed_with_color(seed, fixed).unwrap(),
            encode_png(&g.render(&spec).unwrap()).unwrap()
        );
    }
}

struct Broken;

impl FeatureStore for Broken {
    fn feature(&self, category: FeatureCategory, index: u32) -> AdorableResult<FeatureBitmap> {
        Err(AdorableError::asset(format!(
            "corrupt {}",
            category.asset_name(index)
        )))
    }
}

#[test]
fn asset_failures_surface_as_errors() {
    let g = Generator::with_store(GeneratorConfig::default(), Arc::new(Broken)).unwrap();
    let err = g.from_seed(b"seed").unwrap_err();
    assert!(matches!(err, AdorableError::Asset(_)));
    assert!(err.to_string().contains("eyes1.png"));
}

#[test]
fn random_seeds_are_fresh() {
    let a = random_seed().unwrap();
    let b = random_seed().unwrap();
    assert_ne!(a, b);
}
