use super::*;
use crate::random::stream::KeyStream;

struct Sparse;

impl FeatureStore for Sparse {
    fn feature(&self, category: FeatureCategory, index: u32) -> AdorableResult<FeatureBitmap> {
        if category == FeatureCategory::Mouth && index == 7 {
            return Err(AdorableError::asset("gone"));
        }
        BundledFeatures.feature(category, index)
    }
}

struct Mismatched;

impl FeatureStore for Mismatched {
    fn feature(&self, category: FeatureCategory, _index: u32) -> AdorableResult<FeatureBitmap> {
        let side = if category == FeatureCategory::Nose { 3 } else { 2 };
        Ok(FeatureBitmap {
            width: side,
            height: side,
            rgba8: Arc::new(vec![0; (side * side * 4) as usize]),
        })
    }
}

#[test]
fn bundled_variants_decode_with_uniform_size() {
    let prepared = PreparedFeatures::bundled().unwrap();
    assert_eq!(prepared.dimensions(), (200, 200));
    for c in FeatureCategory::ALL {
        for i in 0..c.variants() {
            let bmp = prepared.feature(c, i).unwrap();
            assert_eq!(bmp.dimensions(), (200, 200));
            assert_eq!(bmp.rgba8.len(), 200 * 200 * 4);
        }
    }
}

#[test]
fn bundled_features_have_transparent_corners_and_opaque_strokes() {
    let bmp = BundledFeatures.feature(FeatureCategory::Eyes, 0).unwrap();
    assert_eq!(&bmp.rgba8[..4], &[0, 0, 0, 0]);
    assert!(bmp.rgba8.chunks_exact(4).any(|px| px[3] == 255));
}

#[test]
fn out_of_range_index_is_asset_error() {
    assert!(matches!(
        BundledFeatures.feature(FeatureCategory::Eyes, 9),
        Err(AdorableError::Asset(_))
    ));
    let prepared = PreparedFeatures::bundled().unwrap();
    assert!(matches!(
        prepared.feature(FeatureCategory::Nose, 8),
        Err(AdorableError::Asset(_))
    ));
}

#[test]
fn prepare_propagates_missing_variant() {
    let err = PreparedFeatures::prepare(&Sparse).unwrap_err();
    assert!(err.to_string().contains("gone"));
}

#[test]
fn prepare_rejects_mixed_dimensions() {
    let err = PreparedFeatures::prepare(&Mismatched).unwrap_err();
    assert!(matches!(err, AdorableError::Asset(_)));
    assert!(err.to_string().contains("nose0.png"));
}

#[test]
fn pick_feature_matches_store_lookup() {
    let mut s = KeyStream::expand(b"seed");
    let mut skip = [0u8; 24];
    s.fill(&mut skip).unwrap();

    let (index, bmp) = pick_feature(&mut s, FeatureCategory::Eyes, &BundledFeatures).unwrap();
    assert_eq!(index, 1);
    assert_eq!(bmp, BundledFeatures.feature(FeatureCategory::Eyes, 1).unwrap());
}
