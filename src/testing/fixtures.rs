use std::path::Path;

use crate::artifacts::{ArtifactPaths, ArtifactStore, DefaultValueTable, ModelInfo, ModelKind, ModelMetadata};
use crate::core::FeatureSchema;
use crate::testing::stubs::FixedClassifier;

/// `[age, hemo, sc]` with medians `{age: 40, hemo: 12.0, sc: 1.1}`.
pub fn small_schema() -> FeatureSchema {
    FeatureSchema::new(1, vec!["age".into(), "hemo".into(), "sc".into()])
        .expect("fixture schema is valid")
}

pub fn small_defaults() -> DefaultValueTable {
    [("age", 40.0), ("hemo", 12.0), ("sc", 1.1)]
        .into_iter()
        .collect()
}

pub fn fixed_info() -> ModelInfo {
    ModelInfo {
        kind: ModelKind::Logistic,
        summary: "fixed output".to_string(),
        metadata: ModelMetadata::default(),
    }
}

pub fn store_with_fixed_output(label: u8, probability: f64) -> ArtifactStore {
    ArtifactStore::from_parts(
        Box::new(FixedClassifier::new(small_schema(), label, probability)),
        small_defaults(),
        fixed_info(),
    )
    .expect("fixture store is consistent")
}

pub fn bundled_paths() -> ArtifactPaths {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("artifacts");
    ArtifactPaths::new(root.join("ckd_model.json"), root.join("median_values.json"))
}

pub fn bundled_store() -> ArtifactStore {
    ArtifactStore::load(&bundled_paths()).expect("bundled artifacts load")
}
