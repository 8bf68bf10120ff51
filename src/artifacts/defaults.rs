use std::collections::BTreeMap;
use std::path::Path;

use crate::artifacts::read_json;
use crate::core::FeatureSchema;
use crate::error::{ArtifactError, ArtifactKind};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DefaultValueTable {
    values: BTreeMap<String, f64>,
}

impl DefaultValueTable {
    pub fn from_path(path: &Path) -> Result<Self, ArtifactError> {
        let values: BTreeMap<String, f64> = read_json(ArtifactKind::DefaultValues, path)?;
        Self::from_map(values)
    }

    pub fn from_map(values: BTreeMap<String, f64>) -> Result<Self, ArtifactError> {
        if let Some((feature, _)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ArtifactError::InvalidDefault {
                feature: feature.clone(),
            });
        }
        Ok(DefaultValueTable { values })
    }

    pub fn get(&self, feature: &str) -> Option<f64> {
        self.values.get(feature).copied()
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.values.contains_key(feature)
    }

    /// Schema features with no default, in schema order.
    pub fn missing_from(&self, schema: &FeatureSchema) -> Vec<String> {
        schema
            .iter()
            .filter(|f| !self.contains(f))
            .map(str::to_string)
            .collect()
    }

    pub fn unused_by(&self, schema: &FeatureSchema) -> Vec<String> {
        self.values
            .keys()
            .filter(|f| !schema.contains(f))
            .cloned()
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for DefaultValueTable {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        DefaultValueTable {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
