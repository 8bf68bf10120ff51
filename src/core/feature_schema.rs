use std::collections::HashMap;
use std::fmt;

use crate::error::ArtifactError;

#[derive(Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    version: u32,
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl FeatureSchema {
    pub fn new(version: u32, names: Vec<String>) -> Result<FeatureSchema, ArtifactError> {
        if names.is_empty() {
            return Err(ArtifactError::InvalidSchema(
                "feature list is empty".to_string(),
            ));
        }

        let mut positions = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(ArtifactError::InvalidSchema(format!(
                    "feature at position {i} has an empty name"
                )));
            }
            if positions.insert(name.clone(), i).is_some() {
                return Err(ArtifactError::InvalidSchema(format!(
                    "feature '{name}' is listed more than once"
                )));
            }
        }

        Ok(FeatureSchema {
            version,
            names,
            positions,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn index_of_feature(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl fmt::Debug for FeatureSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureSchema")
            .field("version", &self.version)
            .field("names", &self.names)
            .finish()
    }
}
