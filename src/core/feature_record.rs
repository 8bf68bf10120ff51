use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::feature_schema::FeatureSchema;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureInput(BTreeMap<String, f64>);

impl FeatureInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, feature: impl Into<String>, value: f64) -> Option<f64> {
        self.0.insert(feature.into(), value)
    }

    pub fn get(&self, feature: &str) -> Option<f64> {
        self.0.get(feature).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for FeatureInput {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        FeatureInput(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeatureRecord {
    names: Vec<String>,
    values: Vec<f64>,
}

impl FeatureRecord {
    pub fn with_capacity(capacity: usize) -> Self {
        FeatureRecord {
            names: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, feature: impl Into<String>, value: f64) {
        self.names.push(feature.into());
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn get(&self, feature: &str) -> Option<f64> {
        self.names
            .iter()
            .position(|n| n == feature)
            .map(|i| self.values[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn matches_schema(&self, schema: &FeatureSchema) -> bool {
        self.names.len() == schema.len() && self.names.iter().zip(schema.iter()).all(|(a, b)| a == b)
    }

    pub fn to_input(&self) -> FeatureInput {
        self.iter().collect()
    }
}
