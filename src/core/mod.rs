mod feature_record;
mod feature_schema;

pub use feature_record::{FeatureInput, FeatureRecord};
pub use feature_schema::FeatureSchema;
