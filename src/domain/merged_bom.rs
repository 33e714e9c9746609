use serde::Serialize;
use serde_json::{Map, Value};

use crate::shared::error::ExportError;
use crate::shared::Result;

/// Aggregate CycloneDX document built by concatenating the
/// `components` and `dependencies` arrays of individual SBOMs.
///
/// Every envelope field is a fixed placeholder rather than being
/// derived from the inputs, so merging the same documents twice
/// produces byte-identical output. Merge order is the caller's
/// responsibility; absorbing preserves each document's own array
/// order and performs no deduplication.
#[derive(Debug, Serialize)]
pub struct MergedBom {
    #[serde(rename = "$schema")]
    schema: String,
    #[serde(rename = "bomFormat")]
    bom_format: String,
    #[serde(rename = "specVersion")]
    spec_version: String,
    version: u32,
    metadata: Map<String, Value>,
    components: Vec<Value>,
    dependencies: Vec<Value>,
}

impl MergedBom {
    const SCHEMA_URL: &'static str = "http://cyclonedx.org/schema/bom-1.4.schema.json";

    /// Creates an empty envelope with fixed CycloneDX 1.4 metadata.
    pub fn new() -> Self {
        Self {
            schema: Self::SCHEMA_URL.to_string(),
            bom_format: "CycloneDX".to_string(),
            spec_version: "1.4".to_string(),
            version: 1,
            metadata: Map::new(),
            components: Vec::new(),
            dependencies: Vec::new(),
        }
    }

    /// Appends one document's `components` and `dependencies` arrays.
    ///
    /// A missing key is treated as an empty array. A key that is
    /// present but not an array is a malformed document; `name`
    /// identifies the offending input in the error.
    pub fn absorb(&mut self, name: &str, document: &Value) -> Result<()> {
        self.components
            .extend(Self::take_array(name, document, "components")?);
        self.dependencies
            .extend(Self::take_array(name, document, "dependencies")?);
        Ok(())
    }

    fn take_array(name: &str, document: &Value, key: &str) -> Result<Vec<Value>> {
        match document.get(key) {
            None => Ok(Vec::new()),
            Some(Value::Array(items)) => Ok(items.clone()),
            Some(other) => Err(ExportError::MalformedDocument {
                name: name.to_string(),
                details: format!("'{}' is not an array (found {})", key, json_type_name(other)),
            }
            .into()),
        }
    }

    pub fn components(&self) -> &[Value] {
        &self.components
    }

    pub fn dependencies(&self) -> &[Value] {
        &self.dependencies
    }

    /// Serializes the aggregate document as indented JSON.
    pub fn to_pretty_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}

impl Default for MergedBom {
    fn default() -> Self {
        Self::new()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
