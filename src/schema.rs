//! Function-signature schema: the immutable value one render consumes.
//!
//! The upstream pipeline owns construction and guarantees internal
//! consistency (unique named-type names, resolvable references); nothing
//! here re-checks that contract.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ir::Ty;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignatureSchema {
    pub parameters: Vec<Parameter>,
    #[serde(rename = "returnType")]
    pub return_type: Ty,
    #[serde(rename = "namedTypes", default)]
    pub named_types: Vec<NamedType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Ty,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamedType {
    pub name: String,
    pub definition: Ty,
}

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("failed to read schema file {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid signature schema at JSON path {path}: {message}")]
    Decode { path: String, message: String },
}

/// Deserialize with JSON-path context in error messages.
pub fn from_json_str(src: &str) -> Result<SignatureSchema, SchemaError> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, SignatureSchema>(de).map_err(|err| {
        SchemaError::Decode {
            path: err.path().to_string(),
            message: err.into_inner().to_string(),
        }
    })
}

pub fn load(path: &Path) -> Result<SignatureSchema, SchemaError> {
    let source = std::fs::read_to_string(path).map_err(|source| SchemaError::Read {
        path: path.display().to_string(),
        source,
    })?;
    from_json_str(&source)
}
