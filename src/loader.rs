//! Loading of resource trees and method-name configuration.
//!
//! Resource trees are JSON documents produced by an upstream RAML parser.
//! They are checked against a structural schema before deserialization so
//! that shape errors are reported with their JSON path.

use std::path::Path;

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use crate::error::LoadError;
use crate::types::{MethodNameMap, Resource};

#[cfg(feature = "remote")]
use std::time::Duration;

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

static TREE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "properties": {
            "uid": { "type": "string" },
            "methods": {
                "type": ["object", "null"],
                "additionalProperties": { "$ref": "#/$defs/method" }
            },
            "resources": {
                "type": ["object", "null"],
                "additionalProperties": { "$ref": "#" }
            }
        },
        "$defs": {
            "body": {
                "type": ["object", "null"],
                "additionalProperties": { "type": ["object", "null"] }
            },
            "method": {
                "type": ["object", "null"],
                "properties": {
                    "description": { "type": ["string", "null"] },
                    "body": { "$ref": "#/$defs/body" },
                    "responses": {
                        "type": ["object", "null"],
                        "additionalProperties": {
                            "type": ["object", "null"],
                            "properties": { "body": { "$ref": "#/$defs/body" } }
                        }
                    }
                }
            }
        }
    })
});

static METHOD_NAMES_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "properties": {
            "collection_methods": {
                "type": "object",
                "additionalProperties": { "type": "string" }
            },
            "item_methods": {
                "type": "object",
                "additionalProperties": { "type": "string" }
            }
        }
    })
});

/// Read a JSON document from a file path.
///
/// # Errors
///
/// Returns `LoadError::FileNotFound` if the file doesn't exist,
/// or `LoadError::InvalidJson` if the file isn't valid JSON.
pub fn load_json(path: &Path) -> Result<Value, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| LoadError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_json_str(&content)
}

/// Parse a JSON document from a string.
///
/// # Errors
///
/// Returns `LoadError::InvalidJson` if the string isn't valid JSON.
pub fn load_json_str(content: &str) -> Result<Value, LoadError> {
    serde_json::from_str(content).map_err(|source| LoadError::InvalidJson { source })
}

/// Fetch a JSON document from an HTTP/HTTPS URL.
///
/// Requires the `remote` feature (enabled by default).
///
/// # Errors
///
/// Returns `LoadError::NetworkError` if the request fails or the response
/// isn't valid JSON.
#[cfg(feature = "remote")]
pub fn load_json_url(url: &str) -> Result<Value, LoadError> {
    let network = |source| LoadError::NetworkError {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(network)?;

    client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.json())
        .map_err(network)
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load a JSON document from a file path or, with the `remote` feature, a URL.
pub fn load_json_auto(source: &str) -> Result<Value, LoadError> {
    #[cfg(feature = "remote")]
    if is_url(source) {
        return load_json_url(source);
    }

    load_json(Path::new(source))
}

/// Check `document` against a structural schema, collecting every violation.
fn check_document(schema: &Value, document: &Value) -> Result<(), LoadError> {
    let validator = jsonschema::validator_for(schema).map_err(|e| LoadError::InvalidDocument {
        errors: vec![e.to_string()],
    })?;

    let errors: Vec<String> = validator
        .iter_errors(document)
        .map(|e| {
            let path = e.instance_path.to_string();
            if path.is_empty() {
                e.to_string()
            } else {
                format!("{}: {}", path, e)
            }
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(LoadError::InvalidDocument { errors })
    }
}

fn decode<T: DeserializeOwned>(schema: &Value, document: Value) -> Result<T, LoadError> {
    check_document(schema, &document)?;
    serde_json::from_value(document).map_err(|source| LoadError::InvalidJson { source })
}

/// Build a resource tree from an already-parsed JSON document.
///
/// # Errors
///
/// Returns `LoadError::InvalidDocument` if the document doesn't have the
/// shape of a resource tree.
pub fn tree_from_value(document: Value) -> Result<Resource, LoadError> {
    decode(&TREE_SCHEMA, document)
}

/// Load a resource tree from a file path.
pub fn load_tree(path: &Path) -> Result<Resource, LoadError> {
    tree_from_value(load_json(path)?)
}

/// Load a resource tree from a JSON string.
pub fn load_tree_str(content: &str) -> Result<Resource, LoadError> {
    tree_from_value(load_json_str(content)?)
}

/// Load a resource tree from an HTTP/HTTPS URL.
#[cfg(feature = "remote")]
pub fn load_tree_url(url: &str) -> Result<Resource, LoadError> {
    tree_from_value(load_json_url(url)?)
}

/// Load method-name configuration from a file path.
///
/// Maps missing from the document fall back to the defaults.
pub fn load_method_names(path: &Path) -> Result<MethodNameMap, LoadError> {
    decode(&METHOD_NAMES_SCHEMA, load_json(path)?)
}

/// Load method-name configuration from a JSON string.
pub fn load_method_names_str(content: &str) -> Result<MethodNameMap, LoadError> {
    decode(&METHOD_NAMES_SCHEMA, load_json_str(content)?)
}
