//! Normalization of body schemas into field descriptor maps.
//!
//! The result looks like `{field_name: {"required": bool, "type": ...}, ...}`
//! and is handed to the model generator. Only JSON schemas are supported.

use std::borrow::Cow;

use serde_json::Value;
use tracing::warn;

use crate::error::SchemaError;
use crate::types::ContentType;

/// Restructure `body` into a field descriptor map according to `content_type`.
///
/// - JSON: returns `body["properties"]` untouched.
/// - XML: not implemented; returns `Ok(None)` and callers must cope.
/// - Form content types have no schema to normalize and are rejected.
///
/// # Errors
///
/// Returns `SchemaError::MissingProperties` if a JSON schema has no
/// `properties`, or `SchemaError::UnsupportedContentType` for form bodies.
pub fn normalize(body: &Value, content_type: ContentType) -> Result<Option<Value>, SchemaError> {
    match content_type {
        ContentType::Json => body
            .get("properties")
            .filter(|properties| !properties.is_null())
            .cloned()
            .map(Some)
            .ok_or(SchemaError::MissingProperties),
        ContentType::TextXml => {
            warn!("XML schema normalization is not implemented, skipping");
            Ok(None)
        }
        ContentType::MultipartFormData | ContentType::FormUrlencoded => {
            Err(SchemaError::UnsupportedContentType {
                content_type: content_type.to_string(),
            })
        }
    }
}

/// Normalize a schema declared under a media type string.
///
/// RAML documents usually embed JSON schemas as text, so a string `body` is
/// parsed before normalizing.
///
/// # Errors
///
/// Returns `SchemaError::UnsupportedContentType` for unknown media types and
/// `SchemaError::InvalidSchemaBody` when embedded schema text is not JSON,
/// besides the errors of [`normalize`].
pub fn normalize_str(body: &Value, media_type: &str) -> Result<Option<Value>, SchemaError> {
    let content_type =
        ContentType::parse(media_type).ok_or_else(|| SchemaError::UnsupportedContentType {
            content_type: media_type.to_string(),
        })?;

    if content_type != ContentType::Json {
        return normalize(body, content_type);
    }

    let parsed = embedded_schema(body)?;
    normalize(&parsed, content_type)
}

fn embedded_schema(body: &Value) -> Result<Cow<'_, Value>, SchemaError> {
    match body {
        Value::String(text) => serde_json::from_str(text)
            .map(Cow::Owned)
            .map_err(|source| SchemaError::InvalidSchemaBody { source }),
        other => Ok(Cow::Borrowed(other)),
    }
}
