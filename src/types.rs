//! Core types shared by the classifier, namer, resolver and schema adapter.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Media types a RAML body may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Json,
    TextXml,
    MultipartFormData,
    FormUrlencoded,
}

impl ContentType {
    /// Returns the media type string for this content type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::TextXml => "text/xml",
            ContentType::MultipartFormData => "multipart/form-data",
            ContentType::FormUrlencoded => "application/x-www-form-urlencoded",
        }
    }

    /// Parse a media type string, ignoring parameters and case.
    ///
    /// Returns `None` for media types outside the supported set.
    pub fn parse(s: &str) -> Option<Self> {
        let essence = s.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        match essence.as_str() {
            "application/json" => Some(ContentType::Json),
            "text/xml" => Some(ContentType::TextXml),
            "multipart/form-data" => Some(ContentType::MultipartFormData),
            "application/x-www-form-urlencoded" => Some(ContentType::FormUrlencoded),
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deserialize a mapping whose values may be `null`, as a bare `get:` or
/// `application/json:` key converts from RAML YAML. Null values become
/// their type's default.
fn nullable_values<'de, D, T>(deserializer: D) -> Result<Option<BTreeMap<String, T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    let map: Option<BTreeMap<String, Option<T>>> = Option::deserialize(deserializer)?;
    Ok(map.map(|entries| {
        entries
            .into_iter()
            .map(|(key, value)| (key, value.unwrap_or_default()))
            .collect()
    }))
}

/// A request or response body declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Schema as parsed from the RAML document: either an inline JSON value
    /// or the raw schema text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<Value>,
}

/// A single response declaration, keyed by status code in [`Method::responses`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    #[serde(
        default,
        deserialize_with = "nullable_values",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<BTreeMap<String, Body>>,
}

/// Definition of one HTTP method on a resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Method {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Request bodies keyed by media type.
    #[serde(
        default,
        deserialize_with = "nullable_values",
        skip_serializing_if = "Option::is_none"
    )]
    pub body: Option<BTreeMap<String, Body>>,
    #[serde(
        default,
        deserialize_with = "nullable_values",
        skip_serializing_if = "Option::is_none"
    )]
    pub responses: Option<BTreeMap<String, Response>>,
}

/// A node of a parsed RAML resource tree.
///
/// `methods` and `resources` keep the distinction between an absent and an
/// empty mapping. Children are keyed by their URI segment, e.g. `/users` or
/// `/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Colon-separated chain of ancestor route names; empty at the root.
    #[serde(default)]
    pub uid: String,
    #[serde(
        default,
        deserialize_with = "nullable_values",
        skip_serializing_if = "Option::is_none"
    )]
    pub methods: Option<BTreeMap<String, Method>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<BTreeMap<String, Resource>>,
}

impl Resource {
    /// Create a resource with the given uid and no methods or children.
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            methods: None,
            resources: None,
        }
    }

    /// Declare an HTTP method with an empty definition.
    pub fn with_method(mut self, name: impl Into<String>) -> Self {
        self.methods
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), Method::default());
        self
    }

    /// Attach a child resource under `uri`.
    pub fn with_child(mut self, uri: impl Into<String>, child: Resource) -> Self {
        self.resources
            .get_or_insert_with(BTreeMap::new)
            .insert(uri.into(), child);
        self
    }

    /// Iterates the declared HTTP method names (empty if absent).
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().flat_map(|m| m.keys().map(String::as_str))
    }

    /// Iterates child resources with their URI segments (empty if absent).
    pub fn children(&self) -> impl Iterator<Item = (&str, &Resource)> {
        self.resources
            .iter()
            .flat_map(|r| r.iter().map(|(uri, res)| (uri.as_str(), res)))
    }

    /// Looks up a method definition case-insensitively.
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods
            .as_ref()?
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, method)| method)
    }
}

#[derive(Debug, Clone, Deserialize)]
struct MethodNameDocument {
    #[serde(default)]
    collection_methods: Option<BTreeMap<String, String>>,
    #[serde(default)]
    item_methods: Option<BTreeMap<String, String>>,
}

/// Mapping from lowercase HTTP method names to view method names.
///
/// Built once at startup and shared read-only with [`crate::MethodResolver`].
/// Keys are normalized to lowercase on construction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "MethodNameDocument")]
pub struct MethodNameMap {
    collection_methods: BTreeMap<String, String>,
    item_methods: BTreeMap<String, String>,
}

/// Default view method names for collection resources.
pub const DEFAULT_COLLECTION_METHODS: &[(&str, &str)] = &[
    ("get", "index"),
    ("post", "create"),
    ("put", "update_many"),
    ("patch", "update_many"),
    ("delete", "delete_many"),
    ("options", "collection_options"),
];

/// Default view method names for single-item resources.
pub const DEFAULT_ITEM_METHODS: &[(&str, &str)] = &[
    ("get", "show"),
    ("post", "create"),
    ("put", "update"),
    ("patch", "update"),
    ("delete", "delete"),
    ("options", "item_options"),
];

fn lowercase_keys<I, K, V>(entries: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    entries
        .into_iter()
        .map(|(k, v)| (k.as_ref().to_lowercase(), v.into()))
        .collect()
}

impl MethodNameMap {
    /// Build a map from explicit collection and item entries.
    pub fn new<C, I, K1, V1, K2, V2>(collection: C, item: I) -> Self
    where
        C: IntoIterator<Item = (K1, V1)>,
        I: IntoIterator<Item = (K2, V2)>,
        K1: AsRef<str>,
        V1: Into<String>,
        K2: AsRef<str>,
        V2: Into<String>,
    {
        Self {
            collection_methods: lowercase_keys(collection),
            item_methods: lowercase_keys(item),
        }
    }

    /// View method for an HTTP method on a collection resource.
    pub fn collection_method(&self, http_method: &str) -> Option<&str> {
        self.collection_methods
            .get(&http_method.to_lowercase())
            .map(String::as_str)
    }

    /// View method for an HTTP method on a single-item resource.
    pub fn item_method(&self, http_method: &str) -> Option<&str> {
        self.item_methods
            .get(&http_method.to_lowercase())
            .map(String::as_str)
    }

    pub fn collection_methods(&self) -> &BTreeMap<String, String> {
        &self.collection_methods
    }

    pub fn item_methods(&self) -> &BTreeMap<String, String> {
        &self.item_methods
    }
}

impl Default for MethodNameMap {
    fn default() -> Self {
        Self::new(
            DEFAULT_COLLECTION_METHODS.iter().copied(),
            DEFAULT_ITEM_METHODS.iter().copied(),
        )
    }
}

impl From<MethodNameDocument> for MethodNameMap {
    fn from(doc: MethodNameDocument) -> Self {
        let defaults = MethodNameMap::default();
        Self {
            collection_methods: doc
                .collection_methods
                .map(lowercase_keys)
                .unwrap_or(defaults.collection_methods),
            item_methods: doc
                .item_methods
                .map(lowercase_keys)
                .unwrap_or(defaults.item_methods),
        }
    }
}
