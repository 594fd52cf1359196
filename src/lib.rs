//! RAML view metadata
//!
//! Derives the names and method surfaces of generated views from a parsed
//! RAML resource tree.
//!
//! The crate classifies URI segments, synthesizes model names from the
//! resource hierarchy, and resolves which view methods a view must implement
//! given the HTTP methods declared on a collection resource and its dynamic
//! item resource.
//!
//! # Example
//!
//! ```
//! use raml_views::{model_name, MethodNameMap, MethodResolver, Resource};
//!
//! let users = Resource::new("users")
//!     .with_method("get")
//!     .with_method("post")
//!     .with_child("/{id}", Resource::new("users").with_method("get"));
//!
//! let names = MethodNameMap::default();
//! let methods = MethodResolver::new(&names).resolve_view_methods(&users);
//!
//! assert_eq!(model_name("", "users"), "User");
//! assert!(methods.contains("index"));
//! assert!(methods.contains("create"));
//! assert!(methods.contains("show"));
//! ```
//!
//! # Default method names
//!
//! | HTTP method | Collection view | Item view |
//! |-------------|-----------------|-----------|
//! | `GET` | `index` | `show` |
//! | `POST` | `create` | `create` |
//! | `PUT` | `update_many` | `update` |
//! | `PATCH` | `update_many` | `update` |
//! | `DELETE` | `delete_many` | `delete` |
//! | `OPTIONS` | `collection_options` | `item_options` |
//!
//! Methods outside the map (e.g. `TRACE`) are silently dropped.

mod error;
mod loader;
mod methods;
mod naming;
mod plan;
mod schema;
mod types;
mod uri;

pub use error::{LoadError, PlanError, SchemaError};
pub use loader::{
    is_url, load_json, load_json_auto, load_json_str, load_method_names, load_method_names_str,
    load_tree, load_tree_str, tree_from_value,
};
pub use methods::{resolve_view_methods, MethodResolver};
pub use naming::{camelize, child_uid, model_name, singularize, UID_SEPARATOR};
pub use plan::{build_plan, ViewPlan};
pub use schema::{normalize, normalize_str};
pub use types::{
    Body, ContentType, Method, MethodNameMap, Resource, Response, DEFAULT_COLLECTION_METHODS,
    DEFAULT_ITEM_METHODS,
};
pub use uri::{clean, is_dynamic};

#[cfg(feature = "remote")]
pub use loader::{load_json_url, load_tree_url};
