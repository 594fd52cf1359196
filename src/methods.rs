//! Resolution of view method names from declared HTTP methods.
//!
//! A collection resource and its dynamic child (e.g. `/users` and
//! `/users/{id}`) are served by one view, so the view exposes the collection
//! methods of the parent plus the item methods of the child.

use std::collections::BTreeSet;

use tracing::debug;

use crate::types::{MethodNameMap, Resource};
use crate::uri::is_dynamic;

/// Maps a resource's HTTP methods onto view method names.
#[derive(Debug, Clone, Copy)]
pub struct MethodResolver<'a> {
    names: &'a MethodNameMap,
}

impl<'a> MethodResolver<'a> {
    pub fn new(names: &'a MethodNameMap) -> Self {
        Self { names }
    }

    /// The dynamic child merged into `resource`'s view, if any.
    ///
    /// With several dynamic children the first URI in sorted order wins.
    pub fn dynamic_child<'r>(&self, resource: &'r Resource) -> Option<(&'r str, &'r Resource)> {
        resource.children().find(|(uri, _)| is_dynamic(uri))
    }

    /// View methods needed to serve `resource` and its dynamic child.
    ///
    /// HTTP methods without a mapping (e.g. `TRACE`) are dropped.
    pub fn resolve_view_methods(&self, resource: &Resource) -> BTreeSet<String> {
        let mut attrs: BTreeSet<String> = resource
            .method_names()
            .filter_map(|m| self.lookup(m, "collection", |n| self.names.collection_method(n)))
            .collect();

        if let Some((uri, child)) = self.dynamic_child(resource) {
            debug!(uid = %resource.uid, child = uri, "merging dynamic child into view");
            attrs.extend(
                child
                    .method_names()
                    .filter_map(|m| self.lookup(m, "item", |n| self.names.item_method(n))),
            );
        }

        attrs
    }

    // The name map lowercases `http_method` itself.
    fn lookup<'n>(
        &self,
        http_method: &str,
        kind: &str,
        map: impl Fn(&str) -> Option<&'n str>,
    ) -> Option<String> {
        match map(http_method) {
            Some(name) if !name.is_empty() => Some(name.to_string()),
            _ => {
                debug!(http_method, kind, "no view method mapped, skipping");
                None
            }
        }
    }
}

/// Resolve with a one-off resolver over `names`.
pub fn resolve_view_methods(resource: &Resource, names: &MethodNameMap) -> BTreeSet<String> {
    MethodResolver::new(names).resolve_view_methods(resource)
}
