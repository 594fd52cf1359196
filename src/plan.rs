//! Walks a resource tree into one view plan per generated view.

use std::collections::BTreeSet;

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{PlanError, SchemaError};
use crate::methods::MethodResolver;
use crate::naming::{child_uid, model_name};
use crate::schema::normalize_str;
use crate::types::{ContentType, MethodNameMap, Resource};
use crate::uri::{clean, is_dynamic};

/// HTTP methods whose request body describes the model's fields, by priority.
const BODY_METHODS: &[&str] = &["post", "put", "patch"];

/// Everything a view builder needs to generate one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewPlan {
    /// Full URI of the resource, e.g. `/users/{id}/comments`.
    pub path: String,
    pub route_name: String,
    pub uid: String,
    pub model_name: String,
    pub view_methods: BTreeSet<String>,
    /// Field descriptors of the model, when a JSON body schema is declared.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
}

/// Walk `root` depth-first and plan a view for every static resource.
///
/// Dynamic children are merged into their parent's view; resources below
/// them are still planned, hanging off the parent's uid.
///
/// # Errors
///
/// Returns `PlanError::Schema` if a JSON body schema cannot be normalized.
pub fn build_plan(root: &Resource, names: &MethodNameMap) -> Result<Vec<ViewPlan>, PlanError> {
    let resolver = MethodResolver::new(names);
    let mut plans = Vec::new();
    walk(&resolver, root, &root.uid, "", &mut plans)?;
    info!(views = plans.len(), "resource tree planned");
    Ok(plans)
}

fn walk(
    resolver: &MethodResolver<'_>,
    resource: &Resource,
    parent_uid: &str,
    parent_path: &str,
    plans: &mut Vec<ViewPlan>,
) -> Result<(), PlanError> {
    for (uri, child) in resource.children() {
        let path = format!("{parent_path}{uri}");

        if is_dynamic(uri) {
            // Served by the parent's view; only its children need visiting.
            walk(resolver, child, parent_uid, &path, plans)?;
            continue;
        }

        let route_name = clean(uri);
        let uid = if child.uid.is_empty() {
            child_uid(parent_uid, &route_name)
        } else {
            child.uid.clone()
        };

        let plan = ViewPlan {
            model_name: model_name(parent_uid, &route_name),
            view_methods: resolver.resolve_view_methods(child),
            fields: model_fields(child, &route_name)?,
            path: path.clone(),
            route_name,
            uid: uid.clone(),
        };
        debug!(path = %plan.path, model = %plan.model_name, methods = ?plan.view_methods, "planned view");
        plans.push(plan);

        walk(resolver, child, &uid, &path, plans)?;
    }

    Ok(())
}

/// Fields of the model backing `resource`, from the first request body that
/// declares a JSON schema.
fn model_fields(resource: &Resource, route_name: &str) -> Result<Option<Value>, PlanError> {
    for method_name in BODY_METHODS {
        let Some(bodies) = resource.method(method_name).and_then(|m| m.body.as_ref()) else {
            continue;
        };

        let json_body = bodies
            .iter()
            .find(|(media_type, _)| ContentType::parse(media_type) == Some(ContentType::Json));
        let Some((media_type, body)) = json_body else {
            continue;
        };
        let Some(schema) = body.schema.as_ref() else {
            continue;
        };

        return normalize_str(schema, media_type).map_err(|source: SchemaError| PlanError::Schema {
            route: route_name.to_string(),
            method: (*method_name).to_string(),
            source,
        });
    }

    Ok(None)
}
