//! URI segment classification.
//!
//! Dynamic segments follow the Pyramid convention of a `{param}` placeholder.

/// Whether `uri` names a path parameter rather than a literal segment.
///
/// Only the trailing `}` is checked; braces are not required to balance.
pub fn is_dynamic(uri: &str) -> bool {
    uri.ends_with('}')
}

/// Strip `/`, `{` and `}` from `uri`, wherever they appear.
///
/// The result may be empty for a segment made only of routing syntax.
pub fn clean(uri: &str) -> String {
    uri.chars().filter(|c| !matches!(c, '/' | '{' | '}')).collect()
}
