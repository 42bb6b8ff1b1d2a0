//! Path template normalization and parameter extraction.

/// Strip one leading and one trailing `/`.
pub(crate) fn trim_slashes(segment: &str) -> &str {
    let segment = segment.strip_prefix('/').unwrap_or(segment);
    segment.strip_suffix('/').unwrap_or(segment)
}

/// Normalize a template to absolute form: leading `/`, no trailing `/`.
pub(crate) fn normalize(template: &str) -> String {
    format!("/{}", trim_slashes(template))
}

/// Join a child segment onto a parent template.
pub(crate) fn compose(parent: &str, child: &str) -> String {
    normalize(&format!("{}/{}", trim_slashes(parent), trim_slashes(child)))
}

/// Match `resource` against `template`.
///
/// Returns the positional parameters on a match: none for an exact match,
/// the slash-split remainder for a `/`-aligned prefix match. A remainder made
/// only of slashes is not a match.
pub(crate) fn extract(template: &str, resource: &str) -> Option<Vec<String>> {
    if resource == template {
        return Some(Vec::new());
    }

    let rest = resource.strip_prefix(template)?;
    if !template.ends_with('/') && !rest.starts_with('/') {
        return None;
    }

    if rest.trim_matches('/').is_empty() {
        return None;
    }
    let rest = trim_slashes(rest);
    Some(rest.split('/').map(str::to_string).collect())
}
