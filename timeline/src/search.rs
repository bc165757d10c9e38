use crumbline_protocol::Crumb;
use serde_json::Value;

/// Free-text filter over a fixed set of crumb fields. The query and every
/// inspected field go through the same canonical JSON encoding (outer
/// quotes stripped, case folded) before the substring check, so a plain
/// `foo` query matches a structured `data` field containing the string
/// `foo` the same way it matches a plain message.
///
/// A blank query returns the input unchanged.
pub fn filter_by_search(term: &str, crumbs: &[Crumb]) -> Vec<Crumb> {
    if term.trim().is_empty() {
        return crumbs.to_vec();
    }
    let needle = canonical_query(term);
    crumbs
        .iter()
        .filter(|crumb| {
            searchable_fields(crumb)
                .into_iter()
                .flatten()
                .any(|text| text.contains(needle.as_str()))
        })
        .cloned()
        .collect()
}

/// The inspected fields, canonicalized. Absent fields and fields whose
/// display form trims to empty never match.
fn searchable_fields(crumb: &Crumb) -> [Option<String>; 6] {
    [
        canonical_str(crumb.kind.as_str()),
        crumb.category.as_deref().and_then(canonical_str),
        crumb.message.as_deref().and_then(canonical_str),
        canonical_str(crumb.level.as_str()),
        crumb.timestamp.as_deref().and_then(canonical_str),
        crumb.data.as_ref().and_then(canonical_value),
    ]
}

fn canonical_query(term: &str) -> String {
    canonicalize(&Value::String(term.to_string()).to_string())
}

fn canonical_str(text: &str) -> Option<String> {
    if text.trim().is_empty() {
        return None;
    }
    Some(canonicalize(&Value::String(text.to_string()).to_string()))
}

fn canonical_value(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => canonical_str(text),
        other => Some(canonicalize(&other.to_string())),
    }
}

/// Strips exactly one leading and one trailing quote introduced by the
/// JSON encoding, then case-folds. Interior quotes are left alone and
/// match literally.
fn canonicalize(encoded: &str) -> String {
    let stripped = encoded.strip_prefix('"').unwrap_or(encoded);
    let stripped = stripped.strip_suffix('"').unwrap_or(stripped);
    stripped.to_lowercase().trim().to_string()
}
