use std::collections::HashSet;

use serde_json::Value;

use crate::normalize::normalize;

/// A key hit produced by the walker: the value it reached, the access
/// path that leads there, and the normalized key that matched.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
    pub value: &'a Value,
    pub path: String,
    pub matched_key: String,
}

/// Collect every value whose key normalizes into `targets`, depth
/// first. For each object the direct matching children are emitted
/// before any recursion into that object, so shallower hits come first
/// in the returned order. Object iteration follows document insertion
/// order (`serde_json` with `preserve_order`); arrays are visited in
/// index order with a bracketed index appended to the path.
///
/// Returns an empty vec, never an error, when nothing matches.
pub fn collect<'a>(
    root: &'a Value,
    targets: &HashSet<String>,
    path_prefix: &str,
) -> Vec<Candidate<'a>> {
    let mut out = Vec::new();
    visit(root, targets, path_prefix, &mut out);
    out
}

fn visit<'a>(
    node: &'a Value,
    targets: &HashSet<String>,
    path: &str,
    out: &mut Vec<Candidate<'a>>,
) {
    match node {
        Value::Object(map) => {
            for (key, value) in map {
                let matched_key = normalize(key);
                if targets.contains(&matched_key) {
                    out.push(Candidate {
                        value,
                        path: join(path, key),
                        matched_key,
                    });
                }
            }
            for (key, value) in map {
                visit(value, targets, &join(path, key), out);
            }
        }
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                visit(item, targets, &format!("{path}[{idx}]"), out);
            }
        }
        // Scalars are never matches themselves.
        _ => {}
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
