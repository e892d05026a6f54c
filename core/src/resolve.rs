use std::collections::HashSet;

use serde_json::Value;

use crate::normalize::normalize;
use crate::walk::{self, Candidate};

/// Placeholder shown when no candidate exists for a field.
pub const SENTINEL: &str = "—";

/// Composite values (nested objects/arrays) are serialized compactly
/// and cut off at this many characters.
const COMPOSITE_LIMIT: usize = 200;

// Hand-tuned scoring constants. The heuristic is preserved as-is from
// the evolving source, not a principled ranking.
const BASE_SCORE: i32 = 100;
const TRUST_BONUS: i32 = 80;
const SECTION_PENALTY: i32 = 80;
// A bare "id" is the weakest identity signal in the document: any more
// specific alias, and any trusted path, must outrank it.
const BARE_ID_PENALTY: i32 = 70;
// Priority assumed when the matched key is missing from the alias
// list. Unreachable through `FieldSpec::resolve`, kept so scoring is
// total.
const FALLBACK_PRIORITY: i32 = 50;

/// Outcome of resolving one logical field: a display string (the
/// sentinel when absent) and the access path it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedField {
    pub display: String,
    pub path: Option<String>,
}

impl ResolvedField {
    pub fn missing() -> Self {
        ResolvedField {
            display: SENTINEL.to_string(),
            path: None,
        }
    }
}

/// How one logical field is searched for: its ordered alias list
/// (earlier spellings score higher), section-name substrings that make
/// a path more or less trustworthy, and whether the rendering should
/// be coerced to a bare integer.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Display label, e.g. "Region/Server".
    pub label: &'static str,
    /// Short name used in the fields-source diagnostic line.
    pub key: &'static str,
    pub aliases: &'static [&'static str],
    /// Lowercase substrings of trusted section paths.
    pub trust_hints: &'static [&'static str],
    /// Lowercase substrings of sections known to carry unrelated data.
    pub penalty_hints: &'static [&'static str],
    /// Count-like fields get their digits extracted after rendering.
    pub numeric: bool,
    /// Render the value in inline code in the reply.
    pub code: bool,
}

impl FieldSpec {
    /// Resolve this field against `root`. `path_prefix` seeds the
    /// access paths (the summary builder passes the wrapper key when
    /// it descends into one). Never errors; total absence of a match
    /// is the sentinel, not a failure.
    pub fn resolve(&self, root: &Value, path_prefix: &str) -> ResolvedField {
        let aliases: Vec<String> = self.aliases.iter().map(|a| normalize(a)).collect();
        let targets: HashSet<String> = aliases.iter().cloned().collect();
        let candidates = walk::collect(root, &targets, path_prefix);

        // Stable max scan: on equal scores the earliest candidate in
        // depth-first order is kept.
        let mut best: Option<(i32, &Candidate<'_>)> = None;
        for candidate in &candidates {
            let score = score(candidate, &aliases, self.trust_hints, self.penalty_hints);
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, candidate));
            }
        }

        let Some((_, winner)) = best else {
            return ResolvedField::missing();
        };

        let mut display = render(winner.value);
        if self.numeric {
            display = coerce_count(&display);
        }
        ResolvedField {
            display,
            path: Some(winner.path.clone()),
        }
    }
}

fn score(
    candidate: &Candidate<'_>,
    aliases: &[String],
    trust_hints: &[&str],
    penalty_hints: &[&str],
) -> i32 {
    let priority = aliases
        .iter()
        .position(|alias| *alias == candidate.matched_key)
        .map(|idx| idx as i32)
        .unwrap_or(FALLBACK_PRIORITY);
    let mut score = BASE_SCORE - priority;

    let path = candidate.path.to_lowercase();
    if trust_hints.iter().any(|hint| path.contains(hint)) {
        score += TRUST_BONUS;
    }
    if penalty_hints.iter().any(|hint| path.contains(hint)) {
        score -= SECTION_PENALTY;
    }
    if candidate.matched_key == "id" {
        score -= BARE_ID_PENALTY;
    }
    score
}

/// Render a matched value for display. Strings come through unquoted;
/// other scalars stringify; composites serialize compactly and are
/// truncated.
fn render(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => truncate_chars(&value.to_string(), COMPOSITE_LIMIT),
        other => other.to_string(),
    }
}

fn truncate_chars(s: &str, limit: usize) -> String {
    if s.chars().count() <= limit {
        s.to_string()
    } else {
        s.chars().take(limit).collect()
    }
}

/// Coerce a count-like rendering to its digits: `"1,234 likes"` →
/// `"1234"`. Values without a leading numeric run pass through
/// unchanged.
pub fn coerce_count(rendered: &str) -> String {
    let digits: String = rendered
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == ',')
        .filter(char::is_ascii_digit)
        .collect();
    if digits.is_empty() {
        rendered.to_string()
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn spec(aliases: &'static [&'static str]) -> FieldSpec {
        FieldSpec {
            label: "Test",
            key: "test",
            aliases,
            trust_hints: &[],
            penalty_hints: &[],
            numeric: false,
            code: false,
        }
    }

    #[test]
    fn absence_is_the_sentinel_not_an_error() {
        let doc = json!({"unrelated": {"stuff": 1}});
        let field = spec(&["uid"]).resolve(&doc, "");
        assert_eq!(field.display, SENTINEL);
        assert_eq!(field.path, None);
    }

    #[test]
    fn trusted_section_beats_penalized_section() {
        let doc = json!({
            "petinfo": {"level": 7},
            "basicinfo": {"level": 42}
        });
        let field = FieldSpec {
            trust_hints: &["basicinfo"],
            penalty_hints: &["petinfo"],
            ..spec(&["level"])
        }
        .resolve(&doc, "");
        assert_eq!(field.display, "42");
        assert_eq!(field.path.as_deref(), Some("basicinfo.level"));
    }

    #[test]
    fn specific_alias_outranks_bare_id_without_hints() {
        let doc = json!({
            "somewhere": {"id": "999"},
            "elsewhere": {"uid": "500123"}
        });
        let field = spec(&["uid", "playeruid", "playerid", "player_id", "id"]).resolve(&doc, "");
        assert_eq!(field.display, "500123");
        assert_eq!(field.path.as_deref(), Some("elsewhere.uid"));
    }

    #[test]
    fn earlier_alias_wins_on_equal_paths() {
        let doc = json!({
            "section": {"name": "second", "nickname": "first"}
        });
        let field = spec(&["nickname", "name"]).resolve(&doc, "");
        assert_eq!(field.display, "first");
    }

    #[test]
    fn equal_scores_keep_first_candidate_in_walk_order() {
        let doc = json!({
            "a": {"uid": "one"},
            "b": {"uid": "two"}
        });
        let field = spec(&["uid"]).resolve(&doc, "");
        assert_eq!(field.display, "one");
        assert_eq!(field.path.as_deref(), Some("a.uid"));
    }

    #[test]
    fn trust_hints_match_case_insensitively() {
        let doc = json!({"BasicInfo": {"uid": "5"}});
        let field = FieldSpec {
            trust_hints: &["basicinfo"],
            ..spec(&["uid"])
        }
        .resolve(&doc, "");
        assert_eq!(field.path.as_deref(), Some("BasicInfo.uid"));
    }

    #[test]
    fn composite_values_serialize_compactly_and_truncate() {
        let long: Vec<u32> = (0..200).collect();
        let doc = json!({"clan": {"members": long}});
        let field = spec(&["clan"]).resolve(&doc, "");
        assert!(field.display.starts_with("{\"members\":[0,1,2"));
        assert_eq!(field.display.chars().count(), 200);
    }

    #[test]
    fn scalar_values_stringify_unquoted() {
        let doc = json!({"level": 68, "name": "Foo", "active": true});
        assert_eq!(spec(&["level"]).resolve(&doc, "").display, "68");
        assert_eq!(spec(&["name"]).resolve(&doc, "").display, "Foo");
        assert_eq!(spec(&["active"]).resolve(&doc, "").display, "true");
    }

    #[test]
    fn count_coercion_strips_separators_and_suffixes() {
        assert_eq!(coerce_count("1,234 likes"), "1234");
        assert_eq!(coerce_count("42"), "42");
        assert_eq!(coerce_count("—"), "—");
        assert_eq!(coerce_count("likes: 42"), "likes: 42");
    }

    #[test]
    fn numeric_fields_apply_count_coercion() {
        let doc = json!({"socialinfo": {"likes": "1,234 likes"}});
        let field = FieldSpec {
            numeric: true,
            ..spec(&["likes"])
        }
        .resolve(&doc, "");
        assert_eq!(field.display, "1234");
    }
}
