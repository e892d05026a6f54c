use serde_json::Value;

use crate::resolve::{FieldSpec, ResolvedField};

/// Wrapper key some upstream revisions nest the payload under. When it
/// holds an object, the search descends into it (the `data.` prefix is
/// kept on reported paths).
const WRAPPER_KEY: &str = "data";

/// At most this many top-level keys are listed in the sections line.
const MAX_SECTION_KEYS: usize = 20;

// Sections that keep tricking the search: pet data carries its own
// id/level/name, cosmetic and credit-score blobs their own counters.
const UNRELATED_SECTIONS: &[&str] = &["petinfo", "cosmetic", "creditscore"];

/// The nine logical fields of a profile and where to (dis)trust them.
/// Alias order is priority order. Tuned against observed responses;
/// the upstream schema has no contract.
static FIELDS: [FieldSpec; 9] = [
    FieldSpec {
        label: "Nickname",
        key: "nickname",
        aliases: &["nickname", "name", "playername", "ign"],
        trust_hints: &["basicinfo", "profileinfo"],
        penalty_hints: UNRELATED_SECTIONS,
        numeric: false,
        code: false,
    },
    FieldSpec {
        label: "UID",
        key: "uid",
        aliases: &["uid", "playeruid", "playerid", "player_id", "id"],
        trust_hints: &["basicinfo", "profileinfo"],
        penalty_hints: UNRELATED_SECTIONS,
        numeric: false,
        code: true,
    },
    FieldSpec {
        label: "Level",
        key: "level",
        aliases: &["level", "playerlevel"],
        trust_hints: &["basicinfo"],
        penalty_hints: UNRELATED_SECTIONS,
        numeric: false,
        code: false,
    },
    FieldSpec {
        label: "Region/Server",
        key: "region",
        aliases: &["region", "server"],
        trust_hints: &["basicinfo"],
        penalty_hints: &[],
        numeric: false,
        code: false,
    },
    FieldSpec {
        label: "Rank/Tier",
        key: "rank",
        aliases: &["rank", "tier", "ranktier"],
        trust_hints: &["basicinfo", "rankinfo"],
        penalty_hints: UNRELATED_SECTIONS,
        numeric: false,
        code: false,
    },
    FieldSpec {
        label: "Likes",
        key: "likes",
        aliases: &["likes", "likecount", "liked"],
        trust_hints: &["socialinfo", "socialprofile"],
        penalty_hints: UNRELATED_SECTIONS,
        numeric: true,
        code: false,
    },
    FieldSpec {
        label: "Guild",
        key: "guild",
        aliases: &["guild", "clan", "guildname", "clanname"],
        trust_hints: &["clanbasicinfo", "claninfo"],
        penalty_hints: UNRELATED_SECTIONS,
        numeric: false,
        code: false,
    },
    FieldSpec {
        label: "Country",
        key: "country",
        aliases: &["country", "nationality"],
        trust_hints: &["basicinfo", "socialinfo"],
        penalty_hints: &[],
        numeric: false,
        code: false,
    },
    FieldSpec {
        label: "Bio",
        key: "bio",
        aliases: &["signature", "bio", "about"],
        trust_hints: &["socialinfo"],
        penalty_hints: UNRELATED_SECTIONS,
        numeric: false,
        code: false,
    },
];

/// One lookup's worth of resolved fields, built per request, rendered
/// once, then discarded.
#[derive(Debug)]
pub struct PlayerSummary {
    pub fields: Vec<(&'static FieldSpec, ResolvedField)>,
    /// First top-level keys of the effective search root.
    pub sections: Vec<String>,
}

impl PlayerSummary {
    /// Resolve all nine logical fields of `document`.
    pub fn build(document: &Value) -> PlayerSummary {
        let (root, prefix) = match document.get(WRAPPER_KEY) {
            Some(inner @ Value::Object(_)) => (inner, WRAPPER_KEY),
            _ => (document, ""),
        };

        let fields = FIELDS
            .iter()
            .map(|spec| (spec, spec.resolve(root, prefix)))
            .collect();

        let sections = match root {
            Value::Object(map) => map.keys().take(MAX_SECTION_KEYS).cloned().collect(),
            _ => Vec::new(),
        };

        PlayerSummary { fields, sections }
    }

    /// Render the Telegram-Markdown reply: header, one line per field,
    /// a fields-source diagnostic for everything that resolved, and
    /// the sections seen at the top of the document.
    pub fn render(&self) -> String {
        let mut lines = vec!["🟢 *Player Info*".to_string()];
        for (spec, field) in &self.fields {
            let value = escape_markdown(&field.display);
            if spec.code {
                lines.push(format!("• *{}:* `{value}`", spec.label));
            } else {
                lines.push(format!("• *{}:* {value}", spec.label));
            }
        }

        let sources: Vec<String> = self
            .fields
            .iter()
            .filter_map(|(spec, field)| {
                field
                    .path
                    .as_ref()
                    .map(|path| format!("{}←`{}`", spec.key, escape_markdown(path)))
            })
            .collect();
        if !sources.is_empty() {
            lines.push(String::new());
            lines.push(format!("_Fields source:_ {}", sources.join(", ")));
        }

        if !self.sections.is_empty() {
            let listed: Vec<String> = self
                .sections
                .iter()
                .map(|key| escape_markdown(key))
                .collect();
            lines.push(String::new());
            lines.push(format!("_Sections available:_ {}", listed.join(", ")));
        }

        lines.join("\n")
    }
}

/// Escape Telegram legacy-Markdown metacharacters in interpolated
/// values so upstream-controlled text cannot break the reply markup.
fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '_' | '*' | '`' | '[') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
