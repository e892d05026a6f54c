/// Canonicalize a field name for comparison: strip `_` and `-`,
/// lowercase the rest. Upstream has spelled the same field `Player_ID`,
/// `playerid`, and `PLAYER-ID` across schema revisions; all three must
/// compare equal.
pub fn normalize(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_and_case_variants_collapse() {
        assert_eq!(normalize("Player_ID"), "playerid");
        assert_eq!(normalize("PLAYER-ID"), "playerid");
        assert_eq!(normalize("playerid"), "playerid");
    }

    #[test]
    fn idempotent() {
        let once = normalize("Clan_Basic-Info");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn empty_string_is_fine() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn non_ascii_lowercases() {
        assert_eq!(normalize("Größe"), "größe");
    }
}
