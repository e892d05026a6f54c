use once_cell::sync::Lazy;
use regex::Regex;

// `/check <uid> [server]`, optionally addressed as `/check@botname`.
static CHECK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^/check(?:@\w+)?\s+(\d+)(?:\s+([A-Za-z]{2}))?$").expect("valid pattern")
});

// A bare identifier: observed UIDs are 6 to 20 digits.
static BARE_UID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{6,20}$").expect("valid pattern"));

/// A recognized chat instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start` greeting.
    Start,
    /// Player lookup: identifier plus two-letter server code.
    Check { uid: String, server: String },
}

impl Command {
    /// Interpret one chat line. Returns `None` for anything that is
    /// not a recognized command; the caller answers with help text.
    /// A check without an explicit server code falls back to
    /// `default_server`; explicit codes are lowercased.
    pub fn parse(text: &str, default_server: &str) -> Option<Command> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if text.starts_with("/start") {
            return Some(Command::Start);
        }
        if let Some(caps) = CHECK_RE.captures(text) {
            let server = caps
                .get(2)
                .map(|m| m.as_str().to_lowercase())
                .unwrap_or_else(|| default_server.to_string());
            return Some(Command::Check {
                uid: caps[1].to_string(),
                server,
            });
        }
        if BARE_UID_RE.is_match(text) {
            return Some(Command::Check {
                uid: text.to_string(),
                server: default_server.to_string(),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(uid: &str, server: &str) -> Option<Command> {
        Some(Command::Check {
            uid: uid.to_string(),
            server: server.to_string(),
        })
    }

    #[test]
    fn explicit_check_with_server() {
        assert_eq!(Command::parse("/check 123456789 in", "sg"), check("123456789", "in"));
    }

    #[test]
    fn check_defaults_the_server() {
        assert_eq!(Command::parse("/check 123456789", "sg"), check("123456789", "sg"));
    }

    #[test]
    fn check_is_case_insensitive_and_accepts_bot_suffix() {
        assert_eq!(Command::parse("/CHECK 42421111 BR", "sg"), check("42421111", "br"));
        assert_eq!(
            Command::parse("/check@lookup_bot 123456789", "sg"),
            check("123456789", "sg")
        );
    }

    #[test]
    fn bare_digit_string_is_an_implicit_check() {
        assert_eq!(Command::parse("123456789", "sg"), check("123456789", "sg"));
        assert_eq!(Command::parse("  123456 ", "in"), check("123456", "in"));
    }

    #[test]
    fn start_greets() {
        assert_eq!(Command::parse("/start", "sg"), Some(Command::Start));
        assert_eq!(Command::parse("/start hello", "sg"), Some(Command::Start));
    }

    #[test]
    fn unrecognized_input_yields_none() {
        assert_eq!(Command::parse("hello", "sg"), None);
        assert_eq!(Command::parse("", "sg"), None);
        // too short for a bare uid
        assert_eq!(Command::parse("12345", "sg"), None);
        // too long
        assert_eq!(Command::parse(&"9".repeat(21), "sg"), None);
        // server codes are exactly two letters
        assert_eq!(Command::parse("/check 123456789 sgp", "sg"), None);
        assert_eq!(Command::parse("/check 123456789 s1", "sg"), None);
        // identifier must be numeric
        assert_eq!(Command::parse("/check player one", "sg"), None);
    }
}
