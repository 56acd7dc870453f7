//! Parsing of one turn's player input.

/// Words that undo the last step.
const BACK_WORDS: &[&str] = &["back", "undo"];
/// Words that redraw the current menu.
const SHUFFLE_WORDS: &[&str] = &["shuffle", "reshuffle"];

/// What the player did this turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A 1-based index into the menu that was shown.
    Pick(usize),
    /// Undo the last movie or costar choice.
    Back,
    /// Draw a fresh menu without changing the path.
    Shuffle,
    /// Free text to be fuzzy-matched against every valid option.
    WriteIn(String),
}

impl Input {
    /// Classify a raw input line.
    pub fn parse(raw: &str) -> Self {
        let input = raw.trim();
        let lower = input.to_lowercase();

        if BACK_WORDS.contains(&lower.as_str()) {
            return Self::Back;
        }
        if SHUFFLE_WORDS.contains(&lower.as_str()) {
            return Self::Shuffle;
        }
        if !input.is_empty()
            && input.chars().all(|c| c.is_ascii_digit())
            && let Ok(n) = input.parse()
        {
            return Self::Pick(n);
        }

        Self::WriteIn(input.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Input::parse("back"), Input::Back);
        assert_eq!(Input::parse("  BACK "), Input::Back);
        assert_eq!(Input::parse("undo"), Input::Back);
        assert_eq!(Input::parse("Shuffle"), Input::Shuffle);
    }

    #[test]
    fn parse_picks() {
        assert_eq!(Input::parse("3"), Input::Pick(3));
        assert_eq!(Input::parse(" 12\n"), Input::Pick(12));
        assert_eq!(Input::parse("0"), Input::Pick(0));
    }

    #[test]
    fn everything_else_is_a_write_in() {
        assert_eq!(
            Input::parse("  Ocean's Eleven "),
            Input::WriteIn("Ocean's Eleven".to_string())
        );
        assert_eq!(Input::parse("-1"), Input::WriteIn("-1".to_string()));
        assert_eq!(Input::parse("2 Fast"), Input::WriteIn("2 Fast".to_string()));
        assert_eq!(Input::parse(""), Input::WriteIn(String::new()));
    }
}
