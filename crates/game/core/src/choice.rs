//! The three moves a player can make.

/// One of the three hand shapes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

impl Choice {
    /// Every choice, in button order.
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// The choice this one defeats.
    pub const fn victim(self) -> Choice {
        match self {
            Choice::Rock => Choice::Scissors,
            Choice::Paper => Choice::Rock,
            Choice::Scissors => Choice::Paper,
        }
    }

    /// Returns true if `self` wins against `other`.
    pub const fn beats(self, other: Choice) -> bool {
        matches!(
            (self, other),
            (Choice::Rock, Choice::Scissors)
                | (Choice::Paper, Choice::Rock)
                | (Choice::Scissors, Choice::Paper)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn beats_is_a_cycle() {
        for a in Choice::ALL {
            assert!(a.beats(a.victim()));
            assert!(!a.victim().beats(a));
        }
        assert_eq!(Choice::Rock.victim().victim().victim(), Choice::Rock);
    }

    #[test]
    fn exactly_one_relation_holds_for_every_pair() {
        for a in Choice::ALL {
            for b in Choice::ALL {
                let relations = [a.beats(b), b.beats(a), a == b];
                assert_eq!(relations.iter().filter(|held| **held).count(), 1);
            }
        }
    }

    #[test]
    fn display_matches_button_labels() {
        assert_eq!(Choice::Rock.to_string(), "Rock");
        assert_eq!(Choice::Paper.to_string(), "Paper");
        assert_eq!(Choice::Scissors.as_ref(), "Scissors");
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Choice::from_str("rock").unwrap(), Choice::Rock);
        assert_eq!(Choice::from_str("SCISSORS").unwrap(), Choice::Scissors);
        assert!(Choice::from_str("lizard").is_err());
    }
}
