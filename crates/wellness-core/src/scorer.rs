//! Mood scoring from free-text classifications.

/// Ordered keyword table. The first keyword found in the classification wins,
/// so table order is the tie-break when several keywords occur.
const MOOD_KEYWORDS: &[(&str, i64)] = &[
    ("happy", 5),
    ("joy", 5),
    ("content", 4),
    ("neutral", 3),
    ("anxious", 2),
    ("sad", 1),
    ("depressed", 1),
];

/// Score returned when no keyword matches.
pub const NEUTRAL_SCORE: i64 = 3;

/// Map a free-text mood classification to an integer score in `[1, 5]`.
///
/// Matching is a case-insensitive substring search against the keyword table.
/// Any input is accepted; unrecognized text scores as neutral.
pub fn score(classification: &str) -> i64 {
    let lowered = classification.to_lowercase();
    for (keyword, value) in MOOD_KEYWORDS {
        if lowered.contains(keyword) {
            return *value;
        }
    }
    NEUTRAL_SCORE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_keywords() {
        assert_eq!(score("happy"), 5);
        assert_eq!(score("joy"), 5);
        assert_eq!(score("content"), 4);
        assert_eq!(score("neutral"), 3);
        assert_eq!(score("anxious"), 2);
        assert_eq!(score("sad"), 1);
        assert_eq!(score("depressed"), 1);
    }

    #[test]
    fn test_score_case_insensitive_substring() {
        assert_eq!(score("I feel very Happy and Joyful"), 5);
        assert_eq!(score("The user seems CONTENT with life"), 4);
        assert_eq!(score("Signs of being ANXIOUS"), 2);
    }

    #[test]
    fn test_score_table_order_breaks_ties() {
        // Both "sad" and "happy" occur; "happy" is earlier in the table.
        assert_eq!(score("was sad, now happy"), 5);
        // "content" before "anxious".
        assert_eq!(score("anxious but content"), 4);
    }

    #[test]
    fn test_score_default_neutral() {
        assert_eq!(score(""), NEUTRAL_SCORE);
        assert_eq!(score("completely unrecognizable text"), NEUTRAL_SCORE);
        assert_eq!(score("ecstatic"), NEUTRAL_SCORE);
    }
}
