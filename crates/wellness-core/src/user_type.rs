//! Account category for a user.

use serde::{Deserialize, Serialize};

/// Closed set of user categories offered at signup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    /// Student.
    Student,
    /// Working professional.
    Working,
    /// Anything else.
    Other,
}

impl UserType {
    /// All variants, in the order presented at signup.
    pub const ALL: [UserType; 3] = [UserType::Student, UserType::Working, UserType::Other];

    /// Stable string form used in the database and forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserType::Student => "Student",
            UserType::Working => "Working",
            UserType::Other => "Other",
        }
    }

    /// Parse from user input, case-insensitively.
    ///
    /// Unrecognized values fall back to [`UserType::Other`]; signup input is
    /// constrained by the form, so this is a persistence-read concern.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "student" => UserType::Student,
            "working" => UserType::Working,
            _ => UserType::Other,
        }
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for ut in UserType::ALL {
            assert_eq!(UserType::parse(ut.as_str()), ut);
        }
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(UserType::parse("student"), UserType::Student);
        assert_eq!(UserType::parse("WORKING"), UserType::Working);
        assert_eq!(UserType::parse("retired"), UserType::Other);
        assert_eq!(UserType::parse(""), UserType::Other);
    }
}
