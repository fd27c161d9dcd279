use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Question status in the vocabulary the GraphQL API accepts.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QuestionStatus {
    Solved,
    Attempted,
    ToDo,
}

impl QuestionStatus {
    const OPTIONS: &'static str = "solved, attempted, todo";

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionStatus::Solved => "SOLVED",
            QuestionStatus::Attempted => "ATTEMPTED",
            QuestionStatus::ToDo => "TO_DO",
        }
    }

    /// Case-insensitive alias lookup. Canonical wire forms lowercase into the
    /// same table, so `SOLVED` and `solved` both resolve.
    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "solved" => Ok(QuestionStatus::Solved),
            "attempted" => Ok(QuestionStatus::Attempted),
            "todo" | "to_do" | "to-do" => Ok(QuestionStatus::ToDo),
            _ => Err(Error::InvalidArgument {
                field: "status",
                value: raw.to_string(),
                options: Self::OPTIONS,
            }),
        }
    }
}

impl fmt::Display for QuestionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Question difficulty. The API returns capitalized labels but expects the
/// uppercased form inside a difficulty filter.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    const OPTIONS: &'static str = "easy, medium, hard";

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn uppercase(&self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn parse(raw: &str) -> Result<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(Error::InvalidArgument {
                field: "difficulty",
                value: raw.to_string(),
                options: Self::OPTIONS,
            }),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Normalization happens once, at the boundary. `None` and the empty string
/// both mean "no filter"; any other unrecognized value is rejected here so no
/// raw user string survives into a [`QuestionFilter`].
pub fn normalize_status(raw: Option<&str>) -> Result<Option<QuestionStatus>> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => QuestionStatus::parse(s).map(Some),
    }
}

pub fn normalize_difficulty(raw: Option<&str>) -> Result<Option<Difficulty>> {
    match raw {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => Difficulty::parse(s).map(Some),
    }
}

/// Validated filter criteria for a problem-list request. Built once per
/// invocation and immutable thereafter; `status`/`difficulty` are always
/// canonical values.
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionFilter {
    pub status: Option<QuestionStatus>,
    pub difficulty: Option<Difficulty>,
    pub search_keyword: Option<String>,
    /// Maximum number of questions to fetch. Must be positive; the CLI layer
    /// enforces this with a range parser before the filter is built.
    pub limit: u32,
    pub skip: u32,
    pub include_paid: bool,
}

pub const DEFAULT_LIMIT: u32 = 50;

impl Default for QuestionFilter {
    fn default() -> Self {
        QuestionFilter {
            status: None,
            difficulty: None,
            search_keyword: None,
            limit: DEFAULT_LIMIT,
            skip: 0,
            include_paid: true,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_normalize_status_case_insensitive() {
        for raw in ["solved", "Solved", "SOLVED"] {
            assert_eq!(
                normalize_status(Some(raw)).unwrap(),
                Some(QuestionStatus::Solved)
            );
        }
        for raw in ["todo", "to_do", "to-do", "TO_DO"] {
            assert_eq!(
                normalize_status(Some(raw)).unwrap(),
                Some(QuestionStatus::ToDo)
            );
        }
        assert_eq!(
            normalize_status(Some("attempted")).unwrap(),
            Some(QuestionStatus::Attempted)
        );
    }

    #[test]
    fn test_normalize_status_absent_means_no_filter() {
        assert_eq!(normalize_status(None).unwrap(), None);
        assert_eq!(normalize_status(Some("")).unwrap(), None);
    }

    #[test]
    fn test_normalize_status_rejects_unknown() {
        let err = normalize_status(Some("done")).unwrap_err();
        match err {
            Error::InvalidArgument { field, value, .. } => {
                assert_eq!(field, "status");
                assert_eq!(value, "done");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_normalize_difficulty() {
        for raw in ["easy", "Easy", "EASY"] {
            assert_eq!(
                normalize_difficulty(Some(raw)).unwrap(),
                Some(Difficulty::Easy)
            );
        }
        assert_eq!(normalize_difficulty(None).unwrap(), None);

        let err = normalize_difficulty(Some("extreme")).unwrap_err();
        match err {
            Error::InvalidArgument { field, value, .. } => {
                assert_eq!(field, "difficulty");
                assert_eq!(value, "extreme");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_difficulty_wire_forms() {
        assert_eq!(Difficulty::Medium.as_str(), "Medium");
        assert_eq!(Difficulty::Medium.uppercase(), "MEDIUM");
        assert_eq!(QuestionStatus::ToDo.as_str(), "TO_DO");
    }

    #[test]
    fn test_filter_defaults() {
        let filter = QuestionFilter::default();
        assert_eq!(filter.limit, 50);
        assert_eq!(filter.skip, 0);
        assert!(filter.include_paid);
        assert_eq!(filter.status, None);
        assert_eq!(filter.difficulty, None);
        assert_eq!(filter.search_keyword, None);
    }
}
