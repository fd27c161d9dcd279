//! Domain entities produced by the response mapper. Mapping from the raw wire
//! records is pure and infallible; presentation code consumes these read-only.

use crate::filter::{Difficulty, QuestionStatus};
use crate::graphql::model::{RawQuestion, RawUser};

pub const PROBLEM_URL_BASE: &str = "https://leetcode.com/problems";

/// One problem as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// Platform-assigned display id (`questionFrontendId`).
    pub id: String,
    pub title: String,
    pub title_slug: String,
    pub difficulty: Difficulty,
    /// Absent means the user never attempted the question.
    pub status: Option<QuestionStatus>,
    pub topics: Vec<String>,
    /// Percentage in the range 0-100.
    pub acceptance_rate: f64,
    pub is_paid_only: bool,
    pub frequency: Option<f64>,
}

impl Question {
    /// Canonical problem URL, derived from the slug.
    pub fn url(&self) -> String {
        format!("{}/{}", PROBLEM_URL_BASE, self.title_slug)
    }

    pub fn status_label(&self) -> &'static str {
        self.status
            .map(|status| status.as_str())
            .unwrap_or("Not Attempted")
    }
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        Question {
            id: raw.question_frontend_id,
            title: raw.title,
            title_slug: raw.title_slug,
            difficulty: raw.difficulty,
            status: raw.status,
            topics: raw.topic_tags.into_iter().map(|tag| tag.name).collect(),
            acceptance_rate: raw.ac_rate,
            is_paid_only: raw.paid_only,
            frequency: raw.frequency,
        }
    }
}

/// Authenticated user and their accepted-submission counts.
#[derive(Debug, Clone, PartialEq)]
pub struct UserInfo {
    pub username: String,
    /// Per-difficulty solved counts in the order the API reported them. The
    /// API also reports an aggregate `All` bucket, which is dropped; an absent
    /// difficulty stays absent rather than materializing as zero.
    pub solved_counts: Vec<(Difficulty, u64)>,
}

impl UserInfo {
    pub fn total_solved(&self) -> u64 {
        self.solved_counts.iter().map(|(_, count)| count).sum()
    }
}

impl From<RawUser> for UserInfo {
    fn from(raw: RawUser) -> Self {
        let solved_counts = raw
            .submit_stats
            .map(|stats| {
                stats
                    .ac_submission_num
                    .into_iter()
                    .filter_map(|entry| {
                        Difficulty::parse(&entry.difficulty)
                            .ok()
                            .map(|difficulty| (difficulty, entry.count))
                    })
                    .collect()
            })
            .unwrap_or_default();

        UserInfo {
            username: raw.username,
            solved_counts,
        }
    }
}
