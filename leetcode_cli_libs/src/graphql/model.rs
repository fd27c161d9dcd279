//! Typed shapes of the raw GraphQL wire responses. Decoding into these
//! structs is the schema-validation step; defaulting rules for optional
//! fields live here as serde defaults.

use crate::filter::{Difficulty, QuestionStatus};
use serde::{Deserialize, Serialize};

/// Generic GraphQL response envelope. `errors` can be populated even when the
/// HTTP status is 200, which still counts as an API failure.
#[derive(Serialize, Deserialize, Debug)]
pub struct GraphQLResponse<D> {
    pub data: Option<D>,
    pub errors: Option<Vec<GraphQLErrorMessage>>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct GraphQLErrorMessage {
    pub message: Option<String>,
}

impl GraphQLErrorMessage {
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or("Unknown error")
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserInfoData {
    /// `None` signals an invalid or expired session, not a decode failure.
    pub user: Option<RawUser>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RawUser {
    pub username: String,
    #[serde(alias = "submitStats")]
    pub submit_stats: Option<RawSubmitStats>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RawSubmitStats {
    #[serde(alias = "acSubmissionNum", default)]
    pub ac_submission_num: Vec<RawSubmissionCount>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RawSubmissionCount {
    /// Kept as a string because the API reports an aggregate `All` bucket
    /// alongside the real difficulties.
    pub difficulty: String,
    pub count: u64,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ProblemListData {
    #[serde(alias = "problemsetQuestionListV2")]
    pub problemset_question_list_v2: Option<RawProblemList>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RawProblemList {
    #[serde(default)]
    pub questions: Vec<RawQuestion>,
    #[serde(alias = "totalLength", default)]
    pub total_length: u64,
    #[serde(alias = "hasMore", default)]
    pub has_more: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawQuestion {
    #[serde(alias = "questionFrontendId")]
    pub question_frontend_id: String,
    pub title: String,
    #[serde(alias = "titleSlug")]
    pub title_slug: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub status: Option<QuestionStatus>,
    #[serde(alias = "topicTags", default)]
    pub topic_tags: Vec<RawTopicTag>,
    #[serde(alias = "acRate", default)]
    pub ac_rate: f64,
    #[serde(alias = "paidOnly", default)]
    pub paid_only: bool,
    #[serde(default)]
    pub frequency: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RawTopicTag {
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_decode_full_question() {
        let raw: RawQuestion = serde_json::from_str(
            r#"{
                "questionFrontendId": "1",
                "title": "Two Sum",
                "titleSlug": "two-sum",
                "difficulty": "Easy",
                "status": "SOLVED",
                "topicTags": [{"name": "Array", "slug": "array"}],
                "acRate": 51.3,
                "paidOnly": false,
                "frequency": 0.8
            }"#,
        )
        .unwrap();

        assert_eq!(raw.question_frontend_id, "1");
        assert_eq!(raw.difficulty, Difficulty::Easy);
        assert_eq!(raw.status, Some(QuestionStatus::Solved));
        assert_eq!(raw.topic_tags[0].name, "Array");
        assert_eq!(raw.frequency, Some(0.8));
    }

    #[test]
    fn test_decode_applies_defaults() {
        let raw: RawQuestion = serde_json::from_str(
            r#"{
                "questionFrontendId": "9",
                "title": "Palindrome Number",
                "titleSlug": "palindrome-number",
                "difficulty": "Easy"
            }"#,
        )
        .unwrap();

        assert_eq!(raw.status, None);
        assert!(raw.topic_tags.is_empty());
        assert_eq!(raw.ac_rate, 0.0);
        assert!(!raw.paid_only);
        assert_eq!(raw.frequency, None);
    }

    #[test]
    fn test_decode_null_user() {
        let body: GraphQLResponse<UserInfoData> =
            serde_json::from_str(r#"{"data": {"user": null}}"#).unwrap();

        assert!(body.data.unwrap().user.is_none());
        assert!(body.errors.is_none());
    }

    #[test]
    fn test_error_message_default() {
        let error: GraphQLErrorMessage = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(error.message(), "Unknown error");
    }
}
