use crate::filter::QuestionFilter;
use serde::Serialize;

/// Anonymous query returning the authenticated user, or `user: null` when the
/// session cookie is invalid.
pub const USER_INFO_QUERY: &str = r#"
{
    user {
        username
        submitStats {
            acSubmissionNum {
                difficulty
                count
            }
        }
    }
}
"#;

pub const PROBLEM_LIST_QUERY: &str = r#"
query problemsetQuestionListV2(
    $filters: QuestionFilterInput,
    $limit: Int,
    $skip: Int,
    $sortBy: QuestionSortByInput,
    $searchKeyword: String
) {
    problemsetQuestionListV2(
        filters: $filters
        limit: $limit
        skip: $skip
        sortBy: $sortBy
        searchKeyword: $searchKeyword
    ) {
        questions {
            questionFrontendId
            title
            titleSlug
            difficulty
            status
            topicTags {
                name
                slug
            }
            acRate
            paidOnly
            frequency
        }
        totalLength
        hasMore
    }
}
"#;

/// Variables object for [`PROBLEM_LIST_QUERY`]. The remote schema treats an
/// omitted filter key as "unfiltered", so every optional sub-object is skipped
/// entirely rather than serialized as `null`.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProblemsetVariables {
    limit: u32,
    skip: u32,
    sort_by: SortBy,
    #[serde(skip_serializing_if = "Option::is_none")]
    search_keyword: Option<String>,
    filters: Filters,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct SortBy {
    sort_field: &'static str,
    sort_order: &'static str,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct Filters {
    filter_combine_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    status_filter: Option<StatusFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    difficulty_filter: Option<DifficultyFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    paid_only_filter: Option<PaidOnlyFilter>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct StatusFilter {
    question_statuses: Vec<&'static str>,
    operator: &'static str,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct DifficultyFilter {
    difficulties: Vec<&'static str>,
    operator: &'static str,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct PaidOnlyFilter {
    paid_only: bool,
    operator: &'static str,
}

impl From<&QuestionFilter> for ProblemsetVariables {
    fn from(filter: &QuestionFilter) -> Self {
        let status_filter = filter.status.map(|status| StatusFilter {
            question_statuses: vec![status.as_str()],
            operator: "IS",
        });

        let difficulty_filter = filter.difficulty.map(|difficulty| DifficultyFilter {
            difficulties: vec![difficulty.uppercase()],
            operator: "IS",
        });

        // The platform default already includes paid content, so the filter
        // only exists when paid questions must be excluded.
        let paid_only_filter = if filter.include_paid {
            None
        } else {
            Some(PaidOnlyFilter {
                paid_only: false,
                operator: "IS",
            })
        };

        let search_keyword = filter
            .search_keyword
            .as_deref()
            .filter(|keyword| !keyword.is_empty())
            .map(String::from);

        ProblemsetVariables {
            limit: filter.limit,
            skip: filter.skip,
            sort_by: SortBy {
                sort_field: "CUSTOM",
                sort_order: "ASCENDING",
            },
            search_keyword,
            filters: Filters {
                filter_combine_type: "ALL",
                status_filter,
                difficulty_filter,
                paid_only_filter,
            },
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::filter::{Difficulty, QuestionStatus};
    use serde_json::{json, Value};

    fn to_json(filter: &QuestionFilter) -> Value {
        serde_json::to_value(ProblemsetVariables::from(filter)).unwrap()
    }

    #[test]
    fn test_default_filter_emits_no_sub_filters() {
        let value = to_json(&QuestionFilter::default());

        assert_eq!(
            value,
            json!({
                "limit": 50,
                "skip": 0,
                "sortBy": {"sortField": "CUSTOM", "sortOrder": "ASCENDING"},
                "filters": {"filterCombineType": "ALL"},
            })
        );
    }

    #[test]
    fn test_fully_constrained_filter() {
        let filter = QuestionFilter {
            status: Some(QuestionStatus::Solved),
            difficulty: Some(Difficulty::Medium),
            search_keyword: Some(String::from("two sum")),
            limit: 10,
            skip: 20,
            include_paid: false,
        };
        let value = to_json(&filter);

        assert_eq!(value["limit"], json!(10));
        assert_eq!(value["skip"], json!(20));
        assert_eq!(value["searchKeyword"], json!("two sum"));
        assert_eq!(
            value["filters"],
            json!({
                "filterCombineType": "ALL",
                "statusFilter": {"questionStatuses": ["SOLVED"], "operator": "IS"},
                "difficultyFilter": {"difficulties": ["MEDIUM"], "operator": "IS"},
                "paidOnlyFilter": {"paidOnly": false, "operator": "IS"},
            })
        );
    }

    #[test]
    fn test_empty_keyword_is_omitted() {
        let filter = QuestionFilter {
            search_keyword: Some(String::new()),
            ..QuestionFilter::default()
        };
        let value = to_json(&filter);

        assert!(value.get("searchKeyword").is_none());
    }

    #[test]
    fn test_include_paid_omits_paid_filter() {
        let filter = QuestionFilter {
            include_paid: true,
            ..QuestionFilter::default()
        };
        let value = to_json(&filter);

        assert!(value["filters"].get("paidOnlyFilter").is_none());
        assert!(value["filters"].get("statusFilter").is_none());
        assert!(value["filters"].get("difficultyFilter").is_none());
    }
}
