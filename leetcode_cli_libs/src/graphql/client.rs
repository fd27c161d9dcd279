use crate::error::{Error, Result};
use crate::filter::QuestionFilter;
use crate::graphql::model::{GraphQLResponse, ProblemListData, UserInfoData};
use crate::graphql::query::{ProblemsetVariables, PROBLEM_LIST_QUERY, USER_INFO_QUERY};
use crate::session::Session;
use crate::types::{Question, UserInfo};
use reqwest::header::{CONTENT_TYPE, COOKIE, USER_AGENT};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use url::Url;

pub const GRAPHQL_ENDPOINT: &str = "https://leetcode.com/graphql";
pub const USER_AGENT_VALUE: &str = "LeetCode-CLI/1.0.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize)]
struct Payload<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

/// GraphQL client for the platform API. Holds the session explicitly; there
/// is no process-wide state, and a single request is in flight at a time.
pub struct LeetCodeClient {
    client: Client,
    endpoint: Url,
    session: Option<Session>,
}

impl LeetCodeClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(GRAPHQL_ENDPOINT)
    }

    /// Endpoint override, used by tests pointing at a local server.
    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::Api(format!("invalid API endpoint '{}': {}", endpoint, e)))?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(LeetCodeClient {
            client,
            endpoint,
            session: None,
        })
    }

    pub fn with_session(session: Session) -> Result<Self> {
        let mut client = Self::new()?;
        client.session = Some(session);
        Ok(client)
    }

    /// Single GraphQL POST. Fails with [`Error::SessionNotLoaded`] before any
    /// network activity when no session is attached; one attempt, no retries.
    async fn request<D>(&self, query: &str, variables: Option<Value>) -> Result<D>
    where
        D: DeserializeOwned,
    {
        let session = self.session.as_ref().ok_or(Error::SessionNotLoaded)?;

        let payload = Payload { query, variables };
        let res = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(COOKIE, session.cookie())
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        decode_response(status, &body)
    }

    /// Validate the session and fetch the authenticated user's profile.
    pub async fn check_session(&self) -> Result<UserInfo> {
        let data: UserInfoData = self.request(USER_INFO_QUERY, None).await?;
        user_from(data)
    }

    pub async fn fetch_questions(&self, filter: &QuestionFilter) -> Result<Vec<Question>> {
        let variables = serde_json::to_value(ProblemsetVariables::from(filter))
            .map_err(|e| Error::Api(format!("failed to encode query variables: {}", e)))?;

        let data: ProblemListData = self.request(PROBLEM_LIST_QUERY, Some(variables)).await?;
        let questions: Vec<Question> = data
            .problemset_question_list_v2
            .map(|list| list.questions)
            .unwrap_or_default()
            .into_iter()
            .map(Question::from)
            .collect();

        tracing::info!("fetched {} questions", questions.len());
        Ok(questions)
    }

    pub async fn search_questions(&self, keyword: &str, limit: u32) -> Result<Vec<Question>> {
        let filter = QuestionFilter {
            search_keyword: Some(keyword.to_string()),
            limit,
            ..QuestionFilter::default()
        };
        self.fetch_questions(&filter).await
    }
}

/// `user: null` with a successful status means the token is stale, which is
/// a session failure, not a defaultable mapping case.
fn user_from(data: UserInfoData) -> Result<UserInfo> {
    let user = data.user.ok_or(Error::SessionInvalid)?;
    Ok(UserInfo::from(user))
}

/// Classify one HTTP exchange into payload, API error, or parse error. The
/// body is decoded first so GraphQL error messages can be attached to non-200
/// statuses, and a non-empty `errors` array fails even on 200.
fn decode_response<D>(status: StatusCode, body: &str) -> Result<D>
where
    D: DeserializeOwned,
{
    let parsed: GraphQLResponse<D> =
        serde_json::from_str(body).map_err(|source| Error::Parse {
            body: body.to_string(),
            source,
        })?;

    let messages: Vec<String> = parsed
        .errors
        .unwrap_or_default()
        .iter()
        .map(|error| error.message().to_string())
        .collect();

    if status != StatusCode::OK {
        let mut message = format!("API request failed with status code: {}", status.as_u16());
        if !messages.is_empty() {
            message.push_str(&format!(". Errors: {}", messages.join(", ")));
        }
        return Err(Error::Api(message));
    }

    if !messages.is_empty() {
        return Err(Error::Api(format!(
            "GraphQL errors: {}",
            messages.join(", ")
        )));
    }

    parsed
        .data
        .ok_or_else(|| Error::Api(String::from("API response contained no data")))
}
