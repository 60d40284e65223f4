// ABOUTME: GitHub REST client for the site's star counter and roadmap step states.
// ABOUTME: Async over reqwest; roadmap issues are fetched concurrently with futures::join_all.

use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StatsError;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// Configuration for [`GithubClient`].
#[derive(Debug, Clone)]
pub struct GithubOptions {
    pub api_base: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Sent as a bearer token when set; unauthenticated requests are rate limited harder.
    pub token: Option<String>,
}

impl Default for GithubOptions {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: "docsnav/0.1".to_string(),
            timeout: Duration::from_secs(15),
            token: None,
        }
    }
}

/// Builder for constructing [`GithubClient`] instances.
#[derive(Debug, Clone, Default)]
pub struct GithubClientBuilder {
    opts: GithubOptions,
}

impl GithubClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at another API root (GitHub Enterprise, a mock server).
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.opts.api_base = base.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.opts.user_agent = user_agent.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.opts.timeout = timeout;
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.opts.token = Some(token.into());
        self
    }

    pub fn build(self) -> Result<GithubClient, StatsError> {
        GithubClient::new(self.opts)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    #[serde(default)]
    pub title: String,
    pub state: IssueState,
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
}

/// State of one roadmap step (an issue number) as shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoadmapStep {
    pub number: u64,
    pub closed: bool,
    pub closed_at: Option<DateTime<Utc>>,
}

#[derive(Deserialize)]
struct RepoInfo {
    stargazers_count: u64,
}

/// Client for the few GitHub endpoints the site uses.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    opts: GithubOptions,
}

impl GithubClient {
    pub fn builder() -> GithubClientBuilder {
        GithubClientBuilder::new()
    }

    pub fn new(opts: GithubOptions) -> Result<Self, StatsError> {
        let http = reqwest::Client::builder()
            .user_agent(&opts.user_agent)
            .timeout(opts.timeout)
            .build()
            .map_err(StatsError::Client)?;
        Ok(Self { http, opts })
    }

    /// Star count of `owner/name`.
    pub async fn stargazers(&self, repo: &str) -> Result<u64, StatsError> {
        let info: RepoInfo = self.get_json(&format!("/repos/{}", repo)).await?;
        Ok(info.stargazers_count)
    }

    pub async fn issue(&self, repo: &str, number: u64) -> Result<Issue, StatsError> {
        self.get_json(&format!("/repos/{}/issues/{}", repo, number))
            .await
    }

    /// States of all roadmap steps, in the order given.
    ///
    /// Steps are fetched concurrently. A step that cannot be fetched is reported open.
    pub async fn roadmap(&self, repo: &str, steps: &[u64]) -> Vec<RoadmapStep> {
        let fetches = steps.iter().map(|&number| async move {
            match self.issue(repo, number).await {
                Ok(issue) => RoadmapStep {
                    number,
                    closed: issue.state == IssueState::Closed,
                    closed_at: issue.closed_at,
                },
                Err(err) => {
                    warn!(step = number, error = %err, "could not fetch roadmap step");
                    RoadmapStep {
                        number,
                        closed: false,
                        closed_at: None,
                    }
                }
            }
        });
        join_all(fetches).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, StatsError> {
        let url = format!("{}{}", self.opts.api_base.trim_end_matches('/'), path);
        debug!(%url, "github request");

        let mut req = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.opts.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.map_err(|e| StatsError::http(&url, e))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(StatsError::status(&url, status.as_u16()));
        }
        let body = resp.text().await.map_err(|e| StatsError::http(&url, e))?;
        serde_json::from_str(&body).map_err(|e| StatsError::decode(&url, e))
    }
}
