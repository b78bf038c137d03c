use std::time::Duration;

use anyhow::{Context, Result, bail};
use reqwest::{Client, StatusCode, Url, header};
use serde_json::Value;
use tracing::debug;

use super::error::FetchError;
use super::models::{Issue, RepoId};

/// Records requested per page.
pub const PER_PAGE: usize = 100;

/// Hard upper bound on records fetched in one run.
pub const MAX_ISSUES: usize = 1000;

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    api_url: String,
}

impl GithubClient {
    pub fn new(api_url: &str, timeout: Duration) -> Result<Self> {
        let url = Url::parse(api_url)
            .with_context(|| format!("Invalid GitHub API URL: {}", api_url))?;
        let loopback = matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"));
        if url.scheme() != "https" && !(url.scheme() == "http" && loopback) {
            bail!("GitHub API URL must use HTTPS: {}", api_url);
        }

        let client = Client::builder()
            .user_agent("ghpulse")
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn fetch_issues(&self, repo: &RepoId) -> Result<Vec<Issue>, FetchError> {
        self.fetch_issues_with_progress(repo, |_, _| {}).await
    }

    /// Pages through the issues endpoint one request at a time.
    ///
    /// Stops once [`MAX_ISSUES`] records have accumulated (truncating any
    /// excess), on an empty page, or on a short page. `on_page` is called
    /// after every page with the page number and the running total.
    pub async fn fetch_issues_with_progress<F>(
        &self,
        repo: &RepoId,
        mut on_page: F,
    ) -> Result<Vec<Issue>, FetchError>
    where
        F: FnMut(u32, usize),
    {
        let url = format!("{}/repos/{}/{}/issues", self.api_url, repo.owner, repo.name);
        let mut all_issues: Vec<Issue> = Vec::new();
        let mut page: u32 = 1;

        loop {
            let issues = self.fetch_page(&url, repo, page).await?;
            let page_len = issues.len();
            all_issues.extend(issues);

            debug!(
                repo = %repo,
                page = page,
                page_len = page_len,
                total = all_issues.len(),
                "Fetched issues page"
            );
            on_page(page, all_issues.len().min(MAX_ISSUES));

            if all_issues.len() >= MAX_ISSUES {
                all_issues.truncate(MAX_ISSUES);
                break;
            }
            if page_len < PER_PAGE {
                break;
            }
            page += 1;
        }

        debug!(repo = %repo, count = all_issues.len(), "Fetched issues");
        Ok(all_issues)
    }

    async fn fetch_page(
        &self,
        url: &str,
        repo: &RepoId,
        page: u32,
    ) -> Result<Vec<Issue>, FetchError> {
        let resp = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .query(&[
                ("state", "all".to_string()),
                ("per_page", PER_PAGE.to_string()),
                ("page", page.to_string()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound(repo.full_name()));
        }
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: error_message(&text, status),
            });
        }

        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|source| FetchError::Decode { page, source })
    }
}

/// GitHub error bodies carry a `message` field; fall back to the raw text.
fn error_message(body: &str, status: StatusCode) -> String {
    let from_json = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v["message"].as_str().map(|s| s.to_string()));

    match from_json {
        Some(msg) => msg,
        None if !body.trim().is_empty() => body.trim().to_string(),
        None => status
            .canonical_reason()
            .unwrap_or("Unknown error")
            .to_string(),
    }
}
