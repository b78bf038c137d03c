pub mod weekly;

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::github::{GithubClient, Issue, IssueState, RepoId};
use crate::util::config::AnalysisConfig;

pub use weekly::{Ratio, WEEK_COUNT, WeekBucket};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("issue #{number} is malformed: {reason}")]
    MalformedIssue { number: u64, reason: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
    pub open: usize,
    pub closed: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn from_issues(issues: &[Issue]) -> Self {
        let open = issues.iter().filter(|i| i.is_open()).count();
        Self {
            open,
            closed: issues.len() - open,
            total: issues.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub repo: RepoId,
    pub status: StatusCounts,
    pub weeks: Vec<WeekBucket>,
    pub average_closure_rate: f64,
}

/// One completed run: the computed metrics plus the records they came from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub result: AnalysisResult,
    pub issues: Vec<Issue>,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Debug)]
pub enum Outcome {
    /// The fetch succeeded but there was nothing to analyze.
    Empty(RepoId),
    Ready(Box<Analysis>),
}

/// An issue is closed exactly when it carries a closure timestamp.
pub fn validate_issue(issue: &Issue) -> Result<(), AnalysisError> {
    match (issue.state, issue.closed_at) {
        (IssueState::Closed, None) => Err(AnalysisError::MalformedIssue {
            number: issue.number,
            reason: "closed without a closed_at timestamp".to_string(),
        }),
        (IssueState::Open, Some(_)) => Err(AnalysisError::MalformedIssue {
            number: issue.number,
            reason: "open but has a closed_at timestamp".to_string(),
        }),
        _ => Ok(()),
    }
}

pub fn analyze(
    repo: &RepoId,
    issues: &[Issue],
    today: NaiveDate,
) -> Result<AnalysisResult, AnalysisError> {
    for issue in issues {
        validate_issue(issue)?;
    }

    let weeks = weekly::aggregate_weeks(issues, today);
    let average_closure_rate = weekly::average_closure_rate(&weeks);

    Ok(AnalysisResult {
        repo: repo.clone(),
        status: StatusCounts::from_issues(issues),
        weeks,
        average_closure_rate,
    })
}

/// Fetches every issue for `repo` and aggregates them relative to `today`.
pub async fn run_analysis<F>(
    client: &GithubClient,
    repo: &RepoId,
    config: &AnalysisConfig,
    today: NaiveDate,
    on_page: F,
) -> Result<Outcome>
where
    F: FnMut(u32, usize),
{
    let mut issues = client.fetch_issues_with_progress(repo, on_page).await?;

    if config.exclude_pull_requests {
        let before = issues.len();
        issues.retain(|i| !i.is_pull_request());
        debug!(repo = %repo, dropped = before - issues.len(), "Excluded pull requests");
    }

    if issues.is_empty() {
        info!(repo = %repo, "No issues to analyze");
        return Ok(Outcome::Empty(repo.clone()));
    }

    let result = analyze(repo, &issues, today)?;
    info!(
        repo = %repo,
        issues = issues.len(),
        average_closure_rate = result.average_closure_rate,
        "Analysis complete"
    );

    Ok(Outcome::Ready(Box::new(Analysis {
        result,
        issues,
        fetched_at: Utc::now(),
    })))
}
