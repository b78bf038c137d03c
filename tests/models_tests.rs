use ghpulse::github::models::{Issue, IssueState, RepoId};
use ghpulse::github::FetchError;

#[test]
fn test_repo_id_parse() {
    let repo = RepoId::parse("rust-lang/rust").unwrap();
    assert_eq!(repo.owner, "rust-lang");
    assert_eq!(repo.name, "rust");
    assert_eq!(repo.full_name(), "rust-lang/rust");
    assert_eq!(repo.to_string(), "rust-lang/rust");
}

#[test]
fn test_repo_id_trims_whitespace() {
    let repo = RepoId::parse("  octo/widgets \n").unwrap();
    assert_eq!(repo.full_name(), "octo/widgets");
}

#[test]
fn test_repo_id_without_slash_is_rejected() {
    let err = RepoId::parse("widgets").unwrap_err();
    assert!(matches!(err, FetchError::InvalidRepo(ref s) if s == "widgets"));
    assert_eq!(err.status(), None);
}

#[test]
fn test_repo_id_only_checks_for_separator() {
    // Content is not validated beyond the presence of '/'
    let repo = RepoId::parse("/").unwrap();
    assert_eq!(repo.owner, "");
    assert_eq!(repo.name, "");

    let repo = RepoId::parse("a/b/c").unwrap();
    assert_eq!(repo.owner, "a");
    assert_eq!(repo.name, "b/c");
}

#[test]
fn test_issue_from_github_json() {
    let json = r#"{
        "url": "https://api.github.com/repos/octo/widgets/issues/12",
        "html_url": "https://github.com/octo/widgets/issues/12",
        "number": 12,
        "title": "Widgets wobble",
        "user": { "login": "alice" },
        "labels": [{ "name": "bug" }],
        "state": "closed",
        "comments": 3,
        "created_at": "2026-01-05T10:15:00Z",
        "updated_at": "2026-01-09T08:00:00Z",
        "closed_at": "2026-01-08T17:45:30Z"
    }"#;

    let issue: Issue = serde_json::from_str(json).unwrap();
    assert_eq!(issue.number, 12);
    assert_eq!(issue.state, IssueState::Closed);
    assert!(!issue.is_open());
    assert_eq!(
        issue.closed_at.unwrap().to_rfc3339(),
        "2026-01-08T17:45:30+00:00"
    );
    assert!(!issue.is_pull_request());
}

#[test]
fn test_open_issue_has_no_closed_at() {
    let json = r#"{
        "html_url": "https://github.com/octo/widgets/issues/3",
        "number": 3,
        "title": "Open one",
        "state": "open",
        "created_at": "2026-01-05T10:15:00Z",
        "updated_at": "2026-01-05T10:15:00Z",
        "closed_at": null
    }"#;

    let issue: Issue = serde_json::from_str(json).unwrap();
    assert!(issue.is_open());
    assert!(issue.closed_at.is_none());
}

#[test]
fn test_pull_request_record_is_marked() {
    let json = r#"{
        "html_url": "https://github.com/octo/widgets/pull/5",
        "number": 5,
        "title": "Fix wobble",
        "state": "open",
        "created_at": "2026-01-05T10:15:00Z",
        "updated_at": "2026-01-05T10:15:00Z",
        "pull_request": {
            "url": "https://api.github.com/repos/octo/widgets/pulls/5",
            "html_url": "https://github.com/octo/widgets/pull/5"
        }
    }"#;

    let issue: Issue = serde_json::from_str(json).unwrap();
    assert!(issue.is_pull_request());
}

#[test]
fn test_unknown_state_is_rejected() {
    let json = r#"{
        "html_url": "https://github.com/octo/widgets/issues/3",
        "number": 3,
        "title": "Odd",
        "state": "merged",
        "created_at": "2026-01-05T10:15:00Z",
        "updated_at": "2026-01-05T10:15:00Z"
    }"#;

    assert!(serde_json::from_str::<Issue>(json).is_err());
}

#[test]
fn test_issue_state_as_str() {
    assert_eq!(IssueState::Open.as_str(), "open");
    assert_eq!(IssueState::Closed.as_str(), "closed");
}
