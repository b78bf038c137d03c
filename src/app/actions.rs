use crate::analysis::Analysis;
use crate::github::models::RepoId;

#[derive(Debug)]
pub enum Action {
    InputChar(char),
    InputBackspace,
    InputClear,
    Submit,
    Refresh,
    SwitchPane,
    MoveUp,
    MoveDown,
    OpenInBrowser,
    FetchProgress { page: u32, issues: usize },
    AnalysisLoaded(Box<Analysis>),
    NoIssues(RepoId),
    LoadError(String),
    DismissError,
    Quit,
}

#[derive(Debug)]
pub enum SideEffect {
    Analyze(RepoId),
    OpenIssue { number: u64, url: String },
}
