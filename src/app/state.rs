use crate::analysis::Analysis;
use crate::github::models::{Issue, RepoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Input,
    Issues,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchProgress {
    pub page: u32,
    pub issues: usize,
}

#[derive(Debug)]
pub struct AppState {
    // Form
    pub input: String,

    // Data
    pub analysis: Option<Analysis>,
    pub last_repo: Option<RepoId>,

    // Navigation
    pub focused_pane: FocusedPane,
    pub issue_cursor: usize,

    // UI flags
    pub loading: bool,
    pub progress: Option<FetchProgress>,
    pub info_message: Option<String>,
    pub error_message: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(default_repo: Option<String>) -> Self {
        Self {
            input: default_repo.unwrap_or_default(),
            analysis: None,
            last_repo: None,
            focused_pane: FocusedPane::Input,
            issue_cursor: 0,
            loading: false,
            progress: None,
            info_message: None,
            error_message: None,
            should_quit: false,
        }
    }

    /// Starts a new run. The previous result is dropped rather than kept
    /// on screen next to a run for a different repository.
    pub fn begin_run(&mut self, repo: RepoId) {
        self.loading = true;
        self.progress = None;
        self.analysis = None;
        self.info_message = None;
        self.error_message = None;
        self.issue_cursor = 0;
        self.last_repo = Some(repo);
    }

    pub fn finish_run(&mut self) {
        self.loading = false;
        self.progress = None;
    }

    pub fn issues(&self) -> &[Issue] {
        self.analysis
            .as_ref()
            .map(|a| a.issues.as_slice())
            .unwrap_or_default()
    }

    pub fn selected_issue(&self) -> Option<&Issue> {
        self.issues().get(self.issue_cursor)
    }
}
