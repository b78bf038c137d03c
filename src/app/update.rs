use crate::app::actions::{Action, SideEffect};
use crate::app::state::{AppState, FetchProgress, FocusedPane};
use crate::github::models::RepoId;

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::InputChar(ch) => {
            if state.focused_pane == FocusedPane::Input {
                state.input.push(ch);
            }
            vec![]
        }
        Action::InputBackspace => {
            if state.focused_pane == FocusedPane::Input {
                state.input.pop();
            }
            vec![]
        }
        Action::InputClear => {
            state.input.clear();
            vec![]
        }
        Action::Submit => {
            // One run at a time
            if state.loading {
                return vec![];
            }
            match RepoId::parse(&state.input) {
                Ok(repo) => {
                    state.begin_run(repo.clone());
                    vec![SideEffect::Analyze(repo)]
                }
                Err(e) => {
                    state.error_message = Some(e.to_string());
                    vec![]
                }
            }
        }
        Action::Refresh => {
            if state.loading {
                return vec![];
            }
            match state.last_repo.clone() {
                Some(repo) => {
                    state.begin_run(repo.clone());
                    vec![SideEffect::Analyze(repo)]
                }
                None => vec![],
            }
        }
        Action::SwitchPane => {
            state.focused_pane = match state.focused_pane {
                FocusedPane::Input => FocusedPane::Issues,
                FocusedPane::Issues => FocusedPane::Input,
            };
            vec![]
        }
        Action::MoveUp => {
            if state.focused_pane == FocusedPane::Issues && state.issue_cursor > 0 {
                state.issue_cursor -= 1;
            }
            vec![]
        }
        Action::MoveDown => {
            if state.focused_pane == FocusedPane::Issues {
                let max = state.issues().len().saturating_sub(1);
                if state.issue_cursor < max {
                    state.issue_cursor += 1;
                }
            }
            vec![]
        }
        Action::OpenInBrowser => match state.selected_issue() {
            Some(issue) => vec![SideEffect::OpenIssue {
                number: issue.number,
                url: issue.html_url.clone(),
            }],
            None => vec![],
        },
        Action::FetchProgress { page, issues } => {
            if state.loading {
                state.progress = Some(FetchProgress { page, issues });
            }
            vec![]
        }
        Action::AnalysisLoaded(analysis) => {
            state.finish_run();
            state.analysis = Some(*analysis);
            state.issue_cursor = 0;
            vec![]
        }
        Action::NoIssues(repo) => {
            state.finish_run();
            state.info_message = Some(format!("No issues found for {}", repo));
            vec![]
        }
        Action::LoadError(msg) => {
            state.finish_run();
            state.error_message = Some(msg);
            vec![]
        }
        Action::DismissError => {
            state.error_message = None;
            vec![]
        }
    }
}
