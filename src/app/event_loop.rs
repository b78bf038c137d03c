use std::io;

use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{debug, error};

use crate::analysis::{self, Outcome};
use crate::app::actions::{Action, SideEffect};
use crate::app::state::{AppState, FocusedPane};
use crate::app::update::update;
use crate::app::view;
use crate::github::{FetchError, GithubClient};
use crate::util::config::AppConfig;

pub async fn run(
    config: AppConfig,
    client: GithubClient,
    initial_repo: Option<String>,
) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Restore the terminal before the panic message prints
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, config, client, initial_repo).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
    client: GithubClient,
    initial_repo: Option<String>,
) -> Result<()> {
    let start_immediately = initial_repo.is_some();
    let mut state = AppState::new(initial_repo.or_else(|| config.ui.default_repo.clone()));

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();

    if start_immediately {
        for effect in update(&mut state, Action::Submit) {
            spawn_side_effect(effect, &config, &client, &action_tx);
        }
    }

    let mut event_stream = crossterm::event::EventStream::new();

    loop {
        terminal.draw(|f| view::render(f, &state))?;

        if state.should_quit {
            break;
        }

        let action = tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => map_event_to_action(&event, &state),
                    Some(Err(e)) => {
                        error!(error = %e, "Terminal event error");
                        None
                    }
                    None => Some(Action::Quit),
                }
            }
            Some(action) = action_rx.recv() => Some(action),
        };

        if let Some(action) = action {
            for effect in update(&mut state, action) {
                spawn_side_effect(effect, &config, &client, &action_tx);
            }
        }
    }

    Ok(())
}

fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    if *code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    // Error modal swallows everything else
    if state.error_message.is_some() {
        return match code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
            _ => None,
        };
    }

    if matches!(code, KeyCode::Tab | KeyCode::BackTab) {
        return Some(Action::SwitchPane);
    }

    match state.focused_pane {
        FocusedPane::Input => match code {
            KeyCode::Enter => Some(Action::Submit),
            KeyCode::Backspace => Some(Action::InputBackspace),
            KeyCode::Esc => Some(Action::InputClear),
            KeyCode::Char(c) => Some(Action::InputChar(*c)),
            _ => None,
        },
        FocusedPane::Issues => match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            KeyCode::Enter | KeyCode::Char('o') => Some(Action::OpenInBrowser),
            KeyCode::Char('r') => Some(Action::Refresh),
            KeyCode::Esc => Some(Action::SwitchPane),
            _ => None,
        },
    }
}

fn spawn_side_effect(
    effect: SideEffect,
    config: &AppConfig,
    client: &GithubClient,
    action_tx: &mpsc::UnboundedSender<Action>,
) {
    match effect {
        SideEffect::Analyze(repo) => {
            let client = client.clone();
            let tx = action_tx.clone();
            let analysis_config = config.analysis.clone();

            tokio::spawn(async move {
                debug!(repo = %repo, "Starting analysis");
                let progress_tx = tx.clone();
                let today = Utc::now().date_naive();

                let on_page = move |page, issues| {
                    let _ = progress_tx.send(Action::FetchProgress { page, issues });
                };
                let outcome =
                    analysis::run_analysis(&client, &repo, &analysis_config, today, on_page).await;

                let action = match outcome {
                    Ok(Outcome::Ready(analysis)) => Action::AnalysisLoaded(analysis),
                    Ok(Outcome::Empty(repo)) => Action::NoIssues(repo),
                    Err(e) => {
                        let status = e.downcast_ref::<FetchError>().and_then(FetchError::status);
                        error!(repo = %repo, status = ?status, error = %e, "Analysis failed");
                        Action::LoadError(format!("Failed to analyze {}: {}", repo, e))
                    }
                };
                let _ = tx.send(action);
            });
        }
        SideEffect::OpenIssue { number, url } => {
            tokio::task::spawn_blocking(move || {
                if let Err(e) = crate::util::browser::open_issue(number, &url) {
                    error!(error = %e, "Failed to open issue");
                }
            });
        }
    }
}
