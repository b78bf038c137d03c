use ghpulse::app::actions::Action;
use ghpulse::app::state::AppState;
use ghpulse::app::update::update;
use ghpulse::app::view;
use ratatui::{Terminal, backend::TestBackend};

const RATE_LIMITED: &str = "Failed to analyze octo/widgets: GitHub API returned 403: \
API rate limit exceeded for 203.0.113.7. (But here's the good news: Authenticated \
requests get a higher rate limit. Check out the documentation for more details.)";

fn draw(state: &AppState, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| view::render(f, state)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut screen = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            screen.push_str(buffer[(x, y)].symbol());
        }
        screen.push('\n');
    }
    screen
}

fn errored_state(msg: &str) -> AppState {
    let mut state = AppState::new(Some("octo/widgets".into()));
    update(&mut state, Action::Submit);
    update(&mut state, Action::LoadError(msg.into()));
    state
}

#[test]
fn test_error_modal_shows_full_message() {
    let screen = draw(&errored_state(RATE_LIMITED), 100, 30);

    assert!(screen.contains(" Error "));
    assert!(screen.contains("403"));
    assert!(screen.contains("exceeded"));
    assert!(screen.contains("203.0.113.7."));
    assert!(screen.contains("documentation"));
    assert!(screen.contains("details.)"));
    assert!(screen.contains("Press Esc to dismiss"));
}

#[test]
fn test_error_modal_short_message() {
    let screen = draw(&errored_state("repository not found: octo/missing"), 100, 30);
    assert!(screen.contains("repository not found: octo/missing"));
    assert!(screen.contains("Press Esc to dismiss"));
}

#[test]
fn test_error_modal_fits_small_terminal() {
    // Taller than the terminal once wrapped; must clamp rather than overflow
    let screen = draw(&errored_state(RATE_LIMITED), 40, 8);
    assert!(screen.contains("Error"));
}

#[test]
fn test_dismissed_error_is_not_drawn() {
    let mut state = errored_state(RATE_LIMITED);
    update(&mut state, Action::DismissError);
    let screen = draw(&state, 100, 30);
    assert!(!screen.contains("Press Esc to dismiss"));
}
