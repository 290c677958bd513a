//! TUI application event loop.
//!
//! Owns the terminal and drives the viewer: every keystroke in the
//! search field triggers one synchronous highlight pass over the whole
//! collection, which runs to completion before the next event is
//! handled. There is no debouncing and no diffing; a new pass always
//! supersedes the previous one.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use choromap::search::MapSession;
use choromap::surface::MemorySurface;

use crate::error::CliError;
use crate::ui::{self, ViewerEvent, ViewerState};

/// Poll interval for input events.
const TICK_RATE: Duration = Duration::from_millis(50);

/// Configuration for starting the viewer.
pub struct ViewerConfig {
    /// Dataset path shown in the map title.
    pub dataset_name: String,
    /// Load failure message, when running in degraded base-layer mode.
    pub load_error: Option<String>,
}

/// Run the interactive viewer until the user quits.
pub fn run_viewer(
    session: MapSession,
    surface: MemorySurface,
    config: ViewerConfig,
) -> Result<(), CliError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, session, surface, config);

    // Restore the terminal on every exit path.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut session: MapSession,
    mut surface: MemorySurface,
    config: ViewerConfig,
) -> Result<(), CliError> {
    let mut state = ViewerState::new(config.dataset_name, config.load_error);

    loop {
        terminal.draw(|frame| ui::render(frame, &session, &surface, &state))?;

        if !event::poll(TICK_RATE)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let Some(ViewerEvent::Quit) = handle_key(key, &mut state, &mut session, &mut surface)
            {
                tracing::info!("Viewer quit requested");
                return Ok(());
            }
        }
    }
}

/// Handle one key press, run to completion.
fn handle_key(
    key: KeyEvent,
    state: &mut ViewerState,
    session: &mut MapSession,
    surface: &mut MemorySurface,
) -> Option<ViewerEvent> {
    let region_count = session.regions().len();

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(ViewerEvent::Quit);
        }
        KeyCode::Char(c) => {
            state.input.push(c);
            session.apply_search(&state.input, surface);
        }
        KeyCode::Backspace => {
            state.input.pop();
            session.apply_search(&state.input, surface);
        }
        KeyCode::Esc => {
            state.input.clear();
            session.apply_search("", surface);
        }
        KeyCode::Up | KeyCode::Left => state.select_prev(region_count),
        KeyCode::Down | KeyCode::Right => state.select_next(region_count),
        KeyCode::Tab => state.base_layer.toggle(),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use choromap::dataset;
    use choromap::style::RegionStyle;

    const DATASET: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"County": "Nairobi", "Total": 9, "Entities": "Acme Corp"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[36.0, -2.0], [37.0, -2.0], [37.0, -1.0], [36.0, -2.0]]]
                }
            }
        ]
    }"#;

    fn fixture() -> (ViewerState, MapSession, MemorySurface) {
        let regions = dataset::from_str(DATASET).unwrap();
        let mut surface = MemorySurface::for_collection(&regions);
        let mut session = MapSession::new(regions);
        session.render_initial(&mut surface);
        (ViewerState::default(), session, surface)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_drives_a_search_pass_per_keystroke() {
        let (mut state, mut session, mut surface) = fixture();

        for c in "acme corp".chars() {
            handle_key(press(KeyCode::Char(c)), &mut state, &mut session, &mut surface);
        }
        assert_eq!(state.input, "acme corp");
        assert_eq!(session.match_count(), 1);
        assert_eq!(surface.style_of(0), Some(RegionStyle::Highlight));

        // A partial query after backspace is no longer a match.
        handle_key(press(KeyCode::Backspace), &mut state, &mut session, &mut surface);
        assert_eq!(state.input, "acme cor");
        assert_eq!(session.match_count(), 0);
        assert!(!surface.style_of(0).unwrap().is_highlight());
    }

    #[test]
    fn test_escape_clears_the_search() {
        let (mut state, mut session, mut surface) = fixture();
        for c in "acme corp".chars() {
            handle_key(press(KeyCode::Char(c)), &mut state, &mut session, &mut surface);
        }
        handle_key(press(KeyCode::Esc), &mut state, &mut session, &mut surface);

        assert!(state.input.is_empty());
        assert_eq!(session.query(), "");
        assert!(surface.labels().is_empty());
    }

    #[test]
    fn test_ctrl_c_quits_without_touching_the_search() {
        let (mut state, mut session, mut surface) = fixture();
        let event = handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state,
            &mut session,
            &mut surface,
        );
        assert_eq!(event, Some(ViewerEvent::Quit));
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_plain_c_is_search_input_not_quit() {
        let (mut state, mut session, mut surface) = fixture();
        let event = handle_key(press(KeyCode::Char('c')), &mut state, &mut session, &mut surface);
        assert_eq!(event, None);
        assert_eq!(state.input, "c");
    }
}
