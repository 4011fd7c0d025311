use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use storydeck_core::{update, AppState, AppViewModel, Msg, SortKey};

use super::effects::EffectRunner;
use super::logging;
use super::persistence::{FilePreferences, PreferenceStore, SEARCH_TERM_KEY};
use super::ui::{self, UiState};

const DEFAULT_SEARCH_TERM: &str = "Rust";
const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run_app() -> io::Result<()> {
    logging::initialize();

    let prefs = FilePreferences::open_default();
    let initial_term = prefs
        .get(SEARCH_TERM_KEY)
        .unwrap_or_else(|| DEFAULT_SEARCH_TERM.to_string());

    let mut runner = EffectRunner::new(prefs);
    let (state, effects) = update(AppState::new(&initial_term), Msg::Started);
    runner.run(effects);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_loop(&mut terminal, state, &mut runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
    runner: &mut EffectRunner<FilePreferences>,
) -> io::Result<()> {
    let mut ui_state = UiState::default();
    let mut needs_render = true;

    loop {
        for msg in runner.poll() {
            let (next, effects) = update(state, msg);
            state = next;
            runner.run(effects);
        }

        if state.consume_dirty() {
            needs_render = true;
        }

        if needs_render {
            let view = state.view();
            ui_state.clamp_selection(view.stories.len());
            terminal.draw(|frame| ui::render::render(frame, &view, &ui_state))?;
            needs_render = false;
        }

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match handle_key(key, &mut ui_state, &state.view()) {
            KeyOutcome::Quit => return Ok(()),
            KeyOutcome::Dispatch(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                runner.run(effects);
            }
            KeyOutcome::Handled => needs_render = true,
            KeyOutcome::Ignored => {}
        }
    }
}

enum KeyOutcome {
    Quit,
    Dispatch(Msg),
    /// UI-local change only; a redraw is needed but the core is untouched.
    Handled,
    Ignored,
}

fn handle_key(key: KeyEvent, ui_state: &mut UiState, view: &AppViewModel) -> KeyOutcome {
    if ui_state.editing {
        return handle_editing_key(key, ui_state, view);
    }

    match key.code {
        KeyCode::Char('q') => KeyOutcome::Quit,
        KeyCode::Char('/') => {
            ui_state.editing = true;
            KeyOutcome::Handled
        }
        KeyCode::Up => {
            ui_state.selected = ui_state.selected.saturating_sub(1);
            KeyOutcome::Handled
        }
        KeyCode::Down => {
            ui_state.selected = (ui_state.selected + 1).min(view.stories.len().saturating_sub(1));
            KeyOutcome::Handled
        }
        KeyCode::Char('x') => match view.stories.get(ui_state.selected) {
            Some(story) => KeyOutcome::Dispatch(Msg::StoryDismissed(story.id.clone())),
            None => KeyOutcome::Ignored,
        },
        KeyCode::Char('m') => KeyOutcome::Dispatch(Msg::MoreRequested),
        KeyCode::Char('t') => KeyOutcome::Dispatch(Msg::SortToggled(SortKey::Title)),
        KeyCode::Char('a') => KeyOutcome::Dispatch(Msg::SortToggled(SortKey::Author)),
        KeyCode::Char('c') => KeyOutcome::Dispatch(Msg::SortToggled(SortKey::Comments)),
        KeyCode::Char('p') => KeyOutcome::Dispatch(Msg::SortToggled(SortKey::Points)),
        KeyCode::Char('n') => KeyOutcome::Dispatch(Msg::SortToggled(SortKey::None)),
        KeyCode::Char(digit @ '1'..='5') => {
            let index = digit as usize - '1' as usize;
            match view.recent_searches.get(index) {
                Some(term) => KeyOutcome::Dispatch(Msg::RecentSearchPicked(term.clone())),
                None => KeyOutcome::Ignored,
            }
        }
        _ => KeyOutcome::Ignored,
    }
}

fn handle_editing_key(key: KeyEvent, ui_state: &mut UiState, view: &AppViewModel) -> KeyOutcome {
    match key.code {
        KeyCode::Enter => {
            ui_state.editing = false;
            KeyOutcome::Dispatch(Msg::SearchSubmitted)
        }
        KeyCode::Esc => {
            ui_state.editing = false;
            KeyOutcome::Handled
        }
        KeyCode::Backspace => {
            let mut input = view.input.clone();
            input.pop();
            KeyOutcome::Dispatch(Msg::InputChanged(input))
        }
        KeyCode::Char(ch) => {
            let mut input = view.input.clone();
            input.push(ch);
            KeyOutcome::Dispatch(Msg::InputChanged(input))
        }
        _ => KeyOutcome::Ignored,
    }
}
