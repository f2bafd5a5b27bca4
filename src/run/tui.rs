use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

use crate::controller::{AppState, View};
use crate::storage::SqliteStore;
use crate::ui::app::App;

/// How often the loop wakes without input, so alerts can expire.
const TICK: Duration = Duration::from_millis(250);

pub(crate) fn as_tui(store: SqliteStore) -> Result<()> {
    let state = AppState::start(store)?;
    let mut app = App::new(state);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("TUI exited with error: {e:#}");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // title + alert + status bars, summary cards, two form fields, list borders
            let list_height = f.area().height.saturating_sub(3 + 4 + 6 + 2) as usize;
            app.visible_rows = list_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, app);
                }
            }
        }

        app.state.dismiss_expired_alert(Instant::now());
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_key(key: KeyEvent, app: &mut App) {
    if app.show_help {
        app.show_help = false;
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => {
            app.running = false;
        }
        KeyCode::F(1) => {
            app.show_help = true;
        }
        KeyCode::Tab | KeyCode::BackTab => app.next_field(),
        _ => match app.view() {
            View::LoggedOut => handle_login_input(key, app),
            View::LoggedIn => handle_dashboard_input(key, app),
        },
    }
}

fn handle_login_input(key: KeyEvent, app: &mut App) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('r') if ctrl => app.submit_register(),
        KeyCode::Enter => app.submit_login(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) if !ctrl => app.type_char(c),
        _ => {}
    }
}

fn handle_dashboard_input(key: KeyEvent, app: &mut App) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('o') if ctrl => app.logout(),
        KeyCode::Enter => app.submit_transaction(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Down => app.move_down(),
        KeyCode::Up => app.move_up(),
        KeyCode::Home => app.goto_top(),
        KeyCode::End => app.goto_bottom(),
        KeyCode::Char(c) if !ctrl => app.type_char(c),
        _ => {}
    }
}
