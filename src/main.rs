mod app;
mod cli;
mod grouping;
mod models;
mod pdf;
mod theme;
mod ui;
mod utils;

use std::io::{self, stdout};
use std::sync::Mutex;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;
use tokio::runtime::{Handle, Runtime};
use tracing_subscriber::EnvFilter;

use app::App;
use models::Registry;
use ui::CARD_HEIGHT;

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;
    init_logging();

    let (registry, source) = Registry::resolve(config.registry_path.as_deref())?;
    let runtime = Runtime::new()?;
    let mut app = App::new(registry, source, &config);

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app, runtime.handle());

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

/// Route tracing output to a log file; stderr belongs to the alternate screen
fn init_logging() {
    let Some(dir) = dirs::state_dir().or_else(dirs::cache_dir) else {
        return;
    };
    let dir = dir.join("taller-tui");
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("taller-tui.log")) else {
        return;
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("taller_tui=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    handle: &Handle,
) -> io::Result<()> {
    loop {
        app.poll_status();

        terminal.draw(|frame| draw(frame, app))?;

        // Handle input
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
                    KeyCode::Down | KeyCode::Char('j') => app.select_next(),
                    KeyCode::Char('g') => app.toggle_grouping(),
                    KeyCode::Char('d') => app.download_selected(handle),
                    KeyCode::Enter | KeyCode::Char(' ') => app.open_selected(handle),
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Main layout: header, card list, contact, status line, bottom bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(CARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    ui::render_header(main_layout[0], frame);

    let list_area = main_layout[1];
    // Capacity estimate: unit headings eat into the card rows
    let heading_rows = if app.group_mode.by_unit() {
        app.view.groups.len() as u16
    } else {
        0
    };
    let usable = list_area.height.saturating_sub(heading_rows);
    let visible_cards = (usable / CARD_HEIGHT).max(1) as usize;
    app.adjust_scroll(visible_cards);

    ui::render_workshop_list(
        list_area,
        &app.registry,
        &app.view,
        app.group_mode.by_unit(),
        app.selected,
        app.scroll_offset,
        frame,
    );

    ui::render_contact(main_layout[2], frame);
    ui::render_status_line(
        main_layout[3],
        app.status.as_ref().map(|s| (s.text.as_str(), s.failed)),
        frame,
    );
    ui::render_key_hints(main_layout[4], app.group_mode.label(), frame);
}
