use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::data;
use crate::ui::app::App;

pub(crate) fn as_tui(file_override: Option<&str>) -> Result<()> {
    let (transactions, source_label) = data::load(file_override)?;
    let mut app = App::new(transactions, source_label);

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
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| crate::ui::render::render(f, app))?;

        if let Event::Key(key) = event::read()? {
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match key.code {
                KeyCode::Char('q') => {
                    app.running = false;
                }
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    app.running = false;
                }
                KeyCode::Char('H') | KeyCode::Left => app.go_prev_month(),
                KeyCode::Char('L') | KeyCode::Right => app.go_next_month(),
                KeyCode::Char('t') => app.go_current_month(),
                KeyCode::Char('?') => {
                    app.show_help = true;
                }
                KeyCode::Esc => {
                    app.status_message.clear();
                }
                _ => {}
            }
        }
    }
    Ok(())
}
