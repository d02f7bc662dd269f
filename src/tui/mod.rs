pub mod widgets;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::extract::Swatch;
use widgets::{PaletteWidget, ROW_WIDTH};

/// How long to wait for input before redrawing.
const TICK: Duration = Duration::from_millis(100);

/// State for the interactive palette inspector.
pub struct PreviewApp {
    swatches: Vec<Swatch>,
    title: String,
    selected: usize,
    should_quit: bool,
}

impl PreviewApp {
    pub fn new(swatches: Vec<Swatch>, title: String) -> Self {
        Self {
            swatches,
            title,
            selected: 0,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Right | KeyCode::Char('l') => self.select_forward(1),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(ROW_WIDTH);
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_forward(ROW_WIDTH),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.swatches.len().saturating_sub(1),
            _ => {}
        }
    }

    /// Move the selection forward by `step`, staying on a real swatch.
    fn select_forward(&mut self, step: usize) {
        let last = self.swatches.len().saturating_sub(1);
        self.selected = (self.selected + step).min(last);
    }
}

/// Run the inspector until the user quits.
///
/// The terminal goes into raw mode on the alternate screen and is restored
/// before this returns, including when the event loop fails.
pub fn run(mut app: PreviewApp) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut PreviewApp,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| {
            let widget = PaletteWidget::new(&app.swatches, app.selected, &app.title);
            frame.render_widget(widget, frame.area());
        })?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}
