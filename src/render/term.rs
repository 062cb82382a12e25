use std::{
    io::{self, stdout, Stdout, Write},
    panic, thread,
};

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::{self, Attribute, Color, ContentStyle},
    terminal,
};
use substring::Substring as _;

use super::{Renderer, Theme, VisualState};
use crate::logging::AppLogger;

/// Draws the maze straight to the terminal, one flushed glyph per call.
///
/// Switches to the alternate screen in raw mode on creation and restores the terminal when
/// dropped, or from the panic hook if a worker panics first.
pub struct TermRenderer {
    stdout: Stdout,
    theme: Theme,
    size: (u16, u16),
    maze_rows: u16,
}

impl TermRenderer {
    pub fn new(theme: Theme) -> io::Result<Self> {
        let mut ren = TermRenderer {
            stdout: stdout(),
            theme,
            size: terminal::size()?,
            maze_rows: 0,
        };

        ren.turn_on()?;

        Ok(ren)
    }

    fn turn_on(&mut self) -> io::Result<()> {
        self.register_panic_hook();

        terminal::enable_raw_mode()?;
        execute!(
            self.stdout,
            cursor::Hide,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
        )?;

        Ok(())
    }

    fn turn_off(&mut self) -> io::Result<()> {
        self.unregister_panic_hook();

        execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    fn register_panic_hook(&self) {
        let prev = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show);
            let _ = terminal::disable_raw_mode();

            prev(info)
        }));
    }

    fn unregister_panic_hook(&self) {
        if !thread::panicking() {
            let _ = panic::take_hook();
        }
    }

    fn fits(&self, y: usize, x: usize) -> bool {
        x < self.size.0 as usize && y < self.size.1 as usize
    }

    /// Writes `text` at row `y`, clipped to the terminal width.
    pub fn draw_str(&mut self, y: u16, text: &str, style: ContentStyle) -> io::Result<()> {
        if y >= self.size.1 {
            return Ok(());
        }

        let text = text.substring(0, self.size.0 as usize);
        queue!(
            self.stdout,
            cursor::MoveTo(0, y),
            terminal::Clear(terminal::ClearType::CurrentLine),
            style::PrintStyledContent(style.apply(text)),
        )
    }

    /// Draws status lines right below the maze.
    pub fn draw_status(&mut self, lines: &[String]) -> io::Result<()> {
        let top = self.maze_rows.saturating_add(1);
        for (i, line) in lines.iter().enumerate() {
            self.draw_str(top + i as u16, line, ContentStyle::default())?;
        }
        self.stdout.flush()
    }

    /// Draws the most recent log messages under the status lines.
    pub fn draw_logs(&mut self, logger: &AppLogger, skip: u16) -> io::Result<()> {
        let top = self.maze_rows.saturating_add(1 + skip);
        for (i, log) in logger.visible().into_iter().enumerate() {
            let color = match log.level {
                log::Level::Error => Color::Red,
                log::Level::Warn => Color::Yellow,
                log::Level::Info => Color::White,
                log::Level::Debug => Color::Blue,
                log::Level::Trace => Color::Grey,
            };
            let line = format!("| {} -> {}", log.source, log.message);
            self.draw_str(top + i as u16, &line, foreground(color))?;
        }
        self.stdout.flush()
    }

    /// Blocks until a key is pressed.
    pub fn wait_for_key(&mut self) -> io::Result<()> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(()),
                Event::Resize(w, h) => self.size = (w, h),
                _ => {}
            }
        }
    }
}

impl Renderer for TermRenderer {
    fn draw_cell(&mut self, y: usize, x: usize, state: VisualState) -> io::Result<()> {
        self.maze_rows = self.maze_rows.max(y as u16 + 1);
        if !self.fits(y, x) {
            return Ok(());
        }

        let mut style = foreground(self.theme.color(state));
        if state.is_visited() {
            style.attributes.set(Attribute::Bold);
        }

        queue!(
            self.stdout,
            cursor::MoveTo(x as u16, y as u16),
            style::PrintStyledContent(style.apply(self.theme.glyph(state))),
        )?;

        if state.is_visited() {
            self.stdout.flush()?;
        }
        Ok(())
    }

    fn present(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

fn foreground(color: Color) -> ContentStyle {
    ContentStyle {
        foreground_color: Some(color),
        background_color: None,
        ..Default::default()
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        let _ = self.turn_off();
    }
}
