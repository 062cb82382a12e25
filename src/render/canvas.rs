use std::{fmt, io};

use colored::Colorize as _;
use crossterm::style::Color;

use super::{Renderer, Theme, VisualState};

/// In-memory [`Renderer`], keeps the last state drawn to every cell.
#[derive(Debug, Clone)]
pub struct Canvas {
    buf: Vec<VisualState>,
    rows: usize,
    columns: usize,
    draws: usize,
}

impl Canvas {
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            buf: vec![VisualState::Empty; rows * columns],
            rows,
            columns,
            draws: 0,
        }
    }

    pub fn get(&self, y: usize, x: usize) -> Option<VisualState> {
        if y >= self.rows || x >= self.columns {
            return None;
        }

        self.buf.get(y * self.columns + x).copied()
    }

    /// Number of `draw_cell` calls so far.
    pub fn draws(&self) -> usize {
        self.draws
    }

    pub fn count(&self, state: VisualState) -> usize {
        self.buf.iter().filter(|&&s| s == state).count()
    }

    fn rows_iter(&self) -> impl Iterator<Item = &[VisualState]> {
        self.buf.chunks(self.columns.max(1)).take(self.rows)
    }

    /// Renders the canvas as plain text, one line per row.
    pub fn to_text(&self, theme: &Theme) -> String {
        let mut out = String::with_capacity((self.columns + 1) * self.rows);
        for row in self.rows_iter() {
            out.extend(row.iter().map(|&s| theme.glyph(s)));
            out.push('\n');
        }
        out
    }

    /// Same as [`Canvas::to_text`], with ANSI colors taken from the theme.
    pub fn to_colored_text(&self, theme: &Theme) -> String {
        let mut out = String::new();
        for row in self.rows_iter() {
            for &state in row {
                let glyph = theme.glyph(state).to_string();
                match to_colored(theme.color(state)) {
                    Some(color) => out.push_str(&glyph.color(color).to_string()),
                    None => out.push_str(&glyph),
                }
            }
            out.push('\n');
        }
        out
    }
}

impl Renderer for Canvas {
    fn draw_cell(&mut self, y: usize, x: usize, state: VisualState) -> io::Result<()> {
        if y >= self.rows || x >= self.columns {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("cell ({y}, {x}) is outside of the canvas"),
            ));
        }

        self.buf[y * self.columns + x] = state;
        self.draws += 1;
        Ok(())
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text(&Theme::default()))
    }
}

fn to_colored(color: Color) -> Option<colored::Color> {
    use colored::Color as C;

    Some(match color {
        Color::Black => C::Black,
        Color::DarkGrey => C::BrightBlack,
        Color::Red => C::BrightRed,
        Color::DarkRed => C::Red,
        Color::Green => C::BrightGreen,
        Color::DarkGreen => C::Green,
        Color::Yellow => C::BrightYellow,
        Color::DarkYellow => C::Yellow,
        Color::Blue => C::BrightBlue,
        Color::DarkBlue => C::Blue,
        Color::Magenta => C::BrightMagenta,
        Color::DarkMagenta => C::Magenta,
        Color::Cyan => C::BrightCyan,
        Color::DarkCyan => C::Cyan,
        Color::White => C::BrightWhite,
        Color::Grey => C::White,
        Color::Rgb { r, g, b } => C::TrueColor { r, g, b },
        Color::Reset | Color::AnsiValue(_) => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        grid::{FeatureState, Grid},
        render::draw_maze,
    };

    #[test]
    fn draws_grid_as_text() {
        let mut grid = Grid::new(3, 3);
        grid.set(1, 1, FeatureState::Open).unwrap();
        grid.set(0, 1, FeatureState::Open).unwrap();

        let mut canvas = Canvas::new(3, 3);
        draw_maze(&mut canvas, &grid).unwrap();

        assert_eq!(canvas.draws(), 9);
        assert_eq!(canvas.to_string(), "# #\n# #\n###\n");
        assert_eq!(canvas.count(VisualState::Wall), 7);
    }

    #[test]
    fn later_draws_overwrite() {
        let mut canvas = Canvas::new(2, 2);
        canvas.draw_cell(0, 1, VisualState::VisitedByDepthFirst).unwrap();
        canvas.draw_cell(0, 1, VisualState::VisitedByBoth).unwrap();
        assert_eq!(canvas.get(0, 1), Some(VisualState::VisitedByBoth));
        assert_eq!(canvas.get(2, 0), None);
        assert_eq!(canvas.to_text(&Theme::default()), " !\n  \n");
    }

    #[test]
    fn outside_draw_is_an_error() {
        let mut canvas = Canvas::new(2, 2);
        assert!(canvas.draw_cell(2, 0, VisualState::Wall).is_err());
        assert_eq!(canvas.draws(), 0);
    }

    #[test]
    fn colored_text_keeps_glyphs() {
        colored::control::set_override(false);
        let mut canvas = Canvas::new(1, 2);
        canvas.draw_cell(0, 0, VisualState::Wall).unwrap();
        canvas.draw_cell(0, 1, VisualState::VisitedByBreadthFirst).unwrap();
        assert_eq!(canvas.to_colored_text(&Theme::default()), "#!\n");
    }
}
