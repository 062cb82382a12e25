pub mod canvas;
pub mod term;

use std::io;

use crossterm::style::Color;

pub use canvas::Canvas;
pub use term::TermRenderer;

use crate::{
    grid::{FeatureState, Grid},
    settings::ColorScheme,
    tracker::Visits,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisualState {
    #[default]
    Empty,
    Wall,
    VisitedByDepthFirst,
    VisitedByBreadthFirst,
    VisitedByBoth,
}

impl VisualState {
    /// Visual state of a visited cell, `None` when nobody visited it yet.
    pub fn visited(visits: Visits) -> Option<Self> {
        match visits {
            Visits::NONE => None,
            Visits::DEPTH_FIRST => Some(VisualState::VisitedByDepthFirst),
            Visits::BREADTH_FIRST => Some(VisualState::VisitedByBreadthFirst),
            _ => Some(VisualState::VisitedByBoth),
        }
    }

    pub fn is_visited(self) -> bool {
        !matches!(self, VisualState::Empty | VisualState::Wall)
    }
}

impl From<FeatureState> for VisualState {
    fn from(state: FeatureState) -> Self {
        match state {
            FeatureState::Open => VisualState::Empty,
            FeatureState::Wall => VisualState::Wall,
        }
    }
}

/// Surface the race reports to. Color, glyphs and refresh cadence are up to the implementation.
pub trait Renderer: Send {
    fn draw_cell(&mut self, y: usize, x: usize, state: VisualState) -> io::Result<()>;

    /// Called once the whole maze has been drawn.
    fn present(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn draw_cell(&mut self, y: usize, x: usize, state: VisualState) -> io::Result<()> {
        (**self).draw_cell(y, x, state)
    }

    fn present(&mut self) -> io::Result<()> {
        (**self).present()
    }
}

/// Draws every cell of `grid` once, as empty or wall.
pub fn draw_maze<R: Renderer + ?Sized>(renderer: &mut R, grid: &Grid) -> io::Result<()> {
    for y in 0..grid.rows() {
        for x in 0..grid.columns() {
            let state = grid.at(y, x).map_err(io::Error::other)?;
            renderer.draw_cell(y, x, state.into())?;
        }
    }
    renderer.present()
}

/// Glyphs and colors used to show each [`VisualState`].
#[derive(Debug, Clone)]
pub struct Theme {
    pub colors: ColorScheme,
    pub wall_char: char,
    pub visit_char: char,
}

impl Theme {
    pub fn glyph(&self, state: VisualState) -> char {
        match state {
            VisualState::Empty => ' ',
            VisualState::Wall => self.wall_char,
            _ => self.visit_char,
        }
    }

    pub fn color(&self, state: VisualState) -> Color {
        match state {
            VisualState::Empty => self.colors.empty,
            VisualState::Wall => self.colors.wall,
            VisualState::VisitedByDepthFirst => self.colors.depth_first,
            VisualState::VisitedByBreadthFirst => self.colors.breadth_first,
            VisualState::VisitedByBoth => self.colors.both,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            colors: ColorScheme::default(),
            wall_char: '#',
            visit_char: '!',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_map_to_states() {
        assert_eq!(VisualState::visited(Visits::NONE), None);
        assert_eq!(
            VisualState::visited(Visits::DEPTH_FIRST),
            Some(VisualState::VisitedByDepthFirst)
        );
        assert_eq!(
            VisualState::visited(Visits::BREADTH_FIRST),
            Some(VisualState::VisitedByBreadthFirst)
        );
        assert_eq!(
            VisualState::visited(Visits::DEPTH_FIRST | Visits::BREADTH_FIRST),
            Some(VisualState::VisitedByBoth)
        );
    }

    #[test]
    fn default_theme_matches_classic_look() {
        let theme = Theme::default();
        assert_eq!(theme.glyph(VisualState::Wall), '#');
        assert_eq!(theme.glyph(VisualState::Empty), ' ');
        assert_eq!(theme.glyph(VisualState::VisitedByBoth), '!');
        assert_eq!(theme.color(VisualState::VisitedByDepthFirst), Color::Cyan);
        assert_eq!(theme.color(VisualState::VisitedByBreadthFirst), Color::Red);
        assert_eq!(theme.color(VisualState::VisitedByBoth), Color::Yellow);
    }
}
