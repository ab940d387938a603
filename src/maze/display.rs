use crossterm::style::{Color, StyledContent, Stylize};
use std::fmt;

use super::{Direction, Maze};

/// Width of a cell interior when rendered, in character widths.
const CELL_WIDTH: usize = 3;

/// What a cell interior shows.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Marker {
    Empty,
    Start,
    End,
    Route,
}

impl Marker {
    fn styled(self) -> StyledContent<&'static str> {
        let styled_symbol = match self {
            Marker::Empty => "   ".with(Color::Reset),
            Marker::Start => " S ".with(Color::Green),
            Marker::End => " E ".with(Color::Red),
            Marker::Route => " * ".with(Color::Yellow),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                CELL_WIDTH,
                "Each cell must occupy exactly three character widths."
            );
        }

        styled_symbol
    }
}

impl Maze {
    fn marker(&self, index: usize, route: &[bool]) -> Marker {
        if self.start == Some(index) {
            Marker::Start
        } else if self.end == Some(index) {
            Marker::End
        } else if route[index] {
            Marker::Route
        } else {
            Marker::Empty
        }
    }

    /// Plain-text table of the last traversal's distances, one row per grid row.
    pub fn distance_table(&self) -> String {
        let distances = self.traversal.distances();
        let mut table = String::new();
        for y in 0..self.height() {
            let row = (0..self.width())
                .map(|x| {
                    let index = y * self.width() + x;
                    match self.traversal.predecessor(index) {
                        Some(_) => distances[index].to_string(),
                        None if self.traversal.root() == Some(index) => "0".to_string(),
                        None => "X".to_string(),
                    }
                })
                .collect::<Vec<_>>()
                .join("\t");
            table.push_str(&row);
            table.push('\n');
        }
        table
    }
}

/// Draws walls as `+---+` boxes, with start, end and the current path marked.
impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut route = vec![false; self.grid.len()];
        if let Some(path) = self.path() {
            path.into_iter().for_each(|cell| route[cell] = true);
        }
        let wall = |s: &'static str| s.with(Color::DarkGrey);
        let horizontal = "-".repeat(CELL_WIDTH);
        let opening = " ".repeat(CELL_WIDTH);

        write!(f, "{}", wall("+"))?;
        for _ in 0..self.width() {
            write!(f, "{}{}", horizontal.as_str().with(Color::DarkGrey), wall("+"))?;
        }
        writeln!(f)?;

        for y in 0..self.height() {
            write!(f, "{}", wall("|"))?;
            for x in 0..self.width() {
                let index = y * self.width() + x;
                write!(f, "{}", self.marker(index, &route).styled())?;
                if self.has_wall(index, Direction::Right) {
                    write!(f, "{}", wall("|"))?;
                } else {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;

            write!(f, "{}", wall("+"))?;
            for x in 0..self.width() {
                let index = y * self.width() + x;
                if self.has_wall(index, Direction::Bottom) {
                    write!(f, "{}", horizontal.as_str().with(Color::DarkGrey))?;
                } else {
                    write!(f, "{}", opening)?;
                }
                write!(f, "{}", wall("+"))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
