use std::io::{self, Write};

use crate::{pos, Pos, World};

const ALIVE: char = '█';
const DEAD: char = ' ';

/// A bordered text snapshot of one generation.
pub struct Canvas {
    lines: Vec<String>,
}

impl Canvas {
    pub fn of<W>(world: &W) -> Self
    where
        W: World,
    {
        let (width, height) = (world.width(), world.height());
        let border = "─".repeat(2 * width + 1);

        let mut lines = Vec::with_capacity(height + 2);
        lines.push(format!("┌{border}┐"));
        for y in 0..height {
            let mut line = String::from("│ ");
            for x in 0..width {
                let alive = world.get(pos!(x as i32, y as i32)).is_alive();
                line.push(if alive { ALIVE } else { DEAD });
                line.push(' ');
            }
            line.push('│');
            lines.push(line);
        }
        lines.push(format!("└{border}┘"));

        Self { lines }
    }

    /// appends a line under the frame.
    pub fn footer(mut self, line: String) -> Self {
        self.lines.push(line);
        self
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Draws over whatever was there from the top-left corner, without
    /// clearing, so successive frames overwrite each other in place.
    ///
    /// Lines past the last addressable terminal row are dropped.
    pub fn display(&self, out: &mut impl Write) -> io::Result<()> {
        for (index, line) in self.lines.iter().enumerate() {
            let Ok(row) = u16::try_from(index + 1) else {
                break;
            };
            let goto = termion::cursor::Goto(1, row);
            let clear = termion::clear::UntilNewline;
            write!(out, "{goto}{line}{clear}")?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Grid};

    fn chars(line: &str) -> usize {
        line.chars().count()
    }

    #[test]
    fn frame_shape() {
        let mut grid = Grid::new(4, 2);
        grid.set(pos!(0, 0), Cell::alive());
        grid.set(pos!(3, 1), Cell::alive());
        let canvas = Canvas::of(&grid);
        let lines = canvas.lines();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "┌─────────┐");
        assert_eq!(lines[1], "│ █       │");
        assert_eq!(lines[2], "│       █ │");
        assert_eq!(lines[3], "└─────────┘");
    }

    #[test]
    fn rows_match_border_width() {
        for width in [1, 5, 42] {
            let canvas = Canvas::of(&Grid::new(width, 3));
            for line in canvas.lines() {
                assert_eq!(chars(line), 2 * width + 3);
            }
            let row = &canvas.lines()[1];
            let inner: String = row.chars().skip(1).take(2 * width + 1).collect();
            assert_eq!(chars(&inner), 2 * width + 1);
            assert!(row.starts_with("│ ") && row.ends_with('│'));
        }
    }

    #[test]
    fn empty_grid_is_just_a_border() {
        let canvas = Canvas::of(&Grid::new(0, 0));
        assert_eq!(canvas.lines(), ["┌─┐", "└─┘"]);
    }

    #[test]
    fn display_repositions_without_clearing() {
        let canvas = Canvas::of(&Grid::new(1, 1)).footer("generation 0".into());
        let mut out = Vec::new();
        canvas.display(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.starts_with("\x1b[1;1H┌───┐"));
        assert!(out.contains("\x1b[2;1H│   │"));
        assert!(out.contains("\x1b[4;1Hgeneration 0"));
        assert!(!out.contains("\x1b[2J"));
    }

    #[test]
    fn very_tall_grid_stops_at_last_row() {
        let canvas = Canvas::of(&Grid::new(1, u16::MAX as usize));
        let mut out = Vec::new();
        canvas.display(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert_eq!(canvas.lines().len(), u16::MAX as usize + 2);
        assert_eq!(out.matches("\x1b[").count(), 2 * u16::MAX as usize);
        assert!(out.contains(&format!("\x1b[{};1H", u16::MAX)));
        assert!(!out.contains('└'));
    }
}
