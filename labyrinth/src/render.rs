//! Console rendering of mazes and solution paths.

use std::collections::HashSet;
use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use labyrinth_core::{Maze, Position};

/// How a maze is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// ANSI colours: walls on white, trace on yellow, start green, goal red.
    #[default]
    Color,
    /// Plain text in the [`Maze`] `Display` layout, trace cells as `*`.
    Plain,
}

/// Draw `maze` onto `out`, highlighting the cells of `trace` if given.
pub fn print_maze<W: Write>(
    out: &mut W,
    maze: &Maze,
    trace: Option<&[Position]>,
    style: Style,
) -> io::Result<()> {
    let trace: HashSet<Position> = trace.into_iter().flatten().copied().collect();
    match style {
        Style::Color => print_color(out, maze, &trace)?,
        Style::Plain => print_plain(out, maze, &trace)?,
    }
    out.flush()
}

fn print_color<W: Write>(out: &mut W, maze: &Maze, trace: &HashSet<Position>) -> io::Result<()> {
    for row in 0..maze.rows() as i32 {
        queue!(out, Print("{"))?;
        for col in 0..maze.columns() as i32 {
            let p = Position::new(row, col);
            if p == maze.start() {
                queue!(out, SetForegroundColor(Color::Green), Print(" S"))?;
            } else if p == maze.goal() {
                queue!(out, SetForegroundColor(Color::Red), Print(" E"))?;
            } else if maze.is_wall(p) {
                queue!(out, SetBackgroundColor(Color::White), Print("  "))?;
            } else if trace.contains(&p) {
                queue!(out, SetBackgroundColor(Color::Yellow), Print("  "))?;
            } else {
                queue!(out, Print("  "))?;
            }
            queue!(out, ResetColor)?;
        }
        queue!(out, Print(" }\n"))?;
    }
    Ok(())
}

fn print_plain<W: Write>(out: &mut W, maze: &Maze, trace: &HashSet<Position>) -> io::Result<()> {
    if trace.is_empty() {
        return write!(out, "{maze}");
    }
    for row in 0..maze.rows() as i32 {
        out.write_all(b"{")?;
        for col in 0..maze.columns() as i32 {
            let p = Position::new(row, col);
            let ch = if p == maze.start() {
                'S'
            } else if p == maze.goal() {
                'E'
            } else if maze.is_wall(p) {
                '1'
            } else if trace.contains(&p) {
                '*'
            } else {
                '0'
            };
            write!(out, " {ch}")?;
        }
        out.write_all(b" }\n")?;
    }
    Ok(())
}
