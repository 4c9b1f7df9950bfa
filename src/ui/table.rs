//! Table rendering.
//!
//! The table is laid out by ratatui into an off-screen buffer sized to its
//! content and then written line by line with crossterm, so it lands in the
//! normal scroll-back and also works when stdout is not a terminal.

use anyhow::Result;
use crossterm::style::{Attribute, Color as CColor, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::QueueableCommand;
use ratatui::buffer::{Buffer, Cell};
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Row, Table, Widget};
use std::io::Write;

use super::rows::TaskRow;
use crate::config::StyleConfig;
use crate::constants::TABLE_HEADERS;
use crate::utils::style::parse_style;

const COLUMN_SPACING: u16 = 1;

/// Resolved styles for the three parts of the table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TableStyles {
    pub head: Style,
    pub border: Style,
    pub tasks: Style,
}

impl TableStyles {
    pub fn from_config(config: &StyleConfig) -> Result<Self> {
        let parse = |names: &[String]| parse_style(names).map_err(anyhow::Error::msg);
        Ok(Self {
            head: parse(config.head.as_slice())?,
            border: parse(config.border.as_slice())?,
            tasks: parse(config.tasks.as_slice())?,
        })
    }
}

/// Lay out `rows` under the column headers into a buffer that fits them.
pub fn render_buffer(rows: &[TaskRow], styles: &TableStyles) -> Buffer {
    let mut widths: Vec<u16> = TABLE_HEADERS.iter().map(|h| text_width(h)).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.cells()) {
            *width = (*width).max(text_width(cell));
        }
    }

    let columns = widths.len() as u16;
    let width = widths.iter().sum::<u16>() + COLUMN_SPACING * (columns - 1) + 2;
    let height = rows.len().min(u16::MAX as usize - 3) as u16 + 3;
    let area = Rect::new(0, 0, width, height);

    let header = Row::new(TABLE_HEADERS).style(styles.head);
    let body = rows.iter().map(|row| Row::new(row.cells()).style(styles.tasks));
    let table = Table::new(body, widths.into_iter().map(Constraint::Length))
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(Block::bordered().border_style(styles.border));

    let mut buffer = Buffer::empty(area);
    table.render(area, &mut buffer);
    buffer
}

/// Plain text lines of a rendered buffer, trailing spaces trimmed.
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width.max(1) as usize;
    buffer
        .content
        .chunks(width)
        .map(|line| {
            let text: String = visible_cells(line).map(|cell| cell.symbol()).collect();
            text.trim_end().to_string()
        })
        .collect()
}

/// Write a rendered buffer to `out`, with ANSI styling when `styled`.
pub fn write_buffer<W: Write>(out: &mut W, buffer: &Buffer, styled: bool) -> Result<()> {
    if !styled {
        for line in buffer_lines(buffer) {
            writeln!(out, "{line}")?;
        }
        return Ok(());
    }

    let width = buffer.area.width.max(1) as usize;
    for line in buffer.content.chunks(width) {
        let mut current: Option<(Color, Modifier)> = None;
        for cell in visible_cells(line) {
            let look = (cell.fg, cell.modifier);
            if current != Some(look) {
                out.queue(SetAttribute(Attribute::Reset))?;
                out.queue(ResetColor)?;
                if cell.fg != Color::Reset {
                    out.queue(SetForegroundColor(to_crossterm(cell.fg)))?;
                }
                for attribute in attributes(cell.modifier) {
                    out.queue(SetAttribute(attribute))?;
                }
                current = Some(look);
            }
            out.queue(Print(cell.symbol()))?;
        }
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(ResetColor)?;
        out.queue(Print("\n"))?;
    }
    out.flush()?;
    Ok(())
}

/// Cells of one buffer line, without the cells covered by wide characters.
fn visible_cells(line: &[Cell]) -> impl Iterator<Item = &Cell> {
    let mut covered = 0usize;
    line.iter().filter(move |cell| {
        if covered > 0 {
            covered -= 1;
            return false;
        }
        covered = Line::from(cell.symbol()).width().saturating_sub(1);
        true
    })
}

fn text_width(text: &str) -> u16 {
    Line::from(text).width().min(u16::MAX as usize / 8) as u16
}

fn attributes(modifier: Modifier) -> Vec<Attribute> {
    [
        (Modifier::BOLD, Attribute::Bold),
        (Modifier::DIM, Attribute::Dim),
        (Modifier::ITALIC, Attribute::Italic),
        (Modifier::UNDERLINED, Attribute::Underlined),
        (Modifier::REVERSED, Attribute::Reverse),
        (Modifier::CROSSED_OUT, Attribute::CrossedOut),
    ]
    .into_iter()
    .filter(|(m, _)| modifier.contains(*m))
    .map(|(_, a)| a)
    .collect()
}

fn to_crossterm(color: Color) -> CColor {
    match color {
        Color::Reset => CColor::Reset,
        Color::Black => CColor::Black,
        Color::Red => CColor::DarkRed,
        Color::Green => CColor::DarkGreen,
        Color::Yellow => CColor::DarkYellow,
        Color::Blue => CColor::DarkBlue,
        Color::Magenta => CColor::DarkMagenta,
        Color::Cyan => CColor::DarkCyan,
        Color::Gray => CColor::Grey,
        Color::DarkGray => CColor::DarkGrey,
        Color::LightRed => CColor::Red,
        Color::LightGreen => CColor::Green,
        Color::LightYellow => CColor::Yellow,
        Color::LightBlue => CColor::Blue,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan => CColor::Cyan,
        Color::White => CColor::White,
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        Color::Indexed(i) => CColor::AnsiValue(i),
    }
}
