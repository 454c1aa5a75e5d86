//! Table rendering utilities for CLI outputs.

use regex::Regex;
use std::sync::LazyLock;
use unicode_width::UnicodeWidthStr;

static ANSI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI escape pattern"));

pub fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

pub struct Column {
    pub header: String,
    pub align: Align,
    /// Cells wider than this are wrapped onto continuation lines.
    pub max_width: Option<usize>,
}

impl Column {
    pub fn left(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Left,
            max_width: None,
        }
    }

    pub fn right(header: &str) -> Self {
        Self {
            header: header.to_string(),
            align: Align::Right,
            max_width: None,
        }
    }

    pub fn wrapped(mut self, width: usize) -> Self {
        self.max_width = Some(width.max(1));
        self
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Split every cell into display lines, wrapping where a column asks for it.
    fn cell_lines(&self, row: &[String]) -> Vec<Vec<String>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                match col.max_width {
                    Some(w) if visible_width(cell) > w => textwrap::wrap(cell, w)
                        .into_iter()
                        .map(|l| l.into_owned())
                        .collect(),
                    _ => vec![cell.to_string()],
                }
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let split: Vec<Vec<Vec<String>>> = self.rows.iter().map(|r| self.cell_lines(r)).collect();

        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                split
                    .iter()
                    .flat_map(|cells| cells[i].iter())
                    .map(|l| visible_width(l))
                    .chain(std::iter::once(visible_width(&col.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            out.push_str(&pad(&col.header, *w, col.align));
            out.push(' ');
        }
        out.push('\n');

        let rule: usize = widths.iter().map(|w| w + 1).sum();
        out.push_str(&"─".repeat(rule.saturating_sub(1)));
        out.push('\n');

        // Rows
        for cells in &split {
            let height = cells.iter().map(Vec::len).max().unwrap_or(1);
            for line in 0..height {
                for ((col, w), cell) in self.columns.iter().zip(&widths).zip(cells) {
                    let text = cell.get(line).map(String::as_str).unwrap_or("");
                    out.push_str(&pad(text, *w, col.align));
                    out.push(' ');
                }
                out.push('\n');
            }
        }

        out
    }
}

/// Pad to a display width; ANSI escapes do not count towards it.
fn pad(s: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(visible_width(s));
    match align {
        Align::Left => format!("{}{}", s, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), s),
    }
}
