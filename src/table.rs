//! Bordered text tables with left-aligned, width-limited cells.
//!
//! Every cell is split on newlines and word-wrapped to the maximum width;
//! words wider than the limit are broken. A rule is drawn after the header
//! and after every row.

use std::fmt::Write as _;

pub const DEFAULT_MAX_WIDTH: usize = 20;

pub fn render_table(headers: &[String], rows: &[Vec<String>], max_width: usize) -> String {
    let max_width = max_width.max(1);
    let column_count = headers.len();

    let header_cells = headers
        .iter()
        .map(|h| wrap_cell(h, max_width))
        .collect::<Vec<_>>();
    let body = rows
        .iter()
        .map(|row| {
            (0..column_count)
                .map(|idx| wrap_cell(row.get(idx).map(String::as_str).unwrap_or(""), max_width))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let mut widths = vec![1usize; column_count];
    for row in std::iter::once(&header_cells).chain(body.iter()) {
        for (idx, lines) in row.iter().enumerate() {
            for line in lines {
                widths[idx] = widths[idx].max(display_width(line));
            }
        }
    }

    let rule = horizontal_rule(&widths);
    let mut output = String::new();
    let _ = writeln!(output, "{rule}");
    push_row(&mut output, &header_cells, &widths);
    let _ = writeln!(output, "{rule}");
    for row in &body {
        push_row(&mut output, row, &widths);
        let _ = writeln!(output, "{rule}");
    }
    output
}

fn horizontal_rule(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn push_row(output: &mut String, cells: &[Vec<String>], widths: &[usize]) {
    let height = cells.iter().map(Vec::len).max().unwrap_or(1);
    for line_idx in 0..height {
        let mut line = String::from("|");
        for (cell, width) in cells.iter().zip(widths) {
            let text = cell.get(line_idx).map(String::as_str).unwrap_or("");
            line.push(' ');
            line.push_str(text);
            line.push_str(&" ".repeat(width.saturating_sub(display_width(text))));
            line.push_str(" |");
        }
        let _ = writeln!(output, "{line}");
    }
}

/// Splits a cell into display lines no wider than `max_width`.
pub fn wrap_cell(value: &str, max_width: usize) -> Vec<String> {
    let sanitized = value.replace('\r', "").replace('\t', " ");
    sanitized
        .split('\n')
        .flat_map(|line| wrap_line(line, max_width))
        .collect()
}

fn wrap_line(line: &str, max_width: usize) -> Vec<String> {
    if display_width(line) <= max_width {
        return vec![line.to_string()];
    }
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in line.split(' ').filter(|w| !w.is_empty()) {
        let word_width = display_width(word);
        if word_width > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let chars = word.chars().collect::<Vec<_>>();
            let mut chunks = chars.chunks(max_width).peekable();
            while let Some(chunk) = chunks.next() {
                let piece = chunk.iter().collect::<String>();
                if chunks.peek().is_some() {
                    lines.push(piece);
                } else {
                    current = piece;
                }
            }
        } else if current.is_empty() {
            current.push_str(word);
        } else if display_width(&current) + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn display_width(value: &str) -> usize {
    let mut width = 0usize;
    let mut chars = value.chars();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' {
            // Skip ANSI escape sequence (e.g. \x1b[31m)
            for next in chars.by_ref() {
                if next == 'm' {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}
