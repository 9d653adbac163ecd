//! Pipe table parsing.

use super::BlockParser;
use crate::error::Error;
use crate::syntax::{Align, Cell, Table, Token};
use crate::utils::is_md_whitespace;

/// Remove leading and trailing pipes and whitespace.
pub(crate) fn strip_table_border(content: &str) -> &str {
    content.trim_matches(|c: char| c == '|' || is_md_whitespace(c))
}

/// Split a row on unescaped pipes, trimming every cell.
///
/// Escaped pipes stay in the cell text for the inline parser to unescape.
pub(crate) fn split_cells(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut cells = Vec::new();
    let mut last = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'|') => i += 1,
            b'|' => {
                cells.push(content[last..i].trim());
                last = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if last < content.len() {
        cells.push(content[last..].trim());
    }
    cells
}

fn has_unescaped_pipe(content: &str) -> bool {
    let bytes = content.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' if bytes.get(i + 1) == Some(&b'|') => i += 1,
            b'|' => return true,
            _ => {}
        }
        i += 1;
    }
    false
}

/// Alignment of each delimiter cell (`---`, `:--`, `--:`, `:-:`).
pub(crate) fn try_parse_alignments(cells: &[&str]) -> Option<Vec<Align>> {
    cells
        .iter()
        .map(|cell| {
            let len = cell.len();
            let mut left = false;
            let mut right = false;
            for (i, b) in cell.bytes().enumerate() {
                match b {
                    b':' if i == 0 => left = true,
                    b':' if i == len - 1 => right = true,
                    b'-' => {}
                    _ => return None,
                }
            }
            Some(match (left, right) {
                (true, true) => Align::Center,
                (false, true) => Align::Right,
                (true, false) => Align::Left,
                (false, false) => Align::Default,
            })
        })
        .collect()
}

/// Header cells and alignments when `header` and `delimiter` start a table.
pub(crate) fn try_parse_table_start<'a>(
    header: &'a str,
    delimiter: &str,
) -> Option<(Vec<&'a str>, Vec<Align>)> {
    if !has_unescaped_pipe(delimiter) {
        return None;
    }
    let aligns = try_parse_alignments(&split_cells(strip_table_border(delimiter)))?;
    let cells = split_cells(strip_table_border(header));
    (!aligns.is_empty() && aligns.len() == cells.len()).then_some((cells, aligns))
}

impl BlockParser<'_, '_> {
    pub(super) fn parse_table(&mut self) -> Result<Option<Token>, Error> {
        if !self.is_table_start(self.pos) {
            return Ok(None);
        }
        let Some((header_cells, aligns)) = try_parse_table_start(
            &self.lines[self.pos].content,
            &self.lines[self.pos + 1].content,
        ) else {
            return Ok(None);
        };
        let header_cells: Vec<String> = header_cells.into_iter().map(str::to_string).collect();
        self.pos += 2;

        let mut header = Vec::with_capacity(header_cells.len());
        for (text, align) in header_cells.iter().zip(&aligns) {
            header.push(Cell {
                header: true,
                align: *align,
                tokens: self.inline(text)?,
            });
        }

        let mut rows = Vec::new();
        while self.pos < self.lines.len() {
            let line = &self.lines[self.pos];
            if !self.is_flush(self.pos) || line.is_blank() || self.starts_sibling(self.pos, true) {
                break;
            }
            let mut cells: Vec<String> = split_cells(strip_table_border(&line.content))
                .into_iter()
                .map(str::to_string)
                .collect();
            cells.resize(header.len(), String::new());
            self.pos += 1;

            let mut row = Vec::with_capacity(cells.len());
            for (text, align) in cells.iter().zip(&aligns) {
                row.push(Cell {
                    header: false,
                    align: *align,
                    tokens: self.inline(text)?,
                });
            }
            rows.push(row);
        }

        log::debug!(
            "Parsed table with {} columns and {} rows ending at line {}",
            header.len(),
            rows.len(),
            self.pos
        );
        Ok(Some(Token::Table(Table { header, rows })))
    }
}
