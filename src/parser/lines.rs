//! Line segmentation and indentation measurement.

use crate::utils::is_md_whitespace;

/// One logical line of input.
///
/// `level` is the indentation depth in whole tab stops. `leading_ws` keeps
/// the exact whitespace that was measured so code blocks can rebuild it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub level: usize,
    pub leading_ws: String,
    pub content: String,
}

impl Line {
    /// Measure the leading whitespace of `text` and split it off.
    ///
    /// Tabs count as `tab_width` columns, every other whitespace character as
    /// one; carriage returns are dropped.
    pub fn measure(text: &str, tab_width: usize) -> Self {
        let mut columns = 0;
        let mut leading_ws = String::new();
        let mut rest = text;
        for (idx, c) in text.char_indices() {
            if !is_md_whitespace(c) {
                rest = &text[idx..];
                break;
            }
            match c {
                '\t' => {
                    columns += tab_width;
                    leading_ws.push(c);
                }
                '\r' => {}
                _ => {
                    columns += 1;
                    leading_ws.push(c);
                }
            }
            rest = &text[idx + c.len_utf8()..];
        }
        Self {
            level: columns / tab_width,
            leading_ws,
            content: rest.replace('\r', ""),
        }
    }

    /// A copy shifted one level left, as seen from inside a container.
    ///
    /// The first `(level + 1) * tab_width` characters of leading whitespace
    /// are removed.
    pub fn dedent(&self, level: usize, tab_width: usize) -> Self {
        let remove = (level + 1) * tab_width;
        Self {
            level: self.level.saturating_sub(1),
            leading_ws: self.leading_ws.chars().skip(remove).collect(),
            content: self.content.clone(),
        }
    }

    /// Content with trailing whitespace removed.
    pub fn trimmed(&self) -> &str {
        crate::utils::trim_end_ws(&self.content)
    }

    pub fn is_blank(&self) -> bool {
        self.trimmed().is_empty()
    }

    /// Leading whitespace past `remove` characters, followed by the content.
    pub fn code_text(&self, remove: usize) -> String {
        let mut text: String = self.leading_ws.chars().skip(remove).collect();
        text.push_str(&self.content);
        text
    }
}

/// Split `text` into lines on `\n`.
///
/// A trailing line feed does not produce an extra empty line, and empty input
/// yields no lines at all.
pub fn segment(text: &str, tab_width: usize) -> Vec<Line> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix('\n').unwrap_or(text);
    body.split('\n')
        .map(|line| Line::measure(line, tab_width))
        .collect()
}
