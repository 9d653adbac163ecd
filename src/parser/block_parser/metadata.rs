//! Front matter at the top of a document.
//!
//! A `---` line opens the block and the next line with the same number of
//! dashes closes it. The body is decoded by the front matter hook (JSON by
//! default) and flattened into the metadata table.

use std::collections::BTreeMap;

use serde_json::Value;

use super::BlockParser;

/// Dash count of a front matter delimiter line (three or more `-`).
pub(crate) fn try_parse_delimiter(line: &str) -> Option<usize> {
    (line.len() >= 3 && line.bytes().all(|b| b == b'-')).then_some(line.len())
}

/// Flatten `value` into `out` with dotted keys; array items are keyed by
/// index.
pub(crate) fn flatten_json(value: &Value, prefix: &str, out: &mut BTreeMap<String, String>) {
    let key = |name: &str| {
        if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{}.{}", prefix, name)
        }
    };
    match value {
        Value::Object(map) => {
            for (name, item) in map {
                flatten_json(item, &key(name), out);
            }
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_json(item, &key(&index.to_string()), out);
            }
        }
        Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        scalar => {
            out.insert(prefix.to_string(), scalar.to_string());
        }
    }
}

impl BlockParser<'_, '_> {
    /// Consume front matter if this is the start of a document.
    pub fn front_matter(&mut self) {
        if self.lexer.started {
            return;
        }
        self.lexer.started = true;

        let Some(dashes) = self.lines.first().and_then(|l| try_parse_delimiter(l.trimmed())) else {
            return;
        };
        let Some(close) = (1..self.lines.len())
            .find(|&idx| try_parse_delimiter(self.lines[idx].trimmed()) == Some(dashes))
        else {
            return;
        };

        let raw = self.lines[1..close]
            .iter()
            .map(|line| line.content.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        match self.lexer.hooks().front_matter(&raw) {
            Some(value) => {
                flatten_json(&value, "", &mut self.lexer.metadata);
                self.pos = close + 1;
                log::debug!("Parsed front matter ending at line {}", self.pos);
            }
            None => log::warn!("Front matter could not be decoded, parsing it as content"),
        }
    }
}
