//! Horizontal rule parsing.

use super::BlockParser;
use crate::syntax::Token;

/// Try to parse a horizontal rule: three or more identical `*`, `-` or `_`
/// characters and nothing else.
///
/// `allow_dash` is false while a paragraph continues, where a dash line is an
/// underline instead.
pub(crate) fn try_parse_horizontal_rule(line: &str, allow_dash: bool) -> Option<char> {
    let rule_char = line.chars().next()?;
    match rule_char {
        '*' | '_' => {}
        '-' if allow_dash => {}
        _ => return None,
    }
    let count = line.chars().count();
    if count >= 3 && line.chars().all(|c| c == rule_char) {
        Some(rule_char)
    } else {
        None
    }
}

impl BlockParser<'_, '_> {
    pub(super) fn parse_horizontal_rule(&mut self, allow_dash: bool) -> Option<Token> {
        if !self.is_flush(self.pos) {
            return None;
        }
        let character = try_parse_horizontal_rule(self.lines[self.pos].trimmed(), allow_dash)?;
        self.pos += 1;
        log::debug!("Parsed horizontal rule at line {}", self.pos);
        Some(Token::Horizontal { character })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules() {
        assert_eq!(try_parse_horizontal_rule("***", true), Some('*'));
        assert_eq!(try_parse_horizontal_rule("-----", true), Some('-'));
        assert_eq!(try_parse_horizontal_rule("___", false), Some('_'));
    }

    #[test]
    fn test_dash_disallowed_in_paragraph() {
        assert_eq!(try_parse_horizontal_rule("---", false), None);
    }

    #[test]
    fn test_not_rules() {
        assert_eq!(try_parse_horizontal_rule("**", true), None);
        assert_eq!(try_parse_horizontal_rule("* * *", true), None);
        assert_eq!(try_parse_horizontal_rule("-*-", true), None);
        assert_eq!(try_parse_horizontal_rule("===", true), None);
        assert_eq!(try_parse_horizontal_rule("", true), None);
    }
}
