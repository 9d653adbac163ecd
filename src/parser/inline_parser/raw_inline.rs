//! Raw inline HTML and `<...>` autolinks.

use super::InlineParser;
use crate::parser::html::{link_level_delta, match_html_tag};
use crate::syntax::Token;

impl InlineParser<'_, '_> {
    /// Handle `<`: an autolink outside anchors, then a raw tag, otherwise a
    /// literal `<`.
    pub(super) fn parse_angle(&mut self, out: &mut Vec<Token>) {
        if self.link_level < 1 && self.parse_autolink(out) {
            return;
        }
        if let Some(tag) = match_html_tag(self.rest()) {
            let content = tag.to_string();
            self.flush(out);
            self.link_level += link_level_delta(&content);
            log::trace!("Raw inline HTML {:?}, link level {}", content, self.link_level);
            self.pos += content.len();
            out.push(Token::Html { content });
            return;
        }
        self.buffer.push('<');
        self.pos += 1;
    }
}
