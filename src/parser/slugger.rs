//! Heading id generation.

use std::collections::HashMap;

/// Produces URL-safe heading ids, unique within one document.
#[derive(Debug, Default)]
pub struct Slugger {
    seen: HashMap<String, usize>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slugify `text`, appending `-N` when the slug was already handed out.
    pub fn slug(&mut self, text: &str) -> String {
        let slug = slugify(text);
        let count = self.seen.entry(slug.clone()).or_insert(0);
        let result = if *count == 0 {
            slug
        } else {
            format!("{}-{}", slug, count)
        };
        *count += 1;
        result
    }
}

fn slugify(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, ' ' | '_' | '-'))
        .collect();

    let mut slug = String::with_capacity(kept.len());
    for c in kept.chars() {
        let c = if c == ' ' { '-' } else { c };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }
    slug.trim_matches(|c| c == '-' || c == '_').to_string()
}
