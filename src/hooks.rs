//! Injected collaborators for content the compiler does not produce itself.
//!
//! Every hook is optional. Parsing never fails because a hook failed: a hook
//! that returns `None` degrades to the documented fallback for its construct.

use std::fmt;

use crate::syntax::Tex;

pub type FrontMatterFn = dyn Fn(&str) -> Option<serde_json::Value>;
pub type IncludeFn = dyn Fn(&str, Option<usize>, Option<usize>) -> Option<String>;
pub type LatexFn = dyn Fn(&Tex) -> String;
pub type HighlightFn = dyn Fn(&str, &str) -> Option<String>;
pub type ResolveFn = dyn Fn(&str) -> String;

#[derive(Default)]
pub struct Hooks {
    front_matter: Option<Box<FrontMatterFn>>,
    include: Option<Box<IncludeFn>>,
    include_code: Option<Box<IncludeFn>>,
    resolve: Option<Box<ResolveFn>>,
    latex: Option<Box<LatexFn>>,
    highlight: Option<Box<HighlightFn>>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default JSON decoding of the `---` header.
    ///
    /// Returning `None` rejects the block, which is then parsed as ordinary
    /// content.
    pub fn with_front_matter(
        mut self,
        f: impl Fn(&str) -> Option<serde_json::Value> + 'static,
    ) -> Self {
        self.front_matter = Some(Box::new(f));
        self
    }

    /// Resolve `!INCLUDE` directives. Line bounds are 1-based and inclusive.
    pub fn with_include(
        mut self,
        f: impl Fn(&str, Option<usize>, Option<usize>) -> Option<String> + 'static,
    ) -> Self {
        self.include = Some(Box::new(f));
        self
    }

    /// Resolve `!INCLUDECODE` directives. Line bounds are 1-based and inclusive.
    pub fn with_include_code(
        mut self,
        f: impl Fn(&str, Option<usize>, Option<usize>) -> Option<String> + 'static,
    ) -> Self {
        self.include_code = Some(Box::new(f));
        self
    }

    /// Map an include location to the identity of the file it names.
    ///
    /// Include cycles are detected on this key. Without a resolver the
    /// location is normalized lexically.
    pub fn with_resolve(mut self, f: impl Fn(&str) -> String + 'static) -> Self {
        self.resolve = Some(Box::new(f));
        self
    }

    pub fn with_latex(mut self, f: impl Fn(&Tex) -> String + 'static) -> Self {
        self.latex = Some(Box::new(f));
        self
    }

    /// Highlight `code` written in `lang`; `None` keeps escaped plain text.
    pub fn with_highlight(mut self, f: impl Fn(&str, &str) -> Option<String> + 'static) -> Self {
        self.highlight = Some(Box::new(f));
        self
    }

    pub fn has_include(&self) -> bool {
        self.include.is_some()
    }

    pub fn has_include_code(&self) -> bool {
        self.include_code.is_some()
    }

    pub(crate) fn front_matter(&self, raw: &str) -> Option<serde_json::Value> {
        match &self.front_matter {
            Some(f) => f(raw),
            None => serde_json::from_str(raw).ok(),
        }
    }

    pub(crate) fn include(
        &self,
        location: &str,
        from: Option<usize>,
        to: Option<usize>,
    ) -> Option<String> {
        self.include.as_ref().and_then(|f| f(location, from, to))
    }

    pub(crate) fn include_code(
        &self,
        location: &str,
        from: Option<usize>,
        to: Option<usize>,
    ) -> Option<String> {
        self.include_code.as_ref().and_then(|f| f(location, from, to))
    }

    pub(crate) fn resolve(&self, location: &str) -> String {
        match &self.resolve {
            Some(f) => f(location),
            None => normalize_location(location),
        }
    }

    pub(crate) fn latex(&self, tex: &Tex) -> Option<String> {
        self.latex.as_ref().map(|f| f(tex))
    }

    pub(crate) fn highlight(&self, code: &str, lang: &str) -> Option<String> {
        self.highlight.as_ref().and_then(|f| f(code, lang))
    }
}

/// Drop `.` segments and fold `dir/..` pairs so that spellings of the same
/// relative path compare equal.
pub fn normalize_location(location: &str) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for part in location.split(['/', '\\']) {
        match part {
            "" | "." => {}
            ".." if parts.last().is_some_and(|last| *last != "..") => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }
    let joined = parts.join("/");
    if location.starts_with('/') {
        format!("/{}", joined)
    } else {
        joined
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("front_matter", &self.front_matter.is_some())
            .field("include", &self.include.is_some())
            .field("include_code", &self.include_code.is_some())
            .field("resolve", &self.resolve.is_some())
            .field("latex", &self.latex.is_some())
            .field("highlight", &self.highlight.is_some())
            .finish()
    }
}
