//! Lexical scope annotations.
//!
//! A host editor normally knows which parts of a buffer are comments or
//! strings. `ScopeMap` stores that knowledge as named regions, and
//! `LexicalRules` can derive a basic map on its own for plain files.

use crate::Region;
use serde::{Deserialize, Serialize};

/// Scope name attached to every point of a buffer.
pub const ROOT_SCOPE: &str = "source";

/// A named region of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeSpan {
    pub region: Region,
    pub name: String,
}

/// Named regions, kept sorted by start offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeMap {
    spans: Vec<ScopeSpan>,
    /// `reach[i]` is the largest end among `spans[..=i]`
    reach: Vec<usize>,
}

impl ScopeMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a scope span.
    ///
    /// Spans pushed in start order are appended without shifting.
    pub fn push(&mut self, region: Region, name: impl Into<String>) {
        let span = ScopeSpan {
            region,
            name: name.into(),
        };
        let at = self
            .spans
            .partition_point(|s| s.region.begin <= span.region.begin);
        self.spans.insert(at, span);

        self.reach.truncate(at);
        let mut reach = at.checked_sub(1).map_or(0, |i| self.reach[i]);
        for span in &self.spans[at..] {
            reach = reach.max(span.region.end);
            self.reach.push(reach);
        }
    }

    /// Returns all spans.
    pub fn spans(&self) -> &[ScopeSpan] {
        &self.spans
    }

    /// Returns the full scope name at a point.
    pub fn name_at(&self, point: usize) -> String {
        let mut name = String::from(ROOT_SCOPE);
        // Spans starting after the point cannot contain it, and neither can
        // any prefix of spans that all end at or before it.
        let last = self.spans.partition_point(|s| s.region.begin <= point);
        let first = self.reach[..last].partition_point(|&end| end <= point);
        for span in &self.spans[first..last] {
            if span.region.contains_point(point) {
                name.push(' ');
                name.push_str(&span.name);
            }
        }
        name
    }
}

/// Simple comment and string recognizer.
///
/// This is not a grammar: it finds line comments and delimited strings
/// with backslash escapes, which is what a scope blacklist cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalRules {
    /// Prefixes that start a comment running to the end of the line
    pub line_comments: Vec<String>,
    /// Characters that open and close a string literal
    pub string_delimiters: Vec<char>,
}

impl Default for LexicalRules {
    fn default() -> Self {
        Self::lisp()
    }
}

impl LexicalRules {
    /// Rules for Lisp dialects.
    pub fn lisp() -> Self {
        Self {
            line_comments: vec![";".to_string()],
            string_delimiters: vec!['"'],
        }
    }

    /// Rules for C-like languages.
    pub fn c_like() -> Self {
        Self {
            line_comments: vec!["//".to_string()],
            string_delimiters: vec!['"', '\''],
        }
    }

    /// Picks rules for a syntax name, if known.
    pub fn for_syntax(syntax: &str) -> Option<Self> {
        match syntax {
            "lisp" | "scheme" | "clojure" | "racket" | "elisp" => Some(Self::lisp()),
            "rust" | "c" | "cpp" | "java" | "javascript" | "go" => Some(Self::c_like()),
            _ => None,
        }
    }

    /// Scans text and produces comment and string scopes.
    pub fn annotate(&self, text: &str) -> ScopeMap {
        let chars: Vec<char> = text.chars().collect();
        let comments: Vec<Vec<char>> = self
            .line_comments
            .iter()
            .filter(|prefix| !prefix.is_empty())
            .map(|prefix| prefix.chars().collect())
            .collect();

        let mut map = ScopeMap::new();
        let mut i = 0;
        while i < chars.len() {
            if comments.iter().any(|prefix| chars[i..].starts_with(prefix)) {
                let end = chars[i..]
                    .iter()
                    .position(|&c| c == '\n')
                    .map_or(chars.len(), |n| i + n);
                map.push(Region::new(i, end), "comment.line");
                i = end;
                continue;
            }

            let c = chars[i];
            if self.string_delimiters.contains(&c) {
                let mut end = i + 1;
                while end < chars.len() && chars[end] != c {
                    end += if chars[end] == '\\' { 2 } else { 1 };
                }
                // Unterminated strings run to the end of the text.
                let end = (end + 1).min(chars.len());
                map.push(Region::new(i, end), "string.quoted");
                i = end;
                continue;
            }

            i += 1;
        }
        map
    }
}
