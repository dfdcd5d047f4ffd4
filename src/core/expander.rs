//! Model-code expander
//!
//! Turns compact model-code notation such as `AB12/34X-Y/Z` into the individual
//! codes it stands for (`AB12X-Y`, `AB12X-Z`, `AB34X-Y`, `AB34X-Z`), one
//! fixed-width row per whitespace-delimited token.
//!
//! Grammar of an expandable token:
//!
//! ```text
//! prefix   = ASCII letters, one or more
//! numbers  = decimal digits (any script), then zero or more "/" digits groups
//! middle   = anything
//! "-"      = the last dash that still has text after it
//! suffixes = anything, split on "/"
//! ```
//!
//! Tokens that do not fit the grammar pass through unchanged.

use std::iter::Peekable;
use std::str::CharIndices;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::types::{ExpandedRow, MODEL_COLUMNS};

/// Splits raw input into whitespace-delimited tokens, across all lines
pub struct Tokenizer<'a> {
    text: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            chars: text.char_indices().peekable(),
        }
    }

    /// Collect every token in input order
    pub fn tokenize(self) -> Vec<&'a str> {
        self.collect()
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_whitespace() {
                self.chars.next();
            } else {
                break;
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.skip_whitespace();
        let (start, _) = *self.chars.peek()?;
        let mut end = self.text.len();
        while let Some(&(idx, c)) = self.chars.peek() {
            if c.is_whitespace() {
                end = idx;
                break;
            }
            self.chars.next();
        }
        Some(&self.text[start..end])
    }
}

/// A token that fits the model-code grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelCodePattern<'a> {
    pub prefix: &'a str,
    pub numbers: Vec<&'a str>,
    pub middle: &'a str,
    pub suffixes: Vec<&'a str>,
}

impl ModelCodePattern<'_> {
    /// Every `<prefix><number><middle>-<suffix>` combination, numbers-major
    pub fn expand(&self) -> Vec<String> {
        self.numbers
            .iter()
            .flat_map(|number| {
                self.suffixes.iter().map(move |suffix| {
                    format!("{}{}{}-{}", self.prefix, number, self.middle, suffix)
                })
            })
            .collect()
    }

    /// Number of codes `expand` produces
    pub fn combinations(&self) -> usize {
        self.numbers.len() * self.suffixes.len()
    }
}

/// Result of matching one token against the grammar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeMatch<'a> {
    Pattern(ModelCodePattern<'a>),
    Literal(&'a str),
}

/// Tail-anchored model-code grammar: prefix, numbers, middle, last separating dash, suffixes
static MODEL_CODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z]+)(\d+(?:/\d+)*)(.*)-(.+?)$").expect("model-code pattern is valid")
});

/// Matches tokens against the model-code grammar
#[derive(Debug, Clone, Copy)]
pub struct GrammarMatcher {
    pattern: &'static Regex,
}

impl Default for GrammarMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarMatcher {
    pub fn new() -> Self {
        Self {
            pattern: &MODEL_CODE_RE,
        }
    }

    /// Split a token into its grammar segments, or hand it back as a literal
    pub fn match_token<'a>(&self, token: &'a str) -> CodeMatch<'a> {
        let Some(caps) = self.pattern.captures(token) else {
            return CodeMatch::Literal(token);
        };
        let segment = |idx: usize| caps.get(idx).map_or("", |m| m.as_str());

        CodeMatch::Pattern(ModelCodePattern {
            prefix: segment(1),
            numbers: segment(2).split('/').collect(),
            middle: segment(3),
            suffixes: segment(4).split('/').collect(),
        })
    }
}

/// Match a single token against the model-code grammar
pub fn match_token(token: &str) -> CodeMatch<'_> {
    GrammarMatcher::new().match_token(token)
}

/// Expand one token into a model-table row
pub fn expand_token(token: &str) -> ExpandedRow {
    match match_token(token) {
        CodeMatch::Pattern(pattern) => {
            let (row, dropped) = ExpandedRow::from_cells(pattern.expand());
            if dropped > 0 {
                warn!(
                    token,
                    combinations = pattern.combinations(),
                    dropped,
                    "expansion exceeds {} columns, extra codes dropped",
                    MODEL_COLUMNS
                );
            }
            row
        }
        CodeMatch::Literal(literal) => ExpandedRow::literal(literal),
    }
}

/// Expand a free-text block, one row per token in input order
pub fn expand_text(text: &str) -> Vec<ExpandedRow> {
    let rows: Vec<ExpandedRow> = Tokenizer::new(text).map(expand_token).collect();
    debug!(rows = rows.len(), "expanded model codes");
    rows
}
