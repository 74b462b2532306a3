//! Patterns: a compiled regular expression together with its source text
//! and a flag set written the way dynamic runtimes write them (`gim…`).
//!
//! Flags `i`, `m` and `s` configure the compiled expression; `d`, `g`,
//! `u`, `v` and `y` only describe how a caller intends to use it and are
//! kept for display and inspection. Expressions compile with `fancy_regex`,
//! so lookaround and backreferences are accepted.

use fancy_regex::Regex as Expression;
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt;

/// Flags in the order the runtime reports them.
const CANONICAL_FLAGS: &str = "dgimsuvy";

lazy_static! {
    static ref METACHARACTERS: Regex = Regex::new(r"[.*+?^${}()|\[\]\\]").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
    static ref EMPTY_MATCH: Expression = Expression::new(r"^$").unwrap();
}

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("Invalid flag '{0}'")]
    InvalidFlag(char),
    #[error("Duplicate flag '{0}'")]
    DuplicateFlag(char),
    #[error("Flags 'u' and 'v' cannot be combined")]
    ConflictingFlags,
    #[error(transparent)]
    Syntax(#[from] fancy_regex::Error),
}

/// Flags applied when a coerced pattern has none of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternOptions {
    pub global: bool,
    pub ignore_case: bool,
    pub multiline: bool,
}
impl Default for PatternOptions {
    fn default() -> Self {
        Self { global: true, ignore_case: true, multiline: false }
    }
}
impl PatternOptions {
    pub fn flags(&self) -> String {
        let mut flags = String::new();
        if self.global {
            flags.push('g');
        }
        if self.ignore_case {
            flags.push('i');
        }
        if self.multiline {
            flags.push('m');
        }
        flags
    }
}

#[derive(Clone)]
pub struct Pattern {
    source: String,
    flags: String,
    regex: Expression,
}

impl Pattern {
    pub fn new(source: &str, flags: &str) -> Result<Pattern, PatternError> {
        let flags = canonical_flags(flags)?;
        let inline: String = flags.chars().filter(|c| "ims".contains(*c)).collect();
        let regex = if inline.is_empty() {
            Expression::new(source)?
        } else {
            Expression::new(&format!("(?{}){}", inline, source))?
        };
        Ok(Pattern { source: source.to_string(), flags, regex })
    }
    /// `/^$/`, the pattern that matches only empty text.
    pub fn empty_match() -> Pattern {
        Pattern { source: String::from("^$"), flags: String::new(), regex: EMPTY_MATCH.clone() }
    }
    pub fn source(&self) -> &str {
        &self.source
    }
    pub fn flags(&self) -> &str {
        &self.flags
    }
    pub fn is_global(&self) -> bool {
        self.flags.contains('g')
    }
    pub fn ignores_case(&self) -> bool {
        self.flags.contains('i')
    }
    pub fn is_multiline(&self) -> bool {
        self.flags.contains('m')
    }
    /// Whether `text` contains a match. Exceeding the backtracking limit
    /// counts as no match.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text).unwrap_or(false)
    }
    pub fn regex(&self) -> &Expression {
        &self.regex
    }
    /// Source text as it appears between the slashes of the literal form.
    fn literal_source(&self) -> String {
        if self.source.is_empty() {
            return String::from("(?:)");
        }
        let mut out = String::with_capacity(self.source.len());
        let mut escaped = false;
        for c in self.source.chars() {
            match c {
                '/' if !escaped => out.push_str("\\/"),
                '\n' => out.push_str("\\n"),
                _ => out.push(c),
            }
            escaped = c == '\\' && !escaped;
        }
        out
    }
}

fn canonical_flags(flags: &str) -> Result<String, PatternError> {
    let mut seen = Vec::with_capacity(flags.len());
    for c in flags.chars() {
        if !CANONICAL_FLAGS.contains(c) {
            return Err(PatternError::InvalidFlag(c));
        }
        if seen.contains(&c) {
            return Err(PatternError::DuplicateFlag(c));
        }
        seen.push(c);
    }
    if seen.contains(&'u') && seen.contains(&'v') {
        return Err(PatternError::ConflictingFlags);
    }
    Ok(CANONICAL_FLAGS.chars().filter(|c| seen.contains(c)).collect())
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.flags == other.flags
    }
}
impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("source", &self.source)
            .field("flags", &self.flags)
            .finish()
    }
}
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}/{}", self.literal_source(), self.flags)
    }
}

/// Makes `text` safe to embed in a pattern: metacharacters are escaped,
/// whitespace runs match one or more whitespace characters, and commas
/// become optional.
pub fn escape(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let escaped = METACHARACTERS.replace_all(text, r"\$0");
    let spaced = WHITESPACE.replace_all(&escaped, NoExpand(r"\s+"));
    spaced.replace(',', ",?")
}
