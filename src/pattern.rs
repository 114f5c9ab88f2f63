use crate::error::RouterError;

use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use regex::Regex;
use smallvec::SmallVec;

const COLON: char = ':';
const SLASH: char = '/';

/// Matcher fragment substituted for every `:name` segment.
const PARAM_EXPR: &str = "([A-Za-z0-9]+)";

/// A compiled URL pattern such as `/users/:id/posts`.
///
/// Segments are split on `/`. A segment of the form `:name` captures one or more
/// ASCII letters or digits, every other segment (empty ones included) must
/// appear verbatim. The matcher is anchored on both ends.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: Box<str>,
    regex: Regex,
    names: Box<[Box<str>]>,
}

/// Parameter values captured from a path, in the order of the pattern's names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captures<'p> {
    values: SmallVec<[&'p str; 8]>,
}

impl Pattern {
    pub fn compile(pattern: &str) -> Result<Self, RouterError> {
        let mut names: Vec<Box<str>> = Vec::new();
        let mut expr = String::with_capacity(pattern.len() + 2);

        expr.push('^');
        for (i, part) in pattern.split(SLASH).enumerate() {
            if i > 0 {
                expr.push(SLASH);
            }
            match part.strip_prefix(COLON) {
                Some("") => {
                    return Err(RouterError::malformed(
                        pattern,
                        "capture name can not be empty",
                    ))
                }
                Some(name) => {
                    names.push(name.into());
                    expr.push_str(PARAM_EXPR);
                }
                None => expr.push_str(&regex::escape(part)),
            }
        }
        expr.push('$');

        let regex = Regex::new(&expr).map_err(|e| RouterError::malformed(pattern, e.to_string()))?;
        debug_assert_eq!(regex.captures_len(), names.len() + 1);

        Ok(Self {
            source: pattern.into(),
            regex,
            names: names.into_boxed_slice(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn param_names(&self) -> &[Box<str>] {
        &self.names
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    /// Returns `None` unless the whole path matches.
    pub fn captures<'p>(&self, path: &'p str) -> Option<Captures<'p>> {
        let caps = self.regex.captures(path)?;
        let values = caps.iter().skip(1).flatten().map(|m| m.as_str()).collect();
        Some(Captures { values })
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl FromStr for Pattern {
    type Err = RouterError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::compile(s)
    }
}

impl<'p> Deref for Captures<'p> {
    type Target = [&'p str];
    fn deref(&self) -> &Self::Target {
        &*self.values
    }
}
