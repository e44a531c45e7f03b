use regex::Regex;

use super::errors::GateError;

/// Return the canonical absolute form of a request path.
///
/// `.` and `..` segments are resolved lexically and never climb above the
/// root, repeated separators collapse, and a trailing separator survives only
/// if the input had one and the result is not the root. Empty input is `/`.
pub fn clean_path(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            segment => segments.push(segment),
        }
    }

    if segments.is_empty() {
        return "/".to_string();
    }

    let mut cleaned = String::with_capacity(path.len() + 1);
    for segment in segments {
        cleaned.push('/');
        cleaned.push_str(segment);
    }
    if path.ends_with('/') {
        cleaned.push('/');
    }
    cleaned
}

/// Ordered list of secured path patterns, compiled once.
///
/// Patterns are unanchored: a path is secured when any pattern occurs in it.
#[derive(Debug, Clone, Default)]
pub struct SecuredUrls {
    patterns: Vec<Regex>,
}

impl SecuredUrls {
    /// Compile the given patterns in order.
    ///
    /// # Errors
    /// * `InvalidPattern` - A pattern is not a valid regular expression
    pub fn new<I, P>(patterns: I) -> Result<Self, GateError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Regex::new(pattern).map_err(|e| GateError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Test an already normalized path, stopping at the first match.
    pub fn is_secured(&self, path: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(path))
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
