//! Remaining positional arguments
//!
//! [`Args`] is a cheap, copyable window over the command line. Every stage of
//! the dispatch walk narrows the window by exactly the tokens it consumed:
//! command names and indices from the front, the device path from the back.

/// A window over the not-yet-consumed command-line tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Args<'a> {
    tokens: &'a [String],
}

impl<'a> Args<'a> {
    /// Wrap a full token list
    pub fn new(tokens: &'a [String]) -> Self {
        Self { tokens }
    }

    /// Number of remaining tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether no tokens remain
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// First remaining token
    pub fn first(&self) -> Option<&'a str> {
        self.tokens.first().map(String::as_str)
    }

    /// Token at `index`
    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.tokens.get(index).map(String::as_str)
    }

    /// Consume and return the first token
    pub fn pop_front(&mut self) -> Option<&'a str> {
        let (first, rest) = self.tokens.split_first()?;
        self.tokens = rest;
        Some(first.as_str())
    }

    /// Consume and return the last token
    pub fn pop_back(&mut self) -> Option<&'a str> {
        let (last, rest) = self.tokens.split_last()?;
        self.tokens = rest;
        Some(last.as_str())
    }

    /// Iterate over the remaining tokens
    pub fn iter(&self) -> impl Iterator<Item = &'a str> {
        self.tokens.iter().map(String::as_str)
    }
}
