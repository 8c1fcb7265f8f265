//! Stealth ranges: parts of a token hidden from the checker

use std::ops::RangeInclusive;

/// Inclusive span of char offsets within a single token's text.
///
/// `end` may equal the token length, in which case the range reaches one
/// past the last char.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StealthRange {
    pub start: usize,
    pub end: usize,
}

impl StealthRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

impl From<StealthRange> for RangeInclusive<usize> {
    fn from(range: StealthRange) -> Self {
        range.start..=range.end
    }
}

/// Insertion-ordered set of stealth ranges
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StealthRanges(Vec<StealthRange>);

impl StealthRanges {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a range unless an identical one is already present.
    ///
    /// Returns whether the range was added.
    pub fn insert(&mut self, range: StealthRange) -> bool {
        if self.0.contains(&range) {
            return false;
        }
        self.0.push(range);
        true
    }

    /// Check if any range covers the offset
    pub fn covers(&self, offset: usize) -> bool {
        self.0.iter().any(|r| r.contains(offset))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StealthRange> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[StealthRange] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a StealthRanges {
    type Item = &'a StealthRange;
    type IntoIter = std::slice::Iter<'a, StealthRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
