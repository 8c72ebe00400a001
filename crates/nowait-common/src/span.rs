//! Byte-offset source spans.

use serde::Serialize;

/// A half-open byte range `[start, end)` within a source file.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    /// Create a span, normalizing reversed bounds.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        if end < start {
            Self {
                start: end,
                end: start,
            }
        } else {
            Self { start, end }
        }
    }

    /// Create a span from a start offset and a length.
    #[must_use]
    pub const fn at(start: u32, length: u32) -> Self {
        Self {
            start,
            end: start.saturating_add(length),
        }
    }

    /// Zero for a span whose fields were set out of order.
    #[must_use]
    pub const fn len(self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }

    /// Whether `offset` lies inside this span.
    ///
    /// An empty span contains only its own start offset so that zero-width
    /// scopes reported by a host are still addressable.
    #[must_use]
    pub const fn contains(self, offset: u32) -> bool {
        if self.is_empty() {
            offset == self.start
        } else {
            self.start <= offset && offset < self.end
        }
    }
}

#[cfg(test)]
#[path = "../tests/span_tests.rs"]
mod tests;
