//! Document identifiers and their allocation.
//!
//! Every element of a generated document carries a small integer identifier
//! that is unrelated to the ids of the input graph. Two identifiers are
//! reserved for the document structure: [`DocId::ROOT`] and
//! [`DocId::CANVAS`]. Everything else is handed out by a
//! [`DocIdAllocator`] in strictly increasing order.
//!
//! An allocator is created for a single render and passed explicitly to every
//! stage that needs identifiers, so nothing carries over between renders.
//!
//! # Examples
//!
//! ```
//! use tierdraw_core::identifier::{DocId, DocIdAllocator};
//!
//! let mut ids = DocIdAllocator::new();
//! let first = ids.allocate();
//! let second = ids.allocate();
//!
//! assert_eq!(first, DocId::new(2));
//! assert!(second > first);
//! assert_eq!(second.to_string(), "3");
//! ```

use std::fmt;

/// Identifier of an element inside a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(u32);

impl DocId {
    /// The root cell every other cell hangs from.
    pub const ROOT: DocId = DocId(0);

    /// The default layer cell that parents all shapes and connectors.
    pub const CANVAS: DocId = DocId(1);

    /// Wraps a raw identifier value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier value.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns `true` for the identifiers reserved for document structure.
    pub fn is_reserved(self) -> bool {
        self < FIRST_ALLOCATED
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const FIRST_ALLOCATED: DocId = DocId(2);

/// Hands out document identifiers in strictly increasing order.
///
/// The first identifier is the one right after the reserved structural ids.
#[derive(Debug)]
pub struct DocIdAllocator {
    next: u32,
}

impl DocIdAllocator {
    /// Creates an allocator positioned past the reserved identifiers.
    pub fn new() -> Self {
        Self {
            next: FIRST_ALLOCATED.0,
        }
    }

    /// Returns the next identifier and advances the counter.
    pub fn allocate(&mut self) -> DocId {
        let id = DocId(self.next);
        self.next += 1;
        id
    }

    /// Returns the number of identifiers handed out so far.
    pub fn allocated(&self) -> usize {
        (self.next - FIRST_ALLOCATED.0) as usize
    }
}

impl Default for DocIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_ids() {
        assert_eq!(DocId::ROOT.value(), 0);
        assert_eq!(DocId::CANVAS.value(), 1);
        assert!(DocId::ROOT.is_reserved());
        assert!(DocId::CANVAS.is_reserved());
        assert!(!DocId::new(2).is_reserved());
    }

    #[test]
    fn test_allocation_starts_past_reserved() {
        let mut ids = DocIdAllocator::new();
        assert_eq!(ids.allocated(), 0);

        let first = ids.allocate();
        assert_eq!(first, DocId::new(2));
        assert!(!first.is_reserved());
        assert_eq!(ids.allocated(), 1);
    }

    #[test]
    fn test_fresh_allocators_are_independent() {
        let mut a = DocIdAllocator::new();
        a.allocate();
        a.allocate();

        let mut b = DocIdAllocator::default();
        assert_eq!(b.allocate(), DocId::new(2));
        assert_eq!(a.allocate(), DocId::new(4));
    }

    #[test]
    fn test_display() {
        assert_eq!(DocId::new(42).to_string(), "42");
        assert_eq!(format!("{}", DocId::ROOT), "0");
    }
}
