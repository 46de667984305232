//! Slide navigation state.
//!
//! `DeckCursor` owns the current index, the single piece of mutable state
//! in the presentation core. Every transition is total: `next` and
//! `previous` wrap around the deck, and `go_to` rejects out-of-range
//! targets instead of clamping them.

use crate::types::Deck;

/// Position within a fixed, non-empty deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckCursor {
    index: usize,
    len: usize,
}

impl DeckCursor {
    /// Cursor at the first slide of a deck with `len` slides.
    ///
    /// A deck is never empty; this is checked once at construction.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "deck must contain at least one slide");
        DeckCursor { index: 0, len }
    }

    /// Current zero-based slide index, always in `[0, len)`.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of slides the cursor ranges over.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// 1-based position pair for the "slide N/M" readout.
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.len)
    }

    /// Advance one slide, wrapping from the last back to the first.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Step back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump directly to `index`.
    ///
    /// Returns `true` and moves when `index` is in range; otherwise leaves
    /// the cursor unchanged and returns `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Jump to the first slide.
    pub fn first(&mut self) {
        self.index = 0;
    }

    /// Jump to the last slide.
    pub fn last(&mut self) {
        self.index = self.len - 1;
    }
}

impl Deck {
    /// Cursor over this deck, starting at the first slide.
    pub fn cursor(&self) -> DeckCursor {
        DeckCursor::new(self.len())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let cursor = DeckCursor::new(15);
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.position(), (1, 15));
    }

    #[test]
    fn test_next_advances_modulo_len() {
        // k presses of next land on k mod N.
        let n = 15;
        let mut cursor = DeckCursor::new(n);
        for k in 1..=40 {
            cursor.next();
            assert_eq!(cursor.index(), k % n, "after {k} presses");
        }
    }

    #[test]
    fn test_next_wraps_at_end() {
        let mut cursor = DeckCursor::new(15);
        for _ in 0..14 {
            cursor.next();
        }
        assert_eq!(cursor.index(), 14);
        cursor.next();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_previous_wraps_from_first_to_last() {
        let mut cursor = DeckCursor::new(15);
        cursor.previous();
        assert_eq!(cursor.index(), 14);
    }

    #[test]
    fn test_next_then_previous_round_trips() {
        let n = 15;
        for start in 0..n {
            let mut cursor = DeckCursor::new(n);
            assert!(cursor.go_to(start));
            cursor.next();
            cursor.previous();
            assert_eq!(cursor.index(), start, "round trip from {start}");
        }
    }

    #[test]
    fn test_go_to_sets_index_exactly() {
        let mut cursor = DeckCursor::new(15);
        for _ in 0..7 {
            cursor.next();
        }
        assert!(cursor.go_to(3));
        assert_eq!(cursor.index(), 3);
        assert_eq!(cursor.len(), 15);
    }

    #[test]
    fn test_go_to_rejects_out_of_range() {
        let mut cursor = DeckCursor::new(15);
        assert!(cursor.go_to(5));
        assert!(!cursor.go_to(15));
        assert!(!cursor.go_to(usize::MAX));
        assert_eq!(cursor.index(), 5, "rejected jump must not move");
    }

    #[test]
    fn test_first_and_last() {
        let mut cursor = DeckCursor::new(15);
        cursor.last();
        assert_eq!(cursor.index(), 14);
        cursor.first();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_single_slide_deck_cycles_in_place() {
        let mut cursor = DeckCursor::new(1);
        cursor.next();
        assert_eq!(cursor.index(), 0);
        cursor.previous();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    #[should_panic(expected = "at least one slide")]
    fn test_empty_deck_is_rejected() {
        DeckCursor::new(0);
    }
}
