//! Linear color history with a cursor.

use crate::color::ColorEntry;

/// Ordered session history of generated colors.
///
/// Never empty: it can only be built from a first entry, and the cursor
/// always points at an existing entry.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    entries: Vec<ColorEntry>,
    cursor: usize,
}

impl History {
    /// Start a history with a single entry.
    pub fn new(first: ColorEntry) -> Self {
        Self {
            entries: vec![first],
            cursor: 0,
        }
    }

    /// Entry under the cursor.
    pub fn current(&self) -> &ColorEntry {
        &self.entries[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    /// Drop everything after the cursor, append `entry` and move onto it.
    pub fn push(&mut self, entry: ColorEntry) -> &ColorEntry {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;
        self.current()
    }

    /// Step back one entry. Returns false at the start.
    pub fn back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::HexColor;

    fn entry(v: u8) -> ColorEntry {
        ColorEntry::new(HexColor::new(v, v, v), format!("Gray {v}"))
    }

    #[test]
    fn test_new_history() {
        let history = History::new(entry(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.cursor(), 0);
        assert_eq!(history.current(), &entry(1));
        assert!(!history.can_go_back());
    }

    #[test]
    fn test_push_appends_and_moves() {
        let mut history = History::new(entry(1));
        history.push(entry(2));
        history.push(entry(3));
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.current(), &entry(3));
    }

    #[test]
    fn test_back_at_start_is_noop() {
        let mut history = History::new(entry(1));
        let before = history.clone();
        assert!(!history.back());
        assert_eq!(history, before);
    }

    #[test]
    fn test_push_after_back_discards_forward_branch() {
        let mut history = History::new(entry(1));
        history.push(entry(2));
        history.push(entry(3));
        assert!(history.back());
        assert!(history.back());
        assert_eq!(history.cursor(), 0);

        history.push(entry(4));
        assert_eq!(history.entries(), &[entry(1), entry(4)]);
        assert_eq!(history.cursor(), 1);
    }

    #[test]
    fn test_cursor_invariant_under_mixed_operations() {
        let mut history = History::new(entry(0));
        // Deterministic pseudo-random walk of pushes and backs.
        let mut state = 0x2545_f491_u32;
        for step in 0..500u32 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            if state % 3 == 0 {
                history.push(entry((step % 256) as u8));
            } else {
                history.back();
            }
            assert!(!history.is_empty());
            assert!(history.cursor() < history.len());
        }
    }
}
