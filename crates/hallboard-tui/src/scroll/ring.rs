//! L4 Atomic Layer: Duplicated item sequence for seamless looping
//!
//! The ring holds whole copies of the source sequence back to back, rotated
//! by however many items have scrolled out. Because the content is periodic
//! with the source length, moving the front item to the back never shows a
//! seam, and appending the first period again keeps the cycle intact.

use std::collections::VecDeque;

/// Materialized, rotating copy of the display items
#[derive(Debug, Clone)]
pub struct ItemRing<T> {
    items: VecDeque<T>,
    source_len: usize,
}

impl<T: Clone> ItemRing<T> {
    /// Build a ring that can fill a window of `visible` items
    pub fn new(source: Vec<T>, visible: usize) -> Self {
        let source_len = source.len();
        let mut ring = Self {
            items: source.into(),
            source_len,
        };
        ring.ensure_window(visible);
        ring
    }

    /// Items that must be materialized: at least two copies of the source
    /// and at least two visible windows, in whole copies.
    pub fn required_len(source_len: usize, visible: usize) -> usize {
        if source_len == 0 {
            return 0;
        }
        let wanted = (2 * source_len).max(2 * visible);
        wanted.div_ceil(source_len) * source_len
    }

    /// Duplicate the sequence again if the window outgrew the forward buffer.
    /// Returns true if items were added.
    pub fn ensure_window(&mut self, visible: usize) -> bool {
        let required = Self::required_len(self.source_len, visible);
        if self.items.len() >= required {
            return false;
        }
        let period: Vec<T> = self.items.iter().take(self.source_len).cloned().collect();
        while self.items.len() < required {
            self.items.extend(period.iter().cloned());
        }
        true
    }

    /// Move the front item to the back
    pub fn rotate(&mut self) {
        if let Some(front) = self.items.pop_front() {
            self.items.push_back(front);
        }
    }

    /// Move `n` items from the front to the back in one go
    pub fn rotate_by(&mut self, n: usize) {
        let len = self.items.len();
        if len > 0 {
            self.items.rotate_left(n % len);
        }
    }

    /// Move the back item to the front
    pub fn rotate_back(&mut self) {
        if let Some(back) = self.items.pop_back() {
            self.items.push_front(back);
        }
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The first `n` items in display order
    pub fn window(&self, n: usize) -> impl Iterator<Item = &T> {
        self.items.iter().take(n)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Materialized item count
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Length of the source sequence
    pub fn source_len(&self) -> usize {
        self.source_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_len() {
        assert_eq!(ItemRing::<u8>::required_len(0, 5), 0);
        assert_eq!(ItemRing::<u8>::required_len(10, 5), 20);
        assert_eq!(ItemRing::<u8>::required_len(3, 5), 12);
        assert_eq!(ItemRing::<u8>::required_len(4, 4), 8);
    }

    #[test]
    fn test_duplicates_source() {
        let ring = ItemRing::new((0..10).collect(), 5);
        assert!(ring.len() >= 10);
        assert_eq!(ring.len(), 20);
        assert_eq!(ring.front(), Some(&0));
        assert_eq!(ring.get(10), Some(&0));
    }

    #[test]
    fn test_small_source_fills_window() {
        let ring = ItemRing::new(vec!['a', 'b', 'c'], 5);
        assert!(ring.len() >= 10);
        let window: String = ring.window(7).collect();
        assert_eq!(window, "abcabca");
    }

    #[test]
    fn test_rotation_stays_periodic() {
        let mut ring = ItemRing::new(vec![1, 2, 3], 2);
        for _ in 0..4 {
            ring.rotate();
        }
        let items: Vec<_> = ring.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 1, 2, 3, 1]);

        ring.rotate_back();
        assert_eq!(ring.front(), Some(&1));
    }

    #[test]
    fn test_rotate_by_wraps_whole_copies() {
        let mut ring = ItemRing::new(vec![1, 2, 3], 2);
        ring.rotate_by(4);
        assert_eq!(ring.front(), Some(&2));
        ring.rotate_by(ring.len() * 1000 + 1);
        assert_eq!(ring.front(), Some(&3));

        let mut empty: ItemRing<u8> = ItemRing::new(Vec::new(), 2);
        empty.rotate_by(7);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_regrow_after_rotation_keeps_cycle() {
        let mut ring = ItemRing::new(vec![1, 2, 3], 1);
        ring.rotate();
        assert!(ring.ensure_window(6));
        assert_eq!(ring.len(), 12);
        let items: Vec<_> = ring.iter().copied().collect();
        assert_eq!(items, vec![2, 3, 1, 2, 3, 1, 2, 3, 1, 2, 3, 1]);
        assert!(!ring.ensure_window(6));
    }

    #[test]
    fn test_empty_ring() {
        let mut ring: ItemRing<u8> = ItemRing::new(Vec::new(), 5);
        ring.rotate();
        assert!(ring.is_empty());
        assert_eq!(ring.front(), None);
    }
}
