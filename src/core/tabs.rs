//! Bounded tab index without wraparound

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabController {
    active: usize,
    count: usize,
}

impl TabController {
    /// `count` is the number of declared tabs; a controller always has at least one.
    pub fn new(count: usize, initial: usize) -> Self {
        let count = count.max(1);
        Self {
            active: initial.min(count - 1),
            count,
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn next(&mut self) {
        self.active = (self.active + 1).min(self.count - 1);
    }

    pub fn prev(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    pub fn select(&mut self, index: usize) {
        self.active = index.min(self.count - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_last() {
        let mut tabs = TabController::new(3, 0);
        tabs.next();
        tabs.next();
        assert_eq!(tabs.active_index(), 2);
        tabs.next();
        assert_eq!(tabs.active_index(), 2);
    }

    #[test]
    fn test_prev_stops_at_first() {
        let mut tabs = TabController::new(3, 1);
        tabs.prev();
        assert_eq!(tabs.active_index(), 0);
        tabs.prev();
        assert_eq!(tabs.active_index(), 0);
    }

    #[test]
    fn test_initial_and_select_are_clamped() {
        let mut tabs = TabController::new(4, 9);
        assert_eq!(tabs.active_index(), 3);
        tabs.select(1);
        assert_eq!(tabs.active_index(), 1);
        tabs.select(100);
        assert_eq!(tabs.active_index(), 3);
        assert_eq!(TabController::new(0, 0).count(), 1);
    }

    #[test]
    fn test_index_stays_in_bounds_for_any_sequence() {
        // Walk every Next/Prev sequence of length 8 for several tab counts.
        for count in 1..=6usize {
            for pattern in 0u32..(1 << 8) {
                let mut tabs = TabController::new(count, 0);
                for step in 0..8 {
                    if pattern & (1 << step) != 0 {
                        tabs.next();
                    } else {
                        tabs.prev();
                    }
                    assert!(tabs.active_index() < count);
                }
            }
        }
    }
}
