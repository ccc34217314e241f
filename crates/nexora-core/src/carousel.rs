//! Testimonial Carousel
//!
//! Index into a fixed list. Moves only when a control is selected; there is
//! no timer.

/// Carousel selection state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    /// Create a carousel over `len` items, starting at the first one
    pub const fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the active item
    pub const fn active(&self) -> usize {
        self.active
    }

    pub const fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.active
    }

    /// Select an item. Out-of-range indices leave the state unchanged.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            tracing::debug!(index, len = self.len, "ignoring out-of-range testimonial");
            return false;
        }
        self.active = index;
        true
    }

    /// CSS class for an item or control at `index`
    pub fn class_for(&self, base: &str, index: usize) -> String {
        if self.is_active(index) {
            format!("{base} active")
        } else {
            base.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_positions(carousel: &Carousel) -> Vec<usize> {
        (0..carousel.len()).filter(|&i| carousel.is_active(i)).collect()
    }

    #[test]
    fn test_starts_at_first() {
        let carousel = Carousel::new(3);
        assert_eq!(carousel.active(), 0);
        assert_eq!(active_positions(&carousel), [0]);
    }

    #[test]
    fn test_select_marks_exactly_one() {
        let mut carousel = Carousel::new(3);
        for k in 0..3 {
            assert!(carousel.select(k));
            assert_eq!(active_positions(&carousel), [k]);
        }
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.select(2);
        assert!(!carousel.select(3));
        assert_eq!(carousel.active(), 2);
    }

    #[test]
    fn test_class_for() {
        let mut carousel = Carousel::new(3);
        carousel.select(1);
        assert_eq!(carousel.class_for("testimonial-btn", 1), "testimonial-btn active");
        assert_eq!(carousel.class_for("testimonial-btn", 0), "testimonial-btn");
    }

    #[test]
    fn test_empty_has_no_active() {
        let carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert!(!carousel.is_active(0));
    }
}
