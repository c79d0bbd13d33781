//! Header visibility state machine.
//!
//! The sticky header hides while the reader scrolls down and reappears on
//! any upward scroll; near the top of the page it is always shown.

/// Scroll offset below which the header is always visible.
pub const SCROLL_THRESHOLD: f64 = 10.0;

/// Tracks scroll direction to decide header visibility.
#[derive(Debug, Clone, Copy)]
pub struct HeaderVisibility {
    last_scroll_y: f64,
    visible: bool,
}

impl HeaderVisibility {
    /// Create the state machine; the header starts visible at the top.
    pub fn new() -> Self {
        Self {
            last_scroll_y: 0.0,
            visible: true,
        }
    }

    /// Feed a scroll position and return the resulting visibility.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        if scroll_y < SCROLL_THRESHOLD {
            self.visible = true;
        } else if scroll_y > self.last_scroll_y {
            self.visible = false;
        } else {
            self.visible = true;
        }
        self.last_scroll_y = scroll_y;
        self.visible
    }

    /// Current visibility.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for HeaderVisibility {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_at_top() {
        let mut header = HeaderVisibility::new();
        assert!(header.is_visible());
        assert!(header.on_scroll(0.0));
        assert!(header.on_scroll(5.0));
    }

    #[test]
    fn test_hides_on_scroll_down() {
        let mut header = HeaderVisibility::new();
        header.on_scroll(50.0);
        assert!(!header.is_visible());
        assert!(!header.on_scroll(120.0));
    }

    #[test]
    fn test_shows_on_scroll_up() {
        let mut header = HeaderVisibility::new();
        header.on_scroll(200.0);
        assert!(!header.is_visible());
        assert!(header.on_scroll(150.0));
    }

    #[test]
    fn test_unchanged_position_shows() {
        let mut header = HeaderVisibility::new();
        header.on_scroll(200.0);
        // Same offset is not "scrolling down", so the header reappears.
        assert!(header.on_scroll(200.0));
    }

    #[test]
    fn test_returning_below_threshold_shows() {
        let mut header = HeaderVisibility::new();
        header.on_scroll(200.0);
        assert!(header.on_scroll(4.0));
    }
}
