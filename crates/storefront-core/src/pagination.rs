//! Incremental-loading pagination.
//!
//! Tracks how many items the gallery should request and grows that number
//! whenever the "load more" sentinel scrolls fully into view. Knows nothing
//! about rendering or fetching; callers feed it the sentinel visibility and
//! the current total and read back the limit.

/// Number of items fetched per increment.
pub const PRODUCTS_PER_PAGE: usize = 20;

/// Edge detector over a raw boolean visibility signal.
///
/// Reports a rising edge exactly once per false-to-true transition, so a
/// sentinel that stays visible across many frames triggers a single load.
#[derive(Debug, Clone, Default)]
pub struct VisibilityEdge {
    last: bool,
}

impl VisibilityEdge {
    pub fn new() -> Self {
        Self { last: false }
    }

    /// Feed the current signal value. Returns true on a rising edge.
    pub fn update(&mut self, visible: bool) -> bool {
        let rising = visible && !self.last;
        self.last = visible;
        rising
    }

    /// Whether the last observed value was visible.
    pub fn is_visible(&self) -> bool {
        self.last
    }

    /// Forget the last value; the next `true` counts as a rising edge.
    pub fn reset(&mut self) {
        self.last = false;
    }
}

/// Owns the current request limit for a paginated gallery.
#[derive(Debug, Clone)]
pub struct PaginationController {
    /// Items added per increment.
    page_size: usize,
    /// Number of items the caller should request and display.
    limit: usize,
    /// Edge detector over the sentinel visibility.
    sentinel: VisibilityEdge,
}

impl PaginationController {
    /// Create a controller whose limit starts at one page.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            limit: page_size,
            sentinel: VisibilityEdge::new(),
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Feed the sentinel visibility for the current frame.
    ///
    /// Grows the limit only on a rising edge. Returns the new limit when it
    /// changed, `None` otherwise.
    pub fn observe(&mut self, visible: bool, total: usize) -> Option<usize> {
        if !self.sentinel.update(visible) {
            return None;
        }
        let previous = self.limit;
        let next = self.advance(total);
        (next != previous).then_some(next)
    }

    /// Apply one load-more step against `total`.
    ///
    /// A full page is added while at least one full page remains; otherwise
    /// the limit jumps straight to `total`. A total below the current limit
    /// leaves the limit untouched.
    pub fn advance(&mut self, total: usize) -> usize {
        if total < self.limit {
            return self.limit;
        }
        let remaining = total - self.limit;
        let next = if remaining >= self.page_size {
            self.limit + self.page_size
        } else {
            total
        };
        if next != self.limit {
            tracing::debug!(from = self.limit, to = next, total, "pagination limit grew");
        }
        self.limit = next;
        next
    }

    /// Whether the loading indicator (and its sentinel) should be mounted.
    pub fn loader_mounted(&self, total: usize) -> bool {
        total > self.limit
    }

    /// Return to the first page, e.g. after the query changed.
    pub fn reset(&mut self) {
        self.limit = self.page_size;
        self.sentinel.reset();
    }
}

impl Default for PaginationController {
    fn default() -> Self {
        Self::new(PRODUCTS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_fires_once_per_rising_transition() {
        let mut edge = VisibilityEdge::new();
        assert!(!edge.update(false));
        assert!(edge.update(true));
        assert!(!edge.update(true));
        assert!(!edge.update(false));
        assert!(edge.update(true));
    }

    #[test]
    fn test_edge_reset_rearms() {
        let mut edge = VisibilityEdge::new();
        assert!(edge.update(true));
        edge.reset();
        assert!(!edge.is_visible());
        assert!(edge.update(true));
    }

    #[test]
    fn test_initial_limit_is_one_page() {
        let controller = PaginationController::default();
        assert_eq!(controller.limit(), PRODUCTS_PER_PAGE);
        assert_eq!(controller.page_size(), PRODUCTS_PER_PAGE);
    }

    #[test]
    fn test_full_page_remaining_adds_page() {
        for total in [40, 41, 55, 1000] {
            let mut controller = PaginationController::new(20);
            assert_eq!(controller.advance(total), 40, "total = {total}");
        }
    }

    #[test]
    fn test_partial_page_remaining_jumps_to_total() {
        for total in 20..40 {
            let mut controller = PaginationController::new(20);
            assert_eq!(controller.advance(total), total, "total = {total}");
        }
    }

    #[test]
    fn test_scenario_fifty_five_items() {
        let mut controller = PaginationController::new(20);

        assert_eq!(controller.observe(true, 55), Some(40));
        assert_eq!(controller.observe(false, 55), None);
        assert_eq!(controller.observe(true, 55), Some(55));
        assert_eq!(controller.observe(false, 55), None);
        assert_eq!(controller.observe(true, 55), None);
        assert_eq!(controller.limit(), 55);
    }

    #[test]
    fn test_no_transition_while_hidden() {
        let mut controller = PaginationController::new(20);
        for _ in 0..5 {
            assert_eq!(controller.observe(false, 100), None);
        }
        assert_eq!(controller.limit(), 20);
    }

    #[test]
    fn test_staying_visible_does_not_repeat() {
        let mut controller = PaginationController::new(20);
        assert_eq!(controller.observe(true, 100), Some(40));
        assert_eq!(controller.observe(true, 100), None);
        assert_eq!(controller.observe(true, 100), None);
        assert_eq!(controller.limit(), 40);
    }

    #[test]
    fn test_total_below_limit_keeps_limit() {
        let mut controller = PaginationController::new(20);
        controller.advance(100);
        assert_eq!(controller.limit(), 40);

        assert_eq!(controller.advance(10), 40);
        assert_eq!(controller.limit(), 40);
    }

    #[test]
    fn test_loader_mounted_iff_more_remain() {
        let controller = PaginationController::new(20);
        assert!(!controller.loader_mounted(0));
        assert!(!controller.loader_mounted(20));
        assert!(controller.loader_mounted(21));
    }

    #[test]
    fn test_limit_never_decreases_for_fixed_total() {
        for total in 0..120 {
            let mut controller = PaginationController::new(20);
            let mut previous = controller.limit();
            for step in 0..10 {
                controller.observe(step % 2 == 0, total);
                assert!(controller.limit() >= previous);
                previous = controller.limit();
            }
        }
    }

    #[test]
    fn test_reset_returns_to_first_page() {
        let mut controller = PaginationController::new(20);
        controller.observe(true, 100);
        controller.reset();

        assert_eq!(controller.limit(), 20);
        assert_eq!(controller.observe(true, 100), Some(40));
    }
}
