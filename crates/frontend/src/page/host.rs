use super::nav_sync::{PageBounds, PageId, ViewportMetrics};

/// DOM operations the page state needs but cannot express as plain data.
///
/// Missing elements are reported through the return values, never as errors.
pub trait PageHost {
    /// Smooth-scroll the section into view. Returns `false` if it does not exist.
    fn scroll_into_view(&self, page: &PageId) -> bool;

    /// Offset and height of the section, `None` if it does not exist.
    fn page_bounds(&self, page: &PageId) -> Option<PageBounds>;

    fn viewport(&self) -> ViewportMetrics;

    /// Blocking user-facing message.
    fn alert(&self, message: &str);
}
