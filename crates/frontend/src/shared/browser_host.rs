//! `PageHost` backed by the live document.

use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::page::{PageBounds, PageHost, PageId, ViewportMetrics};

fn page_element(page: &PageId) -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .get_element_by_id(page.as_str())?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Stateless; construct one wherever a host is needed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

impl PageHost for BrowserHost {
    fn scroll_into_view(&self, page: &PageId) -> bool {
        let Some(element) = page_element(page) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn page_bounds(&self, page: &PageId) -> Option<PageBounds> {
        let element = page_element(page)?;
        Some(PageBounds::new(
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    }

    fn viewport(&self) -> ViewportMetrics {
        let Some(window) = web_sys::window() else {
            return ViewportMetrics::default();
        };
        ViewportMetrics {
            scroll_y: window.scroll_y().unwrap_or(0.0),
            inner_height: window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0),
        }
    }

    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
