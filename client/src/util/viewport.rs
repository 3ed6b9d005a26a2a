//! Scroll control for the page viewport.
//!
//! SYSTEM CONTEXT
//! ==============
//! The router decides *when* to scroll; this seam decides *how*. The browser
//! implementation talks to `web-sys`, and tests substitute a recorder.
//! Outside the browser every call is a no-op.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Scroll operations the router needs from the host page.
pub trait Viewport {
    /// Smooth-scroll the element with id `anchor_id` into view.
    ///
    /// Returns `false` when no such element is rendered.
    fn scroll_to_anchor(&self, anchor_id: &str) -> bool;

    /// Smooth-scroll the window back to the top.
    fn scroll_to_top(&self);
}

/// `web-sys` backed viewport for the live document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    fn scroll_to_anchor(&self, anchor_id: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            let Some(element) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.get_element_by_id(anchor_id))
            else {
                return false;
            };
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = anchor_id;
            false
        }
    }

    fn scroll_to_top(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let options = web_sys::ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                window.scroll_to_with_scroll_to_options(&options);
            }
        }
    }
}
