//! Client-side view router for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! One router instance is created by `App` and handed to every navigation
//! control through context. It owns the single live [`ViewState`] and the
//! anchor-scroll handshake with the Home page.
//!
//! DESIGN
//! ======
//! Anchors such as `features` only exist while Home is rendered. When a
//! caller asks for an anchor from another view, the router switches to Home
//! and parks the anchor. The Home page reports [`ViewRouter::view_rendered`]
//! once its content is committed, and only then is the scroll attempted.
//! A parked anchor is used at most once and is dropped if the user leaves
//! Home before the render settles.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::cell::RefCell;
use std::rc::Rc;

use super::store::{Store, SubscriptionId};
use crate::util::viewport::Viewport;

/// Top of the hero section.
pub const ANCHOR_HERO: &str = "hero-section";
/// Feature cards section.
pub const ANCHOR_FEATURES: &str = "features";
/// "How it works" section.
pub const ANCHOR_HOW: &str = "how";
/// Closing waitlist call-to-action.
pub const ANCHOR_WAITLIST: &str = "waitlist";

/// Mutually exclusive top-level pages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    #[default]
    Home,
    Privacy,
    Terms,
    Contact,
}

impl ViewState {
    pub const ALL: [Self; 4] = [Self::Home, Self::Privacy, Self::Terms, Self::Contact];

    /// Stable lowercase name, used in logs and CSS hooks.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Privacy => "privacy",
            Self::Terms => "terms",
            Self::Contact => "contact",
        }
    }

    /// Document title for the view.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "EndALoop",
            Self::Privacy => "Privacy Policy | EndALoop",
            Self::Terms => "Terms of Use | EndALoop",
            Self::Contact => "Contact | EndALoop",
        }
    }
}

struct Inner {
    view: Store<ViewState>,
    pending_anchor: RefCell<Option<String>>,
    viewport: Rc<dyn Viewport>,
}

/// Holder of the current view. Cloning yields another handle to the same router.
#[derive(Clone)]
pub struct ViewRouter {
    inner: Rc<Inner>,
}

impl ViewRouter {
    pub fn new(viewport: Rc<dyn Viewport>) -> Self {
        Self {
            inner: Rc::new(Inner {
                view: Store::new(ViewState::Home),
                pending_anchor: RefCell::new(None),
                viewport,
            }),
        }
    }

    #[must_use]
    pub fn current(&self) -> ViewState {
        self.inner.view.get()
    }

    /// Anchor waiting for the Home render to settle, if any.
    #[must_use]
    pub fn pending_anchor(&self) -> Option<String> {
        self.inner.pending_anchor.borrow().clone()
    }

    /// Observe view changes.
    pub fn subscribe(&self, listener: impl Fn(&ViewState) + 'static) -> SubscriptionId {
        self.inner.view.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.view.unsubscribe(id);
    }

    /// Show `target`. Leaving Home drops any parked anchor.
    pub fn navigate(&self, target: ViewState) {
        if target != ViewState::Home {
            self.inner.pending_anchor.borrow_mut().take();
        }
        log::debug!("navigate: {} -> {}", self.current().as_str(), target.as_str());
        self.inner.view.set(target);
    }

    /// Show `target` and scroll back to the top of the page.
    pub fn navigate_to_top(&self, target: ViewState) {
        self.navigate(target);
        self.inner.viewport.scroll_to_top();
    }

    /// Show Home and scroll back to the top of the page.
    pub fn navigate_home(&self) {
        self.navigate_to_top(ViewState::Home);
    }

    /// Bring the Home anchor `anchor_id` into view, switching to Home first
    /// when another view is showing.
    pub fn navigate_and_scroll_to(&self, anchor_id: &str) {
        if self.current() == ViewState::Home {
            let mut pending = self.inner.pending_anchor.borrow_mut();
            if pending.is_some() {
                // Home has not settled yet; retarget the parked scroll.
                *pending = Some(anchor_id.to_owned());
                return;
            }
            drop(pending);
            self.scroll_to_anchor(anchor_id);
            return;
        }
        *self.inner.pending_anchor.borrow_mut() = Some(anchor_id.to_owned());
        self.navigate(ViewState::Home);
    }

    /// Render-settle signal: `view` has been committed to the document.
    ///
    /// Performs the parked anchor scroll when Home is current.
    pub fn view_rendered(&self, view: ViewState) {
        if view != ViewState::Home || self.current() != ViewState::Home {
            return;
        }
        let anchor = self.inner.pending_anchor.borrow_mut().take();
        if let Some(anchor) = anchor {
            self.scroll_to_anchor(&anchor);
        }
    }

    fn scroll_to_anchor(&self, anchor_id: &str) {
        if !self.inner.viewport.scroll_to_anchor(anchor_id) {
            log::debug!("scroll target #{anchor_id} not rendered");
        }
    }
}
