//! Page modules, one per [`ViewState`](crate::state::router::ViewState).
//!
//! ARCHITECTURE
//! ============
//! `App` picks exactly one page from the router's current view. Pages are
//! static copy plus embedded components; only `home` reports back to the
//! router (its render-settle signal).

pub mod contact;
pub mod home;
pub mod privacy;
pub mod terms;
