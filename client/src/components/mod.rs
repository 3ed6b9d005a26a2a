//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and the waitlist form while reading/writing
//! shared state from Leptos context providers.

pub mod footer;
pub mod logo;
pub mod navbar;
pub mod page_layout;
pub mod waitlist_form;
