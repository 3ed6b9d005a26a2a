//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `waitlist` owns the single outbound HTTP contract of the landing page.

pub mod waitlist;
