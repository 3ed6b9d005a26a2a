//! Client-side state containers.
//!
//! ARCHITECTURE
//! ============
//! `router` and `waitlist` hold the only behaviour on the page that has
//! ordering or failure semantics. Both publish through `store` so components
//! can mirror them into signals.

pub mod router;
pub mod store;
pub mod waitlist;
