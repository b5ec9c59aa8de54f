//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` defines the persisted user record; `store` is the seam through
//! which the guard, interceptor and API helpers read and clear it.

pub mod listing;
pub mod session;
pub mod store;
