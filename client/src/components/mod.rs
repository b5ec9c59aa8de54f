//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and list tables while reading shared state
//! from Leptos context providers.

pub mod nav_bar;
pub mod record_table;
