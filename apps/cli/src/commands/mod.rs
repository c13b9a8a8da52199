//! # Commands Module
//!
//! Every input event the front end can produce, as plain functions over
//! the shared state.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs   ◄─── You are here (exports)
//! ├── form.rs  ◄─── One function per form event (bill, slider, +/-)
//! └── calc.rs  ◄─── One-shot calculation from command line flags
//! ```
//!
//! Each form command applies one change, recomputes, and returns the new
//! `FormSummary`, the same observe-and-recompute cycle a UI would run.

pub mod calc;
pub mod form;
