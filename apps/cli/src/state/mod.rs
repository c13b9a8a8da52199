//! # State Module
//!
//! State owned by the terminal front end.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────────────────────┐      ┌──────────────────────────┐        │
//! │  │       FormState          │      │        AppConfig         │        │
//! │  │                          │      │                          │        │
//! │  │  Arc<Mutex<BillForm>>    │      │  split max               │        │
//! │  │  bill text, split count, │      │  slider intervals        │        │
//! │  │  slider / tip %          │      │  currency symbol         │        │
//! │  └──────────────────────────┘      └──────────────────────────┘        │
//! │                                                                         │
//! │  FormState: mutated by every input event                                │
//! │  AppConfig: read-only after startup                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::{AppConfig, ConfigError};
pub use form::{BillForm, FormState, FormSummary};
