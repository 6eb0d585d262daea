//! Form feedback and orchestration
//!
//! This module provides access to regform-pages: the feedback renderer,
//! the event-driven [`FormController`], the schedulers behind the success
//! window, and (on wasm32) the DOM binding.
//!
//! ## Architecture
//!
//! - **Controller**: per-field state machine plus the success window
//! - **Surface**: where feedback is rendered (`DomSurface` or `MemorySurface`)
//! - **Scheduler**: deferred reset and banner hide (`TimeoutScheduler` or `ManualScheduler`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use regform::pages::{FormConfig, mount};
//!
//! let config = FormConfig::from_json(r#"{ "resubmit": "ignore_while_pending" }"#)?;
//! let form = mount(&config)?;
//! ```

pub use regform_pages::*;
