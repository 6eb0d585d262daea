//! Registration form feedback and orchestration
//!
//! This crate turns validator results into page feedback and drives the
//! form's event lifecycle.
//!
//! ## Architecture
//!
//! ```text
//!  blur / input / submit
//!          │
//!          ▼
//! ┌─────────────────┐  validate_*()  ┌────────────────────┐
//! │ FormController  │ ─────────────▶ │ regform-validators │
//! │  (state machine)│                └────────────────────┘
//! └─────────────────┘
//!     │          │ schedule(2s reset, 5s hide)
//!     │          ▼
//!     │   ┌─────────────┐
//!     │   │  Scheduler  │  TimeoutScheduler (wasm) / ManualScheduler
//!     │   └─────────────┘
//!     ▼ feedback::*
//! ┌─────────────────┐
//! │   FormSurface   │  DomSurface (wasm) / MemorySurface
//! └─────────────────┘
//! ```
//!
//! The controller never talks to the page directly. Everything it renders
//! goes through a [`FormSurface`], and everything it defers goes through a
//! [`Scheduler`], so the full lifecycle runs headless in tests.
//!
//! ## Example
//!
//! ```
//! use regform_pages::{FormConfig, FormController, ManualScheduler, MemorySurface, SubmitOutcome};
//! use regform_validators::FieldKey;
//!
//! let scheduler = ManualScheduler::new();
//! let controller = FormController::new(MemorySurface::new(), scheduler.clone(), &FormConfig::default());
//!
//! let outcome = controller.on_submit();
//! assert_eq!(outcome, SubmitOutcome::Rejected { first_invalid: FieldKey::Name });
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod logging;
pub mod memory;
pub mod scheduler;
pub mod surface;

#[cfg(target_arch = "wasm32")]
pub mod dom;

pub use config::{ClassNames, FormConfig, ResubmitPolicy};
pub use controller::{FormController, SubmitOutcome};
pub use error::{FormError, FormResult};
pub use memory::MemorySurface;
pub use scheduler::{ManualScheduler, Scheduler, Task, TaskHandle};
pub use surface::{FormSurface, Mark};

#[cfg(target_arch = "wasm32")]
pub use dom::{DomController, DomSurface, mount, mount_default};
#[cfg(target_arch = "wasm32")]
pub use scheduler::TimeoutScheduler;
