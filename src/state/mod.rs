//! Transient UI state of the two form components.
//!
//! Each component owns its state exclusively and mutates it only through
//! the transition methods defined here; asynchronous orchestration lives in
//! the `services` module. Time is passed in explicitly so the confirmation
//! window can be asserted without real timers.

use std::time::Duration;

pub mod contact;
pub mod sales;

/// How long the confirmation indicator stays visible after a successful
/// submit. Submitting again within the window re-arms it.
pub const CONFIRMATION_WINDOW: Duration = Duration::from_secs(3);
