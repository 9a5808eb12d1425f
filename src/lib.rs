//! Client-side state and remote synchronization for a sales records form,
//! plus a standalone contact form with purely local validation.
//!
//! The `state` module owns the transient UI state of both components and
//! mutates it only through explicit transitions. The `services` module
//! orchestrates validation and remote calls against the `repository` seam,
//! which abstracts the HTTP collection resource holding the sale records.

pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod services;
pub mod state;
