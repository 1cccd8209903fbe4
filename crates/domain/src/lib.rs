//! # homepanel-domain
//!
//! Pure domain model for the homepanel monitoring front end.
//!
//! ## Responsibilities
//! - Define the static **room** table (one entry per temperature sensor)
//! - Turn raw temperature readouts into per-room **readings** (text + bar width)
//! - Define the **alarm status** reported by the backend and when it is surfaced
//! - Define the open **settings** payload, the refresh-period rule and the
//!   fixed schema of fields submitted on save
//! - Typed error conventions
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;

pub mod alarm;
pub mod readout;
pub mod room;
pub mod settings;
