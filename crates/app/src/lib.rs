//! # homepanel-app
//!
//! Application layer: the refresh coordinator and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement:
//!   - `PanelApi`: the backend HTTP endpoints
//!   - `PanelView`: rendering rooms, the alarm, status messages and controls
//!   - `SettingsForm`: reading and writing the settings form fields
//!   - `Scheduler`: repeating timers, local task spawning, sleeping
//! - Define the panel **configuration** model
//! - Provide the [`Poller`](poller::Poller) coordinator: the temperature and
//!   alarm poll tasks, the alarm reset and settings save actions, settings
//!   load and the re-arm procedure
//!
//! ## Dependency rule
//! Depends on `homepanel-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! ## Execution model
//! Everything runs on one event-loop thread. Ports are not `Send` and the
//! coordinator shares itself through `Rc`.

pub mod config;
pub mod poller;
pub mod ports;
mod services;

#[cfg(test)]
mod fakes;
