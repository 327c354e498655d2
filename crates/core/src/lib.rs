//! Screen-driven automation of a single Android game.
//!
//! Each tick captures the device screen, finds the first [`stage::Stage`] in
//! the active [`registry::Registry`] whose [`condition::Condition`] holds for
//! the recent capture history, and sends its [`command::Command`] to the
//! device.

pub mod apps;
pub mod command;
pub mod condition;
pub mod history;
pub mod logger;
pub mod orchestrator;
pub mod pixels;
pub mod platform;
pub mod references;
pub mod registry;
pub mod settings;
pub mod sleep;
pub mod stage;
pub mod types;
