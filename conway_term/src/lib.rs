//! Conway's Game of Life on a toroidal grid, edited with a cursor from the
//! terminal and optionally auto-stepped by a background task.
//!
//! The [`grid::GridEngine`] holds all mutable state and sits behind a single
//! [`grid::SharedEngine`] lock. The foreground [`commands::Session`] and the
//! background [`stepper::AutoStepper`] both go through that lock for every
//! operation.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod render;
pub mod script;
pub mod stepper;

pub use error::{LifeError, Result};
