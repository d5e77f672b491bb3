//! # Connect Four
//!
//! Rules engine for Connect Four on boards of any size: gravity-based
//! placement, four-in-a-row detection in every orientation, draw detection
//! and turn handling. Presentation layers drive an [`game::Engine`] through
//! its move API and read its state back to render.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, engine state machine
//! - [`config`] — TOML configuration loading, validation and board presets
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
