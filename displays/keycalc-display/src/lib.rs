//! Keypad and character-display front end for keycalc
//!
//! This crate provides:
//! - `KeyAction` and the key-code map of the calculator keypad
//! - `InputSource` trait for whatever scans the keys
//! - `DisplayBackend` trait for the character display driver
//! - `Screen`, a 2x16 text buffer with change tracking
//! - `Frontend`, which drives a [`Calculator`] from key actions and renders it
//! - Persisted settings (`serde` feature)
//!
//! # Architecture
//!
//! The keypad scanner and the display driver live in the board firmware.
//! They implement `InputSource` and `DisplayBackend`; the firmware main loop
//! then only has to do:
//!
//! ```ignore
//! loop {
//!     frontend.poll(&mut keypad);
//!     frontend.render(&mut lcd)?;
//! }
//! ```
//!
//! Line 1 of the display shows a scrollable window over the expression,
//! line 2 the right-aligned result or error message.

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod backend;
pub mod frontend;
pub mod keypad;
pub mod screen;
#[cfg(feature = "serde")]
pub mod settings;

pub use backend::{DisplayBackend, DisplayError};
pub use frontend::{Frontend, FrontendConfig};
pub use keypad::{InputSource, KeyAction};
pub use screen::{Screen, CLIP_MARKER, SCREEN_COLS, SCREEN_ROWS};
#[cfg(feature = "serde")]
pub use settings::{ConfigError, Settings};

pub use keycalc_core::Calculator;
