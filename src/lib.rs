//! # jrk-g2
//!
//! Host-side library for Pololu Jrk G2 USB motor controllers.
//!
//! ## Features
//!
//! - **Settings model**: every configuration field, typed, with per-product defaults
//! - **Validation**: [`Settings::fix`] clamps and reconciles fields and reports warnings
//! - **Binary codec**: byte-exact settings and variables buffers
//! - **Command protocol**: [`Handle`] drives a device over any [`Transport`]
//! - **Settings files**: TOML text with symbolic enum names (std only)
//! - **Diagnostics**: one-sentence explanation of why the motor is or is not running
//! - **no_std compatible**: core library works with only an allocator
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use jrk_g2::{GetVariablesFlags, Handle, Product};
//!
//! // `usb` is any type implementing `jrk_g2::Transport`
//! let mut jrk = Handle::new(usb, Product::Umc04a30v);
//!
//! let mut settings = jrk.get_eeprom_settings()?;
//! settings.set_pid_period(20);
//! jrk.set_eeprom_settings(&settings)?;
//! jrk.reinitialize()?;
//!
//! jrk.set_target(2048)?;
//! let vars = jrk.get_variables(GetVariablesFlags::empty())?;
//! println!("{}", jrk_g2::diagnose(&settings, &vars, None, Default::default()));
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables settings file I/O and TOML parsing
//! - `alloc`: Heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets
//! - `tracing`: Enables tracing logging on hosts

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

extern crate alloc;

#[macro_use]
mod log;

// Core modules
#[macro_use]
pub mod catalog;
pub mod codec;
pub mod diagnostics;
pub mod error;
pub mod protocol;
pub mod settings;
pub mod variables;

// Re-exports for ergonomic API
pub use catalog::{DeviceReset, ErrorFlags, FeedbackMode, Field, ForceMode, InputMode, Product};
pub use codec::{decode_settings, decode_variables, encode_settings};
pub use diagnostics::{diagnose, DiagnoseFlags};
pub use error::{Error, ErrorCode, Result};
pub use protocol::{GetVariablesFlags, Handle, Transport};
pub use settings::{Settings, Warnings};
pub use variables::Variables;

// Settings files (std only)
#[cfg(feature = "std")]
pub use settings::{load_settings, save_settings, settings_from_str, settings_to_string};
